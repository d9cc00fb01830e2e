use serde::Serialize;
use serde_json::Value;
use std::fmt;

/// Error kinds on the method-channel wire. Spellings are part of the
/// contract with callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ErrorCode {
    #[serde(rename = "INVALID_ARGUMENTS")]
    InvalidArguments,
    #[serde(rename = "PERMISSION_DENIED")]
    PermissionDenied,
    #[serde(rename = "SMS_ERROR")]
    SmsError,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::InvalidArguments => "INVALID_ARGUMENTS",
            ErrorCode::PermissionDenied => "PERMISSION_DENIED",
            ErrorCode::SmsError => "SMS_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Terminal outcome of one method-channel call.
///
/// `NotImplemented` is distinct from an error: it tells the caller the
/// operation name itself is not recognized.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum CallResult {
    Success {
        message: String,
    },
    Error {
        code: ErrorCode,
        message: String,
        /// Reserved slot on the wire; currently always null.
        details: Option<Value>,
    },
    NotImplemented,
}

impl CallResult {
    pub fn success(message: impl Into<String>) -> Self {
        CallResult::Success {
            message: message.into(),
        }
    }

    pub fn error(code: ErrorCode, message: impl Into<String>) -> Self {
        CallResult::Error {
            code,
            message: message.into(),
            details: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn error_codes_keep_their_wire_spellings() {
        assert_eq!(ErrorCode::InvalidArguments.as_str(), "INVALID_ARGUMENTS");
        assert_eq!(ErrorCode::PermissionDenied.as_str(), "PERMISSION_DENIED");
        assert_eq!(ErrorCode::SmsError.as_str(), "SMS_ERROR");
    }

    #[test]
    fn success_serializes_with_status_tag() {
        let value = serde_json::to_value(CallResult::success("SMS sent successfully"))
            .expect("result should serialize");

        assert_eq!(
            value,
            json!({"status": "success", "message": "SMS sent successfully"})
        );
    }

    #[test]
    fn error_serializes_code_and_null_details() {
        let value = serde_json::to_value(CallResult::error(
            ErrorCode::PermissionDenied,
            "SMS permission not granted",
        ))
        .expect("result should serialize");

        assert_eq!(
            value,
            json!({
                "status": "error",
                "code": "PERMISSION_DENIED",
                "message": "SMS permission not granted",
                "details": null
            })
        );
    }

    #[test]
    fn not_implemented_serializes_as_a_bare_status() {
        let value =
            serde_json::to_value(CallResult::NotImplemented).expect("result should serialize");

        assert_eq!(value, json!({"status": "notImplemented"}));
    }
}
