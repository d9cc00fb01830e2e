use serde_json::{Map, Value};

/// One inbound invocation: an operation name plus a string-keyed
/// argument bundle.
#[derive(Debug, Clone, PartialEq)]
pub struct MethodCall {
    pub method: String,
    pub args: Map<String, Value>,
}

impl MethodCall {
    pub fn new(method: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            args: Map::new(),
        }
    }

    pub fn with_arg(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.args.insert(key.into(), value.into());
        self
    }

    /// The string argument under `key`, or None when it is absent, null,
    /// or not a string.
    pub fn string_arg(&self, key: &str) -> Option<&str> {
        self.args.get(key).and_then(Value::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn string_arg_returns_present_strings() {
        let call = MethodCall::new("sendSMS").with_arg("phoneNumber", "+15551234567");

        assert_eq!(call.string_arg("phoneNumber"), Some("+15551234567"));
    }

    #[test]
    fn string_arg_is_none_for_missing_keys() {
        let call = MethodCall::new("sendSMS");

        assert_eq!(call.string_arg("message"), None);
    }

    #[test]
    fn string_arg_is_none_for_null_values() {
        let call = MethodCall::new("sendSMS").with_arg("message", Value::Null);

        assert_eq!(call.string_arg("message"), None);
    }

    #[test]
    fn string_arg_is_none_for_non_string_values() {
        let call = MethodCall::new("sendSMS").with_arg("message", json!(42));

        assert_eq!(call.string_arg("message"), None);
    }
}
