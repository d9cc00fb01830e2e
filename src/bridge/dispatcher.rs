//! Dispatches inbound method calls onto the send workflow.

use crate::{
    bridge::{
        method_call::MethodCall,
        result::{CallResult, ErrorCode},
    },
    usecases::{
        contracts::{PermissionGate, SmsTransport},
        send_sms::{send_sms, SendSmsCommand, SendSmsError},
    },
};

pub const METHOD_SEND_SMS: &str = "sendSMS";

const ARG_PHONE_NUMBER: &str = "phoneNumber";
const ARG_MESSAGE: &str = "message";

/// The SMS method channel: resolves operation names and maps workflow
/// outcomes to wire results.
pub struct SmsChannel<'a> {
    gate: &'a dyn PermissionGate,
    transport: &'a dyn SmsTransport,
}

impl<'a> SmsChannel<'a> {
    pub fn new(gate: &'a dyn PermissionGate, transport: &'a dyn SmsTransport) -> Self {
        Self { gate, transport }
    }

    /// Handles one call. Every outcome is terminal; nothing is retried.
    pub fn handle(&self, call: &MethodCall) -> CallResult {
        match call.method.as_str() {
            METHOD_SEND_SMS => self.send_sms(call),
            _ => CallResult::NotImplemented,
        }
    }

    fn send_sms(&self, call: &MethodCall) -> CallResult {
        let (Some(phone_number), Some(message)) = (
            call.string_arg(ARG_PHONE_NUMBER),
            call.string_arg(ARG_MESSAGE),
        ) else {
            return CallResult::error(
                ErrorCode::InvalidArguments,
                "Phone number and message are required",
            );
        };

        let command = SendSmsCommand {
            phone_number: phone_number.to_owned(),
            message: message.to_owned(),
        };

        match send_sms(self.gate, self.transport, command) {
            Ok(delivery) => CallResult::success(delivery.confirmation()),
            Err(SendSmsError::PermissionDenied) => {
                CallResult::error(ErrorCode::PermissionDenied, "SMS permission not granted")
            }
            Err(SendSmsError::Transport(error)) => {
                CallResult::error(ErrorCode::SmsError, format!("Failed to send SMS: {error}"))
            }
        }
    }
}
