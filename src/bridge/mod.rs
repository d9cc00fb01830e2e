//! Method-channel surface: call and result types plus the dispatcher.

mod dispatcher;
mod method_call;
mod result;

pub use dispatcher::{SmsChannel, METHOD_SEND_SMS};
pub use method_call::MethodCall;
pub use result::{CallResult, ErrorCode};

/// Returns the bridge module name for smoke checks.
pub fn module_name() -> &'static str {
    "bridge"
}
