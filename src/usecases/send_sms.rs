//! Use case for dispatching one SMS through the host telephony stack.
//!
//! Checks the messaging permission, segments the body, and delegates to
//! the single or multipart transport primitive. Argument extraction and
//! wire-level error codes live at the bridge layer.

use crate::{
    domain::{delivery::Delivery, segments::divide_message},
    usecases::contracts::{PermissionGate, SmsTransport, TransportError},
};

/// Command to send one message to one destination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendSmsCommand {
    pub phone_number: String,
    pub message: String,
}

/// Terminal failures of the send workflow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SendSmsError {
    /// Permission is not granted; a grant request has been issued as a
    /// side effect. The caller must re-invoke after the user grants.
    PermissionDenied,
    /// The transport rejected or failed the send. Not retried.
    Transport(TransportError),
}

/// Sends `command.message` to `command.phone_number`.
///
/// When the permission is missing, a grant request is fired exactly once
/// and the call fails immediately; nothing is re-attempted once the
/// grant lands. A body within one transport unit goes out through the
/// single-send primitive unmodified; longer bodies go out as one ordered
/// multipart sequence.
pub fn send_sms(
    gate: &dyn PermissionGate,
    transport: &dyn SmsTransport,
    command: SendSmsCommand,
) -> Result<Delivery, SendSmsError> {
    if !gate.is_granted() {
        gate.request_grant();
        return Err(SendSmsError::PermissionDenied);
    }

    let segments = divide_message(&command.message);
    if segments.len() > 1 {
        transport
            .send_multipart(&command.phone_number, &segments)
            .map_err(SendSmsError::Transport)?;
        Ok(Delivery::Multipart {
            parts: segments.len(),
        })
    } else {
        transport
            .send_single(&command.phone_number, &command.message)
            .map_err(SendSmsError::Transport)?;
        Ok(Delivery::Single)
    }
}
