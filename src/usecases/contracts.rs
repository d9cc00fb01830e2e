//! Capability contracts the send workflow is written against.
//!
//! The host's permission service and telephony transport are ambient
//! state on a real device; here they are injected traits so the bridge
//! can run against fakes in tests and against file-backed adapters on a
//! desktop host.

use std::fmt;

/// Host permission capability for sending SMS.
pub trait PermissionGate {
    /// Whether the messaging permission is currently granted.
    fn is_granted(&self) -> bool;

    /// Asks the host to grant the permission.
    ///
    /// Fire-and-forget: the outcome is not awaited and is never wired
    /// back into the call that triggered the request. Implementations
    /// must not fail the calling operation.
    fn request_grant(&self);
}

impl<T: PermissionGate + ?Sized> PermissionGate for &T {
    fn is_granted(&self) -> bool {
        (*self).is_granted()
    }

    fn request_grant(&self) {
        (*self).request_grant()
    }
}

/// Telephony transport capability.
///
/// Multipart delivery is atomic from the caller's point of view; there
/// is no partial-success surface.
pub trait SmsTransport {
    /// Sends a body that fits a single transport unit.
    fn send_single(&self, destination: &str, body: &str) -> Result<(), TransportError>;

    /// Sends an ordered sequence of segments as one logical message.
    fn send_multipart(&self, destination: &str, parts: &[String]) -> Result<(), TransportError>;
}

impl<T: SmsTransport + ?Sized> SmsTransport for &T {
    fn send_single(&self, destination: &str, body: &str) -> Result<(), TransportError> {
        (*self).send_single(destination, body)
    }

    fn send_multipart(&self, destination: &str, parts: &[String]) -> Result<(), TransportError> {
        (*self).send_multipart(destination, parts)
    }
}

/// Failures raised by the transport. The description is preserved and
/// surfaced to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// Destination is not a dialable number.
    InvalidDestination { reason: String },
    /// The transport could not accept or persist the message.
    Unavailable { details: String },
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportError::InvalidDestination { reason } => {
                write!(f, "invalid destination: {reason}")
            }
            TransportError::Unavailable { details } => {
                write!(f, "transport unavailable: {details}")
            }
        }
    }
}
