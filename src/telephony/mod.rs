//! Telephony layer: host-side permission and transport adapters.

mod outbox;
mod permissions;

pub use outbox::OutboxTransport;
pub use permissions::HostPermissionGate;

/// Returns the telephony module name for smoke checks.
pub fn module_name() -> &'static str {
    "telephony"
}
