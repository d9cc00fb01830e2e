//! File-marker permission gate.
//!
//! The desktop stand-in for the platform permission service: permission
//! is granted iff a marker file exists. A grant request only records the
//! ask; granting happens out of band through `courier permissions grant`
//! (the user answering the dialog), after which the caller re-invokes
//! the send.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use crate::usecases::contracts::PermissionGate;

const GRANTED_MARKER: &str = "sms.granted";
const REQUESTED_MARKER: &str = "sms.requested";

#[derive(Debug, Clone)]
pub struct HostPermissionGate {
    dir: PathBuf,
}

impl HostPermissionGate {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Grants the permission and clears any pending request marker.
    pub fn grant(&self) -> io::Result<()> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.marker(GRANTED_MARKER), b"")?;
        remove_if_present(&self.marker(REQUESTED_MARKER))
    }

    pub fn revoke(&self) -> io::Result<()> {
        remove_if_present(&self.marker(GRANTED_MARKER))
    }

    /// Whether a grant request has been recorded and not yet answered.
    pub fn pending_request(&self) -> bool {
        self.marker(REQUESTED_MARKER).exists()
    }

    fn marker(&self, name: &str) -> PathBuf {
        self.dir.join(name)
    }

    fn record_request(&self) -> io::Result<()> {
        fs::create_dir_all(&self.dir)?;
        fs::write(self.marker(REQUESTED_MARKER), b"")
    }
}

impl PermissionGate for HostPermissionGate {
    fn is_granted(&self) -> bool {
        self.marker(GRANTED_MARKER).exists()
    }

    fn request_grant(&self) {
        // Fire-and-forget: recording failures must not fail the call
        // that triggered the request.
        match self.record_request() {
            Ok(()) => tracing::info!(
                "SMS permission requested; grant it with `courier permissions grant`"
            ),
            Err(error) => tracing::warn!(error = %error, "failed to record permission request"),
        }
    }
}

fn remove_if_present(path: &Path) -> io::Result<()> {
    match fs::remove_file(path) {
        Err(error) if error.kind() != io::ErrorKind::NotFound => Err(error),
        _ => Ok(()),
    }
}
