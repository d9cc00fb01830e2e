//! Capture-style fakes for the capability contracts, shared across tests.

use std::cell::{Cell, RefCell};

use anyhow::Result;

use crate::{
    infra::{config::AppConfig, contracts::ConfigAdapter},
    usecases::contracts::{PermissionGate, SmsTransport, TransportError},
};

#[derive(Debug, Clone, Default)]
pub struct StubConfigAdapter;

impl ConfigAdapter for StubConfigAdapter {
    fn load(&self) -> Result<AppConfig> {
        Ok(AppConfig::default())
    }
}

/// Permission gate with a fixed answer that counts grant requests.
#[derive(Debug, Default)]
pub struct StubGate {
    pub granted: bool,
    pub grant_requests: Cell<usize>,
}

impl StubGate {
    pub fn granted() -> Self {
        Self {
            granted: true,
            grant_requests: Cell::new(0),
        }
    }

    pub fn denied() -> Self {
        Self::default()
    }
}

impl PermissionGate for StubGate {
    fn is_granted(&self) -> bool {
        self.granted
    }

    fn request_grant(&self) {
        self.grant_requests.set(self.grant_requests.get() + 1);
    }
}

/// One message captured by `RecordingTransport`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SentSms {
    Single {
        destination: String,
        body: String,
    },
    Multipart {
        destination: String,
        parts: Vec<String>,
    },
}

/// Transport that records accepted sends, or fails every send with a
/// configured error.
#[derive(Debug, Default)]
pub struct RecordingTransport {
    pub fail_with: Option<TransportError>,
    pub sent: RefCell<Vec<SentSms>>,
}

impl RecordingTransport {
    pub fn accepting() -> Self {
        Self::default()
    }

    pub fn failing(error: TransportError) -> Self {
        Self {
            fail_with: Some(error),
            sent: RefCell::new(Vec::new()),
        }
    }
}

impl SmsTransport for RecordingTransport {
    fn send_single(&self, destination: &str, body: &str) -> Result<(), TransportError> {
        if let Some(error) = &self.fail_with {
            return Err(error.clone());
        }

        self.sent.borrow_mut().push(SentSms::Single {
            destination: destination.to_owned(),
            body: body.to_owned(),
        });
        Ok(())
    }

    fn send_multipart(&self, destination: &str, parts: &[String]) -> Result<(), TransportError> {
        if let Some(error) = &self.fail_with {
            return Err(error.clone());
        }

        self.sent.borrow_mut().push(SentSms::Multipart {
            destination: destination.to_owned(),
            parts: parts.to_vec(),
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stub_config_returns_defaults() {
        let adapter = StubConfigAdapter;
        let config = adapter.load().expect("stub config must load");

        assert_eq!(config, AppConfig::default());
    }
}
