//! File-backed transport stand-in for the radio.
//!
//! Accepted messages land as one file each in the outbox directory, with
//! multipart boundaries kept visible so the wire shape can be inspected.

use std::{fs, io, path::PathBuf};

use crate::{
    infra::secrets,
    usecases::contracts::{SmsTransport, TransportError},
};

const MESSAGE_EXTENSION: &str = "sms";
const PART_SEPARATOR: &str = "\n----\n";

#[derive(Debug, Clone)]
pub struct OutboxTransport {
    dir: PathBuf,
}

impl OutboxTransport {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn accept(&self, destination: &str, content: String) -> Result<(), TransportError> {
        fs::create_dir_all(&self.dir).map_err(unavailable)?;

        let path = self.dir.join(format!("{:05}.{}", self.next_sequence()?, MESSAGE_EXTENSION));
        fs::write(&path, content).map_err(unavailable)?;

        tracing::debug!(
            destination = %secrets::redact_text(destination),
            path = %path.display(),
            "message accepted by outbox"
        );
        Ok(())
    }

    fn next_sequence(&self) -> Result<usize, TransportError> {
        let entries = fs::read_dir(&self.dir).map_err(unavailable)?;
        let existing = entries
            .filter_map(Result::ok)
            .filter(|entry| {
                entry
                    .path()
                    .extension()
                    .is_some_and(|ext| ext == MESSAGE_EXTENSION)
            })
            .count();

        Ok(existing + 1)
    }
}

impl SmsTransport for OutboxTransport {
    fn send_single(&self, destination: &str, body: &str) -> Result<(), TransportError> {
        validate_destination(destination)?;
        self.accept(destination, format!("To: {destination}\n\n{body}"))
    }

    fn send_multipart(&self, destination: &str, parts: &[String]) -> Result<(), TransportError> {
        validate_destination(destination)?;
        self.accept(
            destination,
            format!(
                "To: {destination}\nParts: {}\n\n{}",
                parts.len(),
                parts.join(PART_SEPARATOR)
            ),
        )
    }
}

fn validate_destination(destination: &str) -> Result<(), TransportError> {
    if destination.trim().is_empty() {
        return Err(invalid("destination is empty"));
    }

    if !destination.chars().any(|ch| ch.is_ascii_digit()) {
        return Err(invalid("destination has no digits"));
    }

    if let Some(bad) = destination.chars().find(|ch| !is_dial_char(*ch)) {
        return Err(invalid(format!("'{bad}' is not a dial character")));
    }

    Ok(())
}

fn is_dial_char(ch: char) -> bool {
    ch.is_ascii_digit() || matches!(ch, '+' | '*' | '#' | '-' | '(' | ')' | '.' | ' ')
}

fn invalid(reason: impl Into<String>) -> TransportError {
    TransportError::InvalidDestination {
        reason: reason.into(),
    }
}

fn unavailable(error: io::Error) -> TransportError {
    TransportError::Unavailable {
        details: error.to_string(),
    }
}
