use std::panic;

const REDACTED: &str = "[REDACTED]";

const SENSITIVE_MARKERS: [&str; 3] = ["phone", "msisdn", "recipient"];

pub fn redact_text(input: &str) -> String {
    input
        .split_whitespace()
        .map(redact_chunk)
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn install_panic_redaction_hook() {
    panic::set_hook(Box::new(|panic_info| {
        let payload = panic_info
            .payload()
            .downcast_ref::<&str>()
            .map(ToString::to_string)
            .or_else(|| panic_info.payload().downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "panic payload omitted".to_owned());

        let scrubbed = redact_text(&payload);

        if let Some(location) = panic_info.location() {
            eprintln!(
                "courier panic: {} at {}:{}:{}",
                scrubbed,
                location.file(),
                location.line(),
                location.column()
            );
        } else {
            eprintln!("courier panic: {}", scrubbed);
        }
    }));
}

fn redact_chunk(chunk: &str) -> String {
    let lowered = chunk.to_ascii_lowercase();
    if SENSITIVE_MARKERS
        .iter()
        .any(|marker| lowered.contains(marker))
        || looks_like_phone_number(chunk)
    {
        REDACTED.to_owned()
    } else {
        chunk.to_owned()
    }
}

fn looks_like_phone_number(value: &str) -> bool {
    let digits = value.chars().filter(|ch| ch.is_ascii_digit()).count();

    digits >= 6
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn redact_text_scrubs_phone_numbers() {
        let input = "failed to reach +1-555-123-4567 over the radio";
        let output = redact_text(input);

        assert!(!output.contains("555"));
        assert!(output.contains("[REDACTED]"));
        assert!(output.contains("radio"));
    }

    #[test]
    fn redact_text_scrubs_marker_chunks() {
        let output = redact_text("phoneNumber=+15551234567 sent");

        assert_eq!(output, "[REDACTED] sent");
    }

    #[test]
    fn redact_text_keeps_short_numbers() {
        assert_eq!(redact_text("retry 3 of 5"), "retry 3 of 5");
    }
}
