//! Splitting a message body into transport-sized segments.
//!
//! Follows the standard GSM short-message rules: bodies that fit the GSM
//! 03.38 default alphabet are measured in septets (160 for a single
//! message, 153 per part of a concatenated one); anything else falls back
//! to UCS-2 and is measured in UTF-16 code units (70/67).

const GSM7_SINGLE_LIMIT: u32 = 160;
const GSM7_PART_LIMIT: u32 = 153;
const UCS2_SINGLE_LIMIT: u32 = 70;
const UCS2_PART_LIMIT: u32 = 67;

/// Wire encoding selected for a message body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SmsEncoding {
    Gsm7,
    Ucs2,
}

/// Returns the encoding a body would be transmitted in.
pub fn encoding_for(body: &str) -> SmsEncoding {
    if body.chars().all(|ch| septet_cost(ch).is_some()) {
        SmsEncoding::Gsm7
    } else {
        SmsEncoding::Ucs2
    }
}

/// Splits `body` into transport segments.
///
/// Always returns at least one segment (a single empty one for an empty
/// body). Segments concatenate back to the original body in order. A
/// character never straddles a boundary: GSM extension escape pairs and
/// UTF-16 surrogate pairs move to the next part whole.
pub fn divide_message(body: &str) -> Vec<String> {
    match encoding_for(body) {
        SmsEncoding::Gsm7 => split_weighted(body, GSM7_SINGLE_LIMIT, GSM7_PART_LIMIT, |ch| {
            septet_cost(ch).unwrap_or(2)
        }),
        SmsEncoding::Ucs2 => split_weighted(body, UCS2_SINGLE_LIMIT, UCS2_PART_LIMIT, |ch| {
            ch.len_utf16() as u32
        }),
    }
}

fn split_weighted(
    body: &str,
    single_limit: u32,
    part_limit: u32,
    cost: impl Fn(char) -> u32,
) -> Vec<String> {
    let total: u32 = body.chars().map(&cost).sum();
    if total <= single_limit {
        return vec![body.to_owned()];
    }

    let mut parts = Vec::new();
    let mut current = String::new();
    let mut used = 0;

    for ch in body.chars() {
        let weight = cost(ch);
        if used + weight > part_limit {
            parts.push(std::mem::take(&mut current));
            used = 0;
        }
        current.push(ch);
        used += weight;
    }

    if !current.is_empty() {
        parts.push(current);
    }

    parts
}

/// Septet cost of `ch` in the GSM 03.38 default alphabet, or None if the
/// character forces UCS-2. Extension-table characters cost two septets
/// (escape + code).
fn septet_cost(ch: char) -> Option<u32> {
    match ch {
        '0'..='9' | 'A'..='Z' | 'a'..='z' => Some(1),
        '@' | '£' | '$' | '¥' | 'è' | 'é' | 'ù' | 'ì' | 'ò' | 'Ç' | '\n' | 'Ø' | 'ø' | '\r'
        | 'Å' | 'å' | 'Δ' | '_' | 'Φ' | 'Γ' | 'Λ' | 'Ω' | 'Π' | 'Ψ' | 'Σ' | 'Θ' | 'Ξ' | 'Æ'
        | 'æ' | 'ß' | 'É' | ' ' | '!' | '"' | '#' | '¤' | '%' | '&' | '\'' | '(' | ')' | '*'
        | '+' | ',' | '-' | '.' | '/' | ':' | ';' | '<' | '=' | '>' | '?' | '¡' | 'Ä' | 'Ö'
        | 'Ñ' | 'Ü' | '§' | '¿' | 'ä' | 'ö' | 'ñ' | 'ü' | 'à' => Some(1),
        '^' | '{' | '}' | '\\' | '[' | ']' | '~' | '|' | '€' => Some(2),
        _ => None,
    }
}
