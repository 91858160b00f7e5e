//! Phone number utilities
//!
//! The Verify API accepts numbers in E.164 format, with or without the
//! leading `+`. Validation here is advisory only: requests are never rejected
//! locally, but callers can use these helpers before submitting, and every
//! log line goes through [`mask_phone_number`].

use once_cell::sync::Lazy;
use regex::Regex;

// E.164: up to 15 digits, no leading zero, optional '+'
static E164_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\+?[1-9]\d{6,14}$").expect("E.164 pattern is valid")
});

/// Normalize a phone number by removing common formatting characters
pub fn normalize_phone_number(phone: &str) -> String {
    phone
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect()
}

/// Check if a phone number looks like an E.164 number
///
/// Spaces, dashes and brackets are ignored, so `+44 7700 900999` and
/// `447700900999` are both accepted.
pub fn is_valid_e164(phone: &str) -> bool {
    let normalized = normalize_phone_number(phone);
    E164_REGEX.is_match(&normalized)
}

/// Mask a phone number for logging (e.g., 447****0999)
pub fn mask_phone_number(phone: &str) -> String {
    let normalized = normalize_phone_number(phone);
    if normalized.len() >= 7 {
        format!(
            "{}****{}",
            &normalized[0..3],
            &normalized[normalized.len() - 4..]
        )
    } else {
        "****".to_string()
    }
}
