//! Phone number utilities
//!
//! Phone numbers travel through the service as plain integers (the MSISDN
//! without a leading `+`), which is the form the verification provider
//! expects in its `number` field.

use once_cell::sync::Lazy;
use regex::Regex;

// International subscriber number: country code + national number, at most
// 15 digits (E.164), never starting with zero
static MSISDN_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[1-9]\d{0,14}$").unwrap());

/// Normalize a phone number by removing everything but digits
pub fn normalize_phone_number(phone: &str) -> String {
    phone.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Check if a string is a plausible MSISDN (digits only, E.164 length)
pub fn is_valid_msisdn(phone: &str) -> bool {
    MSISDN_REGEX.is_match(phone)
}

/// Mask a phone number for logs (e.g., 447****0123)
pub fn mask_phone(phone: &str) -> String {
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

/// Mask an integer phone number for logs
pub fn mask_msisdn(phone: u64) -> String {
    mask_phone(&phone.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_phone_number() {
        assert_eq!(normalize_phone_number("+44 7700-900123"), "447700900123");
        assert_eq!(normalize_phone_number("(415) 555 0100"), "4155550100");
    }

    #[test]
    fn test_is_valid_msisdn() {
        assert!(is_valid_msisdn("447700900123"));
        assert!(is_valid_msisdn("1"));
        assert!(!is_valid_msisdn("0447700900123"));
        assert!(!is_valid_msisdn("+447700900123"));
        assert!(!is_valid_msisdn("1234567890123456"));
        assert!(!is_valid_msisdn(""));
    }

    #[test]
    fn test_mask_phone() {
        assert_eq!(mask_phone("447700900123"), "447****0123");
        assert_eq!(mask_phone("12345"), "****");
        assert_eq!(mask_msisdn(14155550100), "141****0100");
    }
}
