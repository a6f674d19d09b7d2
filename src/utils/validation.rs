//! Validation utilities for user-entered forms.

use once_cell::sync::Lazy;
use regex::Regex;

/// Loose email shape check: something@something.tld
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex is valid")
});

/// Minimum password length for new accounts
pub const MIN_PASSWORD_LEN: usize = 6;

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email.trim())
}

/// Parse a non-negative amount such as a price
pub fn parse_amount(input: &str) -> Option<f64> {
    input
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite() && *value >= 0.0)
}

/// Parse a non-negative whole number such as a stock count
pub fn parse_count(input: &str) -> Option<u32> {
    input.trim().parse::<u32>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email() {
        assert!(is_valid_email("admin@example.com"));
        assert!(is_valid_email("  reader@books.co.uk "));
        assert!(!is_valid_email("admin"));
        assert!(!is_valid_email("admin@example"));
        assert!(!is_valid_email("a b@example.com"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn test_amount() {
        assert_eq!(parse_amount("12.99"), Some(12.99));
        assert_eq!(parse_amount(" 0 "), Some(0.0));
        assert_eq!(parse_amount("-1"), None);
        assert_eq!(parse_amount("abc"), None);
        assert_eq!(parse_amount("inf"), None);
    }

    #[test]
    fn test_count() {
        assert_eq!(parse_count("42"), Some(42));
        assert_eq!(parse_count("4.2"), None);
        assert_eq!(parse_count("-3"), None);
    }
}
