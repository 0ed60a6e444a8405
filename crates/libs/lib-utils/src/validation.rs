//! # Validation Utilities
//!
//! Input validation primitives. These answer yes/no questions about a raw
//! string; turning a "no" into a user-facing message is left to the caller.

use once_cell::sync::Lazy;
use regex::Regex;

/// `local@domain.tld`, no whitespace and exactly one `@` per side.
pub const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(EMAIL_PATTERN).expect("EMAIL_PATTERN is a valid regex"));

/// Check an email address against [`EMAIL_PATTERN`].
///
/// ```rust
/// use lib_utils::validation::is_email;
///
/// assert!(is_email("a@b.co"));
/// assert!(!is_email("a@b"));
/// ```
pub fn is_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

/// Number of characters (not bytes) in `value`.
pub fn char_count(value: &str) -> usize {
    value.chars().count()
}

/// True when `value` holds at least `min` characters.
pub fn meets_min_chars(value: &str, min: usize) -> bool {
    char_count(value) >= min
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_accepts_simple_addresses() {
        assert!(is_email("a@b.co"));
        assert!(is_email("user@test.com"));
        assert!(is_email("first.last@sub.domain.org"));
    }

    #[test]
    fn test_email_rejects_malformed_addresses() {
        assert!(!is_email(""));
        assert!(!is_email("a@b"));
        assert!(!is_email("@b.co"));
        assert!(!is_email("a b@c.com"));
        assert!(!is_email("a@@b.co"));
        assert!(!is_email("a@b.co "));
        assert!(!is_email("a@.co"));
    }

    #[test]
    fn test_min_chars_counts_characters() {
        assert!(meets_min_chars("abcdefgh", 8));
        assert!(!meets_min_chars("abcdefg", 8));
        // 4 characters, 8 bytes
        assert!(!meets_min_chars("éééé", 5));
        assert_eq!(char_count("éééé"), 4);
    }
}
