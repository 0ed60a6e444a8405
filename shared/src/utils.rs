//! # Shared Utility Functions
//!
//! ## Email Masking
//!
//! [`mask_email`] keeps the first character of the local part and the whole
//! domain, so log lines stay useful without carrying the full address.
//!
//! ```rust
//! use shared::utils::mask_email;
//!
//! assert_eq!(mask_email("alice@example.com"), "a***@example.com");
//! assert_eq!(mask_email("not-an-email"), "***");
//! ```

/// Mask the local part of an email address.
///
/// Values without an `@`, or with an empty local part, are fully masked.
pub fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) => match local.chars().next() {
            Some(first) => format!("{first}***@{domain}"),
            None => "***".to_string(),
        },
        None => "***".to_string(),
    }
}
