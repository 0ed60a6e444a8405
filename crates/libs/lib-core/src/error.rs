//! # Centralized Error Handling
//!
//! [`AppError`] covers the failures that are not field validation: parsing
//! a route path and loading configuration. Field validation failures are
//! [`crate::validation::ValidationError`] values attached to a form field and
//! never travel through this type.
//!
//! ## Usage Example
//!
//! ```rust
//! use lib_core::error::{AppError, Result};
//! use lib_core::Route;
//!
//! fn route_of(path: &str) -> Result<Route> {
//!     path.parse()
//! }
//!
//! assert!(matches!(route_of("/nowhere"), Err(AppError::NotFound(_))));
//! ```

use thiserror::Error;

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AppError {
    /// Configuration values out of range.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Configuration or payload text that could not be parsed.
    #[error("Decoding error: {0}")]
    Decoding(String),

    /// Requested route does not exist.
    #[error("Not found: {0}")]
    NotFound(String),
}

/// Convert `serde_json::Error` to `AppError`.
impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Decoding(format!("JSON error: {}", err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = AppError::NotFound("/admin".to_string());
        assert_eq!(err.to_string(), "Not found: /admin");
    }

    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<u32>("nope").unwrap_err();
        let err = AppError::from(json_err);
        assert!(matches!(err, AppError::Decoding(msg) if msg.starts_with("JSON error")));
    }
}
