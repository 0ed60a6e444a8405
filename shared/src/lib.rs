//! # Shared Data Transfer Objects Library
//!
//! This library defines the contract between the sign-in / registration forms
//! and the authentication service they will eventually call. The forms build
//! these payloads today; nothing sends them yet.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for the authentication boundary
//!   - **[`dto::auth`]**: Sign-in and registration payloads and the outcome shape
//! - **[`utils`]**: Shared utility functions
//!   - **[`utils::mask_email`]**: Mask an email address for logs
//!
//! ## Wire Format
//!
//! All DTOs serialize to JSON using the default `serde` behavior:
//! - Field names use **snake_case**
//! - Enums are internally tagged with a `status` field
//!
//! ## Usage
//!
//! ```rust
//! use shared::dto::auth::SignInRequest;
//! use shared::utils::mask_email;
//!
//! let request = SignInRequest {
//!     email: "alice@example.com".to_string(),
//!     password: "correct horse".to_string(),
//! };
//! assert_eq!(mask_email(&request.email), "a***@example.com");
//! ```

pub mod dto;
pub mod utils;

pub use dto::*;
pub use utils::*;
