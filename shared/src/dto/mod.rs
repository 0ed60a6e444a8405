//! # Data Transfer Objects (DTOs)
//!
//! - [`auth`] - Sign-in, registration and outcome DTOs
//!
//! ## Example JSON
//!
//! ```text
//! {
//!   "name": "Ada Lovelace",
//!   "email": "ada@example.com",
//!   "password": "analytical"
//! }
//! ```

pub mod auth;

pub use auth::*;
