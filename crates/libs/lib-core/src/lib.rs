//! # Core Library
//!
//! Framework-free domain for the landing page and authentication flow:
//! routes, effects, field validation, the sign-in form, the registration
//! wizard and the progress indicator. Every form is a plain state record
//! driven by a pure `reduce` function, so the UI layer only stores state
//! and executes the [`effect::Effect`]s it is handed.

pub mod config;
pub mod direction;
pub mod effect;
pub mod error;
pub mod notification;
pub mod progress;
pub mod registration;
pub mod route;
pub mod signin;
pub mod validation;

// Re-export commonly used types
pub use config::{AppConfig, FieldRules};
pub use direction::Direction;
pub use effect::{Effect, Submission, Transition};
pub use error::{AppError, Result};
pub use notification::Notification;
pub use progress::Segment;
pub use registration::{RegistrationAction, RegistrationForm, Step};
pub use route::Route;
pub use signin::{SignInAction, SignInForm};
pub use validation::{Field, FieldErrors, SignInField, ValidationError};
