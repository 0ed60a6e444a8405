//! # Field Validation
//!
//! Validators are plain functions collected in per-form tables
//! ([`REGISTRATION_RULES`], [`SIGN_IN_RULES`]). Adding, removing or
//! swapping a rule is an edit to a table; the reducers only ever call
//! [`validate`] / [`validate_sign_in`].
//!
//! Failures are [`ValidationError`] values whose `Display` output is the
//! message shown under the field.

use std::collections::BTreeMap;

use lib_utils::validation::{is_email, meets_min_chars};
use thiserror::Error;

use crate::config::FieldRules;

/// Registration field, in wizard order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    Password,
    ConfirmPassword,
}

impl Field {
    pub const ALL: [Field; 4] = [
        Field::Name,
        Field::Email,
        Field::Password,
        Field::ConfirmPassword,
    ];

    /// Input `name` / `id` attribute.
    pub fn key(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Password => "password",
            Field::ConfirmPassword => "confirm-password",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SignInField {
    Email,
    Password,
}

impl SignInField {
    pub const ALL: [SignInField; 2] = [SignInField::Email, SignInField::Password];
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Email is required")]
    EmailRequired,

    #[error("Please enter a valid email address")]
    InvalidEmail,

    #[error("Password is required")]
    PasswordRequired,

    #[error("Name must be at least {min} characters")]
    NameTooShort { min: usize },

    #[error("Password must be at least {min} characters")]
    PasswordTooShort { min: usize },

    #[error("Passwords do not match")]
    PasswordMismatch,
}

/// Everything a validator may look at besides the value itself.
#[derive(Clone, Copy, Debug)]
pub struct RuleContext<'a> {
    pub rules: &'a FieldRules,
    /// Current password, for the confirmation check.
    pub password: &'a str,
}

pub type Validator = fn(&str, &RuleContext<'_>) -> Result<(), ValidationError>;

pub const REGISTRATION_RULES: [(Field, Validator); 4] = [
    (Field::Name, name_length as Validator),
    (Field::Email, email_format as Validator),
    (Field::Password, password_length as Validator),
    (Field::ConfirmPassword, password_confirmation as Validator),
];

pub const SIGN_IN_RULES: [(SignInField, Validator); 2] = [
    (SignInField::Email, required_email as Validator),
    (SignInField::Password, required_password as Validator),
];

/// Run the registration rule bound to `field`. Fields without a rule pass.
pub fn validate(field: Field, value: &str, ctx: &RuleContext<'_>) -> Result<(), ValidationError> {
    run(&REGISTRATION_RULES, field, value, ctx)
}

/// Run the sign-in rule bound to `field`. Fields without a rule pass.
pub fn validate_sign_in(
    field: SignInField,
    value: &str,
    ctx: &RuleContext<'_>,
) -> Result<(), ValidationError> {
    run(&SIGN_IN_RULES, field, value, ctx)
}

fn run<F: PartialEq + Copy>(
    table: &[(F, Validator)],
    field: F,
    value: &str,
    ctx: &RuleContext<'_>,
) -> Result<(), ValidationError> {
    table
        .iter()
        .filter(|(bound, _)| *bound == field)
        .try_for_each(|(_, validator)| validator(value, ctx))
}

// region:    --- Validators

fn name_length(value: &str, ctx: &RuleContext<'_>) -> Result<(), ValidationError> {
    let min = ctx.rules.name_min_chars;
    if meets_min_chars(value.trim(), min) {
        Ok(())
    } else {
        Err(ValidationError::NameTooShort { min })
    }
}

fn email_format(value: &str, _ctx: &RuleContext<'_>) -> Result<(), ValidationError> {
    if is_email(value) {
        Ok(())
    } else {
        Err(ValidationError::InvalidEmail)
    }
}

fn password_length(value: &str, ctx: &RuleContext<'_>) -> Result<(), ValidationError> {
    let min = ctx.rules.password_min_chars;
    if meets_min_chars(value, min) {
        Ok(())
    } else {
        Err(ValidationError::PasswordTooShort { min })
    }
}

fn password_confirmation(value: &str, ctx: &RuleContext<'_>) -> Result<(), ValidationError> {
    if value == ctx.password {
        Ok(())
    } else {
        Err(ValidationError::PasswordMismatch)
    }
}

fn required_email(value: &str, ctx: &RuleContext<'_>) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::EmailRequired);
    }
    email_format(value, ctx)
}

fn required_password(value: &str, ctx: &RuleContext<'_>) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::PasswordRequired);
    }
    password_length(value, ctx)
}

// endregion: --- Validators

/// Error messages keyed by field. A missing entry means "no error".
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldErrors<F: Ord> {
    errors: BTreeMap<F, ValidationError>,
}

impl<F: Ord> Default for FieldErrors<F> {
    fn default() -> Self {
        Self {
            errors: BTreeMap::new(),
        }
    }
}

impl<F: Ord + Copy> FieldErrors<F> {
    pub fn get(&self, field: F) -> Option<&ValidationError> {
        self.errors.get(&field)
    }

    /// Display message for `field`, if it has an error.
    pub fn message(&self, field: F) -> Option<String> {
        self.get(field).map(ToString::to_string)
    }

    pub fn set(&mut self, field: F, error: ValidationError) {
        self.errors.insert(field, error);
    }

    pub fn clear(&mut self, field: F) {
        self.errors.remove(&field);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (F, &ValidationError)> {
        self.errors.iter().map(|(field, error)| (*field, error))
    }
}
