//! # Sign-in Form
//!
//! Single-step email/password capture. Errors are recomputed wholesale on
//! [`SignInAction::Submit`]; editing a field only clears that field's error.

use shared::dto::auth::SignInRequest;
use shared::utils::mask_email;

use crate::config::FieldRules;
use crate::effect::{completion, Submission, Transition};
use crate::notification::Notification;
use crate::validation::{validate_sign_in, FieldErrors, RuleContext, SignInField};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SignInAction {
    Edit(SignInField, String),
    Submit,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignInForm {
    pub email: String,
    pub password: String,
    pub errors: FieldErrors<SignInField>,
    rules: FieldRules,
}

impl SignInForm {
    pub fn new(rules: FieldRules) -> Self {
        Self {
            rules,
            ..Self::default()
        }
    }

    pub fn value(&self, field: SignInField) -> &str {
        match field {
            SignInField::Email => &self.email,
            SignInField::Password => &self.password,
        }
    }

    pub fn reduce(&self, action: SignInAction) -> Transition<SignInForm> {
        let mut next = self.clone();

        match action {
            SignInAction::Edit(field, value) => {
                match field {
                    SignInField::Email => next.email = value,
                    SignInField::Password => next.password = value,
                }
                next.errors.clear(field);
                Transition::quiet(next)
            }
            SignInAction::Submit => {
                next.errors = self.validate();
                if !next.errors.is_empty() {
                    let failed: Vec<SignInField> = next.errors.iter().map(|(field, _)| field).collect();
                    tracing::debug!(?failed, "sign-in rejected by validation");
                    return Transition::quiet(next);
                }

                tracing::info!(email = %mask_email(&next.email), "sign-in submitted");
                let request = SignInRequest {
                    email: next.email.clone(),
                    password: next.password.clone(),
                };
                let effects = completion(Submission::SignIn(request), Notification::signed_in());
                Transition::with_effects(next, effects)
            }
        }
    }

    fn validate(&self) -> FieldErrors<SignInField> {
        let ctx = RuleContext {
            rules: &self.rules,
            password: &self.password,
        };
        let mut errors = FieldErrors::default();
        for field in SignInField::ALL {
            if let Err(error) = validate_sign_in(field, self.value(field), &ctx) {
                errors.set(field, error);
            }
        }
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::effect::Effect;
    use crate::route::Route;
    use crate::validation::ValidationError;

    fn filled(email: &str, password: &str) -> SignInForm {
        let form = SignInForm::default();
        let form = form
            .reduce(SignInAction::Edit(SignInField::Email, email.to_string()))
            .state;
        form.reduce(SignInAction::Edit(SignInField::Password, password.to_string()))
            .state
    }

    #[test]
    fn test_empty_submit_reports_both_fields() {
        let transition = SignInForm::default().reduce(SignInAction::Submit);

        assert!(transition.effects.is_empty());
        assert_eq!(
            transition.state.errors.message(SignInField::Email).as_deref(),
            Some("Email is required")
        );
        assert_eq!(
            transition.state.errors.message(SignInField::Password).as_deref(),
            Some("Password is required")
        );
    }

    #[test]
    fn test_short_password_only() {
        let transition = filled("user@test.com", "1234567").reduce(SignInAction::Submit);

        assert!(transition.effects.is_empty());
        assert_eq!(transition.state.errors.len(), 1);
        assert_eq!(
            transition.state.errors.get(SignInField::Password),
            Some(&ValidationError::PasswordTooShort { min: 8 })
        );
    }

    #[test]
    fn test_valid_submit() {
        let transition = filled("user@test.com", "12345678").reduce(SignInAction::Submit);

        assert!(transition.state.errors.is_empty());
        assert_eq!(transition.notifications().count(), 1);
        assert_eq!(transition.navigations().collect::<Vec<_>>(), vec![Route::Home]);
        assert!(matches!(
            transition.submission(),
            Some(Submission::SignIn(request)) if request.email == "user@test.com"
        ));
    }

    #[test]
    fn test_whitespace_email_is_invalid_not_missing() {
        let transition = filled("   ", "12345678").reduce(SignInAction::Submit);

        assert!(transition.effects.is_empty());
        assert_eq!(
            transition.state.errors.message(SignInField::Email).as_deref(),
            Some("Please enter a valid email address")
        );
        assert!(transition.state.errors.get(SignInField::Password).is_none());
    }

    #[test]
    fn test_edit_clears_only_that_field() {
        let rejected = SignInForm::default().reduce(SignInAction::Submit).state;
        let edited = rejected
            .reduce(SignInAction::Edit(SignInField::Email, "x".to_string()))
            .state;

        // Cleared optimistically even though "x" is still invalid.
        assert!(edited.errors.get(SignInField::Email).is_none());
        assert!(edited.errors.get(SignInField::Password).is_some());
    }

    #[test]
    fn test_resubmit_recomputes_errors() {
        let rejected = filled("bad", "").reduce(SignInAction::Submit).state;
        assert_eq!(rejected.errors.len(), 2);

        let fixed = rejected
            .reduce(SignInAction::Edit(SignInField::Password, "longenough".to_string()))
            .state
            .reduce(SignInAction::Submit);
        assert_eq!(fixed.state.errors.len(), 1);
        assert_eq!(
            fixed.state.errors.get(SignInField::Email),
            Some(&ValidationError::InvalidEmail)
        );
        assert!(!fixed.effects.iter().any(|e| matches!(e, Effect::Navigate(_))));
    }

    #[test]
    fn test_reduce_leaves_input_untouched() {
        let form = filled("user@test.com", "12345678");
        let before = form.clone();
        let _ = form.reduce(SignInAction::Submit);
        assert_eq!(form, before);
    }
}
