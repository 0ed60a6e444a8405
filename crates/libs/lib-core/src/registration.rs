//! # Registration Wizard
//!
//! Four fixed steps, each bound to one [`Field`]:
//!
//! | index | step              | rule                                  |
//! |-------|-------------------|---------------------------------------|
//! | 0     | `Name`            | trimmed length >= `name_min_chars`    |
//! | 1     | `Email`           | matches the email pattern             |
//! | 2     | `Password`        | length >= `password_min_chars`        |
//! | 3     | `ConfirmPassword` | equals the current password           |
//!
//! [`RegistrationAction::Advance`] validates the active field and either
//! moves one step forward or, on the last step, submits.
//! [`RegistrationAction::Retreat`] moves one step back without validating
//! and without touching any value or error.
//!
//! A confirmation that already passed is not re-checked when the password
//! is edited afterwards; it is only checked again when step 3 is advanced.

use shared::dto::auth::RegistrationRequest;
use shared::utils::mask_email;

use crate::config::FieldRules;
use crate::direction::Direction;
use crate::effect::{completion, Submission, Transition};
use crate::notification::Notification;
use crate::progress::{self, Segment};
use crate::validation::{validate, Field, FieldErrors, RuleContext};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Step {
    #[default]
    Name,
    Email,
    Password,
    ConfirmPassword,
}

/// HTML input type for a step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Email,
    Password,
}

impl InputKind {
    pub fn as_str(self) -> &'static str {
        match self {
            InputKind::Text => "text",
            InputKind::Email => "email",
            InputKind::Password => "password",
        }
    }
}

impl Step {
    pub const ALL: [Step; 4] = [Step::Name, Step::Email, Step::Password, Step::ConfirmPassword];
    pub const COUNT: usize = Step::ALL.len();

    pub fn index(self) -> usize {
        match self {
            Step::Name => 0,
            Step::Email => 1,
            Step::Password => 2,
            Step::ConfirmPassword => 3,
        }
    }

    pub fn from_index(index: usize) -> Option<Step> {
        Step::ALL.get(index).copied()
    }

    pub fn next(self) -> Option<Step> {
        Step::from_index(self.index() + 1)
    }

    pub fn previous(self) -> Option<Step> {
        self.index().checked_sub(1).and_then(Step::from_index)
    }

    pub fn is_last(self) -> bool {
        self.next().is_none()
    }

    pub fn field(self) -> Field {
        match self {
            Step::Name => Field::Name,
            Step::Email => Field::Email,
            Step::Password => Field::Password,
            Step::ConfirmPassword => Field::ConfirmPassword,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Step::Name => "What's your name?",
            Step::Email => "What's your email?",
            Step::Password => "Create a password",
            Step::ConfirmPassword => "Confirm your password",
        }
    }

    pub fn subtitle(self) -> &'static str {
        match self {
            Step::Name => "Let's start with the basics.",
            Step::Email => "You'll use it to sign in.",
            Step::Password => "Choose something hard to guess.",
            Step::ConfirmPassword => "Type it once more to be sure.",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Step::Name => "Full name",
            Step::Email => "Email",
            Step::Password => "Password",
            Step::ConfirmPassword => "Confirm password",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Step::Name => "Jane Doe",
            Step::Email => "you@example.com",
            Step::Password | Step::ConfirmPassword => "••••••••",
        }
    }

    pub fn input_kind(self) -> InputKind {
        match self {
            Step::Name => InputKind::Text,
            Step::Email => InputKind::Email,
            Step::Password | Step::ConfirmPassword => InputKind::Password,
        }
    }

    /// Value for the input's `autocomplete` attribute.
    pub fn autocomplete(self) -> &'static str {
        match self {
            Step::Name => "name",
            Step::Email => "email",
            Step::Password | Step::ConfirmPassword => "new-password",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegistrationFields {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegistrationFields {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Password => &self.password,
            Field::ConfirmPassword => &self.confirm_password,
        }
    }

    pub fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Password => self.password = value,
            Field::ConfirmPassword => self.confirm_password = value,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RegistrationAction {
    Edit(Field, String),
    Advance,
    Retreat,
}

/// Keyboard shortcut on the active field: `Enter` advances.
pub fn key_action(key: &str) -> Option<RegistrationAction> {
    match key {
        "Enter" => Some(RegistrationAction::Advance),
        _ => None,
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RegistrationForm {
    pub fields: RegistrationFields,
    pub errors: FieldErrors<Field>,
    step: Step,
    direction: Direction,
    rules: FieldRules,
}

impl RegistrationForm {
    pub fn new(rules: FieldRules) -> Self {
        Self {
            rules,
            ..Self::default()
        }
    }

    pub fn step(&self) -> Step {
        self.step
    }

    /// Direction of the most recent step change.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn active_value(&self) -> &str {
        self.fields.get(self.step.field())
    }

    /// The one error that is shown: the active step's.
    pub fn active_error(&self) -> Option<String> {
        self.errors.message(self.step.field())
    }

    pub fn progress(&self) -> Vec<Segment> {
        progress::segments(self.step.index(), Step::COUNT)
    }

    pub fn reduce(&self, action: RegistrationAction) -> Transition<RegistrationForm> {
        let mut next = self.clone();

        match action {
            RegistrationAction::Edit(field, value) => {
                next.fields.set(field, value);
                next.errors.clear(field);
                Transition::quiet(next)
            }
            RegistrationAction::Retreat => {
                if let Some(previous) = self.step.previous() {
                    next.move_to(previous);
                }
                Transition::quiet(next)
            }
            RegistrationAction::Advance => {
                let field = self.step.field();
                let ctx = RuleContext {
                    rules: &self.rules,
                    password: &self.fields.password,
                };

                if let Err(error) = validate(field, self.fields.get(field), &ctx) {
                    tracing::debug!(step = self.step.index(), %error, "registration step rejected");
                    next.errors.set(field, error);
                    return Transition::quiet(next);
                }

                next.errors.clear(field);
                match self.step.next() {
                    Some(step) => {
                        next.move_to(step);
                        Transition::quiet(next)
                    }
                    None => {
                        tracing::info!(email = %mask_email(&next.fields.email), "registration submitted");
                        let request = RegistrationRequest {
                            name: next.fields.name.trim().to_string(),
                            email: next.fields.email.clone(),
                            password: next.fields.password.clone(),
                        };
                        let notification = Notification::registered(&next.fields.name);
                        let effects = completion(Submission::Registration(request), notification);
                        Transition::with_effects(next, effects)
                    }
                }
            }
        }
    }

    fn move_to(&mut self, step: Step) {
        if let Some(direction) = Direction::between(self.step.index(), step.index()) {
            self.direction = direction;
        }
        self.step = step;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::ValidationError;

    fn edit(form: &RegistrationForm, field: Field, value: &str) -> RegistrationForm {
        form.reduce(RegistrationAction::Edit(field, value.to_string())).state
    }

    fn advance(form: &RegistrationForm) -> RegistrationForm {
        form.reduce(RegistrationAction::Advance).state
    }

    fn at_password_step() -> RegistrationForm {
        let form = advance(&edit(&RegistrationForm::default(), Field::Name, "Ada"));
        advance(&edit(&form, Field::Email, "ada@example.com"))
    }

    #[test]
    fn test_step_table() {
        for (index, step) in Step::ALL.into_iter().enumerate() {
            assert_eq!(step.index(), index);
            assert_eq!(Step::from_index(index), Some(step));
            assert_eq!(step.field(), Field::ALL[index]);
        }
        assert_eq!(Step::from_index(4), None);
        assert_eq!(Step::Name.previous(), None);
        assert!(Step::ConfirmPassword.is_last());
        assert_eq!(Step::Email.input_kind().as_str(), "email");
    }

    #[test]
    fn test_short_name_stays_on_first_step() {
        let form = edit(&RegistrationForm::default(), Field::Name, "A");
        let transition = form.reduce(RegistrationAction::Advance);

        assert!(transition.effects.is_empty());
        assert_eq!(transition.state.step(), Step::Name);
        assert_eq!(
            transition.state.active_error().as_deref(),
            Some("Name must be at least 2 characters")
        );
    }

    #[test]
    fn test_advance_clears_active_error() {
        let rejected = advance(&edit(&RegistrationForm::default(), Field::Name, "A"));
        let form = advance(&edit(&rejected, Field::Name, "Al"));

        assert_eq!(form.step(), Step::Email);
        assert!(form.errors.is_empty());
        assert_eq!(form.direction(), Direction::Forward);
    }

    #[test]
    fn test_confirmation_mismatch() {
        let form = advance(&edit(&at_password_step(), Field::Password, "abcdefgh"));
        let transition = edit(&form, Field::ConfirmPassword, "abcdefgx").reduce(RegistrationAction::Advance);

        assert!(transition.effects.is_empty());
        assert_eq!(transition.state.step(), Step::ConfirmPassword);
        assert_eq!(
            transition.state.errors.get(Field::ConfirmPassword),
            Some(&ValidationError::PasswordMismatch)
        );
    }

    #[test]
    fn test_retreat_keeps_values_and_errors() {
        let form = edit(&at_password_step(), Field::Password, "short");
        let rejected = advance(&form);
        assert_eq!(rejected.step(), Step::Password);
        assert!(rejected.errors.get(Field::Password).is_some());

        let back = rejected.reduce(RegistrationAction::Retreat).state;
        assert_eq!(back.step(), Step::Email);
        assert_eq!(back.direction(), Direction::Backward);
        assert_eq!(back.fields, rejected.fields);
        assert_eq!(back.errors, rejected.errors);
        // Only the active step's error is shown.
        assert_eq!(back.active_error(), None);
    }

    #[test]
    fn test_retreat_on_first_step_is_a_no_op() {
        let form = RegistrationForm::default();
        let transition = form.reduce(RegistrationAction::Retreat);
        assert_eq!(transition.state, form);
        assert!(transition.effects.is_empty());
    }

    #[test]
    fn test_confirmation_checked_against_current_password() {
        let form = advance(&edit(&at_password_step(), Field::Password, "abcdefgh"));
        let form = edit(&form, Field::ConfirmPassword, "abcdefgh");

        // Go back and change the password after the confirmation was typed.
        let form = form.reduce(RegistrationAction::Retreat).state;
        let form = edit(&form, Field::Password, "zzzzzzzz");
        let form = advance(&form);

        assert_eq!(form.step(), Step::ConfirmPassword);
        assert!(form.errors.get(Field::ConfirmPassword).is_none());
        let transition = form.reduce(RegistrationAction::Advance);
        assert_eq!(
            transition.state.errors.get(Field::ConfirmPassword),
            Some(&ValidationError::PasswordMismatch)
        );
    }

    #[test]
    fn test_key_action() {
        assert_eq!(key_action("Enter"), Some(RegistrationAction::Advance));
        assert_eq!(key_action("Tab"), None);
        assert_eq!(key_action("Escape"), None);
    }

    #[test]
    fn test_progress_follows_step() {
        let form = at_password_step();
        assert_eq!(
            form.progress(),
            vec![Segment::Completed, Segment::Completed, Segment::Active, Segment::Pending]
        );
    }
}
