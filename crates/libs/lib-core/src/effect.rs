//! # Effects
//!
//! Reducers never touch the router, the toast host or the network. They
//! describe what should happen as a list of [`Effect`]s inside a
//! [`Transition`], and the UI layer executes them in order.

use shared::dto::auth::{RegistrationRequest, SignInRequest};

use crate::notification::Notification;
use crate::route::Route;

/// Payload a completed form would hand to the authentication service.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Submission {
    SignIn(SignInRequest),
    Registration(RegistrationRequest),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    Submit(Submission),
    Notify(Notification),
    Navigate(Route),
}

/// Next state of a form plus the effects the change requests.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transition<S> {
    pub state: S,
    pub effects: Vec<Effect>,
}

impl<S> Transition<S> {
    /// A state change with no side effects.
    pub fn quiet(state: S) -> Self {
        Self {
            state,
            effects: Vec::new(),
        }
    }

    pub fn with_effects(state: S, effects: Vec<Effect>) -> Self {
        Self { state, effects }
    }

    pub fn notifications(&self) -> impl Iterator<Item = &Notification> {
        self.effects.iter().filter_map(|effect| match effect {
            Effect::Notify(notification) => Some(notification),
            _ => None,
        })
    }

    pub fn navigations(&self) -> impl Iterator<Item = Route> + '_ {
        self.effects.iter().filter_map(|effect| match effect {
            Effect::Navigate(route) => Some(*route),
            _ => None,
        })
    }

    pub fn submission(&self) -> Option<&Submission> {
        self.effects.iter().find_map(|effect| match effect {
            Effect::Submit(submission) => Some(submission),
            _ => None,
        })
    }
}

/// Effects shared by both forms on success: submit, toast, go home.
pub(crate) fn completion(submission: Submission, notification: Notification) -> Vec<Effect> {
    vec![
        Effect::Submit(submission),
        Effect::Notify(notification),
        Effect::Navigate(Route::Home),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completion_order() {
        let request = SignInRequest {
            email: "a@b.co".to_string(),
            password: "password".to_string(),
        };
        let transition = Transition::with_effects(
            (),
            completion(Submission::SignIn(request.clone()), Notification::signed_in()),
        );

        assert_eq!(transition.submission(), Some(&Submission::SignIn(request)));
        assert_eq!(transition.notifications().count(), 1);
        assert_eq!(transition.navigations().collect::<Vec<_>>(), vec![Route::Home]);
        assert!(matches!(transition.effects.last(), Some(Effect::Navigate(Route::Home))));
    }

    #[test]
    fn test_quiet_has_no_effects() {
        let transition = Transition::quiet(1_u8);
        assert!(transition.effects.is_empty());
        assert!(transition.submission().is_none());
    }
}
