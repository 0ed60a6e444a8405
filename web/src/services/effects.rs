//! Executes the effects a form reducer hands back.

use leptos_router::NavigateOptions;
use lib_core::{Effect, Submission};
use shared::utils::mask_email;

use crate::state::toasts::ToastContext;

/// Run `effects` in order. `navigate` is the router's navigate function.
pub fn run_effects(
    effects: Vec<Effect>,
    navigate: &impl Fn(&str, NavigateOptions),
    toasts: ToastContext,
) {
    for effect in effects {
        match effect {
            Effect::Submit(submission) => log_submission(&submission),
            Effect::Notify(notification) => toasts.notify(notification),
            Effect::Navigate(route) => {
                log::debug!("Navigating to {}", route);
                navigate(route.path(), NavigateOptions::default());
            }
        }
    }
}

// No authentication service yet: the payload is logged and dropped.
fn log_submission(submission: &Submission) {
    match submission {
        Submission::SignIn(request) => {
            log::info!("Sign-in for {} (not sent, no auth service)", mask_email(&request.email));
        }
        Submission::Registration(request) => {
            log::info!(
                "Registration for {} (not sent, no auth service)",
                mask_email(&request.email)
            );
        }
    }
}
