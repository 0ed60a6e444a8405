//! Registration Page - four-step wizard with a progress row
//!
//! The step panel is keyed on the active step, so it is rebuilt (and its
//! slide animation replayed) only when the step changes, not on every
//! keystroke. The slide direction comes from the form and is cosmetic.

use leptos::ev::KeyboardEvent;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;
use lib_core::config::core_config;
use lib_core::registration::key_action;
use lib_core::{RegistrationAction, RegistrationForm, Route, Step};

use crate::components::ProgressIndicator;
use crate::services::effects::run_effects;
use crate::state::toasts::use_toasts;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let toasts = use_toasts();
    let navigate = use_navigate();
    let form = RwSignal::new(RegistrationForm::new(core_config().rules));
    let step = Memo::new(move |_| form.with(|state| state.step()));

    let dispatch = move |action: RegistrationAction| {
        let transition = form.with_untracked(|state| state.reduce(action));
        form.set(transition.state);
        run_effects(transition.effects, &navigate, toasts);
    };

    let on_back = {
        let dispatch = dispatch.clone();
        move |_| dispatch(RegistrationAction::Retreat)
    };
    let on_next = {
        let dispatch = dispatch.clone();
        move |_| dispatch(RegistrationAction::Advance)
    };

    let panel = move || {
        let current = step.get();
        let direction = form.with_untracked(|state| state.direction());
        let field = current.field();

        let edit = dispatch.clone();
        let confirm = dispatch.clone();

        view! {
            <div class=format!("step-panel slide-{}", direction.as_str())>
                <h1 class="card-title">{current.title()}</h1>
                <p class="card-subtitle">{current.subtitle()}</p>
                <div class="field">
                    <label for=field.key() class="field-label">{current.label()}</label>
                    <input
                        id=field.key()
                        name=field.key()
                        type=current.input_kind().as_str()
                        class="field-input"
                        placeholder=current.placeholder()
                        autocomplete=current.autocomplete()
                        autofocus=true
                        prop:value=move || form.with(|state| state.active_value().to_string())
                        on:input=move |ev| {
                            edit(RegistrationAction::Edit(field, event_target_value(&ev)))
                        }
                        on:keydown=move |ev: KeyboardEvent| {
                            if let Some(action) = key_action(&ev.key()) {
                                ev.prevent_default();
                                confirm(action);
                            }
                        }
                    />
                    {move || {
                        form.with(|state| state.active_error())
                            .map(|message| view! { <p class="field-error">{message}</p> })
                    }}
                </div>
            </div>
        }
    };

    view! {
        <div class="page-center">
            <div class="card auth-card">
                <ProgressIndicator
                    current=Signal::derive(move || step.get().index())
                    total=Step::COUNT
                />

                {panel}

                <div class="wizard-actions">
                    <button
                        type="button"
                        class="btn btn-ghost"
                        disabled=move || step.get().previous().is_none()
                        on:click=on_back
                    >
                        "Back"
                    </button>
                    <button type="button" class="btn" on:click=on_next>
                        {move || if step.get().is_last() { "Create account" } else { "Continue" }}
                    </button>
                </div>

                <p class="auth-switch">
                    "Already have an account? "
                    <A href=Route::SignIn.path()>"Sign in"</A>
                </p>
            </div>
        </div>
    }
}
