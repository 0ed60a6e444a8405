//! Sign-in Page - email/password with inline validation

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;
use lib_core::config::core_config;
use lib_core::{Route, SignInAction, SignInField, SignInForm};

use crate::services::effects::run_effects;
use crate::state::toasts::use_toasts;

#[component]
pub fn LoginPage() -> impl IntoView {
    let toasts = use_toasts();
    let navigate = use_navigate();
    let form = RwSignal::new(SignInForm::new(core_config().rules));

    let dispatch = move |action: SignInAction| {
        let transition = form.with_untracked(|state| state.reduce(action));
        form.set(transition.state);
        run_effects(transition.effects, &navigate, toasts);
    };

    let submit = dispatch.clone();
    let edit_email = dispatch.clone();
    let edit_password = dispatch;

    let error = move |field: SignInField| {
        move || {
            form.with(|state| state.errors.message(field))
                .map(|message| view! { <p class="field-error">{message}</p> })
        }
    };

    view! {
        <div class="page-center">
            <div class="card auth-card">
                <h1 class="card-title">"Welcome back"</h1>
                <p class="card-subtitle">"Sign in to pick up where you left off."</p>

                <form
                    class="auth-form"
                    novalidate=true
                    on:submit=move |ev: SubmitEvent| {
                        ev.prevent_default();
                        submit(SignInAction::Submit);
                    }
                >
                    <div class="field">
                        <label for="email" class="field-label">"Email"</label>
                        <input
                            id="email"
                            name="email"
                            type="email"
                            class="field-input"
                            placeholder="you@example.com"
                            autocomplete="email"
                            prop:value=move || form.with(|state| state.email.clone())
                            on:input=move |ev| {
                                edit_email(SignInAction::Edit(SignInField::Email, event_target_value(&ev)))
                            }
                        />
                        {error(SignInField::Email)}
                    </div>

                    <div class="field">
                        <label for="password" class="field-label">"Password"</label>
                        <input
                            id="password"
                            name="password"
                            type="password"
                            class="field-input"
                            placeholder="••••••••"
                            autocomplete="current-password"
                            prop:value=move || form.with(|state| state.password.clone())
                            on:input=move |ev| {
                                edit_password(SignInAction::Edit(SignInField::Password, event_target_value(&ev)))
                            }
                        />
                        {error(SignInField::Password)}
                    </div>

                    <button type="submit" class="btn btn-block">"Sign in"</button>
                </form>

                <p class="auth-switch">
                    "Don't have an account? "
                    <A href=Route::Register.path()>"Create one"</A>
                </p>
            </div>
        </div>
    }
}
