//! Landing Page - marketing hero with two calls to action

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use lib_core::Route;

use crate::utils::constants::APP_NAME;

const FEATURES: [(&str, &str); 3] = [
    (
        "Plan in seconds",
        "Capture tasks and ideas the moment they show up, then sort them later.",
    ),
    (
        "Everywhere you are",
        "Your lists follow you from phone to laptop without a single export.",
    ),
    (
        "Private by default",
        "Nothing is shared unless you decide to share it.",
    ),
];

#[component]
pub fn LandingPage() -> impl IntoView {
    let navigate = use_navigate();
    let go_register = {
        let navigate = navigate.clone();
        move |_| navigate(Route::Register.path(), Default::default())
    };
    let go_sign_in = move |_| navigate(Route::SignIn.path(), Default::default());

    view! {
        <div class="landing">
            <section class="hero">
                <p class="hero-eyebrow">{APP_NAME}</p>
                <h1 class="hero-title">"Your day, finally in one place."</h1>
                <p class="hero-subtitle">
                    "Lists, notes and reminders that stay out of your way until you need them."
                </p>
                <div class="cta-buttons">
                    <button class="btn" on:click=go_register>"Get started"</button>
                    <button class="btn btn-ghost" on:click=go_sign_in>"Sign in"</button>
                </div>
            </section>

            <section class="features">
                {FEATURES
                    .into_iter()
                    .map(|(title, body)| {
                        view! {
                            <div class="card feature">
                                <h3>{title}</h3>
                                <p>{body}</p>
                            </div>
                        }
                    })
                    .collect_view()}
            </section>
        </div>
    }
}
