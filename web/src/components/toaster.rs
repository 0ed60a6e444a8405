//! Renders the toast queue, newest at the bottom. Click to dismiss.

use leptos::prelude::*;

use crate::state::toasts::{use_toasts, Toast};

#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = use_toasts();

    view! {
        <div class="toaster" role="status" aria-live="polite">
            <For
                each=move || toasts.items()
                key=|toast| toast.id
                children=move |toast: Toast| {
                    let id = toast.id;
                    view! {
                        <div class="toast" on:click=move |_| toasts.dismiss(id)>
                            <p class="toast-title">{toast.notification.title}</p>
                            <p class="toast-description">{toast.notification.description}</p>
                        </div>
                    }
                }
            />
        </div>
    }
}
