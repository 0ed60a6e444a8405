//! Step progress row for the registration wizard

use leptos::prelude::*;
use lib_core::progress::segments;

#[component]
pub fn ProgressIndicator(#[prop(into)] current: Signal<usize>, total: usize) -> impl IntoView {
    view! {
        <div
            class="progress"
            role="progressbar"
            aria-valuemin="1"
            aria-valuemax=total.to_string()
            aria-valuenow=move || (current.get() + 1).to_string()
        >
            {move || {
                segments(current.get(), total)
                    .into_iter()
                    .map(|segment| {
                        view! { <span class=format!("progress-segment {}", segment.as_str())></span> }
                    })
                    .collect_view()
            }}
        </div>
        <p class="progress-label">
            {move || format!("Step {} of {}", current.get() + 1, total)}
        </p>
    }
}
