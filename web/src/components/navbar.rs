//! Navigation Bar Component

use leptos::prelude::*;
use leptos_router::components::A;
use lib_core::Route;

use crate::utils::constants::APP_NAME;

#[component]
pub fn Navbar() -> impl IntoView {
    view! {
        <nav>
            <div class="nav-inner">
                <A href=Route::Home.path()>
                    <span class="nav-title">{APP_NAME}</span>
                </A>
                <div class="nav-links">
                    <A href=Route::SignIn.path()>
                        <span class="nav-link">"Sign in"</span>
                    </A>
                    <A href=Route::Register.path()>
                        <span class="btn btn-small">"Get started"</span>
                    </A>
                </div>
            </div>
        </nav>
    }
}
