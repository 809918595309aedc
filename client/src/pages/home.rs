//! Application root reached after a successful sign-in.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads the session from the `AuthState` context. Signed-out visitors get a
//! link to `/login`; signed-in users get a greeting and a sign-out action.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::state::auth::{AuthState, sign_out};

/// Greeting line for the signed-in user.
fn greeting(state: &AuthState) -> Option<String> {
    if !state.is_authenticated() {
        return None;
    }
    let name = state.user.as_ref().and_then(|user| user.display_name()).unwrap_or("there");
    Some(format!("Welcome, {name}"))
}

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    view! {
        <div class="home-page">
            <header class="home-header">
                <A href="/" attr:class="login-brand">"REALESTATE"</A>
            </header>
            <Show
                when=move || auth.with(AuthState::is_authenticated)
                fallback=|| {
                    view! {
                        <p class="home-message">
                            "You are not signed in. "
                            <A href="/login" attr:class="login-link">"Sign in"</A>
                        </p>
                    }
                }
            >
                <p class="home-message">{move || auth.with(greeting).unwrap_or_default()}</p>
                <button
                    class="login-button login-button--secondary"
                    on:click=move |_| sign_out(auth)
                >
                    "Sign out"
                </button>
            </Show>
        </div>
    }
}
