//! Email + password sign-in page.

use leptos::prelude::*;
use leptos_router::components::A;

#[cfg(feature = "hydrate")]
use super::login_submit::run_submission;
#[cfg(feature = "hydrate")]
use crate::net::api::HttpAuthGateway;
use crate::state::auth::AuthState;
use crate::state::login::{LoginField, LoginForm};
use crate::state::toast::ToastState;

#[component]
pub fn LoginPage() -> impl IntoView {
    let form = RwSignal::new(LoginForm::default());
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let navigate = leptos_router::hooks::use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if form.with_untracked(LoginForm::submit_disabled) {
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let gateway = HttpAuthGateway::new(crate::config::api_base_url());
                run_submission(form, &gateway, &auth, &navigate, &toasts).await;
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (auth, toasts, &navigate);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <div class="login-card__header">
                    <A href="/" attr:class="login-brand">"REALESTATE"</A>
                    <h2 class="login-card__title">"Welcome back"</h2>
                    <p class="login-card__subtitle">"Please sign in to your account"</p>
                </div>

                <form class="login-form" on:submit=on_submit>
                    <div class="login-field">
                        <label for="email" class="login-label">"Email address"</label>
                        <input
                            class="login-input"
                            type="email"
                            name="email"
                            id="email"
                            required=true
                            placeholder="name@company.com"
                            prop:value=move || form.with(|f| f.credentials.email.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                form.update(|f| f.set_field(LoginField::Email, value));
                            }
                        />
                    </div>

                    <div class="login-field">
                        <label for="password" class="login-label">"Password"</label>
                        <div class="login-password">
                            <input
                                class="login-input"
                                type=move || form.with(LoginForm::password_input_type)
                                name="password"
                                id="password"
                                required=true
                                placeholder="••••••••"
                                prop:value=move || form.with(|f| f.credentials.password.clone())
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    form.update(|f| f.set_field(LoginField::Password, value));
                                }
                            />
                            <button
                                class="login-password__toggle"
                                type="button"
                                aria-label=move || {
                                    if form.with(|f| f.show_password) {
                                        "Hide password"
                                    } else {
                                        "Show password"
                                    }
                                }
                                on:click=move |_| form.update(LoginForm::toggle_password_visibility)
                            >
                                {move || {
                                    if form.with(|f| f.show_password) { "🙈" } else { "👁" }
                                }}
                            </button>
                        </div>
                    </div>

                    <div class="login-form__aux">
                        <A href="/forgot-password" attr:class="login-link">"Forgot password?"</A>
                    </div>

                    <button
                        class="login-button"
                        type="submit"
                        disabled=move || form.with(LoginForm::submit_disabled)
                    >
                        <Show when=move || form.with(|f| f.loading) fallback=|| "Sign in">
                            <span class="spinner" aria-label="Signing in"></span>
                        </Show>
                    </button>

                    <div class="login-divider">
                        <span>"Don't have an account?"</span>
                    </div>

                    <A href="/signup" attr:class="login-button login-button--secondary">
                        "Create an account"
                    </A>
                </form>
            </div>
        </div>
    }
}
