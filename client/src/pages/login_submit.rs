//! One login attempt, from request to redirect.
//!
//! `run_submission` is what the page's submit handler runs: it brackets
//! `submit_login` with `LoginForm::begin_submit`/`finish_submit`. Everything
//! between the click and the user-visible outcome lives here so it can run
//! against fake collaborators.

#[cfg(test)]
#[path = "login_submit_test.rs"]
mod login_submit_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::net::api::AuthGateway;
use crate::net::types::Credentials;
use crate::state::auth::SessionSink;
use crate::state::login::LoginForm;
use crate::state::toast::Notifier;

pub(crate) const LOGIN_SUCCESS_MESSAGE: &str = "Login successful!";
pub(crate) const LOGIN_REJECTED_FALLBACK: &str = "Login failed.";
pub(crate) const LOGIN_ERROR_MESSAGE: &str = "An error occurred. Please try again.";
pub(crate) const HOME_PATH: &str = "/";

/// Client-side navigation by path.
pub(crate) trait Navigator {
    fn navigate(&self, path: &str);
}

impl<F> Navigator for F
where
    F: Fn(&str, NavigateOptions),
{
    fn navigate(&self, path: &str) {
        self(path, NavigateOptions::default());
    }
}

/// How a login attempt ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum LoginOutcome {
    /// Session established and the user was sent home.
    LoggedIn,
    /// The backend refused the credentials with this message.
    Rejected(String),
    /// No usable response arrived.
    Failed,
}

/// Message shown for a refused login.
pub(crate) fn rejection_message(message: Option<&str>) -> String {
    message
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .unwrap_or(LOGIN_REJECTED_FALLBACK)
        .to_owned()
}

/// Send `credentials` once and report the outcome through the collaborators.
pub(crate) async fn submit_login<G, S, N, T>(
    gateway: &G,
    credentials: &Credentials,
    session: &S,
    navigator: &N,
    notifier: &T,
) -> LoginOutcome
where
    G: AuthGateway,
    S: SessionSink,
    N: Navigator,
    T: Notifier,
{
    let response = match gateway.login(credentials).await {
        Ok(response) => response,
        Err(e) => {
            log::error!("Error logging in: {e}");
            notifier.error(LOGIN_ERROR_MESSAGE);
            return LoginOutcome::Failed;
        }
    };

    if !response.success {
        let message = rejection_message(response.message.as_deref());
        notifier.error(&message);
        return LoginOutcome::Rejected(message);
    }

    let Some((token, user)) = response.session() else {
        log::error!("Error logging in: success response without token or user");
        notifier.error(LOGIN_ERROR_MESSAGE);
        return LoginOutcome::Failed;
    };

    session.establish(token, user);
    notifier.success(LOGIN_SUCCESS_MESSAGE);
    navigator.navigate(HOME_PATH);
    LoginOutcome::LoggedIn
}

/// Submit the form's current credentials unless a submission is pending.
///
/// Returns `None` when refused; otherwise the outcome, with `loading`
/// cleared again whichever way the attempt ended.
pub(crate) async fn run_submission<G, S, N, T>(
    form: RwSignal<LoginForm>,
    gateway: &G,
    session: &S,
    navigator: &N,
    notifier: &T,
) -> Option<LoginOutcome>
where
    G: AuthGateway,
    S: SessionSink,
    N: Navigator,
    T: Notifier,
{
    let credentials = form.try_update(LoginForm::begin_submit).flatten()?;
    let outcome = submit_login(gateway, &credentials, session, navigator, notifier).await;
    form.try_update(LoginForm::finish_submit);
    Some(outcome)
}
