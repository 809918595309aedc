//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided as an `RwSignal<AuthState>` context by `App`. The login flow hands
//! it the issued token and user; the home page reads it and signs out. The
//! session survives reloads through `localStorage`.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use serde::{Deserialize, Serialize};

use crate::net::types::User;
use crate::util::storage;

/// `localStorage` key holding the persisted session.
pub const SESSION_STORAGE_KEY: &str = "realestate_session";

/// The established session, if any.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AuthState {
    pub token: Option<String>,
    pub user: Option<User>,
}

impl AuthState {
    /// Session persisted by a previous visit, or an empty one.
    pub fn restore() -> Self {
        storage::load_json::<Self>(SESSION_STORAGE_KEY)
            .filter(Self::is_authenticated)
            .unwrap_or_default()
    }

    pub fn login(&mut self, token: &str, user: &User) {
        self.token = Some(token.to_owned());
        self.user = Some(user.clone());
    }

    pub fn logout(&mut self) {
        self.token = None;
        self.user = None;
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.as_deref().is_some_and(|token| !token.is_empty()) && self.user.is_some()
    }
}

/// Receiver of a freshly issued session.
pub trait SessionSink {
    fn establish(&self, token: &str, user: &User);
}

impl SessionSink for RwSignal<AuthState> {
    fn establish(&self, token: &str, user: &User) {
        self.update(|state| state.login(token, user));
        self.with_untracked(|state| storage::save_json(SESSION_STORAGE_KEY, state));
        log::info!("session established for {}", user.display_name().unwrap_or("user"));
    }
}

/// Drop the session from the context and from storage.
pub fn sign_out(auth: RwSignal<AuthState>) {
    auth.update(AuthState::logout);
    storage::remove(SESSION_STORAGE_KEY);
}
