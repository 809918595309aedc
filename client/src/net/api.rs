//! REST client for the external authentication backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): `ApiError::Unavailable`, since a login request only
//! makes sense from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure below the JSON body (network, non-2xx status, malformed body)
//! surfaces as an `ApiError`. A well-formed `{ success: false }` body is not an
//! error here; the submission flow decides how to present it.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{Credentials, LoginResponse};

/// Failure talking to the authentication backend.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("login request failed: {0}")]
    Transport(String),

    /// The backend answered with a non-2xx status.
    #[error("login request failed: status {0}")]
    Status(u16),

    /// The response body was not a login response.
    #[error("login response parse failed: {0}")]
    Decode(String),

    /// HTTP is not available in this build (server render).
    #[error("not available on server")]
    Unavailable,
}

/// Absolute URL of the login endpoint under `base_url`.
pub fn login_endpoint(base_url: &str) -> String {
    format!("{}/api/users/login", base_url.trim_end_matches('/'))
}

/// Something that can exchange credentials for a login response.
///
/// The browser build uses [`HttpAuthGateway`]; tests substitute fakes.
#[allow(async_fn_in_trait)]
pub trait AuthGateway {
    /// Send one login attempt.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when no well-formed response was received.
    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError>;
}

/// [`AuthGateway`] backed by `POST {base_url}/api/users/login`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpAuthGateway {
    base_url: String,
}

impl HttpAuthGateway {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    pub fn endpoint(&self) -> String {
        login_endpoint(&self.base_url)
    }
}

impl AuthGateway for HttpAuthGateway {
    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(&self.endpoint())
                .json(credentials)
                .map_err(|e| ApiError::Transport(e.to_string()))?
                .send()
                .await
                .map_err(|e| ApiError::Transport(e.to_string()))?;
            if !resp.ok() {
                return Err(ApiError::Status(resp.status()));
            }
            resp.json::<LoginResponse>()
                .await
                .map_err(|e| ApiError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = credentials;
            Err(ApiError::Unavailable)
        }
    }
}
