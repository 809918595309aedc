//! Wire DTOs for the authentication endpoint.
//!
//! DESIGN
//! ======
//! The backend owns the user schema. `User` wraps the JSON object untouched,
//! so it lands in the session store exactly as the server sent it.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::{Deserialize, Serialize};

/// Email/password pair submitted by the login form.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    #[must_use]
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// The user object issued by the authentication endpoint.
///
/// Kept as the raw JSON object; only the fields the UI displays are read,
/// through accessors.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct User(pub serde_json::Map<String, serde_json::Value>);

impl User {
    /// Backend identifier from `_id` or `id`, rendered as text.
    pub fn id(&self) -> Option<String> {
        ["_id", "id"].iter().find_map(|key| match self.0.get(*key)? {
            serde_json::Value::String(id) => Some(id.clone()),
            serde_json::Value::Number(id) => Some(id.to_string()),
            _ => None,
        })
    }

    pub fn name(&self) -> Option<&str> {
        self.text_field("name")
    }

    pub fn email(&self) -> Option<&str> {
        self.text_field("email")
    }

    /// Best label for greeting the user: name, then email.
    pub fn display_name(&self) -> Option<&str> {
        self.name().or_else(|| self.email())
    }

    fn text_field(&self, key: &str) -> Option<&str> {
        self.0
            .get(key)
            .and_then(serde_json::Value::as_str)
            .filter(|value| !value.trim().is_empty())
    }
}

impl From<serde_json::Map<String, serde_json::Value>> for User {
    fn from(fields: serde_json::Map<String, serde_json::Value>) -> Self {
        Self(fields)
    }
}

/// Response body of `POST /api/users/login`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub user: Option<User>,
    #[serde(default)]
    pub message: Option<String>,
}

impl LoginResponse {
    /// Token and user to hand to the session, when the login succeeded and
    /// both are present.
    pub fn session(&self) -> Option<(&str, &User)> {
        if !self.success {
            return None;
        }
        let token = self.token.as_deref().filter(|token| !token.is_empty())?;
        let user = self.user.as_ref()?;
        Some((token, user))
    }
}
