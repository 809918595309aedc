//! Local state of the login form.
//!
//! DESIGN
//! ======
//! The form owns the credentials being typed, the password masking toggle and
//! the in-flight flag. Nothing here talks to the network; `begin_submit` and
//! `finish_submit` bracket the single request issued by the page.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use crate::net::types::Credentials;

/// Editable fields of the login form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoginField {
    Email,
    Password,
}

/// Login form state.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub credentials: Credentials,
    pub show_password: bool,
    pub loading: bool,
}

impl LoginForm {
    pub fn set_field(&mut self, field: LoginField, value: String) {
        match field {
            LoginField::Email => self.credentials.email = value,
            LoginField::Password => self.credentials.password = value,
        }
    }

    pub fn toggle_password_visibility(&mut self) {
        self.show_password = !self.show_password;
    }

    /// `type` attribute for the password input.
    pub fn password_input_type(&self) -> &'static str {
        if self.show_password { "text" } else { "password" }
    }

    pub fn submit_disabled(&self) -> bool {
        self.loading
    }

    /// Mark a submission as in flight and return the credentials to send.
    ///
    /// Returns `None` while a previous submission is still pending.
    pub fn begin_submit(&mut self) -> Option<Credentials> {
        if self.loading {
            return None;
        }
        self.loading = true;
        Some(self.credentials.clone())
    }

    /// Clear the in-flight flag once the request resolved, either way.
    pub fn finish_submit(&mut self) {
        self.loading = false;
    }
}
