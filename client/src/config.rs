//! Compile-time client configuration.
//!
//! The authentication backend is a separate service, so its origin is baked in
//! at build time from `REALESTATE_API_URL` (e.g.
//! `REALESTATE_API_URL=https://api.example.com cargo leptos build`).

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Backend origin used when `REALESTATE_API_URL` is unset at build time.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:4000";

/// Origin of the authentication backend, without a trailing slash.
pub fn api_base_url() -> &'static str {
    normalize_base_url(option_env!("REALESTATE_API_URL").unwrap_or(DEFAULT_API_BASE_URL))
}

fn normalize_base_url(raw: &str) -> &str {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() { DEFAULT_API_BASE_URL } else { trimmed }
}
