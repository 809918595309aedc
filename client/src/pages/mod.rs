//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration; the login page delegates the
//! request/outcome handling to `login_submit`.

pub mod home;
pub mod login;
pub(crate) mod login_submit;
