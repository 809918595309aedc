//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render app-wide chrome while reading shared state from Leptos
//! context providers.

pub mod toaster;
