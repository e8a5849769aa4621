//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the route gate and the chrome around protected views,
//! reading the session from the Leptos context provided by `App`.

pub mod navbar;
pub mod route_guard;
pub mod view_shell;
