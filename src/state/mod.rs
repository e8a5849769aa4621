//! Application state modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `session` owns who is signed in; `guard` turns that into a per-navigation
//! decision for protected routes.

pub mod guard;
pub mod session;
