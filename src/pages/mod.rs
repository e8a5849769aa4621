//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! `login` and `register` are public; the rest render behind the route guard
//! inside the view shell.

pub mod code_review;
pub mod dashboard;
pub mod login;
pub mod not_found;
pub mod register;
pub mod review_detail;
