//! Networking modules for the review backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles the REST auth calls made by the login/register pages, and
//! `types` defines the JSON schema shared with the backend.

pub mod api;
pub mod types;
