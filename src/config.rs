//! Client configuration resolved at build time.
//!
//! SYSTEM CONTEXT
//! ==============
//! WASM bundles have no process environment at runtime, so the backend base
//! URL is baked in from `REVIEW_API_BASE` when the crate is compiled. Route
//! paths and storage keys shared by the session core live here too.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE: &str = "http://localhost:8000";

/// Storage key holding the literal `"true"` while a session is persisted.
pub const AUTH_FLAG_KEY: &str = "isAuthenticated";
/// Value written under [`AUTH_FLAG_KEY`]. Anything else reads as signed out.
pub const AUTH_FLAG_VALUE: &str = "true";
/// Storage key holding the JSON-serialized signed-in [`crate::net::types::User`].
pub const PROFILE_KEY: &str = "user";

pub const HOME_PATH: &str = "/";
pub const LOGIN_PATH: &str = "/login";
pub const REGISTER_PATH: &str = "/register";
pub const CODE_REVIEW_PATH: &str = "/code-review";

/// Client route of a stored review, matching the `review/:review_id` route.
pub fn review_path(review_id: i64) -> String {
    format!("/review/{review_id}")
}

/// Settings shared through Leptos context.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Backend origin, without a trailing slash.
    pub api_base: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::with_api_base(DEFAULT_API_BASE)
    }
}

impl ClientConfig {
    /// Build from `REVIEW_API_BASE` captured at compile time.
    pub fn from_build_env() -> Self {
        match option_env!("REVIEW_API_BASE") {
            Some(base) if !base.trim().is_empty() => Self::with_api_base(base),
            _ => Self::default(),
        }
    }

    pub fn with_api_base(base: &str) -> Self {
        Self { api_base: base.trim().trim_end_matches('/').to_owned() }
    }

    /// Join an absolute API path (`/api/...`) onto the base URL.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_base, path.trim_start_matches('/'))
    }
}
