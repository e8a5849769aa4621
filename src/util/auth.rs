//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected route applies identical redirect behavior. Logout does not
//! navigate on its own; the guard's redirect is the only navigation to login.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::guard::GuardState;

/// Navigation options for auth redirects.
///
/// Replacing the history entry keeps the back button from returning to a
/// view the guard just refused.
pub fn redirect_options() -> NavigateOptions {
    NavigateOptions { replace: true, ..NavigateOptions::default() }
}

/// Redirect to the login page whenever the guard resolves to `Denied`.
pub fn install_denied_redirect<F>(guard: Memo<GuardState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if let Some(path) = guard.get().redirect_target() {
            log::debug!("protected route denied, redirecting to {path}");
            navigate(path, redirect_options());
        }
    });
}
