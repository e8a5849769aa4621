//! Login page: email + password against the review backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! The only place a session starts. A successful backend login hands the
//! returned profile to the session store and navigates to the dashboard;
//! the originally requested path is not remembered.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::config::{ClientConfig, REGISTER_PATH};
use crate::net::types::LoginRequest;
#[cfg(any(test, feature = "hydrate"))]
use crate::net::types::User;
use crate::state::session::use_session;

pub(crate) const MISSING_FIELDS: &str = "Please fill in all fields";
#[cfg(any(test, feature = "hydrate"))]
pub(crate) const INVALID_PROFILE: &str = "Login failed: server returned an invalid profile";

/// Trim the email and require both fields.
///
/// The password is passed through untouched; leading or trailing spaces may
/// be part of it.
pub(crate) fn validate_login_input(email: &str, password: &str) -> Result<LoginRequest, &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err(MISSING_FIELDS);
    }
    Ok(LoginRequest { email: email.to_owned(), password: password.to_owned() })
}

/// Only profiles the session store will accept may start a session.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn accept_profile(user: User) -> Result<User, &'static str> {
    if user.has_valid_id() { Ok(user) } else { Err(INVALID_PROFILE) }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let config = use_context::<ClientConfig>().unwrap_or_default();
    let session = use_session();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        error.set(String::new());
        let request = match validate_login_input(&email.get_untracked(), &password.get_untracked()) {
            Ok(request) => request,
            Err(msg) => {
                error.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);

        #[cfg(feature = "hydrate")]
        {
            let config = config.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let outcome = crate::net::api::login(&config, &request)
                    .await
                    .map_err(|e| e.to_string())
                    .and_then(|user| accept_profile(user).map_err(str::to_owned));
                match outcome {
                    Ok(user) => {
                        session.login(user);
                        navigate(crate::config::HOME_PATH, leptos_router::NavigateOptions::default());
                    }
                    Err(msg) => {
                        log::warn!("login failed: {msg}");
                        error.set(msg);
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&config, &navigate, session, request);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Sign in"</h1>
                <Show when=move || !error.get().is_empty()>
                    <p class="auth-message auth-message--error" role="alert">{move || error.get()}</p>
                </Show>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="email"
                        autocomplete="email"
                        placeholder="Email Address"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        autocomplete="current-password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="auth-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing In..." } else { "Sign In" }}
                    </button>
                </form>
                <p class="auth-card__footer">
                    "Don't have an account? "
                    <A href=REGISTER_PATH>"Sign Up"</A>
                </p>
            </div>
        </div>
    }
}
