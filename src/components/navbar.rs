//! Top navigation bar for signed-in views.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered only inside the view shell, so the session is normally signed in
//! here; the profile is still read as an `Option` and falls back to a neutral
//! label while a logout is propagating.

#[cfg(test)]
#[path = "navbar_test.rs"]
mod navbar_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::config::{CODE_REVIEW_PATH, HOME_PATH};
use crate::net::types::User;
use crate::state::session::use_session;

/// Primary navigation entries as `(label, path)`.
pub const NAV_LINKS: [(&str, &str); 2] = [("Dashboard", HOME_PATH), ("Code Review", CODE_REVIEW_PATH)];

/// The home link would otherwise be marked current on every page.
fn exact_match(path: &str) -> bool {
    path == HOME_PATH
}

fn account_label(profile: Option<&User>) -> (String, char) {
    match profile {
        Some(user) => (user.display_name(), user.initial()),
        None => ("Account".to_owned(), '?'),
    }
}

#[component]
pub fn Navbar() -> impl IntoView {
    let session = use_session();

    let account = move || account_label(session.snapshot().profile.as_ref());

    // The route guard sees the signed-out snapshot and redirects to login.
    let on_logout = move |_| session.logout();

    view! {
        <nav class="navbar">
            <A href=HOME_PATH attr:class="navbar__brand">
                "CodeReview AI"
            </A>
            <div class="navbar__links">
                {NAV_LINKS
                    .into_iter()
                    .map(|(label, path)| {
                        view! {
                            <A href=path exact=exact_match(path) attr:class="navbar__link">
                                {label}
                            </A>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="navbar__account">
                <span class="navbar__avatar">{move || account().1.to_string()}</span>
                <span class="navbar__name">{move || account().0}</span>
                <button class="navbar__logout" on:click=on_logout>
                    "Logout"
                </button>
            </div>
        </nav>
    }
}
