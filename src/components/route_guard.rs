//! Parent-route gate in front of every protected view.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted as the view of the protected `ParentRoute`. Nothing below it
//! renders until the session has been restored and found signed in.

use leptos::either::EitherOf3;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::view_shell::ViewShell;
use crate::state::guard::{GuardState, GuardTracker};
use crate::state::session::use_session;
use crate::util::auth::install_denied_redirect;

/// Waits while the session loads, redirects to `/login` when signed out, and
/// otherwise renders the view shell around the matched child route.
#[component]
pub fn RouteGuard() -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();

    let tracker = StoredValue::new(GuardTracker::new(&session.snapshot_untracked()));
    let guard = Memo::new(move |_| {
        let next = session.snapshot();
        tracker.try_update_value(|t| t.advance(next)).unwrap_or_default()
    });

    install_denied_redirect(guard, navigate);

    move || match guard.get() {
        GuardState::Pending => EitherOf3::A(view! {
            <div class="route-guard route-guard--pending" role="progressbar" aria-busy="true">
                <span class="route-guard__spinner"></span>
            </div>
        }),
        GuardState::Denied => EitherOf3::B(()),
        GuardState::Permitted => EitherOf3::C(view! { <ViewShell/> }),
    }
}
