//! Fallback for unmatched routes.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::config::HOME_PATH;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <section class="not-found">
            <h1>"404"</h1>
            <p>"The page you're looking for doesn't exist or has been moved."</p>
            <A href=HOME_PATH attr:class="not-found__home">
                "Go to Dashboard"
            </A>
        </section>
    }
}
