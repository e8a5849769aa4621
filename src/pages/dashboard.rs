//! Dashboard page: the signed-in landing route.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered behind the route guard. Greets the user, lists their recent
//! reviews from the backend, and points at the code submission flow.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::config::{CODE_REVIEW_PATH, review_path};
use crate::net::types::{ReviewSummary, User, UserReviews};
use crate::state::session::use_session;

fn greeting(profile: Option<&User>) -> String {
    match profile {
        Some(user) if !user.first_name.trim().is_empty() => format!("Welcome back, {}!", user.first_name.trim()),
        Some(user) => format!("Welcome back, {}!", user.display_name()),
        None => "Welcome!".to_owned(),
    }
}

fn summary_label(summary: &ReviewSummary) -> String {
    let name = summary.name.trim();
    let name = if name.is_empty() { "Unnamed Project" } else { name };
    let mut label = format!("{name} - score {}", summary.score);
    if !summary.language.is_empty() {
        label.push_str(&format!(" ({})", summary.language));
    }
    if !summary.date.is_empty() {
        label.push_str(&format!(", {}", summary.date));
    }
    label
}

#[component]
fn ReviewList(reviews: UserReviews) -> impl IntoView {
    if reviews.recent_projects.is_empty() {
        return view! { <p class="dashboard__empty-list">"No reviews yet."</p> }.into_any();
    }
    view! {
        <ul class="dashboard__reviews">
            {reviews
                .recent_projects
                .into_iter()
                .map(|summary| {
                    view! {
                        <li>
                            <A href=review_path(summary.id)>{summary_label(&summary)}</A>
                        </li>
                    }
                })
                .collect_view()}
        </ul>
    }
    .into_any()
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = use_session();
    let title = move || greeting(session.snapshot().profile.as_ref());
    let email = move || session.snapshot().profile.map(|u| u.email).unwrap_or_default();

    let reviews = RwSignal::new(None::<Result<UserReviews, String>>);

    #[cfg(feature = "hydrate")]
    {
        let config = use_context::<crate::config::ClientConfig>().unwrap_or_default();
        Effect::new(move || {
            let Some(user_id) = session.snapshot().profile.map(|u| u.id) else {
                return;
            };
            let config = config.clone();
            leptos::task::spawn_local(async move {
                let loaded = crate::net::api::fetch_user_reviews(&config, user_id).await.map_err(|e| {
                    log::warn!("loading reviews failed: {e}");
                    e.to_string()
                });
                reviews.set(Some(loaded));
            });
        });
    }

    view! {
        <section class="dashboard">
            <header class="dashboard__header">
                <h1>{title}</h1>
                <p class="dashboard__email">{email}</p>
            </header>
            <div class="dashboard__actions">
                <p>"Submit code to get an AI review with detected bugs and suggestions."</p>
                <A href=CODE_REVIEW_PATH attr:class="dashboard__cta">
                    "Start a Code Review"
                </A>
            </div>
            <h2>"Recent Reviews"</h2>
            {move || match reviews.get() {
                None => view! { <p class="dashboard__loading">"Loading reviews..."</p> }.into_any(),
                Some(Ok(loaded)) => view! { <ReviewList reviews=loaded/> }.into_any(),
                Some(Err(e)) => view! { <p class="dashboard__error" role="alert">{format!("Failed to load reviews: {e}")}</p> }.into_any(),
            }}
        </section>
    }
}
