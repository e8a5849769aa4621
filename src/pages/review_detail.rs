//! Detail route for a single review's findings.

#[cfg(test)]
#[path = "review_detail_test.rs"]
mod review_detail_test;

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use crate::config::HOME_PATH;
use crate::net::types::{ReviewDetail, quality_label};

/// Review ids are positive integers; anything else is a bad link.
fn parse_review_id(raw: Option<&str>) -> Option<u64> {
    raw?.trim().parse::<u64>().ok().filter(|id| *id > 0)
}

/// Summary line under the review title.
fn detail_subtitle(detail: &ReviewDetail) -> String {
    let score = detail.quality_score;
    let mut subtitle = format!("Quality score: {score}/100 ({})", quality_label(score));
    if !detail.language.is_empty() {
        subtitle = format!("{} | {subtitle}", detail.language);
    }
    subtitle
}

#[component]
fn ReviewFindings(detail: ReviewDetail) -> impl IntoView {
    let subtitle = detail_subtitle(&detail);
    let title = detail.title().to_owned();
    view! {
        <h1>{title}</h1>
        <p class="review-detail__summary">{subtitle}</p>
        {detail.created_at.map(|at| view! { <p class="review-detail__date">{at}</p> })}
        <h2>{format!("Issues ({})", detail.bugs.len())}</h2>
        <ul class="review-detail__bugs">
            {detail
                .bugs
                .into_iter()
                .map(|bug| {
                    view! {
                        <li class=format!("finding finding--{}", bug.severity)>
                            <p>{format!("Line {} [{}]: {}", bug.line, bug.severity, bug.message)}</p>
                            <p class="finding__suggestion">{bug.suggestion}</p>
                        </li>
                    }
                })
                .collect_view()}
        </ul>
        <h2>"Suggestions"</h2>
        <ul class="review-detail__suggestions">
            {detail.suggestions.into_iter().map(|s| view! { <li>{s}</li> }).collect_view()}
        </ul>
        <h2>"Code"</h2>
        <pre class="review-detail__code">{detail.code}</pre>
    }
}

#[component]
pub fn ReviewDetailPage() -> impl IntoView {
    let params = use_params_map();
    let review_id = Memo::new(move |_| parse_review_id(params.read().get("review_id").as_deref()));
    let loaded = RwSignal::new(None::<Result<ReviewDetail, String>>);

    #[cfg(feature = "hydrate")]
    {
        let config = use_context::<crate::config::ClientConfig>().unwrap_or_default();
        Effect::new(move || {
            let Some(id) = review_id.get() else {
                return;
            };
            loaded.set(None);
            let config = config.clone();
            leptos::task::spawn_local(async move {
                let result = crate::net::api::fetch_review(&config, id).await.map_err(|e| {
                    log::warn!("loading review {id} failed: {e}");
                    e.to_string()
                });
                loaded.set(Some(result));
            });
        });
    }

    view! {
        <section class="review-detail">
            {move || match (review_id.get(), loaded.get()) {
                (None, _) => view! { <p class="review-detail__error">"Review not found."</p> }.into_any(),
                (Some(_), None) => view! { <p class="review-detail__loading">"Loading review..."</p> }.into_any(),
                (Some(_), Some(Ok(detail))) => view! { <ReviewFindings detail/> }.into_any(),
                (Some(_), Some(Err(e))) => {
                    view! {
                        <p class="review-detail__error" role="alert">
                            {format!("Failed to load review details: {e}")}
                        </p>
                    }
                        .into_any()
                }
            }}
            <A href=HOME_PATH attr:class="review-detail__back">
                "Back to Dashboard"
            </A>
        </section>
    }
}
