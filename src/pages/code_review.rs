//! Code submission page. Analysis itself runs in the backend service.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered behind the route guard, so the signed-in profile is available and
//! its id is attached to the submission for the user's review history.

#[cfg(test)]
#[path = "code_review_test.rs"]
mod code_review_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::config::{ClientConfig, HOME_PATH};
use crate::net::types::{AnalysisResult, AnalyzeRequest, quality_label};
use crate::state::session::use_session;

/// Selectable languages as `(value sent to the backend, label)`.
pub const LANGUAGES: [(&str, &str); 10] = [
    ("javascript", "JavaScript"),
    ("python", "Python"),
    ("java", "Java"),
    ("csharp", "C#"),
    ("cpp", "C++"),
    ("php", "PHP"),
    ("ruby", "Ruby"),
    ("go", "Go"),
    ("swift", "Swift"),
    ("typescript", "TypeScript"),
];

pub const DEFAULT_LANGUAGE: &str = "javascript";

pub(crate) const EMPTY_CODE: &str = "Please enter some code to analyze";
pub(crate) const UNKNOWN_LANGUAGE: &str = "Please choose a supported language";

/// Build the analyze request. The snippet is sent as typed; only a snippet
/// that is entirely whitespace is refused.
pub(crate) fn validate_submission(
    language: &str,
    code: &str,
    user_id: Option<i64>,
) -> Result<AnalyzeRequest, &'static str> {
    if code.trim().is_empty() {
        return Err(EMPTY_CODE);
    }
    if !LANGUAGES.iter().any(|(value, _)| *value == language) {
        return Err(UNKNOWN_LANGUAGE);
    }
    Ok(AnalyzeRequest { language: language.to_owned(), code: code.to_owned(), user_id })
}

/// Rendered findings line, e.g. `"Line 3 [high]: null deref"`.
pub(crate) fn finding_line(line: i64, severity: &str, message: &str) -> String {
    format!("Line {line} [{severity}]: {message}")
}

#[component]
fn AnalysisResults(result: AnalysisResult) -> impl IntoView {
    let score = result.quality_score;
    view! {
        <div class="code-review__results">
            <h2>{format!("Quality score: {score}/100 ({})", quality_label(score))}</h2>
            <h3>{format!("Issues ({})", result.bugs.len())}</h3>
            <ul class="code-review__bugs">
                {result
                    .bugs
                    .into_iter()
                    .map(|bug| {
                        view! {
                            <li class=format!("finding finding--{}", bug.severity)>
                                <p>{finding_line(bug.line, &bug.severity, &bug.message)}</p>
                                <p class="finding__suggestion">{bug.suggestion}</p>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
            <h3>"Suggestions"</h3>
            <ul class="code-review__suggestions">
                {result.suggestions.into_iter().map(|s| view! { <li>{s}</li> }).collect_view()}
            </ul>
        </div>
    }
}

#[component]
pub fn CodeReviewPage() -> impl IntoView {
    let config = use_context::<ClientConfig>().unwrap_or_default();
    let session = use_session();

    let language = RwSignal::new(DEFAULT_LANGUAGE.to_owned());
    let code = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let result = RwSignal::new(None::<AnalysisResult>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        error.set(String::new());
        let user_id = session.snapshot_untracked().profile.map(|u| u.id);
        let request = match validate_submission(&language.get_untracked(), &code.get_untracked(), user_id) {
            Ok(request) => request,
            Err(msg) => {
                error.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        result.set(None);

        #[cfg(feature = "hydrate")]
        {
            let config = config.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::analyze_code(&config, &request).await {
                    Ok(analysis) => result.set(Some(analysis)),
                    Err(e) => {
                        log::warn!("analysis failed: {e}");
                        error.set(format!("An error occurred during analysis: {e}"));
                    }
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&config, request);
        }
    };

    view! {
        <section class="code-review">
            <h1>"Code Review"</h1>
            <Show when=move || !error.get().is_empty()>
                <p class="code-review__error" role="alert">{move || error.get()}</p>
            </Show>
            <form class="code-review__form" on:submit=on_submit>
                <select
                    class="code-review__language"
                    prop:value=move || language.get()
                    on:change=move |ev| language.set(event_target_value(&ev))
                >
                    {LANGUAGES
                        .into_iter()
                        .map(|(value, label)| view! { <option value=value>{label}</option> })
                        .collect_view()}
                </select>
                <textarea
                    class="code-review__code"
                    rows="16"
                    placeholder="Paste your code here..."
                    prop:value=move || code.get()
                    on:input=move |ev| code.set(event_target_value(&ev))
                ></textarea>
                <button class="code-review__submit" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Analyzing..." } else { "Analyze Code" }}
                </button>
            </form>
            {move || result.get().map(|analysis| view! { <AnalysisResults result=analysis/> })}
            <A href=HOME_PATH attr:class="code-review__back">
                "Back to Dashboard"
            </A>
        </section>
    }
}
