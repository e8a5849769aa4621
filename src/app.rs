//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{ParentRoute, Route, Router, Routes},
};

use crate::components::route_guard::RouteGuard;
use crate::config::ClientConfig;
use crate::pages::{
    code_review::CodeReviewPage, dashboard::DashboardPage, login::LoginPage, not_found::NotFoundPage,
    register::RegisterPage, review_detail::ReviewDetailPage,
};
use crate::state::session::{SessionStore, provide_session};
use crate::util::storage::BrowserStorage;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Owns the session for the lifetime of the page and gates every protected
/// route behind `RouteGuard`.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    provide_context(ClientConfig::from_build_env());
    let session = provide_session(SessionStore::new(BrowserStorage));

    // Effects only run in the browser, so server renders stay pending and the
    // guard never redirects before the persisted session has been read.
    Effect::new(move || session.initialize());

    view! {
        <Stylesheet id="leptos" href="/pkg/review-client.css"/>
        <Title text="CodeReview AI"/>

        <Router>
            <Routes fallback=|| view! { <NotFoundPage/> }>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <ParentRoute path=StaticSegment("") view=RouteGuard>
                    <Route path=StaticSegment("") view=DashboardPage/>
                    <Route path=StaticSegment("code-review") view=CodeReviewPage/>
                    <Route path=(StaticSegment("review"), ParamSegment("review_id")) view=ReviewDetailPage/>
                </ParentRoute>
            </Routes>
        </Router>
    }
}
