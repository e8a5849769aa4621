//! Navigation chrome around the active protected view.

use leptos::prelude::*;
use leptos_router::components::Outlet;

use crate::components::navbar::Navbar;

#[component]
pub fn ViewShell() -> impl IntoView {
    view! {
        <div class="view-shell">
            <Navbar/>
            <main class="view-shell__main">
                <Outlet/>
            </main>
        </div>
    }
}
