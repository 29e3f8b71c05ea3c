//! Application pages (routes).

mod demo;

pub use demo::DemoPage;

use leptos::prelude::*;
use leptos_router::components::{Route, Routes};
use leptos_router::path;

/// Main content area with route definitions.
#[component]
pub fn MainContent() -> impl IntoView {
    view! {
        <main class="mx-auto w-full max-w-5xl flex-1 px-6 py-8">
            <Routes fallback=|| "Not Found">
                <Route path=path!("/") view=DemoPage />
            </Routes>
        </main>
    }
}
