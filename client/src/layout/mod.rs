//! Application layout components.

mod top_bar;

pub use top_bar::TopBar;

use leptos::prelude::*;

use crate::pages::MainContent;

/// Root layout: top bar with navigation chrome above the routed content.
#[component]
pub fn AppShell() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-slate-950 text-slate-50 flex flex-col">
            <TopBar/>
            <MainContent/>
        </div>
    }
}
