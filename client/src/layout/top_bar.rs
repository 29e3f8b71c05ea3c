//! Top navigation bar component.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

/// Header bar with the app title and navigation links.
#[component]
pub fn TopBar() -> impl IntoView {
    view! {
        <header class="border-b border-slate-800">
            <div class="mx-auto flex w-full max-w-5xl items-center gap-2 px-6 py-4">
                <div class="mr-3 text-sm font-semibold tracking-tight">"Echo Demo"</div>
                <NavLink label="Demo" href="/" />
            </div>
        </header>
    }
}

/// Individual navigation link using leptos_router's A component.
#[component]
fn NavLink(label: &'static str, href: &'static str) -> impl IntoView {
    let location = use_location();
    let is_active = move || location.pathname.get() == href;

    view! {
        <A
            href=href
            attr:class=move || if is_active() {
                "rounded-md bg-slate-800 px-3 py-2 text-sm text-slate-50 no-underline"
            } else {
                "rounded-md px-3 py-2 text-sm text-slate-400 hover:bg-slate-900 hover:text-slate-50 no-underline"
            }
        >
            {label}
        </A>
    }
}
