//! Application root component.

use leptos::prelude::*;
use leptos_router::components::Router;

use echo_api::{resolve_base_url, ApiProvider};

use crate::layout::AppShell;

/// Root application component.
///
/// Resolves the backend base URL once at startup and hands it to the
/// provider; everything below reaches the client through context.
#[component]
pub fn App() -> impl IntoView {
    let base_url = resolve_base_url(option_env!("ECHO_API_BASE_URL"));

    view! {
        <ApiProvider base_url=base_url>
            <Router>
                <AppShell/>
            </Router>
        </ApiProvider>
    }
}
