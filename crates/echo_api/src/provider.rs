//! Provider component that shares the API client through Leptos context.

use leptos::prelude::*;

use crate::context::ApiContext;

/// Provider component that constructs the API client and provides it to
/// every descendant.
///
/// This component should wrap your application or the part of it that makes
/// backend calls. The client is built once at mount; hooks reach it with
/// `expect_context` instead of touching ambient global state.
///
/// # Example
///
/// ```rust,ignore
/// use echo_api::{resolve_base_url, ApiProvider};
///
/// #[component]
/// pub fn App() -> impl IntoView {
///     view! {
///         <ApiProvider base_url=resolve_base_url(option_env!("ECHO_API_BASE_URL"))>
///             <MyAppUI />
///         </ApiProvider>
///     }
/// }
/// ```
#[component]
pub fn ApiProvider(
    /// Base URL all operations are issued against.
    base_url: String,
    /// Child components.
    children: Children,
) -> impl IntoView {
    let ctx = ApiContext::new(base_url);
    provide_context(ctx);

    children()
}
