//! # Echo API client
//!
//! Typed HTTP client layer for the echo demo with Leptos integration.
//!
//! The layer has two halves: a plain client ([`ApiContext`]) that issues one
//! POST per [`ApiOperation`](echo_types::ApiOperation) and decodes the
//! declared response type, and a reactive binding ([`use_mutation`]) that
//! exposes the call as a trigger plus a pending/data/error state signal.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use leptos::prelude::*;
//! use echo_api::{resolve_base_url, use_mutation, ApiProvider};
//! use echo_types::EchoRequest;
//!
//! #[component]
//! fn App() -> impl IntoView {
//!     let base_url = resolve_base_url(option_env!("ECHO_API_BASE_URL"));
//!
//!     view! {
//!         <ApiProvider base_url=base_url>
//!             <SendButton/>
//!         </ApiProvider>
//!     }
//! }
//!
//! #[component]
//! fn SendButton() -> impl IntoView {
//!     let (send, state) = use_mutation::<EchoRequest>();
//!
//!     view! {
//!         <button
//!             disabled=move || state.get().is_pending()
//!             on:click=move |_| send(EchoRequest::default())
//!         >
//!             "Send"
//!         </button>
//!     }
//! }
//! ```

mod config;
mod context;
mod error;
mod hooks;
mod provider;

pub use config::{resolve_base_url, DEFAULT_BASE_URL};
pub use context::ApiContext;
pub use error::ApiError;
pub use hooks::{use_api, use_mutation, UseMutationState};
pub use provider::ApiProvider;
