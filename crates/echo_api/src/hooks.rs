//! Reactive hooks binding API operations to Leptos state.

use leptos::prelude::*;

use echo_types::ApiOperation;

use crate::context::ApiContext;

/// Hook to access the [`ApiContext`] directly.
///
/// Most components should use [`use_mutation`] instead.
///
/// # Panics
///
/// Panics if called outside of an `ApiProvider` context.
pub fn use_api() -> ApiContext {
    expect_context::<ApiContext>()
}

/// Hook to send an operation and track its state reactively.
///
/// Returns a tuple of:
/// - A trigger function that dispatches the operation
/// - A reactive signal with the current state (pending, data, error)
///
/// The trigger sets the pending flag synchronously and resolves it when the
/// call settles. Prior data and error persist through a new cycle until the
/// settle overwrites them; a failure leaves the last successful data in
/// place. Concurrent triggers are not queued or cancelled — the later settle
/// wins.
///
/// # Panics
///
/// Panics if called outside of an `ApiProvider` context.
///
/// # Example
///
/// ```rust,ignore
/// use echo_api::use_mutation;
/// use echo_types::EchoRequest;
///
/// #[component]
/// fn SendForm() -> impl IntoView {
///     let (send, state) = use_mutation::<EchoRequest>();
///
///     view! {
///         <button
///             disabled=move || state.get().is_pending()
///             on:click=move |_| send(EchoRequest::default())
///         >
///             {move || if state.get().is_pending() { "Sending…" } else { "Send" }}
///         </button>
///     }
/// }
/// ```
pub fn use_mutation<Op>() -> (
    impl Fn(Op) + Clone,
    Signal<UseMutationState<Op::Response>>,
)
where
    Op: ApiOperation,
{
    let ctx = expect_context::<ApiContext>();
    let state = RwSignal::new(UseMutationState::default());

    let trigger = move |operation: Op| {
        #[cfg(target_arch = "wasm32")]
        leptos::logging::log!(
            "[use_mutation] dispatching {} to {}",
            Op::operation_name(),
            Op::PATH
        );

        state.update(|s| s.begin());

        let ctx = ctx.clone();
        leptos::task::spawn_local(async move {
            let outcome = ctx
                .execute(&operation)
                .await
                .map_err(|err| err.to_string());

            // The signal may be disposed if the owning component unmounted
            // while the call was in flight.
            state.try_update(|s| s.resolve(outcome));
        });
    };

    (trigger, state.into())
}

/// State for one mutation cycle.
#[derive(Clone, Debug)]
pub struct UseMutationState<T> {
    /// Whether the call is currently in flight.
    pub is_pending: bool,
    /// The decoded response of the last successful call.
    pub data: Option<T>,
    /// Error message of the last failed call.
    pub error: Option<String>,
}

impl<T> Default for UseMutationState<T> {
    fn default() -> Self {
        Self {
            is_pending: false,
            data: None,
            error: None,
        }
    }
}

impl<T> UseMutationState<T> {
    /// Returns true while the call is in flight.
    pub fn is_pending(&self) -> bool {
        self.is_pending
    }

    /// Returns true if the last settled call succeeded.
    pub fn is_success(&self) -> bool {
        self.data.is_some()
    }

    /// Returns true if the last settled call failed.
    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }

    fn begin(&mut self) {
        self.is_pending = true;
    }

    fn resolve(&mut self, outcome: Result<T, String>) {
        self.is_pending = false;
        match outcome {
            Ok(data) => {
                self.data = Some(data);
                self.error = None;
            }
            Err(error) => self.error = Some(error),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_is_idle() {
        let state = UseMutationState::<i32>::default();

        assert!(!state.is_pending());
        assert!(!state.is_success());
        assert!(!state.is_error());
    }

    #[test]
    fn test_begin_sets_pending_and_keeps_prior_result() {
        let mut state = UseMutationState::<i32>::default();
        state.begin();
        state.resolve(Ok(7));

        state.begin();
        assert!(state.is_pending());
        assert_eq!(state.data, Some(7));
    }

    #[test]
    fn test_success_replaces_data_and_clears_error() {
        let mut state = UseMutationState::<i32>::default();
        state.begin();
        state.resolve(Err("boom".to_string()));

        state.begin();
        state.resolve(Ok(42));

        assert!(!state.is_pending());
        assert_eq!(state.data, Some(42));
        assert_eq!(state.error, None);
    }

    #[test]
    fn test_failure_sets_error_and_keeps_prior_data() {
        let mut state = UseMutationState::<i32>::default();
        state.begin();
        state.resolve(Ok(42));

        state.begin();
        state.resolve(Err("boom".to_string()));

        assert!(!state.is_pending());
        assert_eq!(state.data, Some(42));
        assert_eq!(state.error, Some("boom".to_string()));
    }

    #[test]
    fn test_pending_clears_on_settle_regardless_of_outcome() {
        let mut state = UseMutationState::<i32>::default();

        state.begin();
        state.resolve(Ok(1));
        assert!(!state.is_pending());

        state.begin();
        state.resolve(Err("nope".to_string()));
        assert!(!state.is_pending());
    }
}
