//! Demo page: one form, one typed echo call, both payloads rendered.

use leptos::prelude::*;

use echo_api::use_mutation;
use echo_types::EchoRequest;

use crate::components::JsonPanel;
use crate::parse::parse_numbers;

/// Build the request payload from the current input text.
fn derive_request(name: &str, numbers_text: &str) -> EchoRequest {
    EchoRequest {
        name: name.to_string(),
        numbers: parse_numbers(numbers_text),
    }
}

/// Demo page with the form card and the request/response panels.
#[component]
pub fn DemoPage() -> impl IntoView {
    let (send_echo, echo_state) = use_mutation::<EchoRequest>();

    let (name, set_name) = signal("Ada".to_string());
    let (numbers_text, set_numbers_text) = signal("1, 2, 3".to_string());

    let request = Memo::new(move |_| derive_request(&name.get(), &numbers_text.get()));

    let request_json = Signal::derive(move || {
        serde_json::to_string_pretty(&request.get()).unwrap_or_default()
    });
    let response_json = Signal::derive(move || match echo_state.get().data {
        Some(value) => serde_json::to_string_pretty(&value).unwrap_or_default(),
        None => "null".to_string(),
    });

    view! {
        <div class="space-y-6">
            <section class="rounded-lg border border-slate-800 bg-slate-900">
                <header class="border-b border-slate-800 px-4 py-3">
                    <h2 class="text-sm font-semibold text-slate-50">"Demo"</h2>
                    <p class="text-xs text-slate-400">
                        "A tiny end-to-end example: the backend declares one echo \
                         operation and the frontend makes a typed request against it."
                    </p>
                </header>
                <div class="space-y-4 p-4">
                    <div class="grid gap-3 md:grid-cols-2">
                        <label class="space-y-1.5">
                            <div class="text-xs font-medium text-slate-400">"Name"</div>
                            <input
                                class="h-9 w-full rounded-md border border-slate-800 bg-slate-950 px-3 text-sm"
                                prop:value=move || name.get()
                                on:input=move |ev| set_name.set(event_target_value(&ev))
                            />
                        </label>

                        <label class="space-y-1.5">
                            <div class="text-xs font-medium text-slate-400">"Numbers (comma-separated)"</div>
                            <input
                                class="h-9 w-full rounded-md border border-slate-800 bg-slate-950 px-3 text-sm"
                                prop:value=move || numbers_text.get()
                                on:input=move |ev| set_numbers_text.set(event_target_value(&ev))
                            />
                        </label>
                    </div>

                    <div class="flex items-center gap-3">
                        <button
                            class="rounded-md bg-slate-50 px-4 py-2 text-sm font-medium text-slate-950 hover:bg-slate-200 disabled:opacity-50"
                            disabled=move || echo_state.get().is_pending()
                            on:click=move |_| send_echo(request.get_untracked())
                        >
                            {move || if echo_state.get().is_pending() { "Sending…" } else { "Send" }}
                        </button>
                        {move || echo_state.get().error.map(|err| view! {
                            <div class="text-sm text-red-400">{err}</div>
                        })}
                    </div>
                </div>
            </section>

            <JsonPanel
                title="Request"
                description="Typed request payload (what gets POSTed)."
                content=request_json
            />

            <JsonPanel
                title="Response"
                description="Typed response payload."
                content=response_json
            />
        </div>
    }
}
