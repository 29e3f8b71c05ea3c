//! Read-only card rendering a pretty-printed JSON payload.

use leptos::prelude::*;

/// Card with a title, a description line, and a `<pre>` block of JSON text.
#[component]
pub fn JsonPanel(
    /// Card title.
    title: &'static str,
    /// Card description line.
    description: &'static str,
    /// JSON text to render.
    #[prop(into)]
    content: Signal<String>,
) -> impl IntoView {
    view! {
        <section class="rounded-lg border border-slate-800 bg-slate-900">
            <header class="border-b border-slate-800 px-4 py-3">
                <h2 class="text-sm font-semibold text-slate-50">{title}</h2>
                <p class="text-xs text-slate-400">{description}</p>
            </header>
            <div class="p-4">
                <pre class="overflow-x-auto rounded-md border border-slate-800 bg-slate-950 p-3 text-xs leading-relaxed text-slate-200">
                    {move || content.get()}
                </pre>
            </div>
        </section>
    }
}
