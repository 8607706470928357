//! Modal Shell
//!
//! Backdrop, card and close button around modal content.

use leptos::*;

#[component]
pub fn Modal(
    title: String,
    #[prop(optional)]
    subtitle: Option<String>,
    #[prop(into)]
    on_close: Callback<()>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class="fixed inset-0 z-[100] flex items-center justify-center p-4 bg-black/70 backdrop-blur-md"
            on:click=move |_| on_close.call(())
        >
            <div
                class="bg-white dark:bg-slate-900 rounded-[2.5rem] shadow-2xl max-w-2xl w-full max-h-[90vh] overflow-y-auto"
                on:click=|ev| ev.stop_propagation()
            >
                <div class="bg-gradient-to-r from-blue-700 to-indigo-800 text-white p-6 sm:p-10 rounded-t-[2.5rem] relative">
                    <button
                        class="absolute top-6 right-6 p-2 rounded-xl bg-white/10 hover:bg-white/20"
                        aria-label="Close"
                        on:click=move |_| on_close.call(())
                    >
                        "✕"
                    </button>
                    {subtitle.map(|s| view! {
                        <span class="text-xs font-black uppercase tracking-[0.2em] text-blue-200">{s}</span>
                    })}
                    <h2 class="text-xl sm:text-3xl font-black tracking-tight">{title}</h2>
                </div>
                <div class="p-6 sm:p-10">
                    {children()}
                </div>
            </div>
        </div>
    }
}
