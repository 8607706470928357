//! Navigation Component
//!
//! Header with brand, section links, theme toggle and the patient login or
//! dashboard entry point.

use leptos::*;
use leptos_router::*;

use crate::state::theme::Theme;
use crate::state::GlobalState;

/// Navigation header component
#[component]
pub fn Nav() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let (open, set_open) = create_signal(false);

    let theme = state.theme;
    let show_login = state.show_login;
    let clinic = state.clinic;

    let logged_in = move || state.is_logged_in();
    let nav = move || clinic.get().map(|info| info.nav).unwrap_or_default();
    let toggle_theme = move |_| state.toggle_theme();

    view! {
        <nav class="fixed top-0 left-0 right-0 z-50 bg-white/90 dark:bg-slate-900/90 backdrop-blur-md border-b border-slate-200 dark:border-slate-800">
            <div class="max-w-7xl mx-auto px-4">
                <div class="flex items-center justify-between h-20">
                    <a href="#home" class="text-lg sm:text-2xl font-black tracking-tight text-slate-900 dark:text-white">
                        "Dr. " <span class="bg-gradient-to-r from-blue-400 to-indigo-400 bg-clip-text text-transparent">"Arijit"</span> " Sen"
                    </a>

                    <div class="hidden xl:flex items-center space-x-1">
                        {move || nav().into_iter().map(|item| view! {
                            <a
                                href=item.href
                                class="px-4 py-2 text-[10px] font-black rounded-full uppercase tracking-widest text-slate-600 dark:text-slate-300 hover:text-blue-600"
                            >
                                {item.label}
                            </a>
                        }).collect_view()}
                    </div>

                    <div class="flex items-center gap-4">
                        <button
                            on:click=toggle_theme
                            aria-label="Toggle theme"
                            class="p-2.5 rounded-xl bg-slate-100 dark:bg-slate-800 text-slate-600 dark:text-slate-300"
                        >
                            {move || if theme.get() == Theme::Dark { "☀" } else { "☾" }}
                        </button>

                        {move || if logged_in() {
                            view! {
                                <A href="/dashboard" class="font-black text-[10px] uppercase tracking-widest text-slate-900 dark:text-white hover:text-blue-600">
                                    "Dashboard"
                                </A>
                            }.into_view()
                        } else {
                            view! {
                                <button
                                    on:click=move |_| show_login.set(true)
                                    class="font-black text-[10px] tracking-widest uppercase text-slate-900 dark:text-white hover:text-blue-600"
                                >
                                    "Login"
                                </button>
                            }.into_view()
                        }}

                        <a
                            href="#appointment"
                            class="hidden sm:inline-block font-black py-3 px-6 rounded-xl bg-slate-900 dark:bg-blue-600 text-white"
                        >
                            "Book Now"
                        </a>

                        <button
                            class="xl:hidden p-2.5 rounded-xl bg-slate-100 dark:bg-slate-800 text-slate-900 dark:text-white"
                            aria-label="Menu"
                            on:click=move |_| set_open.update(|o| *o = !*o)
                        >
                            "☰"
                        </button>
                    </div>
                </div>

                <Show when=move || open.get()>
                    <div class="xl:hidden pb-6 flex flex-col space-y-2">
                        {move || nav().into_iter().map(|item| view! {
                            <a
                                href=item.href
                                on:click=move |_| set_open.set(false)
                                class="px-4 py-3 rounded-xl font-black uppercase tracking-widest text-sm text-slate-700 dark:text-slate-200"
                            >
                                {item.label}
                            </a>
                        }).collect_view()}
                    </div>
                </Show>
            </div>
        </nav>
    }
}
