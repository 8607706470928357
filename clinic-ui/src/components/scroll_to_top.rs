//! Scroll To Top Button

use leptos::*;

/// Pixels scrolled before the button appears
const SHOW_AFTER_PX: f64 = 500.0;

#[component]
pub fn ScrollToTop() -> impl IntoView {
    let (visible, set_visible) = create_signal(false);

    let handle = window_event_listener(ev::scroll, move |_| {
        let y = window().scroll_y().unwrap_or(0.0);
        set_visible.set(y > SHOW_AFTER_PX);
    });
    on_cleanup(move || handle.remove());

    let scroll_up = move |_| {
        let options = web_sys::ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        window().scroll_to_with_scroll_to_options(&options);
    };

    view! {
        <Show when=move || visible.get()>
            <button
                on:click=scroll_up
                aria-label="Scroll to top"
                class="fixed bottom-8 right-8 z-50 p-4 rounded-2xl bg-white dark:bg-slate-800 shadow-2xl text-blue-600 dark:text-blue-400 font-black"
            >
                "↑"
            </button>
        </Show>
    }
}
