//! Form Fields
//!
//! Labelled inputs shared by the booking, video call and login forms.

use leptos::*;

const INPUT_CLASS: &str = "w-full px-5 py-4 bg-slate-50 dark:bg-slate-900 border-2 \
    border-slate-100 dark:border-slate-800 rounded-2xl outline-none focus:border-blue-500 \
    transition-all font-bold text-slate-900 dark:text-white disabled:opacity-60";

#[component]
pub fn FieldLabel(label: &'static str) -> impl IntoView {
    view! {
        <label class="text-xs font-black text-slate-600 dark:text-slate-300 uppercase tracking-widest">
            {label}
        </label>
    }
}

/// Single-line input
#[component]
pub fn TextField(
    label: &'static str,
    #[prop(default = "text")]
    kind: &'static str,
    #[prop(default = "")]
    placeholder: &'static str,
    #[prop(into)]
    value: Signal<String>,
    #[prop(into)]
    on_input: Callback<String>,
    #[prop(into, default = false.into())]
    disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <div class="space-y-2">
            <FieldLabel label=label />
            <input
                type=kind
                placeholder=placeholder
                class=INPUT_CLASS
                prop:value=move || value.get()
                prop:disabled=move || disabled.get()
                on:input=move |ev| on_input.call(event_target_value(&ev))
            />
        </div>
    }
}

/// Dropdown of `(value, label)` options with an empty prompt first
#[component]
pub fn SelectField(
    label: &'static str,
    prompt: &'static str,
    #[prop(into)]
    options: Signal<Vec<(String, String)>>,
    #[prop(into)]
    value: Signal<String>,
    #[prop(into)]
    on_change: Callback<String>,
    #[prop(into, default = false.into())]
    disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <div class="space-y-2">
            <FieldLabel label=label />
            <select
                class=format!("{} appearance-none cursor-pointer", INPUT_CLASS)
                prop:disabled=move || disabled.get()
                on:change=move |ev| on_change.call(event_target_value(&ev))
            >
                <option value="" selected=move || value.get().is_empty()>{prompt}</option>
                {move || {
                    options.get().into_iter().map(|(v, text)| {
                        let selected = value.get() == v;
                        view! { <option value=v selected=selected>{text}</option> }
                    }).collect_view()
                }}
            </select>
        </div>
    }
}

/// Multi-line input
#[component]
pub fn TextArea(
    label: &'static str,
    #[prop(default = "")]
    placeholder: &'static str,
    #[prop(into)]
    value: Signal<String>,
    #[prop(into)]
    on_input: Callback<String>,
    #[prop(into, default = false.into())]
    disabled: Signal<bool>,
) -> impl IntoView {
    view! {
        <div class="space-y-2">
            <FieldLabel label=label />
            <textarea
                rows=4
                placeholder=placeholder
                class=format!("{} resize-none", INPUT_CLASS)
                prop:value=move || value.get()
                prop:disabled=move || disabled.get()
                on:input=move |ev| on_input.call(event_target_value(&ev))
            />
        </div>
    }
}
