//! Video Call Modal
//!
//! Tele-consultation request. Shows "Request Sent!" once the emails are out
//! and closes itself a few seconds later.

use leptos::*;

use crate::api;
use crate::components::field::{SelectField, TextArea, TextField};
use crate::components::loading::InlineLoading;
use crate::components::modal::Modal;
use crate::state::booking::{Blocked, FormState, Phase, VideoCallFields, VIDEO_CALL_CLOSE_MS};
use crate::state::timer::TimerSlot;
use crate::state::GlobalState;

#[component]
pub fn VideoCallModal() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let form = create_rw_signal(FormState::<VideoCallFields>::default());
    let slots = create_rw_signal(Vec::<(String, String)>::new());
    let today = chrono::Local::now().format("%Y-%m-%d").to_string();

    create_effect(move |_| {
        spawn_local(async move {
            match api::fetch_slots().await {
                Ok(list) => slots.set(
                    list.video_call
                        .into_iter()
                        .map(|s| (s.value, s.label))
                        .collect(),
                ),
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to fetch slots: {}", e).into());
                }
            }
        });
    });

    let show = state.show_video_call;
    let close = Callback::new(move |_: ()| show.set(false));

    let sending = Signal::derive(move || form.with(|f| f.is_sending()));
    let confirmed = create_memo(move |_| form.with(|f| *f.phase() == Phase::Confirmed));
    let edit = move |apply: fn(&mut VideoCallFields, String)| {
        Callback::new(move |value: String| {
            form.update(|f| {
                f.edit(|fields| apply(fields, value));
            })
        })
    };
    let read = move |get: fn(&VideoCallFields) -> String| {
        Signal::derive(move || form.with(|f| get(f.fields())))
    };

    let preferred_date = read(|f| f.preferred_date.clone());
    let set_preferred_date = edit(|f, v| f.preferred_date = v);

    let close_timer = TimerSlot::new();

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        let mut started = None;
        form.update(|f| started = Some(f.begin_submit(api::new_idempotency_key)));
        let (fields, key) = match started {
            Some(Ok(body)) => body,
            Some(Err(Blocked::Invalid(problem))) => {
                state.show_error(&problem);
                return;
            }
            _ => return,
        };

        spawn_local(async move {
            match api::submit_video_call(&fields, &key).await {
                Ok(_) => {
                    form.try_update(|f| f.succeed());
                    close_timer.schedule(VIDEO_CALL_CLOSE_MS, move || show.set(false));
                }
                Err(e) => {
                    form.try_update(|f| {
                        f.fail(e.to_string());
                        if e.is_key_reused() {
                            f.forget_key();
                        }
                    });
                    state.show_failure(&e);
                }
            }
        });
    };

    view! {
        <Modal
            title="Tele-Consultation".to_string()
            subtitle="Virtual Clinic".to_string()
            on_close=close
        >
            {move || if confirmed.get() {
                view! {
                    <div class="py-10 text-center space-y-4">
                        <h2 class="text-4xl font-black text-slate-900 dark:text-white">"Request Sent!"</h2>
                        <p class="text-xl text-slate-600 dark:text-slate-400 font-medium">
                            "Dr. Arijit will join you at the scheduled time."
                        </p>
                    </div>
                }.into_view()
            } else {
                let today = today.clone();
                view! {
                    <form on:submit=on_submit.clone() class="space-y-6">
                        <TextField
                            label="Full Name"
                            value=read(|f| f.name.clone())
                            on_input=edit(|f, v| f.name = v)
                            disabled=sending
                        />
                        <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                            <TextField
                                label="Email"
                                kind="email"
                                value=read(|f| f.email.clone())
                                on_input=edit(|f, v| f.email = v)
                                disabled=sending
                            />
                            <TextField
                                label="Phone"
                                kind="tel"
                                placeholder="+91"
                                value=read(|f| f.phone.clone())
                                on_input=edit(|f, v| f.phone = v)
                                disabled=sending
                            />
                        </div>
                        <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                            <div class="space-y-2">
                                <label class="text-xs font-black text-slate-600 dark:text-slate-300 uppercase tracking-widest">
                                    "Preferred Date"
                                </label>
                                <input
                                    type="date"
                                    min=today
                                    class="w-full px-5 py-4 bg-slate-50 dark:bg-slate-900 border-2 border-slate-100 dark:border-slate-800 rounded-2xl font-bold text-slate-900 dark:text-white"
                                    prop:value=move || preferred_date.get()
                                    prop:disabled=move || sending.get()
                                    on:input=move |ev| set_preferred_date.call(event_target_value(&ev))
                                />
                            </div>
                            <SelectField
                                label="Preferred Time"
                                prompt="Select a slot"
                                options=slots
                                value=read(|f| f.preferred_time.clone())
                                on_change=edit(|f, v| f.preferred_time = v)
                                disabled=sending
                            />
                        </div>
                        <TextArea
                            label="Reason for Consultation"
                            placeholder="Briefly describe your concern..."
                            value=read(|f| f.reason.clone())
                            on_input=edit(|f, v| f.reason = v)
                            disabled=sending
                        />
                        {move || form.with(|f| match f.phase() {
                            Phase::Failed(reason) => view! {
                                <p class="text-sm font-bold text-rose-600">{reason.clone()}</p>
                            }.into_view(),
                            _ => view! {}.into_view(),
                        })}
                        <button
                            type="submit"
                            disabled=move || sending.get()
                            class="w-full bg-gradient-to-r from-blue-700 to-indigo-800 disabled:opacity-60 text-white font-black py-5 rounded-3xl uppercase tracking-[0.2em] flex items-center justify-center gap-3"
                        >
                            {move || if sending.get() {
                                view! { <InlineLoading /> <span>"Sending..."</span> }.into_view()
                            } else {
                                view! { <span>"Request Video Call"</span> }.into_view()
                            }}
                        </button>
                        <p class="text-xs text-slate-500 dark:text-slate-400">
                            "Book 24 hours in advance. For emergencies within 24 hours, message on WhatsApp."
                        </p>
                    </form>
                }.into_view()
            }}
        </Modal>
    }
}
