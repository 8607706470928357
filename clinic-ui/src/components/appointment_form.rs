//! Appointment Form Component
//!
//! Weekend booking form. The submit button stays disabled while the API
//! sends the notification emails; a confirmation banner replaces it for a
//! few seconds on success, and on failure the fields stay filled in.

use leptos::*;

use crate::api;
use crate::components::field::{FieldLabel, SelectField, TextArea, TextField};
use crate::components::loading::InlineLoading;
use crate::state::booking::{AppointmentFields, Blocked, FormState, Mode, Phase, CONFIRMATION_MS};
use crate::state::timer::TimerSlot;
use crate::state::GlobalState;

#[component]
pub fn AppointmentForm() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let form = create_rw_signal(FormState::<AppointmentFields>::default());
    let dates = create_rw_signal(Vec::<(String, String)>::new());
    let slots = create_rw_signal(Vec::<(String, String)>::new());

    // Date and slot options on mount
    create_effect(move |_| {
        spawn_local(async move {
            match api::fetch_weekend_dates().await {
                Ok(list) => dates.set(list.into_iter().map(|d| (d.value, d.label)).collect()),
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to fetch dates: {}", e).into());
                }
            }
            match api::fetch_slots().await {
                Ok(list) => slots.set(list.clinic.into_iter().map(|s| (s.clone(), s)).collect()),
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to fetch slots: {}", e).into());
                }
            }
        });
    });

    let sending = Signal::derive(move || form.with(|f| f.is_sending()));
    let edit = move |apply: fn(&mut AppointmentFields, String)| {
        Callback::new(move |value: String| {
            form.update(|f| {
                f.edit(|fields| apply(fields, value));
            })
        })
    };
    let read = move |get: fn(&AppointmentFields) -> String| {
        Signal::derive(move || form.with(|f| get(f.fields())))
    };

    let dismiss_timer = TimerSlot::new();

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
            match api::submit_appointment(&fields, &key).await {
                Ok(response) => {
                    form.try_update(|f| f.succeed());
                    let ms = u32::try_from(response.confirmation_display_secs * 1000)
                        .unwrap_or(CONFIRMATION_MS);
                    dismiss_timer.schedule(ms, move || {
                        form.try_update(|f| f.dismiss_confirmation());
                    });
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
        <section class="py-24 bg-gradient-to-b from-white via-slate-50 to-white dark:from-slate-900 dark:via-slate-950 dark:to-slate-900">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <Show when=move || form.with(|f| *f.phase() == Phase::Confirmed)>
                    <div class="mb-12 bg-gradient-to-r from-green-500 to-emerald-600 text-white rounded-3xl p-8 shadow-2xl">
                        <h3 class="text-3xl font-black mb-2 tracking-tight">"Appointment Confirmed!"</h3>
                        <p class="text-green-50 text-lg">
                            "We've received your booking request. Dr. Arijit will contact you shortly to confirm."
                        </p>
                    </div>
                </Show>

                <div class="grid grid-cols-1 lg:grid-cols-2 gap-16 items-start">
                    <Availability />

                    <form
                        on:submit=on_submit
                        class="bg-white dark:bg-slate-800/40 rounded-[3rem] shadow-2xl p-6 sm:p-10 space-y-8"
                    >
                        <h3 class="text-xl sm:text-3xl font-black tracking-tight text-slate-900 dark:text-white">
                            "Secure Booking"
                        </h3>

                        <TextField
                            label="Full Patient Name"
                            placeholder="John Doe"
                            value=read(|f| f.name.clone())
                            on_input=edit(|f, v| f.name = v)
                            disabled=sending
                        />

                        <div class="grid grid-cols-1 md:grid-cols-2 gap-8">
                            <TextField
                                label="Email"
                                kind="email"
                                placeholder="john@example.com"
                                value=read(|f| f.email.clone())
                                on_input=edit(|f, v| f.email = v)
                                disabled=sending
                            />
                            <TextField
                                label="Contact Number"
                                kind="tel"
                                placeholder="+91"
                                value=read(|f| f.phone.clone())
                                on_input=edit(|f, v| f.phone = v)
                                disabled=sending
                            />
                        </div>

                        <div class="grid grid-cols-1 md:grid-cols-2 gap-8">
                            <SelectField
                                label="Consult Date"
                                prompt="Select Sunday/Saturday"
                                options=dates
                                value=read(|f| f.date.clone())
                                on_change=edit(|f, v| f.date = v)
                                disabled=sending
                            />
                            <SelectField
                                label="Time Slot"
                                prompt="Choose Duration"
                                options=slots
                                value=read(|f| f.time_slot.clone())
                                on_change=edit(|f, v| f.time_slot = v)
                                disabled=sending
                            />
                        </div>

                        <div class="space-y-2">
                            <FieldLabel label="Consultation Mode" />
                            <div class="grid grid-cols-2 gap-4">
                                {Mode::ALL.into_iter().map(|mode| view! {
                                    <ModeButton mode=mode form=form />
                                }).collect_view()}
                            </div>
                        </div>

                        <TextArea
                            label="Additional Notes"
                            placeholder="Describe your symptoms briefly..."
                            value=read(|f| f.message.clone())
                            on_input=edit(|f, v| f.message = v)
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
                            class="w-full bg-gradient-to-r from-blue-600 to-purple-600 disabled:from-slate-500
                                   disabled:to-slate-500 disabled:cursor-not-allowed text-white font-black
                                   py-5 px-8 rounded-3xl shadow-2xl text-lg uppercase tracking-[0.2em]
                                   flex items-center justify-center gap-3"
                        >
                            {move || if sending.get() {
                                view! {
                                    <InlineLoading />
                                    <span>"Sending..."</span>
                                }.into_view()
                            } else {
                                view! { <span>"Confirm Appointment"</span> }.into_view()
                            }}
                        </button>
                    </form>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ModeButton(mode: Mode, form: RwSignal<FormState<AppointmentFields>>) -> impl IntoView {
    let selected = move || form.with(|f| f.fields().mode == Some(mode));

    view! {
        <button
            type="button"
            disabled=move || form.with(|f| f.is_sending())
            on:click=move |_| form.update(|f| {
                f.edit(|fields| fields.mode = Some(mode));
            })
            class=move || {
                let base = "py-4 rounded-2xl font-black text-sm uppercase tracking-widest transition-all border-2";
                if selected() {
                    format!("{} bg-blue-600 text-white border-blue-600 shadow-lg", base)
                } else {
                    format!("{} bg-slate-50 dark:bg-slate-900 text-slate-500 border-slate-100 dark:border-slate-800 hover:border-blue-200", base)
                }
            }
        >
            {mode.label()}
        </button>
    }
}

/// Clinic hours and map beside the form
#[component]
fn Availability() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <div class="space-y-10">
            <h2 class="text-3xl md:text-6xl font-black text-slate-900 dark:text-white leading-tight">
                "Schedule " <span class="text-blue-600 dark:text-blue-400">"Your Visit"</span>
            </h2>
            <p class="text-xl text-slate-600 dark:text-slate-400 leading-relaxed max-w-lg">
                "Book your consultation with Dr. Arijit for expert medical care and personalized treatment plans."
            </p>
            {move || state.clinic.get().map(|info| {
                let clinic = info.clinic;
                view! {
                    <div class="bg-blue-50 dark:bg-slate-800 rounded-[2rem] p-6 sm:p-8 shadow-xl">
                        <h3 class="text-xl font-black text-slate-900 dark:text-white mb-3">"Clinic Availability"</h3>
                        <p class="text-slate-700 dark:text-slate-200 font-bold text-lg">{clinic.availability_days}</p>
                        <p class="text-slate-600 dark:text-slate-400 font-medium">{clinic.availability_hours}</p>
                        <p class="text-sm text-blue-600 dark:text-blue-400 font-black mt-4 uppercase tracking-widest">
                            "Online & Offline Consultations"
                        </p>
                    </div>
                    <div class="rounded-[2.5rem] overflow-hidden border-8 border-white dark:border-slate-800 shadow-2xl h-72">
                        <iframe
                            title="Clinic Location"
                            src=clinic.map_embed_url
                            width="100%"
                            height="100%"
                            loading="lazy"
                            class="grayscale dark:invert"
                        />
                    </div>
                    <p class="font-black uppercase tracking-widest text-sm text-slate-600 dark:text-slate-400">
                        {clinic.address}
                    </p>
                }
            })}
        </div>
    }
}
