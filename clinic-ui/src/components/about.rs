//! About Section
//!
//! Practitioner bio, weekly schedule and the video consultation entry point.

use leptos::*;

use crate::state::GlobalState;

#[component]
pub fn About() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let show_video_call = state.show_video_call;
    let clinic = state.clinic;

    view! {
        <section class="py-24 bg-white dark:bg-slate-950">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 grid grid-cols-1 lg:grid-cols-2 gap-16">
                <div class="space-y-6">
                    <ScheduleCard days="Saturday - Sunday" duty="Clinics & Consults" note="By Booking" />
                    <ScheduleCard days="Monday - Friday" duty="ICU Shifts" note="Emergency" />
                    {move || clinic.get().map(|info| view! {
                        <div class="p-6 rounded-2xl bg-rose-50 dark:bg-rose-900/20">
                            <p class="text-xs font-black uppercase tracking-widest text-rose-600">"For Emergency Care"</p>
                            <p class="text-2xl font-black text-slate-900 dark:text-white">{info.clinic.phone}</p>
                        </div>
                    })}
                </div>

                <div class="space-y-6">
                    <h2 class="text-2xl sm:text-5xl font-extrabold text-slate-900 dark:text-white leading-tight">
                        "My Journey in Medicine"
                    </h2>
                    <p class="text-sm sm:text-lg text-slate-600 dark:text-slate-400 leading-relaxed">
                        "I'm Dr. Arijit, an ICU Resident at Sharanya Superspeciality Hospital with a passion for \
                         holistic, evidence-based medical care. With extensive experience in Cardiology and \
                         Neuromedicine, I've had the privilege of treating thousands of patients with empathy \
                         and accuracy."
                    </p>
                    <p class="text-sm sm:text-lg text-slate-600 dark:text-slate-400 leading-relaxed">
                        "I strongly believe that medicine is not just about treating diseases, but about \
                         understanding people, building trust, and guiding them toward long-term wellness."
                    </p>
                    <p class="p-5 bg-slate-50 dark:bg-slate-800/50 rounded-2xl border-l-4 border-blue-600 font-bold text-slate-800 dark:text-slate-200">
                        "Healing begins with listening."
                    </p>

                    <button
                        on:click=move |_| show_video_call.set(true)
                        class="bg-blue-600 hover:bg-blue-700 text-white font-black py-4 px-8 rounded-2xl shadow-xl"
                    >
                        "Start Video Consultation"
                    </button>

                    <div class="p-4 bg-blue-50 dark:bg-blue-900/20 border-l-4 border-blue-600 rounded-lg">
                        <p class="text-xs font-bold text-blue-900 dark:text-blue-100 mb-1.5">
                            "Video Consultation: Available 7 days/week"
                        </p>
                        <p class="text-xs text-blue-800 dark:text-blue-200">
                            "Book 24 hours in advance. For emergencies within 24 hours: "
                            {move || clinic.get().map(|info| view! {
                                <a href=info.clinic.whatsapp_url target="_blank" rel="noopener noreferrer" class="font-bold underline">
                                    "WhatsApp directly"
                                </a>
                            })}
                        </p>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ScheduleCard(days: &'static str, duty: &'static str, note: &'static str) -> impl IntoView {
    view! {
        <div class="flex justify-between items-center p-6 rounded-2xl bg-slate-50 dark:bg-slate-900 shadow-sm">
            <div>
                <p class="font-black text-lg text-slate-900 dark:text-white">{days}</p>
                <p class="text-sm text-slate-500 dark:text-slate-400">{duty}</p>
            </div>
            <p class="text-[10px] font-black uppercase tracking-widest text-blue-600 dark:text-blue-400">{note}</p>
        </div>
    }
}
