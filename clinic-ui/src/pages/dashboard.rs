//! Dashboard Page
//!
//! Logged-in patient view listing sample appointments, with cancellation.

use leptos::*;
use leptos_router::*;

use crate::api::{self, UserAppointment};
use crate::components::Loading;
use crate::state::GlobalState;

const CANCEL_PROMPT: &str = "Are you sure you want to cancel this appointment?";

/// Badge classes for an appointment status
fn status_class(status: &str) -> &'static str {
    match status {
        "Confirmed" => "bg-emerald-100 text-emerald-700 dark:bg-emerald-900/30 dark:text-emerald-300",
        "Pending" => "bg-amber-100 text-amber-700 dark:bg-amber-900/30 dark:text-amber-300",
        _ => "bg-slate-200 text-slate-500 dark:bg-slate-800 dark:text-slate-400",
    }
}

#[component]
pub fn Dashboard() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let navigate = use_navigate();

    let session = state.session;
    let appointments = create_rw_signal(None::<Vec<UserAppointment>>);

    // Back to the landing page when nobody is logged in
    let redirect = navigate.clone();
    create_effect(move |_| {
        let Some(current) = session.get() else {
            redirect("/", Default::default());
            return;
        };
        spawn_local(async move {
            match api::fetch_appointments(&current.id).await {
                Ok(response) => appointments.set(Some(response.appointments)),
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to fetch appointments: {}", e).into());
                    state.show_failure(&e);
                    appointments.set(Some(Vec::new()));
                }
            }
        });
    });

    let log_out = move |_| {
        let Some(current) = session.get_untracked() else {
            return;
        };
        let navigate = navigate.clone();
        spawn_local(async move {
            if let Err(e) = api::logout(&current.id).await {
                web_sys::console::error_1(&format!("Logout failed: {}", e).into());
            }
            state.logout();
            navigate("/", Default::default());
        });
    };

    let cancel = Callback::new(move |appointment_id: String| {
        let confirmed = window().confirm_with_message(CANCEL_PROMPT).unwrap_or(false);
        if !confirmed {
            return;
        }
        let Some(current) = session.get_untracked() else {
            return;
        };
        spawn_local(async move {
            match api::cancel_appointment(&current.id, &appointment_id).await {
                Ok(response) => {
                    let updated = response.appointment;
                    appointments.update(|list| {
                        if let Some(apt) = list
                            .as_mut()
                            .and_then(|l| l.iter_mut().find(|a| a.id == updated.id))
                        {
                            *apt = updated;
                        }
                    });
                    if response.changed {
                        state.show_success("Appointment cancelled");
                    }
                }
                Err(e) => state.show_failure(&e),
            }
        });
    });

    let display_name = move || session.with(|s| s.as_ref().map(|s| s.display_name.clone()).unwrap_or_default());
    let email = move || session.with(|s| s.as_ref().map(|s| s.email.clone()).unwrap_or_default());
    let counts = move || {
        appointments.with(|list| {
            let list = list.as_deref().unwrap_or_default();
            let active = list.iter().filter(|a| a.status != "Cancelled").count();
            (list.len(), active)
        })
    };

    view! {
        <div class="min-h-screen bg-slate-50 dark:bg-slate-950">
            <header class="bg-white dark:bg-slate-900 border-b border-slate-200 dark:border-slate-800">
                <div class="max-w-5xl mx-auto px-4 h-20 flex items-center justify-between">
                    <A href="/" class="text-xl font-black text-slate-900 dark:text-white">"Dr. Arijit Sen"</A>
                    <div class="flex items-center gap-4">
                        <p class="text-sm text-slate-500 dark:text-slate-400">
                            "Logged in as " <span title=email class="font-black text-slate-900 dark:text-white">{display_name}</span>
                        </p>
                        <button
                            on:click=log_out
                            class="font-black text-xs uppercase tracking-widest py-2 px-4 rounded-xl bg-slate-900 dark:bg-blue-600 text-white"
                        >
                            "Log Out"
                        </button>
                    </div>
                </div>
            </header>

            <main class="max-w-5xl mx-auto px-4 py-12 space-y-10">
                <div class="flex flex-wrap items-end justify-between gap-6">
                    <div>
                        <h1 class="text-3xl sm:text-4xl font-black text-slate-900 dark:text-white">"Welcome Back!"</h1>
                        <p class="text-slate-500 dark:text-slate-400 mt-1">
                            {move || {
                                let (total, active) = counts();
                                format!("{} appointments, {} active", total, active)
                            }}
                        </p>
                    </div>
                    <a
                        href="/#appointment"
                        class="bg-blue-600 hover:bg-blue-700 text-white font-black py-3 px-6 rounded-2xl shadow-xl"
                    >
                        "New Appointment"
                    </a>
                </div>

                {move || match appointments.get() {
                    None => view! { <Loading /> }.into_view(),
                    Some(list) if list.is_empty() => view! {
                        <p class="text-center text-slate-500 py-12">"No appointments yet."</p>
                    }.into_view(),
                    Some(list) => view! {
                        <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                            {list.into_iter().map(|apt| view! {
                                <AppointmentCard appointment=apt on_cancel=cancel />
                            }).collect_view()}
                        </div>
                    }.into_view(),
                }}
            </main>
        </div>
    }
}

#[component]
fn AppointmentCard(appointment: UserAppointment, on_cancel: Callback<String>) -> impl IntoView {
    let cancellable = appointment.status != "Cancelled";
    let id = appointment.id.clone();

    view! {
        <div class="bg-white dark:bg-slate-900 rounded-[2rem] p-6 shadow-sm space-y-4">
            <div class="flex items-center justify-between">
                <span class="text-xs font-black uppercase tracking-widest text-blue-600">
                    {format!("{} consultation", appointment.kind)}
                </span>
                <span class=format!("text-xs font-black px-3 py-1 rounded-full {}", status_class(&appointment.status))>
                    {appointment.status.clone()}
                </span>
            </div>
            <div>
                <p class="text-2xl font-black text-slate-900 dark:text-white">{appointment.date}</p>
                <p class="text-slate-500 dark:text-slate-400">{appointment.time}</p>
            </div>
            <p class="text-sm text-slate-600 dark:text-slate-300">{appointment.doctor_name}</p>
            {cancellable.then(|| view! {
                <button
                    on:click=move |_| on_cancel.call(id.clone())
                    class="text-sm font-black text-rose-600 hover:text-rose-700"
                >
                    "Cancel Appointment"
                </button>
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_class() {
        assert!(status_class("Confirmed").contains("emerald"));
        assert!(status_class("Pending").contains("amber"));
        assert!(status_class("Cancelled").contains("slate"));
    }
}
