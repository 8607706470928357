//! Toast Notification Component
//!
//! Success confirmations and error notices. A failed booking also tells the
//! patient what the clinic already received and offers the phone number.

use leptos::*;

use crate::state::{ErrorNotice, GlobalState};

/// Lines under the headline of an error toast
fn notice_details(notice: &ErrorNotice, phone: Option<&str>) -> Vec<String> {
    let mut lines: Vec<String> = notice.hint.iter().map(|h| h.to_string()).collect();
    if notice.offer_contact {
        match phone {
            Some(phone) => lines.push(format!("You can also call the clinic on {}.", phone)),
            None => lines.push("You can also call the clinic.".to_string()),
        }
    }
    lines
}

#[component]
pub fn Toast() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <div class="fixed bottom-24 right-4 z-[120] space-y-2 max-w-sm">
            {move || state.success.get().map(|msg| view! {
                <div class="flex items-center gap-3 bg-emerald-600 text-white px-4 py-3 rounded-xl shadow-lg animate-slide-in">
                    <span class="text-lg">"✓"</span>
                    <span class="text-sm font-medium">{msg}</span>
                </div>
            })}

            {move || state.error.get().map(|notice| {
                let phone = state.clinic.with(|c| c.as_ref().map(|info| info.clinic.phone.clone()));
                let details = notice_details(&notice, phone.as_deref());
                view! {
                    <div role="alert" class="flex gap-3 bg-rose-600 text-white px-4 py-3 rounded-xl shadow-lg animate-slide-in">
                        <span class="text-lg">"✕"</span>
                        <div class="space-y-1">
                            <p class="text-sm font-bold">{notice.message}</p>
                            {details.into_iter().map(|line| view! {
                                <p class="text-xs text-rose-100">{line}</p>
                            }).collect_view()}
                        </div>
                    </div>
                }
            })}
        </div>
    }
}
