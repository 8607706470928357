//! Footer
//!
//! Contact details, quick links and the clinic map.

use leptos::*;

use crate::state::GlobalState;

#[component]
pub fn Footer() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let clinic = state.clinic;

    view! {
        <footer class="bg-slate-950 text-slate-300 pt-20 pb-10">
            {move || clinic.get().map(|info| {
                let c = info.clinic;
                view! {
                    <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 grid grid-cols-1 md:grid-cols-3 gap-12">
                        <div class="space-y-4">
                            <h3 class="text-2xl font-black text-white">{c.practitioner.clone()}</h3>
                            <p class="text-xs font-black uppercase tracking-widest text-blue-400">{c.credentials}</p>
                            <a href="#appointment" class="inline-block bg-blue-600 text-white font-black py-3 px-6 rounded-xl">
                                "Book"
                            </a>
                        </div>

                        <div class="space-y-3">
                            <h4 class="text-sm font-black uppercase tracking-widest text-white">"Quick Links"</h4>
                            <ul class="space-y-2">
                                {info.nav.into_iter().map(|item| view! {
                                    <li><a href=item.href class="hover:text-white">{item.label}</a></li>
                                }).collect_view()}
                            </ul>
                        </div>

                        <div class="space-y-3">
                            <h4 class="text-sm font-black uppercase tracking-widest text-white">"Contact"</h4>
                            <p><a href=format!("mailto:{}", c.email) class="hover:text-white">{c.email.clone()}</a></p>
                            <p><a href=format!("tel:{}", c.phone) class="hover:text-white">{c.phone.clone()}</a></p>
                            <p class="text-sm">{c.address}</p>
                            <iframe
                                src=c.map_embed_url
                                title="Clinic location"
                                class="w-full h-40 rounded-2xl border-0"
                                loading="lazy"
                            />
                        </div>
                    </div>
                }
            })}
            <p class="mt-16 text-center text-xs text-slate-500">
                {format!("© {} All rights reserved.", chrono::Local::now().format("%Y"))}
            </p>
        </footer>
    }
}
