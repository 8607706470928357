//! Qualifications Section

use leptos::*;

use crate::api::{self, Qualification};
use crate::components::loading::Loading;

#[component]
pub fn Qualifications() -> impl IntoView {
    let items = create_rw_signal(None::<Vec<Qualification>>);

    create_effect(move |_| {
        spawn_local(async move {
            match api::fetch_qualifications().await {
                Ok(list) => items.set(Some(list)),
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to fetch qualifications: {}", e).into());
                    items.set(Some(Vec::new()));
                }
            }
        });
    });

    view! {
        <section class="py-24 bg-slate-900 text-white">
            <div class="max-w-5xl mx-auto px-4 sm:px-6 lg:px-8 space-y-12">
                <h2 class="text-3xl sm:text-5xl font-black text-center">"Education & Training"</h2>
                {move || match items.get() {
                    None => view! { <Loading /> }.into_view(),
                    Some(list) => view! {
                        <ol class="relative border-l-2 border-blue-500/40 space-y-10 ml-4">
                            {list.into_iter().map(|q| view! {
                                <li class="relative pl-8">
                                    <span class="absolute -left-[9px] top-1 w-4 h-4 rounded-full bg-blue-500" />
                                    <p class="text-xs font-black uppercase tracking-widest text-blue-300">{q.period}</p>
                                    <h3 class="text-xl font-black">{q.degree}</h3>
                                    <p class="text-slate-400">{q.institution}</p>
                                </li>
                            }).collect_view()}
                        </ol>
                    }.into_view(),
                }}
            </div>
        </section>
    }
}
