//! Testimonials Section
//!
//! Patient reviews with star ratings and the aggregate score.

use leptos::*;

use crate::api::{self, TestimonialsResponse};
use crate::components::loading::Loading;

const MAX_STARS: u8 = 5;

/// Filled and empty stars for a rating out of five
pub fn stars(rating: u8) -> String {
    let filled = rating.min(MAX_STARS) as usize;
    format!("{}{}", "★".repeat(filled), "☆".repeat(MAX_STARS as usize - filled))
}

#[component]
pub fn Testimonials() -> impl IntoView {
    let data = create_rw_signal(None::<TestimonialsResponse>);

    create_effect(move |_| {
        spawn_local(async move {
            match api::fetch_testimonials().await {
                Ok(response) => data.set(Some(response)),
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to fetch testimonials: {}", e).into());
                }
            }
        });
    });

    view! {
        <section class="py-24 bg-slate-50 dark:bg-slate-900">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 space-y-12">
                <div class="text-center space-y-4">
                    <span class="text-xs font-bold text-blue-600 dark:text-blue-400 tracking-wider uppercase">"Patient Stories"</span>
                    <h2 class="text-3xl sm:text-5xl font-black text-slate-900 dark:text-white">"What My Patients Say"</h2>
                    {move || data.get().map(|d| view! {
                        <p class="text-slate-600 dark:text-slate-400 font-bold">
                            <span class="text-amber-500">{stars(d.average_rating.round() as u8)}</span>
                            {format!(" {:.1} from {} reviews", d.average_rating, d.total)}
                        </p>
                    })}
                </div>

                {move || match data.get() {
                    None => view! { <Loading /> }.into_view(),
                    Some(d) => view! {
                        <div class="grid grid-cols-1 md:grid-cols-3 gap-8">
                            {d.testimonials.into_iter().map(|t| view! {
                                <figure class="bg-white dark:bg-slate-800 p-8 rounded-[2rem] shadow-sm space-y-4">
                                    <p class="text-amber-500 text-lg">{stars(t.rating)}</p>
                                    <blockquote class="text-slate-700 dark:text-slate-300 italic">
                                        {format!("\"{}\"", t.text)}
                                    </blockquote>
                                    <figcaption>
                                        <p class="font-black text-slate-900 dark:text-white">{t.name}</p>
                                        {t.location.map(|loc| view! {
                                            <p class="text-xs text-slate-500">{loc}</p>
                                        })}
                                    </figcaption>
                                </figure>
                            }).collect_view()}
                        </div>
                    }.into_view(),
                }}
            </div>
        </section>
    }
}
