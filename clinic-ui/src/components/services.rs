//! Services Section
//!
//! Grid of treatment areas; clicking one opens its detail modal.

use leptos::*;

use crate::api::{self, Service};
use crate::components::loading::Loading;
use crate::components::modal::Modal;

/// Glyph for a catalog icon name
fn icon_glyph(name: &str) -> &'static str {
    match name {
        "activity" => "📈",
        "brain" => "🧠",
        "droplets" => "💧",
        "heart" => "❤",
        "thermometer" => "🌡",
        "wind" => "🫁",
        _ => "✚",
    }
}

#[component]
pub fn Services() -> impl IntoView {
    let services = create_rw_signal(None::<Vec<Service>>);
    let selected = create_rw_signal(None::<Service>);

    create_effect(move |_| {
        spawn_local(async move {
            match api::fetch_services().await {
                Ok(list) => services.set(Some(list)),
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to fetch services: {}", e).into());
                    services.set(Some(Vec::new()));
                }
            }
        });
    });

    view! {
        <section class="py-24 bg-slate-50 dark:bg-slate-900">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 space-y-12">
                <div class="text-center space-y-4">
                    <span class="text-xs font-bold text-blue-600 dark:text-blue-400 tracking-wider uppercase">
                        "Expert Medical Services"
                    </span>
                    <h2 class="text-3xl sm:text-5xl font-black text-slate-900 dark:text-white">"How I Can Help"</h2>
                </div>

                {move || match services.get() {
                    None => view! { <Loading /> }.into_view(),
                    Some(list) => view! {
                        <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                            {list.into_iter().map(|service| {
                                let card = service.clone();
                                view! {
                                    <button
                                        on:click=move |_| selected.set(Some(card.clone()))
                                        class="text-left bg-white dark:bg-slate-800 p-8 rounded-[2rem] shadow-sm hover:shadow-xl transition-all space-y-4"
                                    >
                                        <span class="inline-flex w-14 h-14 items-center justify-center rounded-2xl bg-blue-50 dark:bg-blue-900/30 text-2xl">
                                            {icon_glyph(&service.icon)}
                                        </span>
                                        <h3 class="text-xl font-black text-slate-900 dark:text-white">{service.title}</h3>
                                        <p class="text-sm font-bold text-blue-600 dark:text-blue-400">{service.localized_title}</p>
                                        <p class="text-slate-600 dark:text-slate-400">{service.description}</p>
                                        <span class="text-sm font-black text-blue-600 uppercase tracking-widest">"Learn More"</span>
                                    </button>
                                }
                            }).collect_view()}
                        </div>
                    }.into_view(),
                }}

                <div class="text-center">
                    <a href="#appointment" class="inline-block bg-blue-600 text-white font-black py-4 px-8 rounded-2xl shadow-xl">
                        "Book a Consultation"
                    </a>
                </div>
            </div>

            {move || selected.get().map(|service| view! {
                <ServiceDetail service=service on_close=move |_: ()| selected.set(None) />
            })}
        </section>
    }
}

#[component]
fn ServiceDetail(service: Service, #[prop(into)] on_close: Callback<()>) -> impl IntoView {
    view! {
        <Modal title=service.title.clone() subtitle=service.localized_title.clone() on_close=on_close>
            <div class="space-y-8">
                <p class="text-slate-700 dark:text-slate-300 leading-relaxed">{service.full_description}</p>
                <DetailList heading="Common Symptoms" items=service.symptoms />
                <DetailList heading="Treatment Approach" items=service.treatments />
                <DetailList heading="Prevention" items=service.prevention />
                <a
                    href="#appointment"
                    on:click=move |_| on_close.call(())
                    class="block text-center bg-blue-600 text-white font-black py-4 rounded-2xl"
                >
                    "Book Appointment"
                </a>
            </div>
        </Modal>
    }
}

#[component]
fn DetailList(heading: &'static str, items: Vec<String>) -> impl IntoView {
    view! {
        <div class="space-y-3">
            <h4 class="text-sm font-black uppercase tracking-widest text-slate-500 dark:text-slate-400">{heading}</h4>
            <ul class="space-y-2">
                {items.into_iter().map(|item| view! {
                    <li class="flex gap-2 text-slate-700 dark:text-slate-300">
                        <span class="text-blue-600">"•"</span>
                        <span>{item}</span>
                    </li>
                }).collect_view()}
            </ul>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_glyph_fallback() {
        assert_eq!(icon_glyph("brain"), "🧠");
        assert_eq!(icon_glyph("unknown"), "✚");
    }
}
