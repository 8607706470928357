//! Blog Section
//!
//! Article cards with a reader modal.

use leptos::*;

use crate::api::{self, BlogPost};
use crate::components::loading::Loading;
use crate::components::modal::Modal;

#[component]
pub fn Blog() -> impl IntoView {
    let posts = create_rw_signal(None::<Vec<BlogPost>>);
    let selected = create_rw_signal(None::<BlogPost>);

    create_effect(move |_| {
        spawn_local(async move {
            match api::fetch_blog_posts().await {
                Ok(list) => posts.set(Some(list)),
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to fetch blog posts: {}", e).into());
                    posts.set(Some(Vec::new()));
                }
            }
        });
    });

    view! {
        <section class="py-24 bg-white dark:bg-slate-950">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 space-y-12">
                <div class="space-y-4">
                    <span class="text-xs font-bold text-blue-600 dark:text-blue-400 tracking-wider">"HEALTH KNOWLEDGE BASE"</span>
                    <h2 class="text-3xl sm:text-5xl font-black text-slate-900 dark:text-white">"Latest Articles"</h2>
                </div>

                {move || match posts.get() {
                    None => view! { <Loading /> }.into_view(),
                    Some(list) => list.into_iter().map(|post| {
                        let card = post.clone();
                        view! {
                            <article
                                on:click=move |_| selected.set(Some(card.clone()))
                                class="cursor-pointer grid grid-cols-1 md:grid-cols-3 gap-6 bg-slate-50 dark:bg-slate-900 rounded-[2rem] overflow-hidden hover:shadow-xl transition-all mb-8"
                            >
                                <img src=post.image_url alt=post.title.clone() class="h-56 w-full object-cover" />
                                <div class="md:col-span-2 p-6 space-y-3">
                                    <p class="text-xs font-black uppercase tracking-widest text-blue-600">
                                        {post.category} " · " {post.date}
                                    </p>
                                    <h3 class="text-2xl font-black text-slate-900 dark:text-white">{post.title}</h3>
                                    <p class="text-slate-600 dark:text-slate-400">{post.excerpt}</p>
                                    <span class="text-sm font-black text-blue-600">"Read Full Article"</span>
                                </div>
                            </article>
                        }
                    }).collect_view(),
                }}
            </div>

            {move || selected.get().map(|post| view! {
                <Modal
                    title=post.title.clone()
                    subtitle=format!("{} · {}", post.category, post.date)
                    on_close=move |_: ()| selected.set(None)
                >
                    <article class="space-y-6">
                        <img src=post.image_url.clone() alt=post.title.clone() class="w-full rounded-2xl object-cover max-h-72" />
                        {post.content.split("\n\n").map(|para| view! {
                            <p class="text-slate-700 dark:text-slate-300 leading-relaxed">{para.to_string()}</p>
                        }).collect_view()}
                        <p class="text-sm font-bold text-slate-500">"By " {post.author.clone()}</p>
                    </article>
                </Modal>
            })}
        </section>
    }
}
