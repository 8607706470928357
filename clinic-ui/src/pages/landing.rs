//! Landing Page
//!
//! The single scrolling page: every section has an anchor the nav links to.

use leptos::*;

use crate::components::{
    About, AppointmentForm, Blog, Footer, Hero, LoginModal, Nav, Qualifications, ScrollToTop,
    Services, Testimonials, VideoCallModal,
};
use crate::state::GlobalState;

#[component]
pub fn Landing() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let show_login = state.show_login;
    let show_video_call = state.show_video_call;

    view! {
        <div class="min-h-screen bg-white dark:bg-slate-950 transition-colors">
            <Nav />
            <main>
                <div id="home"><Hero /></div>
                <div id="about"><About /></div>
                <div id="services"><Services /></div>
                <div id="qualifications"><Qualifications /></div>
                <div id="appointment"><AppointmentForm /></div>
                <Testimonials />

                <section class="py-20 bg-gradient-to-r from-blue-700 to-indigo-800 text-white text-center">
                    <div class="max-w-3xl mx-auto px-4 space-y-6">
                        <h2 class="text-3xl sm:text-5xl font-black">"Ready to improve your health?"</h2>
                        <p class="text-blue-100 text-lg">
                            "Book a weekend consultation at the clinic or request a video call."
                        </p>
                        <a href="#appointment" class="inline-block bg-white text-blue-700 font-black py-4 px-8 rounded-2xl shadow-xl">
                            "Schedule Now"
                        </a>
                    </div>
                </section>

                <div id="blog"><Blog /></div>
            </main>
            <Footer />

            <Show when=move || show_login.get()>
                <LoginModal />
            </Show>
            <Show when=move || show_video_call.get()>
                <VideoCallModal />
            </Show>
            <ScrollToTop />
        </div>
    }
}
