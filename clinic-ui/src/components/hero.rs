//! Hero Section

use leptos::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="relative min-h-screen pt-32 pb-20 bg-gradient-to-br from-blue-900 via-indigo-900 to-slate-900 text-white overflow-hidden">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 grid grid-cols-1 lg:grid-cols-2 gap-12 items-center">
                <div class="space-y-8">
                    <span class="inline-block px-4 py-2 rounded-full bg-white/10 text-sm font-bold tracking-widest text-blue-50">
                        "HI I AM"
                    </span>
                    <h1 class="text-4xl sm:text-5xl lg:text-7xl font-extrabold leading-[1.1] tracking-tight">
                        "Meet Dr. Arijit, Your " <span class="text-blue-400">"Trusted"</span> " Healthcare Partner"
                    </h1>
                    <p class="text-lg sm:text-xl text-blue-100 dark:text-slate-400 max-w-lg leading-relaxed font-light">
                        "Dr. Arijit (MBBS Hons) is a highly experienced ICU Resident and Physician dedicated to \
                         comprehensive care for Hypertension, Diabetes, and Critical Care."
                    </p>
                    <div class="flex flex-wrap gap-4">
                        <a
                            href="#appointment"
                            class="bg-[#d9f99d] text-slate-900 font-black py-4 px-8 rounded-2xl shadow-xl hover:scale-105 transition-transform"
                        >
                            "Book Appointment"
                        </a>
                        <a
                            href="#about"
                            class="border-2 border-white/30 font-black py-4 px-8 rounded-2xl hover:bg-white/10"
                        >
                            "View Schedule"
                        </a>
                    </div>
                </div>

                <div class="hidden lg:flex justify-center">
                    <div class="rounded-[3rem] bg-white/10 backdrop-blur-md p-8 shadow-2xl">
                        <h4 class="font-bold text-white text-sm">"Dr. Arijit Sen"</h4>
                        <p class="text-xs font-bold text-[#d9f99d] uppercase tracking-widest">"MBBS Hons"</p>
                    </div>
                </div>
            </div>
        </section>
    }
}
