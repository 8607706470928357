//! App Root Component
//!
//! Main application component with routing and global providers.

use leptos::*;
use leptos_router::*;

use crate::components::Toast;
use crate::pages::{Dashboard, Landing};
use crate::state::provide_global_state;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    provide_global_state();

    view! {
        <Router>
            <Routes>
                <Route path="/" view=Landing />
                <Route path="/dashboard" view=Dashboard />
                <Route path="/*any" view=NotFound />
            </Routes>
            <Toast />
        </Router>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-screen text-center bg-white dark:bg-slate-950 text-slate-900 dark:text-white">
            <h1 class="text-3xl font-black mb-2">"Page Not Found"</h1>
            <p class="text-slate-500 mb-6">"The page you're looking for doesn't exist."</p>
            <A
                href="/"
                class="px-6 py-3 bg-blue-600 hover:bg-blue-700 text-white rounded-2xl font-black transition-colors"
            >
                "Back to Home"
            </A>
        </div>
    }
}
