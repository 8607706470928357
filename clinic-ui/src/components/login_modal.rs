//! Login Modal
//!
//! Mock patient login: any non-empty email and password opens the dashboard.

use leptos::*;
use leptos_router::use_navigate;

use crate::api;
use crate::components::field::TextField;
use crate::components::modal::Modal;
use crate::state::{GlobalState, PatientSession};

#[component]
pub fn LoginModal() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let navigate = use_navigate();

    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (submitting, set_submitting) = create_signal(false);

    let show = state.show_login;
    let close = Callback::new(move |_: ()| show.set(false));

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        let e = email.get();
        let p = password.get();
        if e.trim().is_empty() || p.is_empty() {
            state.show_error("Please enter your email and password");
            return;
        }

        set_submitting.set(true);
        let navigate = navigate.clone();
        spawn_local(async move {
            match api::login(&e, &p).await {
                Ok(response) => {
                    state.login(PatientSession {
                        id: response.session_id,
                        email: response.session.email,
                        display_name: response.display_name,
                    });
                    navigate("/dashboard", Default::default());
                }
                Err(err) => state.show_failure(&err),
            }
            set_submitting.set(false);
        });
    };

    view! {
        <Modal
            title="Patient Login".to_string()
            subtitle="Access your appointments and history".to_string()
            on_close=close
        >
            <form on:submit=on_submit class="space-y-6">
                <TextField
                    label="Email Address"
                    kind="email"
                    placeholder="name@example.com"
                    value=email
                    on_input=move |v: String| set_email.set(v)
                />
                <TextField
                    label="Password"
                    kind="password"
                    placeholder="••••••••"
                    value=password
                    on_input=move |v: String| set_password.set(v)
                />
                <button
                    type="submit"
                    disabled=move || submitting.get()
                    class="w-full bg-blue-600 hover:bg-blue-700 disabled:opacity-60 text-white font-black py-5 rounded-2xl shadow-xl"
                >
                    "Sign In"
                </button>
                <button
                    type="button"
                    class="w-full text-slate-400 font-bold text-sm hover:text-slate-600"
                    on:click=move |_| show.set(false)
                >
                    "Cancel"
                </button>
            </form>
        </Modal>
    }
}
