//! Global Application State
//!
//! Reactive state management using Leptos signals: the patient session,
//! which modals are open, the color theme and toast messages.

use leptos::*;

use super::theme::Theme;
use super::timer::TimerSlot;
use crate::api::{self, ApiFailure, ClinicResponse};

const SUCCESS_TOAST_MS: u32 = 3_000;
const ERROR_TOAST_MS: u32 = 5_000;

/// Error toast content
#[derive(Clone, Debug, PartialEq)]
pub struct ErrorNotice {
    pub message: String,
    /// Extra guidance for booking failures
    pub hint: Option<&'static str>,
    /// Show the clinic's phone number so the patient can call instead
    pub offer_contact: bool,
}

impl ErrorNotice {
    pub fn plain(message: &str) -> Self {
        Self {
            message: message.to_string(),
            hint: None,
            offer_contact: false,
        }
    }
}

impl From<&ApiFailure> for ErrorNotice {
    fn from(failure: &ApiFailure) -> Self {
        Self {
            message: failure.message.clone(),
            hint: failure.hint(),
            offer_contact: failure.is_delivery_failure(),
        }
    }
}

/// Global application state provided to all components
#[derive(Clone, Copy)]
pub struct GlobalState {
    /// Logged-in patient, if any
    pub session: RwSignal<Option<PatientSession>>,
    /// Login modal visibility
    pub show_login: RwSignal<bool>,
    /// Video consultation modal visibility
    pub show_video_call: RwSignal<bool>,
    /// Current color theme
    pub theme: RwSignal<Theme>,
    /// Contact details and navigation, loaded once
    pub clinic: RwSignal<Option<ClinicResponse>>,
    /// Error message to display
    pub error: RwSignal<Option<ErrorNotice>>,
    /// Success message (for toasts)
    pub success: RwSignal<Option<String>>,
    success_timer: TimerSlot,
    error_timer: TimerSlot,
}

/// Session returned by the login endpoint
#[derive(Clone, Debug, PartialEq)]
pub struct PatientSession {
    pub id: String,
    pub email: String,
    pub display_name: String,
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let theme = Theme::load();
    theme.apply();

    let state = GlobalState {
        session: create_rw_signal(None),
        show_login: create_rw_signal(false),
        show_video_call: create_rw_signal(false),
        theme: create_rw_signal(theme),
        clinic: create_rw_signal(None),
        error: create_rw_signal(None),
        success: create_rw_signal(None),
        success_timer: TimerSlot::new(),
        error_timer: TimerSlot::new(),
    };

    let clinic = state.clinic;
    spawn_local(async move {
        match api::fetch_clinic().await {
            Ok(info) => clinic.set(Some(info)),
            Err(e) => {
                web_sys::console::error_1(&format!("Failed to fetch clinic info: {}", e).into());
            }
        }
    });

    provide_context(state);
}

impl GlobalState {
    pub fn is_logged_in(&self) -> bool {
        self.session.with(|s| s.is_some())
    }

    /// Store the session and close the login prompt
    pub fn login(&self, session: PatientSession) {
        self.session.set(Some(session));
        self.show_login.set(false);
    }

    pub fn logout(&self) {
        self.session.set(None);
    }

    /// Flip light/dark and remember the choice
    pub fn toggle_theme(&self) {
        let next = self.theme.get_untracked().toggled();
        next.apply();
        next.save();
        self.theme.set(next);
    }

    /// Show a success message (auto-clears after timeout)
    pub fn show_success(&self, message: &str) {
        self.success.set(Some(message.to_string()));
        let success = self.success;
        self.success_timer
            .schedule(SUCCESS_TOAST_MS, move || success.set(None));
    }

    /// Show an error message (auto-clears after timeout)
    pub fn show_error(&self, message: &str) {
        self.show_notice(ErrorNotice::plain(message));
    }

    /// Show a failed API call with its booking guidance
    pub fn show_failure(&self, failure: &ApiFailure) {
        self.show_notice(ErrorNotice::from(failure));
    }

    fn show_notice(&self, notice: ErrorNotice) {
        self.error.set(Some(notice));
        let error = self.error;
        self.error_timer.schedule(ERROR_TOAST_MS, move || error.set(None));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notice_from_delivery_failure() {
        let failure = ApiFailure {
            code: Some(api::DELIVERY_FAILED.to_string()),
            message: "Mail service unavailable".to_string(),
            step: Some("practitioner-1".to_string()),
        };
        let notice = ErrorNotice::from(&failure);
        assert_eq!(notice.message, "Mail service unavailable");
        assert!(notice.offer_contact);
        assert!(notice.hint.is_some());
    }

    #[test]
    fn test_plain_notice() {
        let notice = ErrorNotice::plain("Please enter your email and password");
        assert!(!notice.offer_contact);
        assert_eq!(notice.hint, None);
    }
}
