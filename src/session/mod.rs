//! Mock Session
//!
//! Login accepts any non-empty email and password. Nothing is verified and
//! nothing is persisted: sessions live in memory and vanish on restart.

mod dashboard;
mod store;

pub use dashboard::{
    AppointmentStatus, AppointmentType, Dashboard, DashboardError, UserAppointment,
};
pub use store::{SessionRecord, SessionStore};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Which top-level page is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    #[default]
    Landing,
    Dashboard,
}

/// View state for one visitor
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Session {
    pub logged_in: bool,
    /// Empty when logged out
    pub email: String,
    pub view: View,
    /// Login prompt visible
    pub show_login: bool,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LoginError {
    #[error("Email is required")]
    MissingEmail,

    #[error("Password is required")]
    MissingPassword,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("Session not found: {0}")]
    NotFound(Uuid),

    #[error("Not logged in")]
    NotLoggedIn,

    #[error(transparent)]
    Login(#[from] LoginError),

    #[error(transparent)]
    Dashboard(#[from] DashboardError),
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show_login_prompt(&mut self) {
        self.show_login = true;
    }

    pub fn hide_login_prompt(&mut self) {
        self.show_login = false;
    }

    /// Any non-empty pair logs in and opens the dashboard
    pub fn login(&mut self, email: &str, password: &str) -> Result<(), LoginError> {
        let email = email.trim();
        if email.is_empty() {
            return Err(LoginError::MissingEmail);
        }
        if password.trim().is_empty() {
            return Err(LoginError::MissingPassword);
        }

        self.logged_in = true;
        self.email = email.to_string();
        self.show_login = false;
        self.view = View::Dashboard;
        Ok(())
    }

    /// Clear the login and return to the landing page. Safe to repeat.
    pub fn logout(&mut self) {
        self.logged_in = false;
        self.email.clear();
        self.view = View::Landing;
    }

    pub fn open_dashboard(&mut self) -> Result<(), SessionError> {
        if !self.logged_in {
            return Err(SessionError::NotLoggedIn);
        }
        self.view = View::Dashboard;
        Ok(())
    }

    pub fn show_landing(&mut self) {
        self.view = View::Landing;
    }

    /// Local part of the email, shown as the user's name
    pub fn display_name(&self) -> &str {
        display_name(&self.email)
    }
}

/// Text before the `@`, or the whole string if there is none
pub fn display_name(email: &str) -> &str {
    email.split('@').next().unwrap_or(email)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_opens_dashboard() {
        let mut session = Session::new();
        session.show_login_prompt();
        session.login("patient@example.com", "secret").unwrap();

        assert!(session.logged_in);
        assert_eq!(session.email, "patient@example.com");
        assert_eq!(session.view, View::Dashboard);
        assert!(!session.show_login);
        assert_eq!(session.display_name(), "patient");
    }

    #[test]
    fn test_any_non_empty_pair_accepted() {
        for (email, password) in [("a", "b"), ("x@y", "1"), ("  me@home  ", "pw")] {
            let mut session = Session::new();
            assert!(session.login(email, password).is_ok());
            assert_eq!(session.view, View::Dashboard);
        }
    }

    #[test]
    fn test_empty_credentials_rejected() {
        let mut session = Session::new();
        assert_eq!(session.login("", "pw"), Err(LoginError::MissingEmail));
        assert_eq!(session.login("a@b.c", "  "), Err(LoginError::MissingPassword));
        assert_eq!(session, Session::new());
    }

    #[test]
    fn test_login_logout_round_trip_is_idempotent() {
        let mut session = Session::new();
        session.login("a@b.c", "pw").unwrap();
        session.logout();
        let after_first = session.clone();

        session.login("a@b.c", "pw").unwrap();
        session.logout();
        assert_eq!(session, after_first);

        session.logout();
        assert_eq!(session, after_first);
        assert!(session.email.is_empty());
        assert_eq!(session.view, View::Landing);
    }

    #[test]
    fn test_dashboard_requires_login() {
        let mut session = Session::new();
        assert_eq!(session.open_dashboard(), Err(SessionError::NotLoggedIn));
        session.login("a@b.c", "pw").unwrap();
        session.show_landing();
        assert_eq!(session.view, View::Landing);
        session.open_dashboard().unwrap();
        assert_eq!(session.view, View::Dashboard);
    }

    #[test]
    fn test_session_serializes() {
        let json = serde_json::to_value(Session::new()).unwrap();
        assert_eq!(json["view"], "landing");
        assert_eq!(json["logged_in"], false);
    }
}
