//! In-memory session store
//!
//! Records are pruned whenever someone logs in or out: logged-in sessions
//! after sitting idle, logged-out ones after a short grace period during
//! which their id still answers "not logged in".

use serde::Serialize;
use std::collections::HashMap;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use super::{Dashboard, Session, SessionError, UserAppointment, View};

/// Logged-in sessions idle longer than this are dropped
pub const DEFAULT_IDLE_TIMEOUT: Duration = Duration::from_secs(12 * 60 * 60);

/// Logged-out sessions are kept this long
pub const DEFAULT_LOGGED_OUT_GRACE: Duration = Duration::from_secs(5 * 60);

/// A session and its dashboard
#[derive(Debug, Clone, Serialize)]
pub struct SessionRecord {
    pub session: Session,
    pub dashboard: Dashboard,
    #[serde(skip)]
    touched: Instant,
}

impl SessionRecord {
    fn expired(&self, idle_timeout: Duration, logged_out_grace: Duration) -> bool {
        let limit = if self.session.logged_in {
            idle_timeout
        } else {
            logged_out_grace
        };
        self.touched.elapsed() >= limit
    }
}

/// All live sessions, lost on restart
pub struct SessionStore {
    sessions: RwLock<HashMap<Uuid, SessionRecord>>,
    idle_timeout: Duration,
    logged_out_grace: Duration,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::with_timeouts(DEFAULT_IDLE_TIMEOUT, DEFAULT_LOGGED_OUT_GRACE)
    }
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_timeouts(idle_timeout: Duration, logged_out_grace: Duration) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            idle_timeout,
            logged_out_grace,
        }
    }

    fn prune_locked(&self, sessions: &mut HashMap<Uuid, SessionRecord>) -> usize {
        let before = sessions.len();
        sessions.retain(|_, r| !r.expired(self.idle_timeout, self.logged_out_grace));
        let removed = before - sessions.len();
        if removed > 0 {
            debug!(removed, remaining = sessions.len(), "Pruned sessions");
        }
        removed
    }

    /// Drop expired sessions, returning how many went
    pub async fn prune(&self) -> usize {
        let mut sessions = self.sessions.write().await;
        self.prune_locked(&mut sessions)
    }

    /// Log in, creating a fresh session
    pub async fn login(&self, email: &str, password: &str) -> Result<(Uuid, Session), SessionError> {
        let mut session = Session::new();
        session.login(email, password)?;

        let id = Uuid::new_v4();
        let mut sessions = self.sessions.write().await;
        self.prune_locked(&mut sessions);
        sessions.insert(
            id,
            SessionRecord {
                session: session.clone(),
                dashboard: Dashboard::seeded(),
                touched: Instant::now(),
            },
        );
        Ok((id, session))
    }

    pub async fn get(&self, id: Uuid) -> Result<Session, SessionError> {
        self.sessions
            .read()
            .await
            .get(&id)
            .map(|r| r.session.clone())
            .ok_or(SessionError::NotFound(id))
    }

    /// Log out. The dashboard goes back to its sample data and the record
    /// is kept only for the logged-out grace period.
    pub async fn logout(&self, id: Uuid) -> Result<Session, SessionError> {
        let mut sessions = self.sessions.write().await;
        self.prune_locked(&mut sessions);
        let record = sessions.get_mut(&id).ok_or(SessionError::NotFound(id))?;
        if record.session.logged_in {
            record.touched = Instant::now();
        }
        record.session.logout();
        record.dashboard = Dashboard::seeded();
        Ok(record.session.clone())
    }

    pub async fn set_view(&self, id: Uuid, view: View) -> Result<Session, SessionError> {
        let mut sessions = self.sessions.write().await;
        let record = sessions.get_mut(&id).ok_or(SessionError::NotFound(id))?;
        if record.session.logged_in {
            record.touched = Instant::now();
        }
        match view {
            View::Dashboard => record.session.open_dashboard()?,
            View::Landing => record.session.show_landing(),
        }
        Ok(record.session.clone())
    }

    pub async fn appointments(&self, id: Uuid) -> Result<Vec<UserAppointment>, SessionError> {
        let mut sessions = self.sessions.write().await;
        let record = sessions.get_mut(&id).ok_or(SessionError::NotFound(id))?;
        if !record.session.logged_in {
            return Err(SessionError::NotLoggedIn);
        }
        record.touched = Instant::now();
        Ok(record.dashboard.appointments().to_vec())
    }

    /// Cancel an appointment; returns it with its current status
    pub async fn cancel(
        &self,
        id: Uuid,
        appointment_id: &str,
        confirmed: bool,
    ) -> Result<(UserAppointment, bool), SessionError> {
        let mut sessions = self.sessions.write().await;
        let record = sessions.get_mut(&id).ok_or(SessionError::NotFound(id))?;
        if !record.session.logged_in {
            return Err(SessionError::NotLoggedIn);
        }
        record.touched = Instant::now();

        let changed = record.dashboard.cancel(appointment_id, confirmed)?;
        let appointment = record
            .dashboard
            .get(appointment_id)
            .cloned()
            .ok_or_else(|| {
                SessionError::Dashboard(super::DashboardError::UnknownAppointment(
                    appointment_id.to_string(),
                ))
            })?;
        Ok((appointment, changed))
    }

    pub async fn count(&self) -> usize {
        self.sessions.read().await.len()
    }
}
