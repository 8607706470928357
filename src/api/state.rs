//! Application State
//!
//! Shared state accessible by all API handlers.
//! Wrapped in Arc for thread-safe sharing across async tasks.

use std::sync::Arc;
use std::time::Instant;

use crate::config::{Config, ConfigError};
use crate::notify::{EmailJsClient, LogNotifier, NotificationSaga, Notifier};
use crate::session::SessionStore;

use super::error::ApiError;

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// Loaded configuration
    pub config: Arc<Config>,
    /// Booking notification saga (owns the delivery ledger)
    pub saga: Arc<NotificationSaga>,
    /// Mock login sessions
    pub sessions: Arc<SessionStore>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    /// Build state with the notifier chosen by `config.email`
    pub fn from_config(config: Config) -> Result<Self, ApiError> {
        let notifier = build_notifier(&config)?;
        Self::with_notifier(config, notifier)
    }

    /// Build state around an explicit notifier
    pub fn with_notifier(config: Config, notifier: Arc<dyn Notifier>) -> Result<Self, ApiError> {
        let practitioners = config.email.practitioners()?;
        let saga = NotificationSaga::new(notifier, practitioners);

        Ok(Self {
            config: Arc::new(config),
            saga: Arc::new(saga),
            sessions: Arc::new(SessionStore::new()),
            start_time: Instant::now(),
        })
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }

    /// "live" when real emails go out, "dry-run" otherwise
    pub fn email_mode(&self) -> &'static str {
        if self.config.email.enabled {
            "live"
        } else {
            "dry-run"
        }
    }

    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.config.server.host, self.config.server.port)
    }
}

/// EmailJS when enabled, otherwise a logging notifier
pub fn build_notifier(config: &Config) -> Result<Arc<dyn Notifier>, ApiError> {
    if !config.email.enabled {
        tracing::info!("Email disabled, notifications will only be logged");
        return Ok(Arc::new(LogNotifier));
    }

    let missing = config.email.missing_credentials();
    if !missing.is_empty() {
        return Err(ConfigError::Invalid(format!(
            "email is enabled but {} not set",
            missing.join(", ")
        ))
        .into());
    }

    let client = EmailJsClient::new(config.email.client_config())
        .map_err(|e| ApiError::Internal(format!("Failed to create email client: {}", e)))?;
    tracing::info!(base_url = %config.email.base_url, "Email delivery enabled");
    Ok(Arc::new(client))
}
