//! Outbound Notifications
//!
//! Booking requests are announced by email through a third-party
//! transactional email service.
//!
//! ## Architecture
//!
//! - **Notifier**: trait for anything that can deliver an [`OutboundEmail`]
//! - **EmailJsClient**: REST client for the hosted email service
//! - **LogNotifier**: dry-run notifier that only logs
//! - **templates**: HTML and plaintext bodies for each recipient
//! - **NotificationSaga**: sends the practitioner and patient emails in
//!   order, recording each delivery under the booking's idempotency key so a
//!   retry never repeats a delivered step

mod client;
mod saga;
pub mod templates;

#[cfg(test)]
pub(crate) mod testing;

pub use client::{EmailJsClient, EmailJsConfig};
pub use saga::{
    DeliveryLedger, DispatchError, DispatchReport, InFlightGuard, NotificationSaga, Recipient,
    Step,
};

use async_trait::async_trait;
use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// A fully rendered email ready to hand to a [`Notifier`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutboundEmail {
    pub to_name: String,
    pub to_email: String,
    pub subject: String,
    /// Complete HTML document
    pub html_body: String,
    /// Short plaintext summary
    pub text_summary: String,
}

/// Successful hand-off to the email service
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Delivery {
    pub recipient: String,
    /// HTTP status reported by the service (always 200 on success)
    pub status: u16,
}

/// Anything able to deliver an email
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Short name for logs and health output
    fn name(&self) -> &str;

    /// Deliver one email. No retries are attempted here.
    async fn send(&self, email: &OutboundEmail) -> Result<Delivery, NotifyError>;
}

/// Structured reason for a failed send
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReasonCode {
    /// The service did not answer in time
    Timeout,
    /// Could not connect, or the service reported a server error
    Unavailable,
    /// Too many requests
    RateLimited,
    /// The service refused the request (bad keys, bad template, non-200 status)
    Rejected,
    /// Recipient address missing or refused
    InvalidRecipient,
    /// Account quota used up
    QuotaExceeded,
    /// Any other transport-level failure
    Transport,
}

impl ReasonCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReasonCode::Timeout => "timeout",
            ReasonCode::Unavailable => "unavailable",
            ReasonCode::RateLimited => "rate_limited",
            ReasonCode::Rejected => "rejected",
            ReasonCode::InvalidRecipient => "invalid_recipient",
            ReasonCode::QuotaExceeded => "quota_exceeded",
            ReasonCode::Transport => "transport",
        }
    }

    /// Whether trying again later could plausibly succeed
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            ReasonCode::Timeout | ReasonCode::Unavailable | ReasonCode::RateLimited | ReasonCode::Transport
        )
    }
}

impl fmt::Display for ReasonCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Failed send, carrying a reason code instead of an ad-hoc error shape
#[derive(Debug, Clone, Error, PartialEq, Eq, Serialize)]
#[error("{reason}: {message}")]
pub struct NotifyError {
    pub reason: ReasonCode,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
}

impl NotifyError {
    pub fn new(reason: ReasonCode, message: impl Into<String>) -> Self {
        Self {
            reason,
            message: message.into(),
            status: None,
        }
    }

    /// Build from a non-200 HTTP response
    pub fn from_status(status: u16, body: impl Into<String>) -> Self {
        let reason = match status {
            429 => ReasonCode::RateLimited,
            402 | 426 => ReasonCode::QuotaExceeded,
            422 => ReasonCode::InvalidRecipient,
            500..=599 => ReasonCode::Unavailable,
            _ => ReasonCode::Rejected,
        };
        let body = body.into();
        let message = if body.trim().is_empty() {
            format!("email service returned HTTP {}", status)
        } else {
            body.trim().to_string()
        };
        Self {
            reason,
            message,
            status: Some(status),
        }
    }

    /// Text suitable for showing to the person who submitted the form
    pub fn user_message(&self) -> String {
        match self.reason {
            ReasonCode::Timeout | ReasonCode::Unavailable | ReasonCode::Transport => format!(
                "We could not reach the email service ({}). Please try again.",
                self.message
            ),
            ReasonCode::RateLimited => {
                "Too many requests right now. Please wait a minute and try again.".to_string()
            }
            ReasonCode::InvalidRecipient => {
                format!("The email address was not accepted: {}", self.message)
            }
            ReasonCode::QuotaExceeded | ReasonCode::Rejected => {
                format!("Failed to send booking request: {}", self.message)
            }
        }
    }
}

/// Notifier that only writes the email to the log
#[derive(Debug, Default, Clone)]
pub struct LogNotifier;

#[async_trait]
impl Notifier for LogNotifier {
    fn name(&self) -> &str {
        "log"
    }

    async fn send(&self, email: &OutboundEmail) -> Result<Delivery, NotifyError> {
        tracing::info!(
            to = %email.to_email,
            subject = %email.subject,
            summary = %email.text_summary,
            "Dry-run notification"
        );
        Ok(Delivery {
            recipient: email.to_email.clone(),
            status: 200,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(NotifyError::from_status(429, "").reason, ReasonCode::RateLimited);
        assert_eq!(NotifyError::from_status(422, "bad").reason, ReasonCode::InvalidRecipient);
        assert_eq!(NotifyError::from_status(503, "").reason, ReasonCode::Unavailable);
        assert_eq!(NotifyError::from_status(400, "The user ID is invalid").reason, ReasonCode::Rejected);
        assert_eq!(NotifyError::from_status(201, "").reason, ReasonCode::Rejected);
    }

    #[test]
    fn test_empty_body_message() {
        let err = NotifyError::from_status(500, "  ");
        assert_eq!(err.message, "email service returned HTTP 500");
        assert_eq!(err.status, Some(500));
        assert_eq!(err.to_string(), "unavailable: email service returned HTTP 500");
    }

    #[test]
    fn test_transient_classification() {
        assert!(ReasonCode::Timeout.is_transient());
        assert!(!ReasonCode::InvalidRecipient.is_transient());
        assert!(!ReasonCode::QuotaExceeded.is_transient());
    }

    #[tokio::test]
    async fn test_log_notifier_delivers() {
        let email = OutboundEmail {
            to_name: "Test".to_string(),
            to_email: "t@example.com".to_string(),
            subject: "Hello".to_string(),
            html_body: "<p>Hi</p>".to_string(),
            text_summary: "Hi".to_string(),
        };
        let delivery = LogNotifier.send(&email).await.unwrap();
        assert_eq!(delivery.status, 200);
        assert_eq!(delivery.recipient, "t@example.com");
    }
}
