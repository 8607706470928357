//! EmailJS REST Client
//!
//! Sends rendered emails through the hosted EmailJS API. Every message goes
//! through a single template whose parameters carry the recipient, subject,
//! HTML body and plaintext summary.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Serialize;
use std::time::Duration;

use super::{Delivery, Notifier, NotifyError, OutboundEmail, ReasonCode};

/// Path of the send endpoint below the configured base URL
const SEND_PATH: &str = "/api/v1.0/email/send";

/// Credentials and endpoint for the email service
#[derive(Debug, Clone)]
pub struct EmailJsConfig {
    /// Base URL (e.g., "https://api.emailjs.com")
    pub base_url: String,
    pub service_id: String,
    pub template_id: String,
    /// Public key, sent as `user_id`
    pub public_key: String,
    /// Optional private key for server-side calls
    pub access_token: Option<String>,
    /// Name shown as the sender
    pub sender_name: String,
    /// Request timeout in milliseconds
    pub request_timeout_ms: u64,
}

impl Default for EmailJsConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.emailjs.com".to_string(),
            service_id: String::new(),
            template_id: String::new(),
            public_key: String::new(),
            access_token: None,
            sender_name: "Dr. Arijit Sen Clinic".to_string(),
            request_timeout_ms: 10_000,
        }
    }
}

/// EmailJS client. One POST per email, no retries.
pub struct EmailJsClient {
    client: Client,
    config: EmailJsConfig,
}

impl EmailJsClient {
    pub fn new(config: EmailJsConfig) -> Result<Self, NotifyError> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.request_timeout_ms))
            .build()
            .map_err(|e| NotifyError::new(ReasonCode::Transport, e.to_string()))?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &EmailJsConfig {
        &self.config
    }

    fn endpoint(&self) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), SEND_PATH)
    }

    fn request_body<'a>(&'a self, email: &'a OutboundEmail) -> SendRequest<'a> {
        SendRequest {
            service_id: &self.config.service_id,
            template_id: &self.config.template_id,
            user_id: &self.config.public_key,
            access_token: self.config.access_token.as_deref(),
            template_params: TemplateParams {
                to_name: &email.to_name,
                to_email: &email.to_email,
                from_name: &self.config.sender_name,
                subject: &email.subject,
                html_message: &email.html_body,
                message: &email.text_summary,
            },
        }
    }
}

fn transport_error(e: reqwest::Error) -> NotifyError {
    if e.is_timeout() {
        NotifyError::new(ReasonCode::Timeout, "email service timed out")
    } else if e.is_connect() {
        NotifyError::new(ReasonCode::Unavailable, "could not connect to email service")
    } else {
        NotifyError::new(ReasonCode::Transport, e.to_string())
    }
}

#[async_trait]
impl Notifier for EmailJsClient {
    fn name(&self) -> &str {
        "emailjs"
    }

    async fn send(&self, email: &OutboundEmail) -> Result<Delivery, NotifyError> {
        let response = self
            .client
            .post(self.endpoint())
            .json(&self.request_body(email))
            .send()
            .await
            .map_err(transport_error)?;

        let status = response.status();
        if status == StatusCode::OK {
            Ok(Delivery {
                recipient: email.to_email.clone(),
                status: status.as_u16(),
            })
        } else {
            let text = response.text().await.unwrap_or_default();
            Err(NotifyError::from_status(status.as_u16(), text))
        }
    }
}

// ============================================
// Request DTOs
// ============================================

#[derive(Debug, Serialize)]
struct SendRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    #[serde(rename = "accessToken", skip_serializing_if = "Option::is_none")]
    access_token: Option<&'a str>,
    template_params: TemplateParams<'a>,
}

#[derive(Debug, Serialize)]
struct TemplateParams<'a> {
    to_name: &'a str,
    to_email: &'a str,
    from_name: &'a str,
    subject: &'a str,
    html_message: &'a str,
    message: &'a str,
}
