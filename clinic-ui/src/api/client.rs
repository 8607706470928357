//! HTTP API Client
//!
//! Functions for communicating with the clinic REST API.

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::state::booking::{AppointmentFields, VideoCallFields};

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:8082/api/v1";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|s| s.get_item("clinic_api_url").ok().flatten())
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string());
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

/// Key for one logical booking; retries of the same booking reuse it
pub fn new_idempotency_key() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Error code the API uses when one or more booking emails did not go out
pub const DELIVERY_FAILED: &str = "DELIVERY_FAILED";

/// Error code for an idempotency key already bound to other details
pub const KEY_REUSED: &str = "IDEMPOTENCY_KEY_REUSED";

/// A failed API call, with the structured fields of the error body when
/// the server sent one
#[derive(Debug, Clone, PartialEq)]
pub struct ApiFailure {
    pub code: Option<String>,
    pub message: String,
    /// Notification step that failed (`practitioner-1`, `practitioner-2`, `patient`)
    pub step: Option<String>,
}

impl ApiFailure {
    fn local(message: String) -> Self {
        Self {
            code: None,
            message,
            step: None,
        }
    }

    pub fn is_delivery_failure(&self) -> bool {
        self.code.as_deref() == Some(DELIVERY_FAILED)
    }

    pub fn is_key_reused(&self) -> bool {
        self.code.as_deref() == Some(KEY_REUSED)
    }

    /// What the patient should know about a failed booking beyond the message
    pub fn hint(&self) -> Option<&'static str> {
        if self.is_key_reused() {
            return Some("Your details changed since the last attempt. Please submit again.");
        }
        if !self.is_delivery_failure() {
            return None;
        }
        Some(match self.step.as_deref() {
            Some("patient") => {
                "The clinic received your request; only your confirmation email is missing. \
                 Submitting again resends just that."
            }
            Some(_) => "The clinic has not been notified yet. Submitting again only sends what is missing.",
            None => "Submitting again only sends what is missing.",
        })
    }
}

impl std::fmt::Display for ApiFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

// ============ Response Types ============

#[derive(Debug, Clone, serde::Deserialize, PartialEq)]
pub struct Service {
    pub id: String,
    pub title: String,
    pub localized_title: String,
    pub description: String,
    pub icon: String,
    pub full_description: String,
    pub symptoms: Vec<String>,
    pub treatments: Vec<String>,
    pub prevention: Vec<String>,
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct Qualification {
    pub institution: String,
    pub degree: String,
    pub period: String,
}

#[derive(Debug, Clone, serde::Deserialize, PartialEq)]
pub struct BlogPost {
    pub id: String,
    pub title: String,
    pub category: String,
    pub date: String,
    pub image_url: String,
    pub excerpt: String,
    pub content: String,
    pub author: String,
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct Testimonial {
    pub id: String,
    pub name: String,
    pub text: String,
    pub rating: u8,
    #[serde(default)]
    pub location: Option<String>,
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct TestimonialsResponse {
    pub testimonials: Vec<Testimonial>,
    pub average_rating: f64,
    pub total: usize,
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct NavItem {
    pub label: String,
    pub href: String,
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct ClinicInfo {
    pub practitioner: String,
    pub credentials: String,
    pub email: String,
    pub phone: String,
    pub whatsapp_url: String,
    pub address: String,
    pub availability_days: String,
    pub availability_hours: String,
    pub map_embed_url: String,
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct ClinicResponse {
    pub clinic: ClinicInfo,
    pub nav: Vec<NavItem>,
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct WeekendDate {
    pub value: String,
    pub label: String,
}

#[derive(Debug, serde::Deserialize)]
pub struct DatesResponse {
    pub dates: Vec<WeekendDate>,
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct VideoSlot {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct SlotsResponse {
    pub clinic: Vec<String>,
    pub video_call: Vec<VideoSlot>,
}

#[derive(Debug, serde::Deserialize)]
pub struct BookingResponse {
    pub confirmation_display_secs: u64,
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct SessionResponse {
    pub session_id: String,
    pub session: SessionState,
    pub display_name: String,
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct SessionState {
    pub email: String,
}

#[derive(Debug, Clone, serde::Deserialize, PartialEq)]
pub struct UserAppointment {
    pub id: String,
    pub date: String,
    pub time: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub status: String,
    pub doctor_name: String,
}

#[derive(Debug, serde::Deserialize)]
pub struct AppointmentListResponse {
    pub appointments: Vec<UserAppointment>,
}

#[derive(Debug, serde::Deserialize)]
pub struct CancelResponse {
    pub appointment: UserAppointment,
    pub changed: bool,
}

#[derive(Debug, serde::Deserialize)]
struct ApiError {
    error: ApiErrorBody,
}

#[derive(Debug, serde::Deserialize)]
struct ApiErrorBody {
    code: String,
    message: String,
    #[serde(default)]
    step: Option<String>,
}

impl From<ApiErrorBody> for ApiFailure {
    fn from(body: ApiErrorBody) -> Self {
        Self {
            code: Some(body.code),
            message: body.message,
            step: body.step,
        }
    }
}

// ============ Helpers ============

async fn read<T: DeserializeOwned>(response: Response) -> Result<T, ApiFailure> {
    if !response.ok() {
        let status = response.status();
        return Err(match response.json::<ApiError>().await {
            Ok(body) => body.error.into(),
            Err(_) => ApiFailure::local(format!("Request failed ({})", status)),
        });
    }

    response
        .json()
        .await
        .map_err(|e| ApiFailure::local(format!("Parse error: {}", e)))
}

async fn get<T: DeserializeOwned>(path: &str) -> Result<T, ApiFailure> {
    let response = Request::get(&format!("{}{}", get_api_base(), path))
        .send()
        .await
        .map_err(|e| ApiFailure::local(format!("Network error: {}", e)))?;
    read(response).await
}

async fn post<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
    idempotency_key: Option<&str>,
) -> Result<T, ApiFailure> {
    let mut builder = Request::post(&format!("{}{}", get_api_base(), path));
    if let Some(key) = idempotency_key {
        builder = builder.header("Idempotency-Key", key);
    }

    let response = builder
        .json(body)
        .map_err(|e| ApiFailure::local(format!("Request build error: {}", e)))?
        .send()
        .await
        .map_err(|e| ApiFailure::local(format!("Network error: {}", e)))?;
    read(response).await
}

// ============ API Functions ============

pub async fn fetch_services() -> Result<Vec<Service>, ApiFailure> {
    get("/catalog/services").await
}

pub async fn fetch_qualifications() -> Result<Vec<Qualification>, ApiFailure> {
    get("/catalog/qualifications").await
}

pub async fn fetch_blog_posts() -> Result<Vec<BlogPost>, ApiFailure> {
    get("/catalog/blog").await
}

pub async fn fetch_testimonials() -> Result<TestimonialsResponse, ApiFailure> {
    get("/catalog/testimonials").await
}

pub async fn fetch_clinic() -> Result<ClinicResponse, ApiFailure> {
    get("/catalog/clinic").await
}

/// Upcoming Saturdays and Sundays for the date picker
pub async fn fetch_weekend_dates() -> Result<Vec<WeekendDate>, ApiFailure> {
    let response: DatesResponse = get("/booking/dates").await?;
    Ok(response.dates)
}

pub async fn fetch_slots() -> Result<SlotsResponse, ApiFailure> {
    get("/booking/slots").await
}

/// Submit an appointment; the server sends all three emails before answering
pub async fn submit_appointment(
    fields: &AppointmentFields,
    idempotency_key: &str,
) -> Result<BookingResponse, ApiFailure> {
    post("/appointments", fields, Some(idempotency_key)).await
}

pub async fn submit_video_call(
    fields: &VideoCallFields,
    idempotency_key: &str,
) -> Result<BookingResponse, ApiFailure> {
    post("/video-calls", fields, Some(idempotency_key)).await
}

pub async fn login(email: &str, password: &str) -> Result<SessionResponse, ApiFailure> {
    let body = serde_json::json!({ "email": email, "password": password });
    post("/session/login", &body, None).await
}

pub async fn logout(session_id: &str) -> Result<SessionResponse, ApiFailure> {
    post(&format!("/session/{}/logout", session_id), &serde_json::json!({}), None).await
}

pub async fn fetch_appointments(session_id: &str) -> Result<AppointmentListResponse, ApiFailure> {
    get(&format!("/session/{}/appointments", session_id)).await
}

pub async fn cancel_appointment(
    session_id: &str,
    appointment_id: &str,
) -> Result<CancelResponse, ApiFailure> {
    post(
        &format!("/session/{}/appointments/{}/cancel", session_id, appointment_id),
        &serde_json::json!({ "confirm": true }),
        None,
    )
    .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_body_keeps_code_and_step() {
        let body: ApiError = serde_json::from_str(
            r#"{"error":{"code":"DELIVERY_FAILED","message":"Mail service unavailable","reason":"unavailable","step":"patient"},"request_id":"r"}"#,
        )
        .unwrap();
        let failure = ApiFailure::from(body.error);
        assert!(failure.is_delivery_failure());
        assert_eq!(failure.step.as_deref(), Some("patient"));
        assert_eq!(failure.to_string(), "Mail service unavailable");
        assert!(failure.hint().unwrap().contains("confirmation email"));

        let practitioner = ApiFailure {
            step: Some("practitioner-2".to_string()),
            ..failure
        };
        assert!(practitioner.hint().unwrap().contains("not been notified"));
    }

    #[test]
    fn test_error_body_without_step() {
        let body: ApiError = serde_json::from_str(
            r#"{"error":{"code":"IDEMPOTENCY_KEY_REUSED","message":"Please submit it again."},"request_id":"r"}"#,
        )
        .unwrap();
        let failure = ApiFailure::from(body.error);
        assert!(failure.is_key_reused());
        assert!(!failure.is_delivery_failure());
        assert_eq!(failure.step, None);
        assert!(failure.hint().is_some());
    }

    #[test]
    fn test_idempotency_keys_are_v4_uuids() {
        let first = new_idempotency_key();
        let second = new_idempotency_key();
        assert_ne!(first, second);
        let parsed = uuid::Uuid::parse_str(&first).unwrap();
        assert_eq!(parsed.get_version_num(), 4);
    }

    #[test]
    fn test_local_failure_has_no_hint() {
        let failure = ApiFailure::local("Network error: offline".to_string());
        assert_eq!(failure.code, None);
        assert_eq!(failure.hint(), None);
    }
}
