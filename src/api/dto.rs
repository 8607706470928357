//! Data Transfer Objects
//!
//! Request and response types for the API endpoints.
//! These types are serialized/deserialized to/from JSON.

use serde::{Deserialize, Serialize};

use crate::booking::{Booking, VideoSlot, WeekendDate};
use crate::catalog::{ClinicInfo, NavItem, Testimonial};
use crate::notify::DispatchReport;
use crate::session::{Session, UserAppointment, View};

// ============================================
// CATALOG DTOs
// ============================================

/// Testimonials with their mean rating
#[derive(Debug, Serialize)]
pub struct TestimonialsResponse {
    pub testimonials: &'static [Testimonial],
    pub average_rating: f64,
    pub total: usize,
}

/// Contact details and navigation
#[derive(Debug, Serialize)]
pub struct ClinicResponse {
    pub clinic: &'static ClinicInfo,
    pub nav: &'static [NavItem],
}

// ============================================
// BOOKING DTOs
// ============================================

/// Query for the weekend date list
#[derive(Debug, Default, Deserialize)]
pub struct DatesQuery {
    /// Defaults to the configured count
    pub count: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct DatesResponse {
    pub dates: Vec<WeekendDate>,
    pub total: usize,
}

#[derive(Debug, Serialize)]
pub struct SlotsResponse {
    pub clinic: &'static [&'static str],
    pub video_call: &'static [VideoSlot],
}

/// Successful booking
#[derive(Debug, Serialize)]
pub struct BookingResponse {
    /// Always "confirmed"
    pub status: String,
    pub idempotency_key: String,
    pub booking: Booking,
    pub report: DispatchReport,
    /// Seconds the confirmation should stay on screen
    pub confirmation_display_secs: u64,
}

// ============================================
// SESSION DTOs
// ============================================

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub session_id: String,
    pub session: Session,
    pub display_name: String,
}

#[derive(Debug, Deserialize)]
pub struct ViewRequest {
    pub view: View,
}

#[derive(Debug, Serialize)]
pub struct AppointmentListResponse {
    pub appointments: Vec<UserAppointment>,
    pub total: usize,
    pub active: usize,
}

#[derive(Debug, Default, Deserialize)]
pub struct CancelRequest {
    /// The user answered yes to "cancel this appointment?"
    #[serde(default)]
    pub confirm: bool,
}

#[derive(Debug, Serialize)]
pub struct CancelResponse {
    pub appointment: UserAppointment,
    /// False when not confirmed or already cancelled
    pub changed: bool,
}

// ============================================
// HEALTH DTOs
// ============================================

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall status: "healthy" or "degraded"
    pub status: String,
    /// "live" or "dry-run"
    pub email: String,
    /// Name of the active notifier
    pub notifier: String,
    /// Live sessions
    pub sessions: usize,
    /// Uptime in seconds
    pub uptime_seconds: u64,
    /// Server version
    pub version: String,
}
