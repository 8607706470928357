//! Booking Routes
//!
//! - GET /api/v1/booking/dates - Upcoming weekend dates
//! - GET /api/v1/booking/slots - Clinic and video call slots
//! - POST /api/v1/appointments - Book a clinic or video appointment
//! - POST /api/v1/video-calls - Request a video consultation
//!
//! Booking requests carry an optional `Idempotency-Key` header. Retrying a
//! failed request with the same key only sends the notifications that did not
//! go out the first time. Reusing a key with different details answers 422.

use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    Json,
};
use chrono::Local;
use std::sync::Arc;
use uuid::Uuid;

use crate::api::dto::{BookingResponse, DatesQuery, DatesResponse, SlotsResponse};
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::booking::{
    upcoming_weekends, Booking, BookingDetails, VideoCallDetails, CLINIC_SLOTS, MAX_WEEKEND_DATES,
    VIDEO_CALL_SLOTS,
};

/// Header carrying the client's key for one logical booking
pub const IDEMPOTENCY_HEADER: &str = "idempotency-key";

/// GET /api/v1/booking/dates
pub async fn weekend_dates(
    State(state): State<Arc<AppState>>,
    Query(query): Query<DatesQuery>,
) -> ApiResult<Json<DatesResponse>> {
    let count = query.count.unwrap_or(state.config.booking.weekend_dates);
    if count == 0 || count > MAX_WEEKEND_DATES {
        return Err(ApiError::Validation(format!(
            "count must be between 1 and {}",
            MAX_WEEKEND_DATES
        )));
    }

    let dates = upcoming_weekends(Local::now().date_naive(), count);
    Ok(Json(DatesResponse {
        total: dates.len(),
        dates,
    }))
}

/// GET /api/v1/booking/slots
pub async fn slots() -> Json<SlotsResponse> {
    Json(SlotsResponse {
        clinic: CLINIC_SLOTS,
        video_call: VIDEO_CALL_SLOTS,
    })
}

/// POST /api/v1/appointments
pub async fn create_appointment(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(details): Json<BookingDetails>,
) -> ApiResult<(StatusCode, Json<BookingResponse>)> {
    let booking = details.validate(Local::now().date_naive())?;
    dispatch(&state, &headers, booking).await
}

/// POST /api/v1/video-calls
pub async fn create_video_call(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(details): Json<VideoCallDetails>,
) -> ApiResult<(StatusCode, Json<BookingResponse>)> {
    let booking = details.validate(Local::now().date_naive())?;
    dispatch(&state, &headers, booking).await
}

async fn dispatch(
    state: &AppState,
    headers: &HeaderMap,
    booking: Booking,
) -> ApiResult<(StatusCode, Json<BookingResponse>)> {
    let key = idempotency_key(headers)?;
    let report = state.saga.dispatch(&key, &booking).await?;

    tracing::info!(
        booking_key = %key,
        delivered = report.delivered.len(),
        skipped = report.skipped.len(),
        "Booking confirmed"
    );

    Ok((
        StatusCode::CREATED,
        Json(BookingResponse {
            status: "confirmed".to_string(),
            idempotency_key: key,
            booking,
            report,
            confirmation_display_secs: state.config.booking.confirmation_display_secs,
        }),
    ))
}

/// Key from the header, or a fresh one
fn idempotency_key(headers: &HeaderMap) -> ApiResult<String> {
    let Some(value) = headers.get(IDEMPOTENCY_HEADER) else {
        return Ok(Uuid::new_v4().to_string());
    };

    let key = value
        .to_str()
        .map_err(|_| ApiError::Validation("Idempotency-Key must be ASCII".to_string()))?
        .trim();
    if key.is_empty() || key.len() > 128 {
        return Err(ApiError::Validation(
            "Idempotency-Key must be 1 to 128 characters".to_string(),
        ));
    }
    Ok(key.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_idempotency_key_from_header() {
        let mut headers = HeaderMap::new();
        headers.insert(IDEMPOTENCY_HEADER, HeaderValue::from_static(" abc-123 "));
        assert_eq!(idempotency_key(&headers).unwrap(), "abc-123");
    }

    #[test]
    fn test_idempotency_key_generated() {
        let key = idempotency_key(&HeaderMap::new()).unwrap();
        assert!(Uuid::parse_str(&key).is_ok());
    }

    #[test]
    fn test_idempotency_key_too_long() {
        let mut headers = HeaderMap::new();
        let long = "k".repeat(129);
        headers.insert(IDEMPOTENCY_HEADER, HeaderValue::from_str(&long).unwrap());
        assert!(matches!(
            idempotency_key(&headers),
            Err(ApiError::Validation(_))
        ));
    }
}
