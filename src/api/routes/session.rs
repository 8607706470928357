//! Session Routes
//!
//! Mock login and the patient dashboard.
//!
//! - POST /api/v1/session/login - Log in with any non-empty email/password
//! - GET /api/v1/session/:id - Current session state
//! - POST /api/v1/session/:id/logout - Log out
//! - POST /api/v1/session/:id/view - Switch between landing and dashboard
//! - GET /api/v1/session/:id/appointments - Dashboard appointments
//! - POST /api/v1/session/:id/appointments/:apt/cancel - Cancel an appointment

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::api::dto::{
    AppointmentListResponse, CancelRequest, CancelResponse, LoginRequest, SessionResponse,
    ViewRequest,
};
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::session::{AppointmentStatus, Session};

fn session_response(id: Uuid, session: Session) -> SessionResponse {
    SessionResponse {
        session_id: id.to_string(),
        display_name: session.display_name().to_string(),
        session,
    }
}

fn parse_id(id: &str) -> ApiResult<Uuid> {
    Uuid::parse_str(id).map_err(|_| ApiError::NotFound(format!("Session not found: {}", id)))
}

/// POST /api/v1/session/login
pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(req): Json<LoginRequest>,
) -> ApiResult<(StatusCode, Json<SessionResponse>)> {
    let (id, session) = state.sessions.login(&req.email, &req.password).await?;
    tracing::info!(session_id = %id, "Mock login");
    Ok((StatusCode::CREATED, Json(session_response(id, session))))
}

/// GET /api/v1/session/:id
pub async fn get_session(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<SessionResponse>> {
    let id = parse_id(&id)?;
    let session = state.sessions.get(id).await?;
    Ok(Json(session_response(id, session)))
}

/// POST /api/v1/session/:id/logout
pub async fn logout(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<SessionResponse>> {
    let id = parse_id(&id)?;
    let session = state.sessions.logout(id).await?;
    Ok(Json(session_response(id, session)))
}

/// POST /api/v1/session/:id/view
pub async fn set_view(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(req): Json<ViewRequest>,
) -> ApiResult<Json<SessionResponse>> {
    let id = parse_id(&id)?;
    let session = state.sessions.set_view(id, req.view).await?;
    Ok(Json(session_response(id, session)))
}

/// GET /api/v1/session/:id/appointments
pub async fn list_appointments(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> ApiResult<Json<AppointmentListResponse>> {
    let id = parse_id(&id)?;
    let appointments = state.sessions.appointments(id).await?;
    let active = appointments
        .iter()
        .filter(|a| a.status != AppointmentStatus::Cancelled)
        .count();

    Ok(Json(AppointmentListResponse {
        total: appointments.len(),
        active,
        appointments,
    }))
}

/// POST /api/v1/session/:id/appointments/:apt/cancel
pub async fn cancel_appointment(
    State(state): State<Arc<AppState>>,
    Path((id, appointment_id)): Path<(String, String)>,
    body: Option<Json<CancelRequest>>,
) -> ApiResult<Json<CancelResponse>> {
    let id = parse_id(&id)?;
    let req = body.map(|Json(req)| req).unwrap_or_default();
    let (appointment, changed) = state
        .sessions
        .cancel(id, &appointment_id, req.confirm)
        .await?;

    if changed {
        tracing::info!(session_id = %id, appointment = %appointment_id, "Appointment cancelled");
    }
    Ok(Json(CancelResponse {
        appointment,
        changed,
    }))
}
