//! Clinic REST API
//!
//! HTTP API layer for the practice website, built with Axum.
//!
//! # Endpoints
//!
//! ## Catalog
//! - `GET /api/v1/catalog/services` - List services
//! - `GET /api/v1/catalog/services/:id` - Get a service
//! - `GET /api/v1/catalog/qualifications` - List qualifications
//! - `GET /api/v1/catalog/blog` - List blog posts
//! - `GET /api/v1/catalog/blog/:id` - Get a blog post
//! - `GET /api/v1/catalog/testimonials` - Testimonials and average rating
//! - `GET /api/v1/catalog/clinic` - Contact details and navigation
//!
//! ## Booking
//! - `GET /api/v1/booking/dates` - Upcoming weekend dates
//! - `GET /api/v1/booking/slots` - Time slots
//! - `POST /api/v1/appointments` - Submit an appointment request
//! - `POST /api/v1/video-calls` - Submit a video call request
//!
//! ## Session
//! - `POST /api/v1/session/login` - Mock login
//! - `GET /api/v1/session/:id` - Session state
//! - `POST /api/v1/session/:id/logout` - Logout
//! - `POST /api/v1/session/:id/view` - Switch view
//! - `GET /api/v1/session/:id/appointments` - Dashboard appointments
//! - `POST /api/v1/session/:id/appointments/:apt/cancel` - Cancel an appointment
//!
//! ## Health
//! - `GET /health/live` - Liveness probe
//! - `GET /health/ready` - Readiness probe
//! - `GET /health` - Full health status
//!
//! # Example
//!
//! ```rust,ignore
//! use clinic::api::{serve, AppState};
//! use clinic::config::Config;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let state = AppState::from_config(Config::load_default())?;
//!     serve(state).await?;
//!     Ok(())
//! }
//! ```

pub mod dto;
pub mod error;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::{build_notifier, AppState};

use axum::{
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use std::path::Path;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

/// Build the API router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let catalog_routes = Router::new()
        .route("/services", get(routes::catalog::list_services))
        .route("/services/:id", get(routes::catalog::get_service))
        .route("/qualifications", get(routes::catalog::list_qualifications))
        .route("/blog", get(routes::catalog::list_blog_posts))
        .route("/blog/:id", get(routes::catalog::get_blog_post))
        .route("/testimonials", get(routes::catalog::list_testimonials))
        .route("/clinic", get(routes::catalog::clinic_info));

    let session_routes = Router::new()
        .route("/login", post(routes::session::login))
        .route("/:id", get(routes::session::get_session))
        .route("/:id/logout", post(routes::session::logout))
        .route("/:id/view", post(routes::session::set_view))
        .route("/:id/appointments", get(routes::session::list_appointments))
        .route(
            "/:id/appointments/:apt/cancel",
            post(routes::session::cancel_appointment),
        );

    let api_routes = Router::new()
        .nest("/catalog", catalog_routes)
        .route("/booking/dates", get(routes::booking::weekend_dates))
        .route("/booking/slots", get(routes::booking::slots))
        .route("/appointments", post(routes::booking::create_appointment))
        .route("/video-calls", post(routes::booking::create_video_call))
        .nest("/session", session_routes);

    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/ready", get(routes::health::readiness))
        .route("/", get(routes::health::full_health));

    let cors = cors_layer(&state.config.server.cors_origins);
    let static_dir = state.config.server.static_dir.clone();
    let shared_state = Arc::new(state);

    let mut router = Router::new()
        .nest("/api/v1", api_routes)
        .nest("/health", health_routes);

    // Built UI, with index.html for client-side routes
    if let Some(dir) = static_dir {
        let index = Path::new(&dir).join("index.html");
        router = router.fallback_service(ServeDir::new(&dir).not_found_service(ServeFile::new(index)));
    }

    router
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(shared_state)
}

/// Configured origins, or anything when none parse
fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins.iter().filter_map(|o| o.parse().ok()).collect();
    if origins.is_empty() {
        return CorsLayer::permissive();
    }
    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Start the API server
pub async fn serve(state: AppState) -> Result<(), ApiError> {
    let addr = state.addr();
    let router = build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Clinic API listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("Clinic API shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booking::upcoming_weekends;
    use crate::config::Config;
    use crate::notify::testing::ScriptedNotifier;
    use crate::notify::{NotifyError, ReasonCode};
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use chrono::Local;
    use serde_json::{json, Value};
    use tower::util::ServiceExt;

    fn create_test_app() -> (Router, Arc<ScriptedNotifier>) {
        let notifier = Arc::new(ScriptedNotifier::new());
        let state = AppState::with_notifier(Config::default(), notifier.clone()).unwrap();
        (build_router(state), notifier)
    }

    async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }

    fn get_req(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("Content-Type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn appointment_body() -> Value {
        let saturday = upcoming_weekends(Local::now().date_naive(), 1).remove(0);
        json!({
            "name": "Test Patient",
            "email": "t@example.com",
            "phone": "+910000000000",
            "date": saturday.value,
            "time_slot": "12:00 PM - 1:00 PM",
            "mode": "online"
        })
    }

    #[tokio::test]
    async fn test_health_endpoints() {
        let (app, _) = create_test_app();

        let (status, _) = send(&app, get_req("/health/live")).await;
        assert_eq!(status, StatusCode::OK);

        let (status, _) = send(&app, get_req("/health/ready")).await;
        assert_eq!(status, StatusCode::OK);

        let (status, body) = send(&app, get_req("/health")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["email"], "dry-run");
        assert_eq!(body["notifier"], "scripted");
    }

    #[tokio::test]
    async fn test_catalog_routes() {
        let (app, _) = create_test_app();

        let (status, body) = send(&app, get_req("/api/v1/catalog/services")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.as_array().unwrap().len(), 6);

        let (status, body) = send(&app, get_req("/api/v1/catalog/services/diabetes")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["id"], "diabetes");

        let (status, body) = send(&app, get_req("/api/v1/catalog/services/unknown")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");

        let (_, body) = send(&app, get_req("/api/v1/catalog/testimonials")).await;
        assert_eq!(body["total"], 8);

        let (_, body) = send(&app, get_req("/api/v1/catalog/clinic")).await;
        assert_eq!(body["nav"].as_array().unwrap().len(), 5);
    }

    #[tokio::test]
    async fn test_weekend_dates() {
        let (app, _) = create_test_app();

        let (status, body) = send(&app, get_req("/api/v1/booking/dates")).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total"], 8);

        let (status, _) = send(&app, get_req("/api/v1/booking/dates?count=0")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (_, body) = send(&app, get_req("/api/v1/booking/slots")).await;
        assert_eq!(body["clinic"].as_array().unwrap().len(), 5);
        assert_eq!(body["video_call"].as_array().unwrap().len(), 7);
    }

    #[tokio::test]
    async fn test_appointment_confirmed() {
        let (app, notifier) = create_test_app();

        let (status, body) = send(&app, post_json("/api/v1/appointments", appointment_body())).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["status"], "confirmed");
        assert_eq!(body["report"]["delivered"].as_array().unwrap().len(), 3);
        assert_eq!(body["confirmation_display_secs"], 7);
        assert_eq!(notifier.call_count(), 3);
    }

    #[tokio::test]
    async fn test_appointment_without_mode_sends_nothing() {
        let (app, notifier) = create_test_app();
        let mut body = appointment_body();
        body.as_object_mut().unwrap().remove("mode");

        let (status, body) = send(&app, post_json("/api/v1/appointments", body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
        assert_eq!(notifier.call_count(), 0);
    }

    #[tokio::test]
    async fn test_delivery_failure_and_keyed_retry() {
        let (app, notifier) = create_test_app();
        notifier.fail_for(
            "t@example.com",
            NotifyError::new(ReasonCode::InvalidRecipient, "Recipient rejected"),
        );

        let request = |body: Value| {
            Request::builder()
                .method("POST")
                .uri("/api/v1/appointments")
                .header("Content-Type", "application/json")
                .header("Idempotency-Key", "booking-42")
                .body(Body::from(body.to_string()))
                .unwrap()
        };

        let (status, body) = send(&app, request(appointment_body())).await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body["error"]["code"], "DELIVERY_FAILED");
        assert_eq!(body["error"]["reason"], "invalid_recipient");
        assert_eq!(body["error"]["step"], "patient");

        notifier.clear_failures();
        let (status, body) = send(&app, request(appointment_body())).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["idempotency_key"], "booking-42");
        assert_eq!(body["report"]["skipped"].as_array().unwrap().len(), 2);
        assert_eq!(notifier.call_count(), 4);
    }

    #[tokio::test]
    async fn test_shared_key_with_other_details_is_rejected() {
        let (app, notifier) = create_test_app();
        let request = |body: Value| {
            Request::builder()
                .method("POST")
                .uri("/api/v1/appointments")
                .header("Content-Type", "application/json")
                .header("Idempotency-Key", "shared-key")
                .body(Body::from(body.to_string()))
                .unwrap()
        };

        let (status, _) = send(&app, request(appointment_body())).await;
        assert_eq!(status, StatusCode::CREATED);

        let mut other = appointment_body();
        other["name"] = json!("Other Patient");
        other["email"] = json!("other@example.com");
        let (status, body) = send(&app, request(other)).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"]["code"], "IDEMPOTENCY_KEY_REUSED");
        assert_ne!(body["status"], "confirmed");
        assert_eq!(notifier.call_count(), 3);
        assert_eq!(notifier.attempts_for("other@example.com"), 0);
    }

    #[tokio::test]
    async fn test_video_call_request() {
        let (app, notifier) = create_test_app();
        let today = Local::now().date_naive().format("%Y-%m-%d").to_string();

        let (status, body) = send(
            &app,
            post_json(
                "/api/v1/video-calls",
                json!({
                    "name": "Rahul Das",
                    "email": "rahul@example.com",
                    "phone": "+919999999999",
                    "preferred_date": today,
                    "preferred_time": "09:00-10:00",
                    "reason": "Follow-up"
                }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["booking"]["kind"], "video_call");
        assert_eq!(body["booking"]["time_slot"], "09:00 AM - 10:00 AM");
        assert_eq!(notifier.attempts_for("rahul@example.com"), 1);
    }

    #[tokio::test]
    async fn test_session_flow() {
        let (app, _) = create_test_app();

        let (status, body) = send(
            &app,
            post_json(
                "/api/v1/session/login",
                json!({"email": "patient@example.com", "password": "pw"}),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["session"]["view"], "dashboard");
        assert_eq!(body["display_name"], "patient");
        let id = body["session_id"].as_str().unwrap().to_string();

        let (_, body) = send(&app, get_req(&format!("/api/v1/session/{}/appointments", id))).await;
        assert_eq!(body["total"], 2);
        assert_eq!(body["active"], 2);

        let cancel_uri = format!("/api/v1/session/{}/appointments/apt-1/cancel", id);
        let (_, body) = send(&app, post_json(&cancel_uri, json!({"confirm": false}))).await;
        assert_eq!(body["changed"], false);
        let (_, body) = send(&app, post_json(&cancel_uri, json!({"confirm": true}))).await;
        assert_eq!(body["changed"], true);
        assert_eq!(body["appointment"]["status"], "Cancelled");

        let logout_uri = format!("/api/v1/session/{}/logout", id);
        let (_, first) = send(&app, post_json(&logout_uri, json!({}))).await;
        let (_, second) = send(&app, post_json(&logout_uri, json!({}))).await;
        assert_eq!(first, second);
        assert_eq!(first["session"]["view"], "landing");
        assert_eq!(first["session"]["email"], "");

        let (status, _) =
            send(&app, get_req(&format!("/api/v1/session/{}/appointments", id))).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_login_validation_and_unknown_session() {
        let (app, _) = create_test_app();

        let (status, _) = send(
            &app,
            post_json("/api/v1/session/login", json!({"email": "", "password": "pw"})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = send(&app, get_req("/api/v1/session/not-a-uuid")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
