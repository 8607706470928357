//! # Clinic
//!
//! Backend for a single practitioner's website: service catalog, weekend
//! appointment booking with email notifications, and a mock patient login
//! with a small dashboard.
//!
//! ## Modules
//!
//! - [`catalog`]: Static site content (services, qualifications, blog, reviews)
//! - [`booking`]: Weekend dates, slots, form validation and the booking form state machine
//! - [`notify`]: Email delivery and the three-step notification saga
//! - [`session`]: Mock login session and dashboard appointments
//! - [`api`]: REST API server with Axum
//! - [`config`]: TOML configuration with environment overrides
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use clinic::booking::{BookingDesk, ConsultationMode, SubmitOutcome, upcoming_weekends};
//! use clinic::notify::{LogNotifier, NotificationSaga, Recipient};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let saga = NotificationSaga::new(
//!         Arc::new(LogNotifier),
//!         [
//!             Recipient::new("Dr. Arijit Sen", "doctor@example.com"),
//!             Recipient::new("Dr. Arijit Sen", "desk@example.com"),
//!         ],
//!     );
//!     let desk = BookingDesk::new(Arc::new(saga), 7);
//!
//!     let today = chrono::Local::now().date_naive();
//!     let saturday = upcoming_weekends(today, 1).remove(0);
//!     desk.edit(|d| {
//!         d.name = "Test Patient".into();
//!         d.email = "t@example.com".into();
//!         d.phone = "+910000000000".into();
//!         d.date = saturday.value.clone();
//!         d.time_slot = "12:00 PM - 1:00 PM".into();
//!         d.mode = Some(ConsultationMode::Online);
//!     })
//!     .await?;
//!
//!     if let SubmitOutcome::Confirmed(report) = desk.submit(today).await {
//!         println!("Sent {} notifications", report.delivered.len());
//!     }
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod booking;
pub mod catalog;
pub mod config;
pub mod notify;
pub mod session;

pub use api::{build_router, serve, ApiError, AppState};

pub use booking::{
    Booking, BookingDesk, BookingDetails, BookingForm, BookingKind, ConsultationMode, FormPhase,
    SubmitOutcome, ValidationError, VideoCallDetails, WeekendDate,
};

pub use notify::{
    DispatchError, DispatchReport, EmailJsClient, LogNotifier, NotificationSaga, Notifier,
    NotifyError, ReasonCode, Recipient,
};

pub use session::{Dashboard, Session, SessionError, SessionStore, UserAppointment, View};

pub use config::{Config, ConfigError, LoggingConfig};
