//! Booking Desk
//!
//! Async owner of one [`BookingForm`]. Runs the sends for a submit while the
//! form sits in `Sending`, so overlapping submits from the same form never
//! reach the notifier.

use chrono::{DateTime, NaiveDate, Utc};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use super::details::{BookingDetails, ValidationError};
use super::form::{BookingForm, FormLocked, FormPhase, SubmitRejected};
use crate::notify::{DispatchError, DispatchReport, NotificationSaga};

/// Result of [`BookingDesk::submit`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// All three notifications delivered
    Confirmed(DispatchReport),
    /// A send failed; the form keeps its fields
    Failed(DispatchError),
    /// Another submit from this form is still running
    AlreadySending,
    /// Nothing was sent
    Invalid(ValidationError),
}

pub struct BookingDesk {
    form: Mutex<BookingForm>,
    saga: Arc<NotificationSaga>,
}

impl BookingDesk {
    pub fn new(saga: Arc<NotificationSaga>, confirmation_secs: u64) -> Self {
        Self {
            form: Mutex::new(BookingForm::with_confirmation_display(confirmation_secs)),
            saga,
        }
    }

    pub async fn edit(
        &self,
        f: impl FnOnce(&mut BookingDetails),
    ) -> Result<(), FormLocked> {
        self.form.lock().await.edit(f)
    }

    pub async fn fill(&self, details: BookingDetails) -> Result<(), FormLocked> {
        self.form.lock().await.fill(details)
    }

    pub async fn phase(&self) -> FormPhase {
        self.form.lock().await.phase().clone()
    }

    pub async fn details(&self) -> BookingDetails {
        self.form.lock().await.details().clone()
    }

    /// Validate, send the notifications, and record the outcome.
    ///
    /// The form lock is released while the sends run.
    pub async fn submit(&self, today: NaiveDate) -> SubmitOutcome {
        let (booking, key) = {
            let mut form = self.form.lock().await;
            form.tick(Utc::now());
            match form.begin_submit(today) {
                Ok(booking) => (booking, form.idempotency_key().to_string()),
                Err(SubmitRejected::AlreadySending) => {
                    debug!("Submit ignored, already sending");
                    return SubmitOutcome::AlreadySending;
                }
                Err(SubmitRejected::Invalid(err)) => {
                    debug!("Submit rejected: {}", err);
                    return SubmitOutcome::Invalid(err);
                }
            }
        };

        info!(booking_key = %key, kind = ?booking.kind, "Sending booking notifications");
        let result = self.saga.dispatch(&key, &booking).await;

        self.form.lock().await.complete(&result, Utc::now());
        match result {
            Ok(report) => SubmitOutcome::Confirmed(report),
            Err(err) => {
                warn!(booking_key = %key, "Booking not confirmed: {}", err);
                SubmitOutcome::Failed(err)
            }
        }
    }

    /// Advance the confirmation timer
    pub async fn tick(&self, now: DateTime<Utc>) -> bool {
        self.form.lock().await.tick(now)
    }

    pub async fn acknowledge_failure(&self) {
        self.form.lock().await.acknowledge_failure();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booking::ConsultationMode;
    use crate::notify::testing::ScriptedNotifier;
    use crate::notify::{NotifyError, ReasonCode, Recipient, Step};
    use tokio::sync::Semaphore;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
    }

    fn details() -> BookingDetails {
        BookingDetails {
            name: "Test Patient".to_string(),
            email: "t@example.com".to_string(),
            phone: "+910000000000".to_string(),
            date: "2026-10-17".to_string(),
            time_slot: "12:00 PM - 1:00 PM".to_string(),
            mode: Some(ConsultationMode::Online),
            message: String::new(),
        }
    }

    fn desk(notifier: Arc<ScriptedNotifier>) -> BookingDesk {
        let saga = NotificationSaga::new(
            notifier,
            [
                Recipient::new("Dr. Arijit Sen", "doctor@example.com"),
                Recipient::new("Clinic Desk", "desk@example.com"),
            ],
        );
        BookingDesk::new(Arc::new(saga), 7)
    }

    #[tokio::test]
    async fn test_rapid_double_submit_sends_once() {
        let gate = Arc::new(Semaphore::new(0));
        let notifier = Arc::new(ScriptedNotifier::gated(gate.clone()));
        let started = notifier.started();
        let desk = Arc::new(desk(notifier.clone()));
        desk.fill(details()).await.unwrap();

        let first = {
            let desk = desk.clone();
            tokio::spawn(async move { desk.submit(today()).await })
        };
        started.notified().await;

        assert_eq!(desk.submit(today()).await, SubmitOutcome::AlreadySending);
        assert_eq!(desk.phase().await, FormPhase::Sending);

        gate.add_permits(3);
        assert!(matches!(
            first.await.unwrap(),
            SubmitOutcome::Confirmed(_)
        ));

        assert_eq!(notifier.call_count(), 3);
        for to in ["doctor@example.com", "desk@example.com", "t@example.com"] {
            assert_eq!(notifier.attempts_for(to), 1);
        }
    }

    #[tokio::test]
    async fn test_success_clears_form() {
        let notifier = Arc::new(ScriptedNotifier::new());
        let desk = desk(notifier.clone());
        desk.fill(details()).await.unwrap();

        let outcome = desk.submit(today()).await;
        assert!(matches!(outcome, SubmitOutcome::Confirmed(ref r) if r.delivered.len() == 3));
        assert!(matches!(desk.phase().await, FormPhase::Confirmed { .. }));
        assert!(desk.details().await.is_blank());

        assert!(desk.tick(Utc::now() + chrono::Duration::seconds(8)).await);
        assert_eq!(desk.phase().await, FormPhase::Editing);
    }

    #[tokio::test]
    async fn test_invalid_makes_no_calls() {
        let notifier = Arc::new(ScriptedNotifier::new());
        let desk = desk(notifier.clone());
        desk.fill(BookingDetails {
            mode: None,
            ..details()
        })
        .await
        .unwrap();

        assert_eq!(
            desk.submit(today()).await,
            SubmitOutcome::Invalid(ValidationError::ModeNotSelected)
        );
        assert_eq!(notifier.call_count(), 0);
    }

    #[tokio::test]
    async fn test_failure_then_retry_does_not_duplicate() {
        let notifier = Arc::new(ScriptedNotifier::new());
        notifier.fail_for(
            "t@example.com",
            NotifyError::new(ReasonCode::QuotaExceeded, "Monthly limit reached"),
        );
        let desk = desk(notifier.clone());
        desk.fill(details()).await.unwrap();

        let outcome = desk.submit(today()).await;
        assert!(matches!(
            outcome,
            SubmitOutcome::Failed(DispatchError::Step { step: Step::Patient, .. })
        ));
        assert_eq!(desk.details().await, details());

        notifier.clear_failures();
        desk.acknowledge_failure().await;
        match desk.submit(today()).await {
            SubmitOutcome::Confirmed(report) => {
                assert_eq!(report.delivered, vec![Step::Patient]);
                assert_eq!(report.skipped.len(), 2);
            }
            other => panic!("expected confirmation, got {:?}", other),
        }
        assert_eq!(notifier.attempts_for("doctor@example.com"), 1);
    }
}
