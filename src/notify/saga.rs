//! Notification Saga
//!
//! A booking is announced by three emails sent strictly one after another:
//! the two practitioner inboxes, then the patient. Each delivered step is
//! recorded in a [`DeliveryLedger`] under the booking's idempotency key, so
//! running the saga again with the same key only sends what is missing.
//! A key stays bound to the booking it was first used for; reusing it for
//! different details is refused.

use serde::Serialize;
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::{debug, info, warn};

use super::templates;
use super::{Notifier, NotifyError, OutboundEmail};
use crate::booking::Booking;
use crate::catalog::{self, ClinicInfo};

/// How long delivered steps are remembered
const DEFAULT_RETENTION: Duration = Duration::from_secs(24 * 60 * 60);

/// One email of the saga, in send order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    PractitionerPrimary,
    PractitionerSecondary,
    Patient,
}

impl Step {
    pub const ALL: [Step; 3] = [
        Step::PractitionerPrimary,
        Step::PractitionerSecondary,
        Step::Patient,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Step::PractitionerPrimary => "practitioner-1",
            Step::PractitionerSecondary => "practitioner-2",
            Step::Patient => "patient",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named mailbox
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recipient {
    pub name: String,
    pub email: String,
}

impl Recipient {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}

// ============================================
// Ledger
// ============================================

/// Stable identity of a booking's content
pub fn fingerprint(booking: &Booking) -> String {
    serde_json::to_string(booking).unwrap_or_else(|_| format!("{:?}", booking))
}

struct LedgerEntry {
    fingerprint: String,
    steps: HashSet<Step>,
    touched: Instant,
}

#[derive(Default)]
struct LedgerState {
    in_flight: HashSet<String>,
    delivered: HashMap<String, LedgerEntry>,
}

/// Delivered steps and in-flight dispatches, keyed by idempotency key
pub struct DeliveryLedger {
    state: Mutex<LedgerState>,
    retention: Duration,
}

impl Default for DeliveryLedger {
    fn default() -> Self {
        Self::with_retention(DEFAULT_RETENTION)
    }
}

impl DeliveryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_retention(retention: Duration) -> Self {
        Self {
            state: Mutex::new(LedgerState::default()),
            retention,
        }
    }

    fn lock(&self) -> MutexGuard<'_, LedgerState> {
        // The state stays consistent even if a holder panicked
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Mark `key` as in flight. Returns `None` if it already is.
    pub fn try_begin(self: &Arc<Self>, key: &str) -> Option<InFlightGuard> {
        let mut state = self.lock();
        let retention = self.retention;
        state
            .delivered
            .retain(|_, entry| entry.touched.elapsed() < retention);

        if !state.in_flight.insert(key.to_string()) {
            return None;
        }
        Some(InFlightGuard {
            ledger: Arc::clone(self),
            key: key.to_string(),
        })
    }

    pub fn is_in_flight(&self, key: &str) -> bool {
        self.lock().in_flight.contains(key)
    }

    /// False when `key` already carries steps for a different booking
    pub fn matches(&self, key: &str, fingerprint: &str) -> bool {
        self.lock()
            .delivered
            .get(key)
            .map(|entry| entry.fingerprint == fingerprint)
            .unwrap_or(true)
    }

    pub fn is_delivered(&self, key: &str, step: Step) -> bool {
        self.lock()
            .delivered
            .get(key)
            .map(|entry| entry.steps.contains(&step))
            .unwrap_or(false)
    }

    pub fn record(&self, key: &str, fingerprint: &str, step: Step) {
        let mut state = self.lock();
        let entry = state
            .delivered
            .entry(key.to_string())
            .or_insert_with(|| LedgerEntry {
                fingerprint: fingerprint.to_string(),
                steps: HashSet::new(),
                touched: Instant::now(),
            });
        entry.steps.insert(step);
        entry.touched = Instant::now();
    }

    /// Delivered steps for `key` in send order
    pub fn delivered_steps(&self, key: &str) -> Vec<Step> {
        let state = self.lock();
        let mut steps: Vec<Step> = state
            .delivered
            .get(key)
            .map(|entry| entry.steps.iter().copied().collect())
            .unwrap_or_default();
        steps.sort();
        steps
    }

    /// Number of keys with at least one delivered step
    pub fn len(&self) -> usize {
        self.lock().delivered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Clears the in-flight mark when dropped
pub struct InFlightGuard {
    ledger: Arc<DeliveryLedger>,
    key: String,
}

impl InFlightGuard {
    pub fn key(&self) -> &str {
        &self.key
    }
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.ledger.lock().in_flight.remove(&self.key);
    }
}

// ============================================
// Saga
// ============================================

/// Outcome of a successful dispatch
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DispatchReport {
    pub key: String,
    /// Steps sent during this run
    pub delivered: Vec<Step>,
    /// Steps already delivered by an earlier run with the same key
    pub skipped: Vec<Step>,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DispatchError {
    #[error("booking {0} is already being sent")]
    InFlight(String),

    #[error("booking key {0} was already used for a different booking")]
    KeyMismatch(String),

    #[error("{step} notification failed: {error}")]
    Step { step: Step, error: NotifyError },
}

impl DispatchError {
    /// Text for the person who submitted the form
    pub fn user_message(&self) -> String {
        match self {
            DispatchError::InFlight(_) => {
                "Your booking request is already being sent. Please wait.".to_string()
            }
            DispatchError::KeyMismatch(_) => {
                "This request does not match the booking it was first sent for. \
                 Please submit it again."
                    .to_string()
            }
            DispatchError::Step { error, .. } => error.user_message(),
        }
    }
}

/// Sends the three booking emails in order
pub struct NotificationSaga {
    notifier: Arc<dyn Notifier>,
    ledger: Arc<DeliveryLedger>,
    practitioners: [Recipient; 2],
    clinic: &'static ClinicInfo,
}

impl NotificationSaga {
    pub fn new(notifier: Arc<dyn Notifier>, practitioners: [Recipient; 2]) -> Self {
        Self {
            notifier,
            ledger: Arc::new(DeliveryLedger::new()),
            practitioners,
            clinic: catalog::clinic_info(),
        }
    }

    /// Share a ledger between sagas
    pub fn with_ledger(mut self, ledger: Arc<DeliveryLedger>) -> Self {
        self.ledger = ledger;
        self
    }

    pub fn ledger(&self) -> &Arc<DeliveryLedger> {
        &self.ledger
    }

    pub fn notifier_name(&self) -> &str {
        self.notifier.name()
    }

    pub fn practitioners(&self) -> &[Recipient; 2] {
        &self.practitioners
    }

    /// Render the email for one step
    pub fn compose(&self, step: Step, booking: &Booking) -> OutboundEmail {
        let summary = templates::text_summary(booking);
        match step {
            Step::PractitionerPrimary | Step::PractitionerSecondary => {
                let to = match step {
                    Step::PractitionerPrimary => &self.practitioners[0],
                    _ => &self.practitioners[1],
                };
                OutboundEmail {
                    to_name: to.name.clone(),
                    to_email: to.email.clone(),
                    subject: templates::practitioner_subject(booking),
                    html_body: templates::practitioner_notice(booking),
                    text_summary: summary,
                }
            }
            Step::Patient => OutboundEmail {
                to_name: booking.name.clone(),
                to_email: booking.email.clone(),
                subject: templates::patient_subject(booking),
                html_body: templates::patient_confirmation(booking, self.clinic),
                text_summary: summary,
            },
        }
    }

    /// Run every step not yet delivered for `key`, stopping at the first
    /// failure. Steps already delivered under `key` are skipped.
    pub async fn dispatch(
        &self,
        key: &str,
        booking: &Booking,
    ) -> Result<DispatchReport, DispatchError> {
        let _guard = self
            .ledger
            .try_begin(key)
            .ok_or_else(|| DispatchError::InFlight(key.to_string()))?;

        let fingerprint = fingerprint(booking);
        if !self.ledger.matches(key, &fingerprint) {
            warn!(booking_key = %key, "Idempotency key reused for different details");
            return Err(DispatchError::KeyMismatch(key.to_string()));
        }

        let mut report = DispatchReport {
            key: key.to_string(),
            delivered: Vec::new(),
            skipped: Vec::new(),
        };

        for step in Step::ALL {
            if self.ledger.is_delivered(key, step) {
                debug!(booking_key = %key, %step, "Step already delivered, skipping");
                report.skipped.push(step);
                continue;
            }

            let email = self.compose(step, booking);
            match self.notifier.send(&email).await {
                Ok(delivery) => {
                    self.ledger.record(key, &fingerprint, step);
                    info!(
                        booking_key = %key,
                        %step,
                        recipient = %delivery.recipient,
                        "Notification delivered"
                    );
                    report.delivered.push(step);
                }
                Err(error) => {
                    warn!(
                        booking_key = %key,
                        %step,
                        recipient = %email.to_email,
                        reason = %error.reason,
                        "Notification failed: {}",
                        error.message
                    );
                    return Err(DispatchError::Step { step, error });
                }
            }
        }

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booking::{BookingKind, ConsultationMode};
    use crate::notify::testing::ScriptedNotifier;
    use crate::notify::ReasonCode;
    use chrono::NaiveDate;
    use tokio::sync::Semaphore;

    fn booking() -> Booking {
        Booking {
            kind: BookingKind::Appointment,
            name: "Test Patient".to_string(),
            email: "t@example.com".to_string(),
            phone: "+910000000000".to_string(),
            date: NaiveDate::from_ymd_opt(2026, 10, 17).unwrap(),
            date_label: "Sat, Oct 17, 2026".to_string(),
            time_slot: "12:00 PM - 1:00 PM".to_string(),
            mode: ConsultationMode::Online,
            message: String::new(),
        }
    }

    fn practitioners() -> [Recipient; 2] {
        [
            Recipient::new("Dr. Arijit Sen", "doctor@example.com"),
            Recipient::new("Clinic Desk", "desk@example.com"),
        ]
    }

    fn saga(notifier: Arc<ScriptedNotifier>) -> NotificationSaga {
        NotificationSaga::new(notifier, practitioners())
    }

    #[tokio::test]
    async fn test_three_sends_in_order() {
        let notifier = Arc::new(ScriptedNotifier::new());
        let saga = saga(notifier.clone());

        let report = saga.dispatch("k1", &booking()).await.unwrap();
        assert_eq!(report.delivered, Step::ALL.to_vec());
        assert!(report.skipped.is_empty());

        let to: Vec<String> = notifier.attempts().into_iter().map(|e| e.to_email).collect();
        assert_eq!(to, ["doctor@example.com", "desk@example.com", "t@example.com"]);
        assert!(!saga.ledger().is_in_flight("k1"));
    }

    #[tokio::test]
    async fn test_failure_stops_saga() {
        let notifier = Arc::new(ScriptedNotifier::new());
        notifier.fail_for(
            "desk@example.com",
            NotifyError::new(ReasonCode::Unavailable, "down"),
        );
        let saga = saga(notifier.clone());

        let err = saga.dispatch("k1", &booking()).await.unwrap_err();
        assert!(matches!(
            err,
            DispatchError::Step { step: Step::PractitionerSecondary, .. }
        ));
        // Patient was never attempted
        assert_eq!(notifier.attempts_for("t@example.com"), 0);
        assert_eq!(
            saga.ledger().delivered_steps("k1"),
            vec![Step::PractitionerPrimary]
        );
    }

    #[tokio::test]
    async fn test_retry_skips_delivered_steps() {
        let notifier = Arc::new(ScriptedNotifier::new());
        notifier.fail_for(
            "t@example.com",
            NotifyError::new(ReasonCode::Timeout, "slow"),
        );
        let saga = saga(notifier.clone());
        assert!(saga.dispatch("k1", &booking()).await.is_err());

        notifier.clear_failures();
        let report = saga.dispatch("k1", &booking()).await.unwrap();
        assert_eq!(report.delivered, vec![Step::Patient]);
        assert_eq!(
            report.skipped,
            vec![Step::PractitionerPrimary, Step::PractitionerSecondary]
        );
        assert_eq!(notifier.attempts_for("doctor@example.com"), 1);
        assert_eq!(notifier.attempts_for("desk@example.com"), 1);
        assert_eq!(notifier.attempts_for("t@example.com"), 2);
    }

    #[tokio::test]
    async fn test_different_keys_are_independent() {
        let notifier = Arc::new(ScriptedNotifier::new());
        let saga = saga(notifier.clone());
        saga.dispatch("k1", &booking()).await.unwrap();
        saga.dispatch("k2", &booking()).await.unwrap();
        assert_eq!(notifier.call_count(), 6);
        assert_eq!(saga.ledger().len(), 2);
    }

    #[tokio::test]
    async fn test_concurrent_dispatch_same_key_rejected() {
        let gate = Arc::new(Semaphore::new(0));
        let notifier = Arc::new(ScriptedNotifier::gated(gate.clone()));
        let started = notifier.started();
        let saga = Arc::new(saga(notifier.clone()));

        let first = {
            let saga = saga.clone();
            tokio::spawn(async move { saga.dispatch("k1", &booking()).await })
        };
        started.notified().await;

        let second = saga.dispatch("k1", &booking()).await;
        assert_eq!(second, Err(DispatchError::InFlight("k1".to_string())));

        gate.add_permits(3);
        first.await.unwrap().unwrap();
        assert_eq!(notifier.call_count(), 3);
    }

    #[tokio::test]
    async fn test_key_reused_for_other_booking_is_refused() {
        let notifier = Arc::new(ScriptedNotifier::new());
        let saga = saga(notifier.clone());
        saga.dispatch("shared", &booking()).await.unwrap();

        let other = Booking {
            name: "Someone Else".to_string(),
            email: "other@example.com".to_string(),
            ..booking()
        };
        let err = saga.dispatch("shared", &other).await.unwrap_err();
        assert_eq!(err, DispatchError::KeyMismatch("shared".to_string()));
        assert_eq!(notifier.call_count(), 3);
        assert_eq!(notifier.attempts_for("other@example.com"), 0);
        assert!(!saga.ledger().is_in_flight("shared"));
    }

    #[tokio::test]
    async fn test_partial_failure_then_edited_retry_is_refused() {
        let notifier = Arc::new(ScriptedNotifier::new());
        notifier.fail_for(
            "t@example.com",
            NotifyError::new(ReasonCode::Timeout, "slow"),
        );
        let saga = saga(notifier.clone());
        assert!(saga.dispatch("k1", &booking()).await.is_err());

        notifier.clear_failures();
        let edited = Booking {
            time_slot: "2:00 PM - 3:00 PM".to_string(),
            ..booking()
        };
        assert!(matches!(
            saga.dispatch("k1", &edited).await,
            Err(DispatchError::KeyMismatch(_))
        ));
        // The original booking can still finish
        let report = saga.dispatch("k1", &booking()).await.unwrap();
        assert_eq!(report.delivered, vec![Step::Patient]);
    }

    #[test]
    fn test_ledger_matches_fingerprint() {
        let ledger = DeliveryLedger::new();
        assert!(ledger.matches("k", "a"));
        ledger.record("k", "a", Step::PractitionerPrimary);
        assert!(ledger.matches("k", "a"));
        assert!(!ledger.matches("k", "b"));
    }

    #[test]
    fn test_ledger_guard_releases() {
        let ledger = Arc::new(DeliveryLedger::new());
        let guard = ledger.try_begin("k").unwrap();
        assert_eq!(guard.key(), "k");
        assert!(ledger.try_begin("k").is_none());
        drop(guard);
        assert!(ledger.try_begin("k").is_some());
    }

    #[test]
    fn test_ledger_retention() {
        let ledger = Arc::new(DeliveryLedger::with_retention(Duration::ZERO));
        ledger.record("old", "fp", Step::Patient);
        assert!(ledger.is_delivered("old", Step::Patient));
        // Pruned on the next begin
        let _guard = ledger.try_begin("new");
        assert!(!ledger.is_delivered("old", Step::Patient));
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_compose_patient_email() {
        let saga = saga(Arc::new(ScriptedNotifier::new()));
        let email = saga.compose(Step::Patient, &booking());
        assert_eq!(email.to_email, "t@example.com");
        assert_eq!(email.to_name, "Test Patient");
        assert!(email.text_summary.contains("Sat, Oct 17, 2026"));
    }

    #[test]
    fn test_user_message() {
        let err = DispatchError::Step {
            step: Step::Patient,
            error: NotifyError::new(ReasonCode::RateLimited, "slow down"),
        };
        assert!(err.user_message().contains("Too many requests"));
        assert!(err.to_string().starts_with("patient notification failed"));
    }
}
