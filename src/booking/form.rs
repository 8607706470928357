//! Booking Form State Machine
//!
//! ```text
//! Editing ──begin_submit──▶ Sending ──complete(Ok)──▶ Confirmed ──tick──▶ Editing
//!    ▲                         │
//!    └──edit / acknowledge── Failed ◀──complete(Err)──┘
//! ```
//!
//! The machine is synchronous and does no I/O. The caller validates with
//! [`BookingForm::begin_submit`], performs the sends, then reports the outcome
//! with [`BookingForm::complete`].

use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

use super::details::{Booking, BookingDetails, ConsultationMode, ValidationError};
use crate::notify::{DispatchError, DispatchReport};

/// Default time the confirmation stays visible
pub const DEFAULT_CONFIRMATION_SECS: u64 = 7;

/// Where the form is in its lifecycle
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "phase", rename_all = "snake_case")]
pub enum FormPhase {
    Editing,
    Sending,
    Confirmed { since: DateTime<Utc> },
    Failed { reason: String },
}

impl FormPhase {
    pub fn name(&self) -> &'static str {
        match self {
            FormPhase::Editing => "editing",
            FormPhase::Sending => "sending",
            FormPhase::Confirmed { .. } => "confirmed",
            FormPhase::Failed { .. } => "failed",
        }
    }
}

/// Why a submit did not start
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SubmitRejected {
    #[error("A booking request is already being sent")]
    AlreadySending,

    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

/// Field edits are refused while sending or showing a confirmation
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("form cannot be edited while {phase}")]
pub struct FormLocked {
    pub phase: &'static str,
}

/// One appointment form instance
#[derive(Debug, Clone)]
pub struct BookingForm {
    details: BookingDetails,
    phase: FormPhase,
    idempotency_key: Uuid,
    confirmation_display: Duration,
}

impl Default for BookingForm {
    fn default() -> Self {
        Self::new()
    }
}

impl BookingForm {
    pub fn new() -> Self {
        Self::with_confirmation_display(DEFAULT_CONFIRMATION_SECS)
    }

    pub fn with_confirmation_display(secs: u64) -> Self {
        Self {
            details: BookingDetails::default(),
            phase: FormPhase::Editing,
            idempotency_key: Uuid::new_v4(),
            confirmation_display: Duration::seconds(secs as i64),
        }
    }

    pub fn phase(&self) -> &FormPhase {
        &self.phase
    }

    pub fn details(&self) -> &BookingDetails {
        &self.details
    }

    /// Key identifying this logical booking to the delivery ledger.
    /// Changes whenever the details change and after each confirmation.
    pub fn idempotency_key(&self) -> Uuid {
        self.idempotency_key
    }

    pub fn is_sending(&self) -> bool {
        self.phase == FormPhase::Sending
    }

    pub fn confirmation_display(&self) -> Duration {
        self.confirmation_display
    }

    /// Apply an edit. Editing a failed form returns it to `Editing`.
    pub fn edit(&mut self, f: impl FnOnce(&mut BookingDetails)) -> Result<(), FormLocked> {
        match self.phase {
            FormPhase::Editing | FormPhase::Failed { .. } => {}
            _ => {
                return Err(FormLocked {
                    phase: self.phase.name(),
                })
            }
        }

        let before = self.details.clone();
        f(&mut self.details);
        if self.details != before {
            self.idempotency_key = Uuid::new_v4();
        }
        self.phase = FormPhase::Editing;
        Ok(())
    }

    /// Replace every field at once
    pub fn fill(&mut self, details: BookingDetails) -> Result<(), FormLocked> {
        self.edit(|d| *d = details)
    }

    pub fn set_name(&mut self, value: impl Into<String>) -> Result<(), FormLocked> {
        let value = value.into();
        self.edit(|d| d.name = value)
    }

    pub fn set_email(&mut self, value: impl Into<String>) -> Result<(), FormLocked> {
        let value = value.into();
        self.edit(|d| d.email = value)
    }

    pub fn set_phone(&mut self, value: impl Into<String>) -> Result<(), FormLocked> {
        let value = value.into();
        self.edit(|d| d.phone = value)
    }

    pub fn set_date(&mut self, value: impl Into<String>) -> Result<(), FormLocked> {
        let value = value.into();
        self.edit(|d| d.date = value)
    }

    pub fn set_time_slot(&mut self, value: impl Into<String>) -> Result<(), FormLocked> {
        let value = value.into();
        self.edit(|d| d.time_slot = value)
    }

    pub fn set_mode(&mut self, mode: ConsultationMode) -> Result<(), FormLocked> {
        self.edit(|d| d.mode = Some(mode))
    }

    pub fn set_message(&mut self, value: impl Into<String>) -> Result<(), FormLocked> {
        let value = value.into();
        self.edit(|d| d.message = value)
    }

    /// Validate and enter `Sending`.
    ///
    /// A second call while sending is rejected without touching state. A
    /// validation failure leaves the phase unchanged, so no send may start.
    pub fn begin_submit(&mut self, today: NaiveDate) -> Result<Booking, SubmitRejected> {
        if self.is_sending() {
            return Err(SubmitRejected::AlreadySending);
        }
        let booking = self.details.validate(today)?;
        self.phase = FormPhase::Sending;
        Ok(booking)
    }

    /// Record the outcome of the sends started by `begin_submit`.
    ///
    /// Success clears every field and starts the confirmation display.
    /// Failure keeps the fields so the user can retry. Ignored unless
    /// sending.
    pub fn complete(
        &mut self,
        outcome: &Result<DispatchReport, DispatchError>,
        now: DateTime<Utc>,
    ) -> &FormPhase {
        if !self.is_sending() {
            return &self.phase;
        }

        match outcome {
            Ok(_) => {
                self.details = BookingDetails::default();
                self.idempotency_key = Uuid::new_v4();
                self.phase = FormPhase::Confirmed { since: now };
            }
            Err(err) => {
                self.phase = FormPhase::Failed {
                    reason: err.user_message(),
                };
            }
        }
        &self.phase
    }

    /// Dismiss the confirmation once it has been shown long enough.
    /// Returns true if the phase changed.
    pub fn tick(&mut self, now: DateTime<Utc>) -> bool {
        if let FormPhase::Confirmed { since } = self.phase {
            if now - since >= self.confirmation_display {
                self.phase = FormPhase::Editing;
                return true;
            }
        }
        false
    }

    /// Close the error message, keeping the entered fields
    pub fn acknowledge_failure(&mut self) {
        if matches!(self.phase, FormPhase::Failed { .. }) {
            self.phase = FormPhase::Editing;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booking::dates::upcoming_weekends;
    use crate::booking::slots::CLINIC_SLOTS;
    use crate::notify::{NotifyError, Step};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
    }

    fn now() -> DateTime<Utc> {
        DateTime::parse_from_rfc3339("2026-10-16T10:00:00Z")
            .unwrap()
            .with_timezone(&Utc)
    }

    fn filled() -> BookingForm {
        let mut form = BookingForm::new();
        let saturday = upcoming_weekends(today(), 1).remove(0);
        form.set_name("Test Patient").unwrap();
        form.set_email("t@example.com").unwrap();
        form.set_phone("+910000000000").unwrap();
        form.set_date(saturday.value).unwrap();
        form.set_time_slot("12:00 PM - 1:00 PM").unwrap();
        form.set_mode(ConsultationMode::Online).unwrap();
        form
    }

    fn delivered() -> Result<DispatchReport, DispatchError> {
        Ok(DispatchReport {
            key: "k".to_string(),
            delivered: Step::ALL.to_vec(),
            skipped: Vec::new(),
        })
    }

    fn failed_at(step: Step) -> Result<DispatchReport, DispatchError> {
        Err(DispatchError::Step {
            step,
            error: NotifyError::from_status(400, "The template ID is invalid"),
        })
    }

    #[test]
    fn test_example_scenario() {
        let mut form = filled();
        let booking = form.begin_submit(today()).unwrap();
        assert_eq!(booking.date_label, "Sat, Oct 17, 2026");
        assert_eq!(form.phase(), &FormPhase::Sending);

        form.complete(&delivered(), now());
        assert_eq!(form.phase(), &FormPhase::Confirmed { since: now() });
        assert!(form.details().is_blank());

        // Still showing just before the timeout
        assert!(!form.tick(now() + Duration::seconds(6)));
        assert!(form.tick(now() + Duration::seconds(7)));
        assert_eq!(form.phase(), &FormPhase::Editing);
        assert!(form.details().is_blank());
    }

    #[test]
    fn test_second_submit_while_sending_is_rejected() {
        let mut form = filled();
        form.begin_submit(today()).unwrap();
        assert_eq!(
            form.begin_submit(today()),
            Err(SubmitRejected::AlreadySending)
        );
        assert!(form.is_sending());
    }

    #[test]
    fn test_missing_mode_never_enters_sending() {
        for slot in CLINIC_SLOTS {
            for date in upcoming_weekends(today(), 8) {
                let mut form = BookingForm::new();
                form.fill(BookingDetails {
                    name: "Test Patient".to_string(),
                    email: "t@example.com".to_string(),
                    phone: "+910000000000".to_string(),
                    date: date.value,
                    time_slot: slot.to_string(),
                    mode: None,
                    message: "cough".to_string(),
                })
                .unwrap();

                assert_eq!(
                    form.begin_submit(today()),
                    Err(SubmitRejected::Invalid(ValidationError::ModeNotSelected))
                );
                assert_eq!(form.phase(), &FormPhase::Editing);
            }
        }
    }

    #[test]
    fn test_failure_keeps_fields() {
        for step in Step::ALL {
            let mut form = filled();
            let before = form.details().clone();
            form.begin_submit(today()).unwrap();
            form.complete(&failed_at(step), now());

            match form.phase() {
                FormPhase::Failed { reason } => {
                    assert!(reason.contains("The template ID is invalid"))
                }
                other => panic!("expected failure, got {:?}", other),
            }
            assert_eq!(form.details(), &before);
        }
    }

    #[test]
    fn test_retry_after_failure_reuses_key() {
        let mut form = filled();
        let key = form.idempotency_key();
        form.begin_submit(today()).unwrap();
        form.complete(&failed_at(Step::Patient), now());

        form.acknowledge_failure();
        assert_eq!(form.phase(), &FormPhase::Editing);
        form.begin_submit(today()).unwrap();
        assert_eq!(form.idempotency_key(), key);

        form.complete(&delivered(), now());
        assert_ne!(form.idempotency_key(), key);
    }

    #[test]
    fn test_editing_changes_key() {
        let mut form = filled();
        let key = form.idempotency_key();
        form.set_name("Test Patient").unwrap();
        assert_eq!(form.idempotency_key(), key);
        form.set_name("Another Patient").unwrap();
        assert_ne!(form.idempotency_key(), key);
    }

    #[test]
    fn test_edit_failed_form_returns_to_editing() {
        let mut form = filled();
        form.begin_submit(today()).unwrap();
        form.complete(&failed_at(Step::PractitionerPrimary), now());
        form.set_message("more detail").unwrap();
        assert_eq!(form.phase(), &FormPhase::Editing);
        assert_eq!(form.details().name, "Test Patient");
    }

    #[test]
    fn test_locked_while_sending_and_confirmed() {
        let mut form = filled();
        form.begin_submit(today()).unwrap();
        assert_eq!(
            form.set_name("x"),
            Err(FormLocked { phase: "sending" })
        );
        form.complete(&delivered(), now());
        assert_eq!(
            form.set_name("x"),
            Err(FormLocked { phase: "confirmed" })
        );
    }

    #[test]
    fn test_complete_ignored_unless_sending() {
        let mut form = filled();
        form.complete(&delivered(), now());
        assert_eq!(form.phase(), &FormPhase::Editing);
        assert!(!form.details().is_blank());
    }

    #[test]
    fn test_custom_display_time() {
        let mut form = BookingForm::with_confirmation_display(2);
        form.fill(filled().details().clone()).unwrap();
        form.begin_submit(today()).unwrap();
        form.complete(&delivered(), now());
        assert!(form.tick(now() + Duration::seconds(2)));
    }

    #[test]
    fn test_phase_serializes_with_tag() {
        let json = serde_json::to_value(FormPhase::Failed {
            reason: "x".to_string(),
        })
        .unwrap();
        assert_eq!(json["phase"], "failed");
        assert_eq!(json["reason"], "x");
    }
}
