//! Booking Form State
//!
//! Client-side mirror of the server's booking form machine:
//! `Editing -> Sending -> Confirmed | Failed`. Submits are ignored while a
//! send is in flight, failures keep the entered fields, and a plain retry
//! reuses the idempotency key so the API skips emails that already went out.

use serde::Serialize;

/// How long the appointment confirmation banner stays up
pub const CONFIRMATION_MS: u32 = 7_000;

/// How long the video call modal shows "Request Sent!" before closing
pub const VIDEO_CALL_CLOSE_MS: u32 = 5_000;

pub const MODE_NOT_SELECTED: &str = "Please select a consultation mode (In-Person or Video Call)";

/// Consultation mode, serialized the way the API expects
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Offline,
    Online,
}

impl Mode {
    pub const ALL: [Mode; 2] = [Mode::Offline, Mode::Online];

    pub fn label(&self) -> &'static str {
        match self {
            Mode::Offline => "In-Person",
            Mode::Online => "Video Call",
        }
    }
}

/// Fields a form must check before it may send
pub trait FormFields: Clone + Default + PartialEq {
    /// First reason the form cannot be submitted, if any
    fn missing(&self) -> Option<String>;
}

fn blank(value: &str) -> bool {
    value.trim().is_empty()
}

fn first_blank(fields: &[(&str, &str)]) -> Option<String> {
    fields
        .iter()
        .find(|(_, value)| blank(value))
        .map(|(label, _)| format!("Please fill in your {}", label))
}

/// Appointment form body for `POST /appointments`
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct AppointmentFields {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub date: String,
    pub time_slot: String,
    pub mode: Option<Mode>,
    pub message: String,
}

impl FormFields for AppointmentFields {
    fn missing(&self) -> Option<String> {
        first_blank(&[
            ("name", &self.name),
            ("email", &self.email),
            ("phone number", &self.phone),
            ("preferred date", &self.date),
            ("time slot", &self.time_slot),
        ])
        .or_else(|| self.mode.is_none().then(|| MODE_NOT_SELECTED.to_string()))
    }
}

/// Video call request body for `POST /video-calls`
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct VideoCallFields {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub preferred_date: String,
    pub preferred_time: String,
    pub reason: String,
}

impl FormFields for VideoCallFields {
    fn missing(&self) -> Option<String> {
        first_blank(&[
            ("name", &self.name),
            ("email", &self.email),
            ("phone number", &self.phone),
            ("preferred date", &self.preferred_date),
            ("preferred time", &self.preferred_time),
        ])
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Phase {
    Editing,
    Sending,
    Confirmed,
    Failed(String),
}

/// Why a submit did not start
#[derive(Clone, Debug, PartialEq)]
pub enum Blocked {
    AlreadySending,
    /// Confirmation is showing
    Locked,
    Invalid(String),
}

#[derive(Clone, Debug, Default)]
pub struct FormState<F> {
    fields: F,
    phase: Phase,
    key: Option<String>,
}

impl Default for Phase {
    fn default() -> Self {
        Phase::Editing
    }
}

impl<F: FormFields> FormState<F> {
    pub fn fields(&self) -> &F {
        &self.fields
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn is_sending(&self) -> bool {
        self.phase == Phase::Sending
    }

    /// Apply a field change. Refused while sending or confirmed.
    pub fn edit(&mut self, f: impl FnOnce(&mut F)) -> bool {
        if !matches!(self.phase, Phase::Editing | Phase::Failed(_)) {
            return false;
        }
        let before = self.fields.clone();
        f(&mut self.fields);
        if self.fields != before {
            // Different booking now, so earlier deliveries must not be skipped
            self.key = None;
            self.phase = Phase::Editing;
        }
        true
    }

    /// Start a send, returning the body and its idempotency key
    pub fn begin_submit(
        &mut self,
        next_key: impl FnOnce() -> String,
    ) -> Result<(F, String), Blocked> {
        match self.phase {
            Phase::Sending => return Err(Blocked::AlreadySending),
            Phase::Confirmed => return Err(Blocked::Locked),
            Phase::Editing | Phase::Failed(_) => {}
        }
        if let Some(problem) = self.fields.missing() {
            return Err(Blocked::Invalid(problem));
        }

        let key = self.key.get_or_insert_with(next_key).clone();
        self.phase = Phase::Sending;
        Ok((self.fields.clone(), key))
    }

    /// All emails went out
    pub fn succeed(&mut self) {
        if self.phase == Phase::Sending {
            self.fields = F::default();
            self.key = None;
            self.phase = Phase::Confirmed;
        }
    }

    /// A send failed; fields stay for a retry
    pub fn fail(&mut self, message: impl Into<String>) {
        if self.phase == Phase::Sending {
            self.phase = Phase::Failed(message.into());
        }
    }

    /// Drop the key so the next submit starts a fresh booking
    pub fn forget_key(&mut self) {
        self.key = None;
    }

    /// Confirmation timer elapsed
    pub fn dismiss_confirmation(&mut self) {
        if self.phase == Phase::Confirmed {
            self.phase = Phase::Editing;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys() -> impl FnMut() -> String {
        let mut n = 0;
        move || {
            n += 1;
            format!("key-{}", n)
        }
    }

    fn filled() -> FormState<AppointmentFields> {
        let mut form = FormState::<AppointmentFields>::default();
        form.edit(|f| {
            f.name = "Test Patient".into();
            f.email = "t@example.com".into();
            f.phone = "+910000000000".into();
            f.date = "2024-03-30".into();
            f.time_slot = "12:00 PM - 1:00 PM".into();
            f.mode = Some(Mode::Online);
        });
        form
    }

    #[test]
    fn test_confirmed_then_reset() {
        let mut next = keys();
        let mut form = filled();

        let (body, key) = form.begin_submit(&mut next).unwrap();
        assert_eq!(body.mode, Some(Mode::Online));
        assert_eq!(key, "key-1");
        assert!(form.is_sending());

        form.succeed();
        assert_eq!(form.phase(), &Phase::Confirmed);
        assert_eq!(form.fields(), &AppointmentFields::default());
        assert!(!form.edit(|f| f.name = "x".into()));

        form.dismiss_confirmation();
        assert_eq!(form.phase(), &Phase::Editing);
    }

    #[test]
    fn test_second_submit_while_sending() {
        let mut next = keys();
        let mut form = filled();

        form.begin_submit(&mut next).unwrap();
        assert_eq!(form.begin_submit(&mut next), Err(Blocked::AlreadySending));
        assert!(!form.edit(|f| f.phone = "1".into()));
    }

    #[test]
    fn test_mode_required() {
        let mut form = filled();
        form.edit(|f| f.mode = None);

        assert_eq!(
            form.begin_submit(|| "k".into()),
            Err(Blocked::Invalid(MODE_NOT_SELECTED.to_string()))
        );
        assert_eq!(form.phase(), &Phase::Editing);
    }

    #[test]
    fn test_missing_field_reported_first() {
        let mut form = filled();
        form.edit(|f| {
            f.email = "  ".into();
            f.mode = None;
        });

        assert_eq!(
            form.begin_submit(|| "k".into()),
            Err(Blocked::Invalid("Please fill in your email".to_string()))
        );
    }

    #[test]
    fn test_retry_reuses_key_until_edited() {
        let mut next = keys();
        let mut form = filled();

        let (_, first) = form.begin_submit(&mut next).unwrap();
        form.fail("Email service unavailable");
        assert_eq!(form.phase(), &Phase::Failed("Email service unavailable".into()));
        assert_eq!(form.fields().name, "Test Patient");

        let (_, retry) = form.begin_submit(&mut next).unwrap();
        assert_eq!(first, retry);
        form.fail("again");

        form.edit(|f| f.message = "Also dizzy".into());
        assert_eq!(form.phase(), &Phase::Editing);
        let (_, edited) = form.begin_submit(&mut next).unwrap();
        assert_ne!(first, edited);
    }

    #[test]
    fn test_refused_key_is_replaced_on_resubmit() {
        let mut next = keys();
        let mut form = filled();

        let (_, refused) = form.begin_submit(&mut next).unwrap();
        form.fail("This request does not match the booking it was first sent for.");
        form.forget_key();

        let (body, fresh) = form.begin_submit(&mut next).unwrap();
        assert_ne!(refused, fresh);
        assert_eq!(body.name, "Test Patient");
    }

    #[test]
    fn test_unchanged_edit_keeps_failure() {
        let mut form = filled();
        form.begin_submit(|| "k".into()).unwrap();
        form.fail("down");

        assert!(form.edit(|f| f.name = "Test Patient".into()));
        assert_eq!(form.phase(), &Phase::Failed("down".into()));
    }

    #[test]
    fn test_video_call_fields() {
        let mut form = FormState::<VideoCallFields>::default();
        form.edit(|f| {
            f.name = "Rahul".into();
            f.email = "r@example.com".into();
            f.phone = "+91".into();
            f.preferred_date = "2024-04-02".into();
        });
        assert_eq!(
            form.begin_submit(|| "k".into()),
            Err(Blocked::Invalid("Please fill in your preferred time".to_string()))
        );

        form.edit(|f| f.preferred_time = "09:00-10:00".into());
        assert!(form.begin_submit(|| "k".into()).is_ok());
    }

    #[test]
    fn test_mode_serializes_lowercase() {
        let json = serde_json::to_value(Mode::Offline).unwrap();
        assert_eq!(json, "offline");
        assert_eq!(Mode::Online.label(), "Video Call");
    }
}
