//! Booking Details
//!
//! Raw form input for the two booking flows (clinic appointment and video
//! call request) and their validation into a [`Booking`].

use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use thiserror::Error;

use super::dates::{display_label, is_weekend, parse_iso};
use super::slots::{is_clinic_slot, video_slot};

/// How the patient wants to be seen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConsultationMode {
    /// In person at the clinic
    Offline,
    /// Video call
    Online,
}

impl ConsultationMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConsultationMode::Offline => "offline",
            ConsultationMode::Online => "online",
        }
    }

    /// Label shown on the mode buttons and in emails
    pub fn label(&self) -> &'static str {
        match self {
            ConsultationMode::Offline => "In-Person",
            ConsultationMode::Online => "Video Call",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "offline" | "in-person" | "in_person" => Some(ConsultationMode::Offline),
            "online" | "video" | "video-call" | "video_call" => Some(ConsultationMode::Online),
            _ => None,
        }
    }
}

/// Which form produced a booking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingKind {
    Appointment,
    VideoCall,
}

impl BookingKind {
    pub fn title(&self) -> &'static str {
        match self {
            BookingKind::Appointment => "Appointment Request",
            BookingKind::VideoCall => "Video Consultation Request",
        }
    }
}

/// Appointment form input, exactly as typed
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BookingDetails {
    pub name: String,
    pub email: String,
    pub phone: String,
    /// ISO date picked from the weekend list
    pub date: String,
    pub time_slot: String,
    /// Must be chosen explicitly; there is no default mode
    pub mode: Option<ConsultationMode>,
    /// Optional symptom notes
    pub message: String,
}

/// Video call request input
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VideoCallDetails {
    pub name: String,
    pub email: String,
    /// WhatsApp number
    pub phone: String,
    pub preferred_date: String,
    /// Slot value such as "14:00-15:00"
    pub preferred_time: String,
    pub reason: String,
}

/// A validated booking request, ready to be announced
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Booking {
    pub kind: BookingKind,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub date: NaiveDate,
    pub date_label: String,
    pub time_slot: String,
    pub mode: ConsultationMode,
    pub message: String,
}

/// Reasons a form cannot be submitted
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please fill in the {0} field")]
    MissingField(&'static str),

    #[error("Please select a consultation mode (In-Person or Video Call)")]
    ModeNotSelected,

    #[error("Invalid email address: {0}")]
    InvalidEmail(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("{0} is not a Saturday or Sunday")]
    NotAWeekend(String),

    #[error("{0} is in the past")]
    DateInPast(String),

    #[error("Unknown time slot: {0}")]
    UnknownTimeSlot(String),
}

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("valid email regex"))
}

fn required(value: &str, field: &'static str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(ValidationError::MissingField(field))
    } else {
        Ok(trimmed.to_string())
    }
}

fn check_email(email: &str) -> Result<(), ValidationError> {
    if email_pattern().is_match(email) {
        Ok(())
    } else {
        Err(ValidationError::InvalidEmail(email.to_string()))
    }
}

fn check_date(raw: &str, today: NaiveDate) -> Result<NaiveDate, ValidationError> {
    let date = parse_iso(raw).ok_or_else(|| ValidationError::InvalidDate(raw.to_string()))?;
    if date < today {
        return Err(ValidationError::DateInPast(raw.to_string()));
    }
    Ok(date)
}

impl BookingDetails {
    /// Check required fields first, then the consultation mode, then shapes.
    pub fn validate(&self, today: NaiveDate) -> Result<Booking, ValidationError> {
        let name = required(&self.name, "name")?;
        let email = required(&self.email, "email")?;
        let phone = required(&self.phone, "phone")?;
        let date = required(&self.date, "date")?;
        let time_slot = required(&self.time_slot, "time slot")?;
        let mode = self.mode.ok_or(ValidationError::ModeNotSelected)?;

        check_email(&email)?;
        let date = check_date(&date, today)?;
        if !is_weekend(date) {
            return Err(ValidationError::NotAWeekend(self.date.trim().to_string()));
        }
        if !is_clinic_slot(&time_slot) {
            return Err(ValidationError::UnknownTimeSlot(time_slot));
        }

        Ok(Booking {
            kind: BookingKind::Appointment,
            name,
            email,
            phone,
            date,
            date_label: display_label(date),
            time_slot,
            mode,
            message: self.message.trim().to_string(),
        })
    }

    /// True when every field is at its empty default
    pub fn is_blank(&self) -> bool {
        *self == Self::default()
    }
}

impl VideoCallDetails {
    /// Any date from today on is accepted; the slot must be a known one.
    pub fn validate(&self, today: NaiveDate) -> Result<Booking, ValidationError> {
        let name = required(&self.name, "name")?;
        let email = required(&self.email, "email")?;
        let phone = required(&self.phone, "phone")?;
        let date = required(&self.preferred_date, "preferred date")?;
        let slot = required(&self.preferred_time, "preferred time")?;

        check_email(&email)?;
        let date = check_date(&date, today)?;
        let slot = video_slot(&slot).ok_or(ValidationError::UnknownTimeSlot(slot))?;

        Ok(Booking {
            kind: BookingKind::VideoCall,
            name,
            email,
            phone,
            date,
            date_label: display_label(date),
            time_slot: slot.label.to_string(),
            mode: ConsultationMode::Online,
            message: self.reason.trim().to_string(),
        })
    }
}

impl Booking {
    /// Short plaintext summary sent alongside the HTML body
    pub fn summary(&self) -> String {
        format!(
            "{}: {} ({}, {}) on {} at {} - {}",
            self.kind.title(),
            self.name,
            self.email,
            self.phone,
            self.date_label,
            self.time_slot,
            self.mode.label()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        // Friday
        NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
    }

    fn sample() -> BookingDetails {
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

    #[test]
    fn test_valid_booking() {
        let booking = sample().validate(today()).unwrap();
        assert_eq!(booking.kind, BookingKind::Appointment);
        assert_eq!(booking.date_label, "Sat, Oct 17, 2026");
        assert_eq!(booking.mode, ConsultationMode::Online);
    }

    #[test]
    fn test_missing_mode_rejected_for_any_valid_fields() {
        for slot in crate::booking::slots::CLINIC_SLOTS {
            for date in ["2026-10-17", "2026-10-18", "2026-11-07"] {
                let details = BookingDetails {
                    date: date.to_string(),
                    time_slot: slot.to_string(),
                    mode: None,
                    ..sample()
                };
                assert_eq!(
                    details.validate(today()),
                    Err(ValidationError::ModeNotSelected)
                );
            }
        }
    }

    #[test]
    fn test_required_fields_checked_before_mode() {
        let details = BookingDetails {
            phone: "   ".to_string(),
            mode: None,
            ..sample()
        };
        assert_eq!(
            details.validate(today()),
            Err(ValidationError::MissingField("phone"))
        );
    }

    #[test]
    fn test_weekday_rejected() {
        let details = BookingDetails {
            date: "2026-10-19".to_string(),
            ..sample()
        };
        assert!(matches!(
            details.validate(today()),
            Err(ValidationError::NotAWeekend(_))
        ));
    }

    #[test]
    fn test_bad_email_and_slot() {
        let details = BookingDetails {
            email: "not-an-email".to_string(),
            ..sample()
        };
        assert!(matches!(
            details.validate(today()),
            Err(ValidationError::InvalidEmail(_))
        ));

        let details = BookingDetails {
            time_slot: "9:00 AM - 10:00 AM".to_string(),
            ..sample()
        };
        assert!(matches!(
            details.validate(today()),
            Err(ValidationError::UnknownTimeSlot(_))
        ));
    }

    #[test]
    fn test_video_call_validation() {
        let details = VideoCallDetails {
            name: "Rahul Das".to_string(),
            email: "rahul@example.com".to_string(),
            phone: "+919999999999".to_string(),
            preferred_date: "2026-10-20".to_string(),
            preferred_time: "15:00-16:00".to_string(),
            reason: "Follow-up".to_string(),
        };
        let booking = details.validate(today()).unwrap();
        assert_eq!(booking.kind, BookingKind::VideoCall);
        assert_eq!(booking.mode, ConsultationMode::Online);
        assert_eq!(booking.time_slot, "03:00 PM - 04:00 PM");

        let past = VideoCallDetails {
            preferred_date: "2026-10-01".to_string(),
            ..details
        };
        assert!(matches!(
            past.validate(today()),
            Err(ValidationError::DateInPast(_))
        ));
    }

    #[test]
    fn test_mode_parse() {
        assert_eq!(ConsultationMode::parse("Online"), Some(ConsultationMode::Online));
        assert_eq!(ConsultationMode::parse("in-person"), Some(ConsultationMode::Offline));
        assert_eq!(ConsultationMode::parse("phone"), None);
    }
}
