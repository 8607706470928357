//! Appointment Booking
//!
//! Weekend date generation, slot lists, form validation and the booking
//! form state machine.

pub mod dates;
pub mod desk;
pub mod details;
pub mod form;
pub mod slots;

pub use dates::{
    upcoming_weekends, upcoming_weekends_from_now, WeekendDate, MAX_WEEKEND_DATES,
    WEEKEND_DATE_COUNT,
};
pub use desk::{BookingDesk, SubmitOutcome};
pub use details::{
    Booking, BookingDetails, BookingKind, ConsultationMode, ValidationError, VideoCallDetails,
};
pub use form::{BookingForm, FormLocked, FormPhase, SubmitRejected};
pub use slots::{VideoSlot, CLINIC_SLOTS, VIDEO_CALL_SLOTS};
