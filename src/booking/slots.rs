//! Time Slots
//!
//! Hourly slots offered by the clinic form and the tele-consultation form.

use serde::Serialize;

/// In-clinic weekend slots, 12 PM to 5 PM
pub const CLINIC_SLOTS: &[&str] = &[
    "12:00 PM - 1:00 PM",
    "1:00 PM - 2:00 PM",
    "2:00 PM - 3:00 PM",
    "3:00 PM - 4:00 PM",
    "4:00 PM - 5:00 PM",
];

/// Video call slot: submitted value and display label
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct VideoSlot {
    pub value: &'static str,
    pub label: &'static str,
}

/// Tele-consultation slots (no calls over the lunch break)
pub const VIDEO_CALL_SLOTS: &[VideoSlot] = &[
    VideoSlot { value: "09:00-10:00", label: "09:00 AM - 10:00 AM" },
    VideoSlot { value: "10:00-11:00", label: "10:00 AM - 11:00 AM" },
    VideoSlot { value: "11:00-12:00", label: "11:00 AM - 12:00 PM" },
    VideoSlot { value: "14:00-15:00", label: "02:00 PM - 03:00 PM" },
    VideoSlot { value: "15:00-16:00", label: "03:00 PM - 04:00 PM" },
    VideoSlot { value: "16:00-17:00", label: "04:00 PM - 05:00 PM" },
    VideoSlot { value: "17:00-18:00", label: "05:00 PM - 06:00 PM" },
];

pub fn is_clinic_slot(slot: &str) -> bool {
    CLINIC_SLOTS.contains(&slot)
}

/// Resolve a submitted video call slot value to its label
pub fn video_slot(value: &str) -> Option<&'static VideoSlot> {
    VIDEO_CALL_SLOTS.iter().find(|s| s.value == value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clinic_slots() {
        assert_eq!(CLINIC_SLOTS.len(), 5);
        assert!(is_clinic_slot("12:00 PM - 1:00 PM"));
        assert!(!is_clinic_slot("5:00 PM - 6:00 PM"));
    }

    #[test]
    fn test_video_slot_lookup() {
        assert_eq!(video_slot("14:00-15:00").unwrap().label, "02:00 PM - 03:00 PM");
        assert!(video_slot("12:00-13:00").is_none());
    }
}
