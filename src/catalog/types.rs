//! Catalog Types
//!
//! Plain data shapes rendered by the practice website.
//! Everything here is static and read-only.

use serde::Serialize;

/// A treatment area offered by the practice
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Service {
    /// Stable identifier used in URLs (e.g., "hypertension")
    pub id: &'static str,
    /// English title
    pub title: &'static str,
    /// Title in Bengali, as shown to local patients
    pub localized_title: &'static str,
    /// One-line summary for the services grid
    pub description: &'static str,
    /// Icon name understood by the UI (e.g., "activity", "droplets")
    pub icon: &'static str,
    /// Long description for the detail view
    pub full_description: &'static str,
    pub symptoms: &'static [&'static str],
    pub treatments: &'static [&'static str],
    pub prevention: &'static [&'static str],
}

/// Academic or clinical credential
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Qualification {
    pub institution: &'static str,
    pub degree: &'static str,
    pub period: &'static str,
}

/// A health article written by the practitioner
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BlogPost {
    pub id: &'static str,
    pub title: &'static str,
    pub category: &'static str,
    /// Publication date as displayed (e.g., "March 15, 2024")
    pub date: &'static str,
    pub image_url: &'static str,
    pub excerpt: &'static str,
    pub content: &'static str,
    pub author: &'static str,
}

/// Patient review
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Testimonial {
    pub id: &'static str,
    pub name: &'static str,
    pub text: &'static str,
    /// Star rating, 1 to 5
    pub rating: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<&'static str>,
}

/// Header navigation entry pointing at an in-page anchor
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NavItem {
    pub label: &'static str,
    pub href: &'static str,
}

/// Practice contact and availability details
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ClinicInfo {
    pub practitioner: &'static str,
    pub credentials: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub whatsapp_url: &'static str,
    pub address: &'static str,
    /// Days the clinic takes bookings
    pub availability_days: &'static str,
    /// Opening hours on those days
    pub availability_hours: &'static str,
    /// Embedded map iframe source (display only)
    pub map_embed_url: &'static str,
}
