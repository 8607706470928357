//! Email Templates
//!
//! HTML bodies for the practitioner notice and the patient confirmation.
//! Every submitted value passes through [`html_escape`] before it is
//! embedded. The email service renders the body as markup, so patient text
//! is never passed through as typed.

use crate::booking::Booking;
use crate::catalog::ClinicInfo;

/// Escape text for inclusion in HTML element content or attribute values
pub fn html_escape(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Subject line for the practitioner inboxes
pub fn practitioner_subject(booking: &Booking) -> String {
    format!("New {} from {}", booking.kind.title(), booking.name.trim())
}

/// Subject line for the patient copy
pub fn patient_subject(booking: &Booking) -> String {
    format!("{} received - {}", booking.kind.title(), booking.date_label)
}

fn detail_rows(booking: &Booking) -> String {
    let mut rows = vec![
        ("Name", booking.name.as_str()),
        ("Email", booking.email.as_str()),
        ("Phone", booking.phone.as_str()),
        ("Date", booking.date_label.as_str()),
        ("Time", booking.time_slot.as_str()),
        ("Consultation", booking.mode.label()),
    ];
    if !booking.message.is_empty() {
        rows.push(("Message", booking.message.as_str()));
    }

    rows.into_iter()
        .map(|(label, value)| {
            format!(
                "<tr><td style=\"padding:6px 12px;font-weight:bold;color:#334155\">{}</td>\
                 <td style=\"padding:6px 12px;color:#0f172a\">{}</td></tr>",
                label,
                html_escape(value)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn document(title: &str, intro: &str, booking: &Booking, footer: &str) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html><head><meta charset=\"utf-8\"><title>{title}</title></head>\n\
         <body style=\"font-family:Arial,sans-serif;background:#f8fafc;padding:24px\">\n\
         <div style=\"max-width:560px;margin:0 auto;background:#ffffff;border-radius:12px;padding:24px\">\n\
         <h2 style=\"color:#2563eb;margin-top:0\">{title}</h2>\n\
         <p>{intro}</p>\n\
         <table style=\"border-collapse:collapse;width:100%\">\n{rows}\n</table>\n\
         <p style=\"color:#64748b;font-size:13px;margin-top:24px\">{footer}</p>\n\
         </div></body></html>",
        title = html_escape(title),
        intro = intro,
        rows = detail_rows(booking),
        footer = footer,
    )
}

/// Notice sent to the practitioner's inboxes
pub fn practitioner_notice(booking: &Booking) -> String {
    let intro = format!(
        "A new {} was submitted through the website.",
        html_escape(&booking.kind.title().to_lowercase())
    );
    document(
        booking.kind.title(),
        &intro,
        booking,
        "Reply directly to the patient to confirm the slot.",
    )
}

/// Confirmation copy sent to the patient
pub fn patient_confirmation(booking: &Booking, clinic: &ClinicInfo) -> String {
    let intro = format!(
        "Dear {}, we have received your request. {} will contact you shortly to confirm.",
        html_escape(&booking.name),
        html_escape(clinic.practitioner)
    );
    let footer = format!(
        "{} &middot; {} &middot; {}",
        html_escape(clinic.address),
        html_escape(clinic.phone),
        html_escape(clinic.email)
    );
    document(booking.kind.title(), &intro, booking, &footer)
}

/// Plaintext summary carried next to the HTML body
pub fn text_summary(booking: &Booking) -> String {
    booking.summary()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booking::{BookingKind, ConsultationMode};
    use crate::catalog::clinic_info;
    use chrono::NaiveDate;

    fn booking(name: &str, message: &str) -> Booking {
        Booking {
            kind: BookingKind::Appointment,
            name: name.to_string(),
            email: "t@example.com".to_string(),
            phone: "+910000000000".to_string(),
            date: NaiveDate::from_ymd_opt(2026, 10, 17).unwrap(),
            date_label: "Sat, Oct 17, 2026".to_string(),
            time_slot: "12:00 PM - 1:00 PM".to_string(),
            mode: ConsultationMode::Online,
            message: message.to_string(),
        }
    }

    #[test]
    fn test_escape() {
        assert_eq!(
            html_escape(r#"<b>"Tom" & 'Jerry'</b>"#),
            "&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jerry&#39;&lt;/b&gt;"
        );
    }

    #[test]
    fn test_submitted_values_escaped() {
        let b = booking("<script>alert(1)</script>", "pain > 3 days");
        let html = practitioner_notice(&b);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(html.contains("pain &gt; 3 days"));

        let html = patient_confirmation(&b, clinic_info());
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_practitioner_notice_fields() {
        let html = practitioner_notice(&booking("Test Patient", ""));
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("Test Patient"));
        assert!(html.contains("Sat, Oct 17, 2026"));
        assert!(html.contains("Video Call"));
        // Empty message row is omitted
        assert!(!html.contains(">Message<"));
    }

    #[test]
    fn test_patient_confirmation_mentions_clinic() {
        let html = patient_confirmation(&booking("Test Patient", "Headache"), clinic_info());
        assert!(html.contains("Dear Test Patient"));
        assert!(html.contains(&html_escape(clinic_info().practitioner)));
        assert!(html.contains("Headache"));
    }

    #[test]
    fn test_subjects() {
        let b = booking("Test Patient", "");
        assert_eq!(practitioner_subject(&b), "New Appointment Request from Test Patient");
        assert_eq!(patient_subject(&b), "Appointment Request received - Sat, Oct 17, 2026");
        assert!(text_summary(&b).contains("t@example.com"));
    }
}
