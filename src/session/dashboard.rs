//! Patient dashboard with sample appointments

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AppointmentType {
    Offline,
    Online,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AppointmentStatus {
    Confirmed,
    Pending,
    Cancelled,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserAppointment {
    pub id: String,
    /// ISO date
    pub date: String,
    pub time: String,
    #[serde(rename = "type")]
    pub kind: AppointmentType,
    pub status: AppointmentStatus,
    pub doctor_name: String,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DashboardError {
    #[error("Appointment not found: {0}")]
    UnknownAppointment(String),
}

/// Appointment list shown after login. Starts from the same two sample
/// records every time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Dashboard {
    appointments: Vec<UserAppointment>,
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::seeded()
    }
}

impl Dashboard {
    pub fn seeded() -> Self {
        let appointment = |id: &str, date: &str, time: &str, kind, status| UserAppointment {
            id: id.to_string(),
            date: date.to_string(),
            time: time.to_string(),
            kind,
            status,
            doctor_name: "Dr. Arijit".to_string(),
        };

        Self {
            appointments: vec![
                appointment(
                    "apt-1",
                    "2024-03-30",
                    "10:30 AM",
                    AppointmentType::Offline,
                    AppointmentStatus::Confirmed,
                ),
                appointment(
                    "apt-2",
                    "2024-04-06",
                    "04:00 PM",
                    AppointmentType::Online,
                    AppointmentStatus::Pending,
                ),
            ],
        }
    }

    pub fn appointments(&self) -> &[UserAppointment] {
        &self.appointments
    }

    pub fn get(&self, id: &str) -> Option<&UserAppointment> {
        self.appointments.iter().find(|a| a.id == id)
    }

    /// Cancel an appointment once the user has confirmed.
    ///
    /// Returns true if the status changed. Without confirmation, or when
    /// already cancelled, nothing happens.
    pub fn cancel(&mut self, id: &str, confirmed: bool) -> Result<bool, DashboardError> {
        let appointment = self
            .appointments
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| DashboardError::UnknownAppointment(id.to_string()))?;

        if !confirmed || appointment.status == AppointmentStatus::Cancelled {
            return Ok(false);
        }
        appointment.status = AppointmentStatus::Cancelled;
        Ok(true)
    }

    /// Appointments not cancelled
    pub fn active_count(&self) -> usize {
        self.appointments
            .iter()
            .filter(|a| a.status != AppointmentStatus::Cancelled)
            .count()
    }
}
