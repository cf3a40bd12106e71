//! Clinic payloads as the backend returns them, plus the derived views the
//! dashboards compute locally (filters, queues, distinct people).
//!
//! The client owns no invariants for these records. Every field that the
//! backend may omit is defaulted so a partial payload still renders.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::models::UserSummary;

/// A doctor in the booking directory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Doctor {
    pub id: String,
    #[serde(default)]
    pub user: UserSummary,
    #[serde(default)]
    pub specialization: Option<String>,
    #[serde(default)]
    pub experience: Option<u32>,
    #[serde(default)]
    pub availability: Option<bool>,
}

impl Doctor {
    pub fn name(&self) -> &str {
        &self.user.name
    }

    pub fn specialization_label(&self) -> &str {
        self.specialization.as_deref().unwrap_or("General Practice")
    }
}

/// A patient as embedded in appointment payloads.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    pub id: String,
    #[serde(default)]
    pub user: UserSummary,
    #[serde(default)]
    pub dob: Option<String>,
    #[serde(default)]
    pub blood_group: Option<String>,
}

impl Patient {
    pub fn name(&self) -> &str {
        &self.user.name
    }

    /// Age in whole years on `today`. `None` without a parseable date of birth.
    pub fn age_on(&self, today: NaiveDate) -> Option<u32> {
        let dob = self.dob.as_deref()?;
        let dob = NaiveDate::parse_from_str(dob.get(..10)?, "%Y-%m-%d").ok()?;
        today.years_since(dob)
    }
}

/// Status values the backend uses for appointments.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum AppointmentStatus {
    Pending,
    Completed,
    Cancelled,
}

impl AppointmentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AppointmentStatus::Pending => "PENDING",
            AppointmentStatus::Completed => "COMPLETED",
            AppointmentStatus::Cancelled => "CANCELLED",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_uppercase().as_str() {
            "PENDING" => Some(AppointmentStatus::Pending),
            "COMPLETED" => Some(AppointmentStatus::Completed),
            "CANCELLED" => Some(AppointmentStatus::Cancelled),
            _ => None,
        }
    }
}

/// An appointment between a doctor and a patient.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: String,
    #[serde(default)]
    pub doctor: Option<Doctor>,
    #[serde(default)]
    pub patient: Option<Patient>,
    #[serde(default)]
    pub appointment_date: String,
    #[serde(default = "default_status")]
    pub status: String,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

fn default_status() -> String {
    AppointmentStatus::Pending.as_str().to_string()
}

impl Appointment {
    pub fn status_kind(&self) -> Option<AppointmentStatus> {
        AppointmentStatus::parse(&self.status)
    }

    pub fn is_pending(&self) -> bool {
        self.status_kind() == Some(AppointmentStatus::Pending)
    }

    /// Completed or cancelled.
    pub fn is_closed(&self) -> bool {
        matches!(
            self.status_kind(),
            Some(AppointmentStatus::Completed | AppointmentStatus::Cancelled)
        )
    }

    /// Parsed `appointmentDate` (ISO local date-time, seconds optional).
    pub fn scheduled_at(&self) -> Option<NaiveDateTime> {
        let raw = self.appointment_date.trim();
        NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
            .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M"))
            .ok()
    }

    pub fn patient_name(&self) -> &str {
        self.patient.as_ref().map(Patient::name).unwrap_or("Unknown patient")
    }

    pub fn doctor_name(&self) -> &str {
        self.doctor.as_ref().map(Doctor::name).unwrap_or("Unassigned")
    }
}

/// Status filter offered on the doctor's appointment list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppointmentFilter {
    #[default]
    All,
    Only(AppointmentStatus),
}

/// Filters in display order.
pub const ALL_FILTERS: &[AppointmentFilter] = &[
    AppointmentFilter::All,
    AppointmentFilter::Only(AppointmentStatus::Pending),
    AppointmentFilter::Only(AppointmentStatus::Completed),
    AppointmentFilter::Only(AppointmentStatus::Cancelled),
];

impl AppointmentFilter {
    pub fn label(&self) -> &'static str {
        match self {
            AppointmentFilter::All => "ALL",
            AppointmentFilter::Only(status) => status.as_str(),
        }
    }

    pub fn matches(&self, appointment: &Appointment) -> bool {
        match self {
            AppointmentFilter::All => true,
            AppointmentFilter::Only(status) => appointment.status_kind() == Some(*status),
        }
    }

    /// Matching appointments, original order preserved.
    pub fn apply(&self, appointments: &[Appointment]) -> Vec<Appointment> {
        appointments
            .iter()
            .filter(|a| self.matches(a))
            .cloned()
            .collect()
    }
}

/// Pending appointments in list order.
pub fn pending(appointments: &[Appointment]) -> Vec<Appointment> {
    AppointmentFilter::Only(AppointmentStatus::Pending).apply(appointments)
}

/// The first `limit` completed or cancelled appointments.
pub fn recent_history(appointments: &[Appointment], limit: usize) -> Vec<Appointment> {
    appointments
        .iter()
        .filter(|a| a.is_closed())
        .take(limit)
        .cloned()
        .collect()
}

/// The patient's next consultation: the first pending appointment.
pub fn next_upcoming(appointments: &[Appointment]) -> Option<&Appointment> {
    appointments.iter().find(|a| a.is_pending())
}

/// Doctors appearing in `appointments`, deduplicated by id in first-seen order.
pub fn distinct_doctors(appointments: &[Appointment]) -> Vec<Doctor> {
    let mut seen: Vec<Doctor> = Vec::new();
    for doctor in appointments.iter().filter_map(|a| a.doctor.as_ref()) {
        if !seen.iter().any(|d| d.id == doctor.id) {
            seen.push(doctor.clone());
        }
    }
    seen
}

/// Patients appearing in `appointments`, deduplicated by id in first-seen order.
pub fn distinct_patients(appointments: &[Appointment]) -> Vec<Patient> {
    let mut seen: Vec<Patient> = Vec::new();
    for patient in appointments.iter().filter_map(|a| a.patient.as_ref()) {
        if !seen.iter().any(|p| p.id == patient.id) {
            seen.push(patient.clone());
        }
    }
    seen
}

/// Replace the status of appointment `id` after the backend accepted the change.
///
/// Unknown ids leave the list untouched.
pub fn with_status(
    appointments: &[Appointment],
    id: &str,
    status: AppointmentStatus,
) -> Vec<Appointment> {
    appointments
        .iter()
        .map(|a| {
            if a.id == id {
                Appointment {
                    status: status.as_str().to_string(),
                    ..a.clone()
                }
            } else {
                a.clone()
            }
        })
        .collect()
}

/// Metadata of an uploaded medical document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct MedicalRecord {
    pub id: String,
    #[serde(default)]
    pub file_url: String,
    #[serde(default)]
    pub file_name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub uploaded_at: Option<String>,
}

impl MedicalRecord {
    /// Description, else file name, else a placeholder.
    pub fn title(&self) -> &str {
        self.description
            .as_deref()
            .filter(|d| !d.trim().is_empty())
            .or(self.file_name.as_deref().filter(|f| !f.trim().is_empty()))
            .unwrap_or("Untitled Record")
    }
}

/// Response of `POST /patient/{id}/book`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct BookingConfirmation {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub appointment_id: Option<String>,
    #[serde(default)]
    pub message: String,
}

/// Blood groups offered on the patient registration form.
pub const BLOOD_GROUPS: &[&str] = &["A+", "A-", "B+", "B-", "O+", "O-", "AB+", "AB-"];

/// Fixed directory shown when the real one cannot be fetched and the
/// `demo_doctors` feature flag is on.
pub fn demo_doctors() -> Vec<Doctor> {
    [
        ("1", "Dr. Sarah Wilson", "Cardiology"),
        ("2", "Dr. James Chen", "Neurology"),
        ("3", "Dr. Elena Rossi", "Pediatrics"),
    ]
    .into_iter()
    .map(|(id, name, specialization)| Doctor {
        id: id.to_string(),
        user: UserSummary {
            id: None,
            name: name.to_string(),
            email: None,
        },
        specialization: Some(specialization.to_string()),
        experience: None,
        availability: Some(true),
    })
    .collect()
}
