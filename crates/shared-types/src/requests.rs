use serde::{Deserialize, Serialize};

use crate::models::Role;

#[cfg(feature = "validation")]
use std::collections::HashMap;
#[cfg(feature = "validation")]
use validator::{Validate, ValidationError};

#[cfg(feature = "validation")]
use crate::AppError;

/// Request body for `POST /auth/login`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "validation", derive(Validate))]
pub struct LoginRequest {
    #[cfg_attr(
        feature = "validation",
        validate(email(message = "Enter a valid email address"))
    )]
    pub email: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Password is required"))
    )]
    pub password: String,
}

/// Request body for `POST /auth/register`.
///
/// Doctors add a specialization and years of experience; patients add a date
/// of birth and blood group. Fields for the other role are left out of the JSON.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "validation", derive(Validate))]
pub struct RegisterRequest {
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Full name is required"))
    )]
    pub name: String,
    #[cfg_attr(
        feature = "validation",
        validate(email(message = "Enter a valid email address"))
    )]
    pub email: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 6, message = "Password must be at least 6 characters"))
    )]
    pub password: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specialization: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experience: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dob: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blood_group: Option<String>,
}

impl RegisterRequest {
    /// Drop the fields that belong to the other role.
    pub fn normalized(mut self) -> Self {
        match self.role {
            Role::Doctor => {
                self.dob = None;
                self.blood_group = None;
            }
            Role::Patient => {
                self.specialization = None;
                self.experience = None;
            }
            Role::Admin => {}
        }
        self
    }
}

#[cfg(feature = "validation")]
impl RegisterRequest {
    /// Field validation plus the role-dependent rules the derive cannot express.
    pub fn check(&self) -> Result<(), AppError> {
        let mut fields: HashMap<String, String> = match self.validate() {
            Ok(()) => HashMap::new(),
            Err(errors) => AppError::from(errors).field_errors,
        };

        match self.role {
            Role::Admin => {
                fields.insert(
                    "role".to_string(),
                    "Administrator accounts cannot be self-registered".to_string(),
                );
            }
            Role::Doctor => {
                if self
                    .specialization
                    .as_deref()
                    .map_or(true, |s| s.trim().is_empty())
                {
                    fields.insert(
                        "specialization".to_string(),
                        "Specialization is required for doctors".to_string(),
                    );
                }
            }
            Role::Patient => {
                if let Some(dob) = self.dob.as_deref().filter(|d| !d.is_empty()) {
                    if chrono::NaiveDate::parse_from_str(dob, "%Y-%m-%d").is_err() {
                        fields.insert("dob".to_string(), "Enter a valid date of birth".to_string());
                    }
                }
                if let Some(group) = self.blood_group.as_deref().filter(|g| !g.is_empty()) {
                    if !crate::clinic::BLOOD_GROUPS.contains(&group) {
                        fields.insert("blood_group".to_string(), "Unknown blood group".to_string());
                    }
                }
            }
        }

        if fields.is_empty() {
            Ok(())
        } else {
            Err(AppError::validation("Validation failed", fields))
        }
    }
}

/// Request body for `POST /patient/{id}/book`.
///
/// `date` is the `datetime-local` value (`YYYY-MM-DDTHH:MM`); a bare date is
/// not enough to book a consultation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "validation", derive(Validate))]
pub struct BookAppointmentRequest {
    #[cfg_attr(
        feature = "validation",
        validate(required(message = "Please select a specialist from the list."))
    )]
    pub doctor_id: Option<String>,
    #[cfg_attr(feature = "validation", validate(custom(function = "local_datetime")))]
    pub date: String,
    #[serde(default)]
    pub notes: String,
}

#[cfg(feature = "validation")]
fn local_datetime(value: &str) -> Result<(), ValidationError> {
    let value = value.trim();
    let parsed = chrono::NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M")
        .or_else(|_| chrono::NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S"));
    match parsed {
        Ok(_) => Ok(()),
        Err(_) => Err(ValidationError::new("datetime").with_message(
            "Please pick both a date and a time for your consultation.".into(),
        )),
    }
}

/// Query parameters for `POST /patient/{id}/records`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "validation", derive(Validate))]
pub struct UploadRecordRequest {
    #[cfg_attr(
        feature = "validation",
        validate(url(message = "Enter a valid link to the document"))
    )]
    pub file_url: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Add a short description"))
    )]
    pub description: String,
}

/// Query parameters for `PUT /doctor/appointments/{id}/status`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StatusUpdateQuery {
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}
