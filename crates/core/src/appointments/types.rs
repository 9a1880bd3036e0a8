use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::error::QueryError;

/// Default appointment length in minutes.
pub const DEFAULT_APPOINTMENT_DURATION: u32 = 30;

/// Appointment types offered by the scheduling form.
pub const APPOINTMENT_TYPES: [&str; 10] = [
    "New Patient",
    "Follow Up",
    "Consultation",
    "Check-up",
    "Emergency",
    "Routine",
    "Specialist Referral",
    "Telehealth",
    "Procedure",
    "Lab Work",
];

/// Where an appointment is in the visit flow.
///
/// Any status may be set from any other; there is no transition graph.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AppointmentStatus {
    #[default]
    Scheduled,
    #[serde(rename = "Checked In")]
    CheckedIn,
    #[serde(rename = "In Exam")]
    InExam,
    Completed,
    Cancelled,
    #[serde(rename = "No Show")]
    NoShow,
    Rescheduled,
}

impl AppointmentStatus {
    pub const ALL: [AppointmentStatus; 7] = [
        AppointmentStatus::Scheduled,
        AppointmentStatus::CheckedIn,
        AppointmentStatus::InExam,
        AppointmentStatus::Completed,
        AppointmentStatus::Cancelled,
        AppointmentStatus::NoShow,
        AppointmentStatus::Rescheduled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AppointmentStatus::Scheduled => "Scheduled",
            AppointmentStatus::CheckedIn => "Checked In",
            AppointmentStatus::InExam => "In Exam",
            AppointmentStatus::Completed => "Completed",
            AppointmentStatus::Cancelled => "Cancelled",
            AppointmentStatus::NoShow => "No Show",
            AppointmentStatus::Rescheduled => "Rescheduled",
        }
    }
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AppointmentStatus {
    type Err = QueryError;

    /// Accepts the display name in any case, with spaces, dashes or underscores.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().replace(['-', '_'], " ");
        AppointmentStatus::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(&normalized))
            .ok_or_else(|| QueryError::UnknownStatus(s.to_string()))
    }
}

/// How the patient attends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AppointmentMode {
    #[default]
    #[serde(rename = "in-person")]
    InPerson,
    #[serde(rename = "video-call")]
    VideoCall,
    #[serde(rename = "phone-call")]
    PhoneCall,
    #[serde(rename = "home")]
    HomeVisit,
}

impl AppointmentMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            AppointmentMode::InPerson => "in-person",
            AppointmentMode::VideoCall => "video-call",
            AppointmentMode::PhoneCall => "phone-call",
            AppointmentMode::HomeVisit => "home",
        }
    }
}

impl fmt::Display for AppointmentMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One past move of an appointment to a new date and time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RescheduleRecord {
    pub original_date: NaiveDate,
    #[serde(with = "crate::serde::hhmm")]
    pub original_time: NaiveTime,
    pub new_date: NaiveDate,
    #[serde(with = "crate::serde::hhmm")]
    pub new_time: NaiveTime,
    pub reason: String,
    pub rescheduled_by: Option<String>,
    pub rescheduled_date: DateTime<Utc>,
}

/// A patient appointment as shown in the provider's appointment list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentRecord {
    pub id: Uuid,
    pub patient_id: Uuid,
    pub patient_name: String,
    /// `None` when the patient record has no birth date on file.
    #[serde(default, deserialize_with = "crate::serde::deserialize_optional_date")]
    pub date_of_birth: Option<NaiveDate>,
    pub contact_details: String,
    pub provider_id: Uuid,
    #[serde(default)]
    pub provider_name: String,
    pub appointment_date: NaiveDate,
    #[serde(with = "crate::serde::hhmm")]
    pub appointment_time: NaiveTime,
    pub appointment_type: String,
    #[serde(default)]
    pub appointment_mode: AppointmentMode,
    #[serde(default)]
    pub reason_for_visit: String,
    pub estimated_amount: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual_amount: Option<f64>,
    #[serde(default)]
    pub status: AppointmentStatus,
    #[serde(default)]
    pub notes: String,
    /// Length in minutes.
    #[serde(default = "default_duration")]
    pub duration: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub check_in_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cancellation_reason: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub reschedule_history: Vec<RescheduleRecord>,
    pub created_date: DateTime<Utc>,
    pub updated_date: DateTime<Utc>,
}

fn default_duration() -> u32 {
    DEFAULT_APPOINTMENT_DURATION
}
