//! Request types for creating and editing appointments.
//!
//! These are pure data types with no I/O; the scheduling form fills one in
//! and the core validates it and turns it into a record.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::error::AppointmentError;
use super::types::{
    AppointmentMode, AppointmentRecord, AppointmentStatus, DEFAULT_APPOINTMENT_DURATION,
};

/// The scheduling form as submitted.
///
/// Every field the form can leave blank is optional so validation can report
/// all missing fields at once.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleAppointmentRequest {
    #[serde(default)]
    pub patient_id: Option<Uuid>,
    #[serde(default)]
    pub patient_name: String,
    #[serde(default, deserialize_with = "crate::serde::deserialize_optional_date")]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(default)]
    pub contact_details: String,
    #[serde(default)]
    pub appointment_mode: Option<AppointmentMode>,
    #[serde(default)]
    pub provider_id: Option<Uuid>,
    #[serde(default)]
    pub provider_name: String,
    #[serde(default, deserialize_with = "crate::serde::deserialize_optional_string")]
    pub appointment_type: Option<String>,
    #[serde(default)]
    pub estimated_amount: Option<f64>,
    #[serde(default, deserialize_with = "crate::serde::deserialize_optional_date")]
    pub appointment_date: Option<NaiveDate>,
    #[serde(default, with = "crate::serde::hhmm_option")]
    pub appointment_time: Option<NaiveTime>,
    #[serde(default)]
    pub reason_for_visit: String,
}

impl ScheduleAppointmentRequest {
    /// Collects every problem with the submission.
    pub fn validate(&self, today: NaiveDate) -> Vec<AppointmentError> {
        let mut errors = Vec::new();

        if self.patient_id.is_none() {
            errors.push(AppointmentError::MissingPatient);
        }
        if self.appointment_mode.is_none() {
            errors.push(AppointmentError::MissingMode);
        }
        if self.provider_id.is_none() {
            errors.push(AppointmentError::MissingProvider);
        }
        if self.appointment_type.is_none() {
            errors.push(AppointmentError::MissingType);
        }
        match self.estimated_amount {
            None => errors.push(AppointmentError::MissingAmount),
            Some(amount) if !amount.is_finite() || amount <= 0.0 => {
                errors.push(AppointmentError::InvalidAmount)
            }
            Some(_) => {}
        }
        match self.appointment_date {
            None => errors.push(AppointmentError::MissingDate),
            Some(date) if date < today => errors.push(AppointmentError::DateInPast),
            Some(_) => {}
        }
        if self.appointment_time.is_none() {
            errors.push(AppointmentError::MissingTime);
        }
        if self.reason_for_visit.trim().is_empty() {
            errors.push(AppointmentError::MissingReason);
        }

        errors
    }

    /// Validates and converts into a new `Scheduled` record.
    pub fn into_record(
        self,
        id: Uuid,
        today: NaiveDate,
        now: DateTime<Utc>,
    ) -> Result<AppointmentRecord, Vec<AppointmentError>> {
        let errors = self.validate(today);
        match (
            self.patient_id,
            self.appointment_mode,
            self.provider_id,
            self.appointment_type,
            self.estimated_amount,
            self.appointment_date,
            self.appointment_time,
        ) {
            (
                Some(patient_id),
                Some(appointment_mode),
                Some(provider_id),
                Some(appointment_type),
                Some(estimated_amount),
                Some(appointment_date),
                Some(appointment_time),
            ) if errors.is_empty() => Ok(AppointmentRecord {
                id,
                patient_id,
                patient_name: self.patient_name,
                date_of_birth: self.date_of_birth,
                contact_details: self.contact_details,
                provider_id,
                provider_name: self.provider_name,
                appointment_date,
                appointment_time,
                appointment_type,
                appointment_mode,
                reason_for_visit: self.reason_for_visit.trim().to_string(),
                estimated_amount,
                actual_amount: None,
                status: AppointmentStatus::Scheduled,
                notes: String::new(),
                duration: DEFAULT_APPOINTMENT_DURATION,
                room_number: None,
                check_in_time: None,
                cancellation_reason: None,
                reschedule_history: Vec::new(),
                created_date: now,
                updated_date: now,
            }),
            _ => Err(errors),
        }
    }
}

/// Partial edit of an existing appointment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAppointmentRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub appointment_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub appointment_mode: Option<AppointmentMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason_for_visit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_amount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual_amount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<AppointmentStatus>,
}

impl UpdateAppointmentRequest {
    /// Create an empty update request.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the status.
    pub fn with_status(mut self, status: AppointmentStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Set the notes.
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Apply updates to an existing record.
    pub fn apply_to(self, record: &mut AppointmentRecord, now: DateTime<Utc>) {
        if let Some(appointment_type) = self.appointment_type {
            record.appointment_type = appointment_type;
        }
        if let Some(mode) = self.appointment_mode {
            record.appointment_mode = mode;
        }
        if let Some(reason) = self.reason_for_visit {
            record.reason_for_visit = reason;
        }
        if let Some(amount) = self.estimated_amount {
            record.estimated_amount = amount;
        }
        if let Some(amount) = self.actual_amount {
            record.actual_amount = Some(amount);
        }
        if let Some(notes) = self.notes {
            record.notes = notes;
        }
        if let Some(room) = self.room_number {
            record.room_number = Some(room);
        }
        if let Some(status) = self.status {
            record.status = status;
        }
        record.updated_date = now;
    }
}
