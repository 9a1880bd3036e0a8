use thiserror::Error;

/// Problems with a scheduling form submission.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum AppointmentError {
    #[error("Patient selection is required")]
    MissingPatient,
    #[error("Appointment mode is required")]
    MissingMode,
    #[error("Provider selection is required")]
    MissingProvider,
    #[error("Appointment type is required")]
    MissingType,
    #[error("Estimated amount is required")]
    MissingAmount,
    #[error("Please enter a valid amount")]
    InvalidAmount,
    #[error("Appointment date is required")]
    MissingDate,
    #[error("Appointment date cannot be in the past")]
    DateInPast,
    #[error("Appointment time is required")]
    MissingTime,
    #[error("Reason for visit is required")]
    MissingReason,
}

/// A status name that matches no [`AppointmentStatus`](super::AppointmentStatus).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("Unknown appointment status: {0}")]
    UnknownStatus(String),
}
