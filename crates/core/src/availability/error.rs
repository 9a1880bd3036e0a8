use thiserror::Error;

use super::types::DayOfWeek;

/// A single violated rule on a day window or block interval.
///
/// Validation collects every violation instead of stopping at the first one.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Day of week is required")]
    MissingDayOfWeek,
    #[error("Date is required")]
    MissingDate,
    #[error("Start time is required")]
    MissingStartTime,
    #[error("End time is required")]
    MissingEndTime,
    #[error("Start time must be before end time")]
    InvalidTimeRange,
    #[error("Slot duration must be greater than 0")]
    InvalidSlotDuration,
    #[error("Date cannot be in the past")]
    DateInPast,
}

/// Errors for a whole provider schedule.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("Provider name is required")]
    MissingProviderName,
    #[error("Time zone is required")]
    MissingTimeZone,
    #[error("At least one day availability is required")]
    NoWorkingDays,
    #[error("{0} already has working hours")]
    DuplicateDay(DayOfWeek),
    #[error("Day {}: {}", .index + 1, join_messages(.errors))]
    DayWindow {
        index: usize,
        errors: Vec<ValidationError>,
    },
    #[error("Block day {}: {}", .index + 1, join_messages(.errors))]
    BlockInterval {
        index: usize,
        errors: Vec<ValidationError>,
    },
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
