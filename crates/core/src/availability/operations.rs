use chrono::{NaiveDate, NaiveTime};

use super::error::ValidationError;
use super::slots::generate_slots;
use super::types::{minute_of_day, BlockInterval, DayWindow, Schedule, TimeRange};

/// Time zone labels offered when editing a schedule.
pub const TIME_ZONES: [&str; 26] = [
    "UTC-12:00 - Baker Island",
    "UTC-11:00 - American Samoa",
    "UTC-10:00 - Hawaii",
    "UTC-09:00 - Alaska",
    "UTC-08:00 - Pacific Time",
    "UTC-07:00 - Mountain Time",
    "UTC-06:00 - Central Time",
    "UTC-05:00 - Eastern Time",
    "UTC-04:00 - Atlantic Time",
    "UTC-03:00 - Brasilia Time",
    "UTC-02:00 - Mid-Atlantic",
    "UTC-01:00 - Azores",
    "UTC+00:00 - GMT/UTC",
    "UTC+01:00 - Central European Time",
    "UTC+02:00 - Eastern European Time",
    "UTC+03:00 - Moscow Time",
    "UTC+04:00 - Gulf Time",
    "UTC+05:00 - Pakistan Time",
    "UTC+05:30 - India Standard Time",
    "UTC+06:00 - Bangladesh Time",
    "UTC+07:00 - Indochina Time",
    "UTC+08:00 - China Standard Time",
    "UTC+09:00 - Japan Standard Time",
    "UTC+10:00 - Australian Eastern Time",
    "UTC+11:00 - Solomon Islands Time",
    "UTC+12:00 - New Zealand Time",
];

/// Hours between two times of day, at minute resolution.
///
/// Returns 0 when `to` is not after `from`; range validation is the caller's job.
pub fn compute_duration(from: NaiveTime, to: NaiveTime) -> f64 {
    let minutes = minute_of_day(to).saturating_sub(minute_of_day(from));
    f64::from(minutes) / 60.0
}

/// Half-open interval overlap: touching ranges do not overlap.
pub fn ranges_overlap(a: TimeRange, b: TimeRange) -> bool {
    a.from_time < b.to_time && b.from_time < a.to_time
}

/// Collects every rule a day window violates.
pub fn validate_day_window(window: &DayWindow) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if window.day_of_week.is_none() {
        errors.push(ValidationError::MissingDayOfWeek);
    }
    if window.from_time.is_none() {
        errors.push(ValidationError::MissingStartTime);
    }
    if window.to_time.is_none() {
        errors.push(ValidationError::MissingEndTime);
    }
    if let (Some(from), Some(to)) = (window.from_time, window.to_time) {
        if from >= to {
            errors.push(ValidationError::InvalidTimeRange);
        }
    }
    if window.slot_duration == 0 {
        errors.push(ValidationError::InvalidSlotDuration);
    }

    errors
}

/// Collects every rule a block interval violates.
///
/// `today` is compared by date only; a block dated today is valid.
pub fn validate_block_interval(block: &BlockInterval, today: NaiveDate) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if block.date.is_none() {
        errors.push(ValidationError::MissingDate);
    }
    if block.from_time.is_none() {
        errors.push(ValidationError::MissingStartTime);
    }
    if block.to_time.is_none() {
        errors.push(ValidationError::MissingEndTime);
    }
    if let (Some(from), Some(to)) = (block.from_time, block.to_time) {
        if from >= to {
            errors.push(ValidationError::InvalidTimeRange);
        }
    }
    if block.date.is_some_and(|date| date < today) {
        errors.push(ValidationError::DateInPast);
    }

    errors
}

/// True when any block on `date` covers `time`, both ends inclusive.
///
/// Slot generation treats a window's end as exclusive; this check does not.
pub fn is_time_blocked(schedule: &Schedule, date: NaiveDate, time: NaiveTime) -> bool {
    schedule
        .block_intervals
        .iter()
        .any(|block| block.affects(date, time))
}

/// Sum of every day window's length in hours.
pub fn total_weekly_hours(schedule: &Schedule) -> f64 {
    schedule
        .day_windows
        .iter()
        .map(DayWindow::duration_hours)
        .sum()
}

/// Number of slots across every day window's grid.
pub fn total_slots(schedule: &Schedule) -> usize {
    schedule
        .day_windows
        .iter()
        .map(|window| generate_slots(window).count())
        .sum()
}

/// Every time of day on an `interval_minutes` grid starting at midnight.
pub fn time_options(interval_minutes: u32) -> Vec<NaiveTime> {
    if interval_minutes == 0 {
        return Vec::new();
    }
    (0..24 * 60)
        .step_by(interval_minutes as usize)
        .filter_map(|minute: u32| NaiveTime::from_hms_opt(minute / 60, minute % 60, 0))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::availability::types::DayOfWeek;
    use uuid::Uuid;

    fn make_time(hour: u32, min: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, min, 0).unwrap()
    }

    fn make_date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn range(from: (u32, u32), to: (u32, u32)) -> TimeRange {
        TimeRange::new(make_time(from.0, from.1), make_time(to.0, to.1))
    }

    fn six_day_schedule() -> Schedule {
        let mut schedule = Schedule::new(
            Uuid::nil(),
            "Dr. John Smith",
            "UTC+00:00 - GMT/UTC",
            chrono::Utc::now(),
        );
        for day in &DayOfWeek::ALL[..6] {
            schedule
                .day_windows
                .push(DayWindow::new(*day, make_time(9, 0), make_time(18, 0)));
        }
        schedule
    }

    #[test]
    fn test_compute_duration() {
        assert_eq!(compute_duration(make_time(9, 0), make_time(18, 0)), 9.0);
        assert_eq!(compute_duration(make_time(9, 0), make_time(9, 30)), 0.5);
        assert_eq!(compute_duration(make_time(10, 0), make_time(9, 0)), 0.0);
        assert_eq!(compute_duration(make_time(10, 0), make_time(10, 0)), 0.0);
    }

    #[test]
    fn test_ranges_overlap() {
        assert!(ranges_overlap(range((9, 0), (10, 0)), range((9, 30), (11, 0))));
        assert!(ranges_overlap(range((9, 0), (12, 0)), range((10, 0), (11, 0))));
        // Touching ends do not overlap
        assert!(!ranges_overlap(range((9, 0), (10, 0)), range((10, 0), (11, 0))));
        assert!(!ranges_overlap(range((13, 0), (14, 0)), range((9, 0), (10, 0))));
    }

    #[test]
    fn test_validate_day_window_valid() {
        let window = DayWindow::new(DayOfWeek::Monday, make_time(9, 0), make_time(17, 0));
        assert!(validate_day_window(&window).is_empty());
    }

    #[test]
    fn test_validate_day_window_inverted_range() {
        let window = DayWindow::new(DayOfWeek::Monday, make_time(10, 0), make_time(9, 0));
        assert_eq!(
            validate_day_window(&window),
            vec![ValidationError::InvalidTimeRange]
        );
    }

    #[test]
    fn test_validate_day_window_collects_all_errors() {
        let mut window = DayWindow::new(DayOfWeek::Monday, make_time(9, 0), make_time(17, 0))
            .with_slot_duration(0);
        window.day_of_week = None;
        window.to_time = None;

        assert_eq!(
            validate_day_window(&window),
            vec![
                ValidationError::MissingDayOfWeek,
                ValidationError::MissingEndTime,
                ValidationError::InvalidSlotDuration,
            ]
        );
    }

    #[test]
    fn test_validate_block_interval_past_date() {
        let today = make_date(2024, 1, 15);
        let block = BlockInterval::new(make_date(2024, 1, 14), make_time(12, 0), make_time(13, 0));
        assert_eq!(
            validate_block_interval(&block, today),
            vec![ValidationError::DateInPast]
        );
    }

    #[test]
    fn test_validate_block_interval_today_is_allowed() {
        let today = make_date(2024, 1, 15);
        let block = BlockInterval::new(today, make_time(12, 0), make_time(13, 0));
        assert!(validate_block_interval(&block, today).is_empty());
    }

    #[test]
    fn test_validate_block_interval_missing_fields() {
        let today = make_date(2024, 1, 15);
        let mut block = BlockInterval::new(today, make_time(12, 0), make_time(12, 0));
        block.date = None;

        assert_eq!(
            validate_block_interval(&block, today),
            vec![ValidationError::MissingDate, ValidationError::InvalidTimeRange]
        );
    }

    #[test]
    fn test_is_time_blocked_inclusive_bounds() {
        let date = make_date(2024, 1, 15);
        let mut schedule = six_day_schedule();
        schedule
            .block_intervals
            .push(BlockInterval::new(date, make_time(12, 0), make_time(13, 0)));

        assert!(is_time_blocked(&schedule, date, make_time(12, 0)));
        assert!(is_time_blocked(&schedule, date, make_time(13, 0)));
        assert!(!is_time_blocked(&schedule, date, make_time(11, 59)));
        assert!(!is_time_blocked(&schedule, make_date(2024, 1, 16), make_time(12, 30)));
    }

    #[test]
    fn test_block_end_inclusive_while_slot_end_exclusive() {
        // A block ending at 13:00 still covers 13:00, yet a 12:00-13:00 window
        // has no slot starting at 13:00. Both behaviours are kept as-is.
        let date = make_date(2024, 1, 15);
        let mut schedule = six_day_schedule();
        schedule
            .block_intervals
            .push(BlockInterval::new(date, make_time(12, 0), make_time(13, 0)));
        let window = DayWindow::new(DayOfWeek::Monday, make_time(12, 0), make_time(13, 0));

        assert!(is_time_blocked(&schedule, date, make_time(13, 0)));
        assert!(generate_slots(&window).all(|slot| slot.start_time < make_time(13, 0)));
    }

    #[test]
    fn test_total_weekly_hours_six_days() {
        assert_eq!(total_weekly_hours(&six_day_schedule()), 54.0);
    }

    #[test]
    fn test_total_slots() {
        // 9 hours of 15-minute slots per day, six days
        assert_eq!(total_slots(&six_day_schedule()), 36 * 6);
    }

    #[test]
    fn test_time_options() {
        let options = time_options(15);
        assert_eq!(options.len(), 96);
        assert_eq!(options[0], make_time(0, 0));
        assert_eq!(options[1], make_time(0, 15));
        assert_eq!(options[95], make_time(23, 45));

        assert_eq!(time_options(60).len(), 24);
        assert!(time_options(0).is_empty());
    }
}
