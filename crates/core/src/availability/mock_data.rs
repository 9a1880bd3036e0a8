//! Demo schedule used by the CLI and tests.

use chrono::{NaiveDate, NaiveTime, TimeZone, Utc};
use uuid::Uuid;

use super::types::{BlockInterval, BlockType, DayOfWeek, DayWindow, Schedule};

/// A six-day, 09:00-18:00 schedule with two blocked periods in January 2024.
///
/// IDs are fixed so repeated calls produce identical schedules.
///
/// # Example
///
/// ```
/// use healthfirst_core::availability::sample_schedule;
///
/// let schedule = sample_schedule();
/// assert_eq!(schedule.total_weekly_hours(), 54.0);
/// ```
pub fn sample_schedule() -> Schedule {
    let time = |h: u32, m: u32| NaiveTime::from_hms_opt(h, m, 0).unwrap();
    let date = |y: i32, m: u32, d: u32| NaiveDate::from_ymd_opt(y, m, d).unwrap();
    let created = Utc
        .with_ymd_and_hms(2024, 1, 10, 9, 0, 0)
        .single()
        .unwrap_or_default();

    let day_windows = DayOfWeek::ALL[..6]
        .iter()
        .zip(1u128..)
        .map(|(day, n)| {
            DayWindow::new(*day, time(9, 0), time(18, 0)).with_id(Uuid::from_u128(0x100 + n))
        })
        .collect();

    let block_intervals = vec![
        BlockInterval::new(date(2024, 1, 15), time(12, 0), time(13, 0))
            .with_reason("Lunch Break")
            .with_id(Uuid::from_u128(0x201)),
        BlockInterval::new(date(2024, 1, 20), time(10, 0), time(12, 0))
            .with_reason("Conference")
            .with_type(BlockType::Meeting)
            .with_id(Uuid::from_u128(0x202)),
    ];

    Schedule {
        day_windows,
        block_intervals,
        ..Schedule::new(
            Uuid::from_u128(0x2),
            "Dr. John Smith",
            "UTC+05:30 - India Standard Time",
            created,
        )
        .with_id(Uuid::from_u128(0x1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_schedule_is_deterministic() {
        assert_eq!(sample_schedule(), sample_schedule());
    }

    #[test]
    fn test_sample_schedule_shape() {
        let schedule = sample_schedule();

        assert_eq!(schedule.total_working_days(), 6);
        assert_eq!(schedule.total_block_days(), 2);
        assert!(!schedule.is_available_on(DayOfWeek::Sunday));
        assert!(schedule.block_conflicts().is_empty());
    }
}
