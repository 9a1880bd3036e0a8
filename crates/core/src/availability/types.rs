use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveTime, Timelike, Utc, Weekday};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Default slot length for a new day window, in minutes.
pub const DEFAULT_SLOT_DURATION: u32 = 15;

/// A weekday a provider can hold working hours on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DayOfWeek {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl DayOfWeek {
    /// All weekdays in week order, Monday first.
    pub const ALL: [DayOfWeek; 7] = [
        DayOfWeek::Monday,
        DayOfWeek::Tuesday,
        DayOfWeek::Wednesday,
        DayOfWeek::Thursday,
        DayOfWeek::Friday,
        DayOfWeek::Saturday,
        DayOfWeek::Sunday,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DayOfWeek::Monday => "Monday",
            DayOfWeek::Tuesday => "Tuesday",
            DayOfWeek::Wednesday => "Wednesday",
            DayOfWeek::Thursday => "Thursday",
            DayOfWeek::Friday => "Friday",
            DayOfWeek::Saturday => "Saturday",
            DayOfWeek::Sunday => "Sunday",
        }
    }

    /// The weekday a calendar date falls on.
    pub fn of_date(date: NaiveDate) -> Self {
        use chrono::Datelike;
        date.weekday().into()
    }
}

impl From<Weekday> for DayOfWeek {
    fn from(weekday: Weekday) -> Self {
        match weekday {
            Weekday::Mon => DayOfWeek::Monday,
            Weekday::Tue => DayOfWeek::Tuesday,
            Weekday::Wed => DayOfWeek::Wednesday,
            Weekday::Thu => DayOfWeek::Thursday,
            Weekday::Fri => DayOfWeek::Friday,
            Weekday::Sat => DayOfWeek::Saturday,
            Weekday::Sun => DayOfWeek::Sunday,
        }
    }
}

impl fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DayOfWeek {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DayOfWeek::ALL
            .into_iter()
            .find(|day| day.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown day of week: {s}"))
    }
}

/// A time-of-day interval on a single day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeRange {
    #[serde(with = "crate::serde::hhmm")]
    pub from_time: NaiveTime,
    #[serde(with = "crate::serde::hhmm")]
    pub to_time: NaiveTime,
}

impl TimeRange {
    pub fn new(from_time: NaiveTime, to_time: NaiveTime) -> Self {
        Self { from_time, to_time }
    }
}

/// Lifecycle state of a provider schedule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScheduleStatus {
    #[default]
    Active,
    Inactive,
    Draft,
}

impl ScheduleStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScheduleStatus::Active => "active",
            ScheduleStatus::Inactive => "inactive",
            ScheduleStatus::Draft => "draft",
        }
    }
}

/// Why a block of time is unavailable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockType {
    Holiday,
    Vacation,
    Meeting,
    #[default]
    Custom,
}

/// One weekday's working hours.
///
/// Fields a user has not filled in yet are `None`; validation reports them
/// and slot generation yields nothing for them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayWindow {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    #[serde(default)]
    pub day_of_week: Option<DayOfWeek>,
    #[serde(default, with = "crate::serde::hhmm_option")]
    pub from_time: Option<NaiveTime>,
    #[serde(default, with = "crate::serde::hhmm_option")]
    pub to_time: Option<NaiveTime>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    /// Slot length in minutes.
    #[serde(default = "default_slot_duration")]
    pub slot_duration: u32,
    /// Gap between consecutive slots in minutes.
    #[serde(default)]
    pub break_time: u32,
}

impl DayWindow {
    /// Creates an active window with the default slot length and no breaks.
    pub fn new(day_of_week: DayOfWeek, from_time: NaiveTime, to_time: NaiveTime) -> Self {
        Self {
            id: Uuid::new_v4(),
            day_of_week: Some(day_of_week),
            from_time: Some(from_time),
            to_time: Some(to_time),
            is_active: true,
            slot_duration: DEFAULT_SLOT_DURATION,
            break_time: 0,
        }
    }

    /// Sets the slot length in minutes.
    pub fn with_slot_duration(mut self, minutes: u32) -> Self {
        self.slot_duration = minutes;
        self
    }

    /// Sets the gap between slots in minutes.
    pub fn with_break_time(mut self, minutes: u32) -> Self {
        self.break_time = minutes;
        self
    }

    /// Marks the window as inactive.
    pub fn inactive(mut self) -> Self {
        self.is_active = false;
        self
    }

    /// Sets a specific ID for this window (useful for testing).
    pub fn with_id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }

    /// Returns the window's interval when both ends are set.
    pub fn time_range(&self) -> Option<TimeRange> {
        Some(TimeRange::new(self.from_time?, self.to_time?))
    }

    /// Length of the window in hours; zero when incomplete or inverted.
    pub fn duration_hours(&self) -> f64 {
        match (self.from_time, self.to_time) {
            (Some(from), Some(to)) => super::compute_duration(from, to),
            _ => 0.0,
        }
    }

    /// Length of the window in whole minutes; zero when incomplete or inverted.
    pub fn duration_minutes(&self) -> u32 {
        match (self.from_time, self.to_time) {
            (Some(from), Some(to)) => minute_of_day(to).saturating_sub(minute_of_day(from)),
            _ => 0,
        }
    }
}

/// A blocked sub-period on a specific date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockInterval {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    #[serde(default, deserialize_with = "crate::serde::deserialize_optional_date")]
    pub date: Option<NaiveDate>,
    #[serde(default, with = "crate::serde::hhmm_option")]
    pub from_time: Option<NaiveTime>,
    #[serde(default, with = "crate::serde::hhmm_option")]
    pub to_time: Option<NaiveTime>,
    #[serde(default)]
    pub reason: String,
    #[serde(default, rename = "type")]
    pub block_type: BlockType,
    #[serde(default)]
    pub is_recurring: bool,
    /// Free-text recurrence description; stored but never expanded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recurring_pattern: Option<String>,
}

impl BlockInterval {
    /// Creates a custom block on the given date.
    pub fn new(date: NaiveDate, from_time: NaiveTime, to_time: NaiveTime) -> Self {
        Self {
            id: Uuid::new_v4(),
            date: Some(date),
            from_time: Some(from_time),
            to_time: Some(to_time),
            reason: String::new(),
            block_type: BlockType::Custom,
            is_recurring: false,
            recurring_pattern: None,
        }
    }

    /// Sets the reason for this block.
    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = reason.into();
        self
    }

    /// Sets the block type.
    pub fn with_type(mut self, block_type: BlockType) -> Self {
        self.block_type = block_type;
        self
    }

    /// Sets a specific ID for this block (useful for testing).
    pub fn with_id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }

    /// Returns the block's interval when both ends are set.
    pub fn time_range(&self) -> Option<TimeRange> {
        Some(TimeRange::new(self.from_time?, self.to_time?))
    }

    /// Length of the block in hours; zero when incomplete or inverted.
    pub fn duration_hours(&self) -> f64 {
        match (self.from_time, self.to_time) {
            (Some(from), Some(to)) => super::compute_duration(from, to),
            _ => 0.0,
        }
    }

    /// True when `time` on `date` falls inside this block, both ends inclusive.
    pub fn affects(&self, date: NaiveDate, time: NaiveTime) -> bool {
        match (self.date, self.from_time, self.to_time) {
            (Some(block_date), Some(from), Some(to)) => {
                block_date == date && from <= time && time <= to
            }
            _ => false,
        }
    }
}

/// A provider's weekly availability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schedule {
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub provider_id: Uuid,
    #[serde(default)]
    pub provider_name: String,
    #[serde(default)]
    pub time_zone: String,
    /// Ordered by weekday, at most one per weekday.
    #[serde(default, rename = "dayAvailability")]
    pub day_windows: Vec<DayWindow>,
    #[serde(default, rename = "blockDays")]
    pub block_intervals: Vec<BlockInterval>,
    #[serde(default)]
    pub status: ScheduleStatus,
    #[serde(default)]
    pub is_default: bool,
    pub created_date: DateTime<Utc>,
    pub updated_date: DateTime<Utc>,
}

impl Schedule {
    /// Creates an empty active schedule for a provider, stamped with `now`.
    pub fn new(
        provider_id: Uuid,
        provider_name: impl Into<String>,
        time_zone: impl Into<String>,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            provider_id,
            provider_name: provider_name.into(),
            time_zone: time_zone.into(),
            day_windows: Vec::new(),
            block_intervals: Vec::new(),
            status: ScheduleStatus::Active,
            is_default: false,
            created_date: now,
            updated_date: now,
        }
    }

    /// Sets the schedule status.
    pub fn with_status(mut self, status: ScheduleStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets a specific ID for this schedule (useful for testing).
    pub fn with_id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }
}

/// One generated appointment slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSlot {
    #[serde(with = "crate::serde::hhmm")]
    pub start_time: NaiveTime,
    #[serde(with = "crate::serde::hhmm")]
    pub end_time: NaiveTime,
    /// Slot length in minutes.
    pub duration: u32,
}

impl TimeSlot {
    pub fn time_range(&self) -> TimeRange {
        TimeRange::new(self.start_time, self.end_time)
    }
}

/// A row in the saved-availability list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleSummary {
    pub provider_name: String,
    pub total_days: usize,
    pub total_hours: f64,
    pub block_days: usize,
    pub status: ScheduleStatus,
}

/// Minutes since midnight, dropping seconds.
pub(crate) fn minute_of_day(time: NaiveTime) -> u32 {
    time.hour() * 60 + time.minute()
}

fn default_true() -> bool {
    true
}

fn default_slot_duration() -> u32 {
    DEFAULT_SLOT_DURATION
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn make_time(hour: u32, min: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, min, 0).unwrap()
    }

    fn make_date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_day_of_week_parsing() {
        assert_eq!("monday".parse::<DayOfWeek>(), Ok(DayOfWeek::Monday));
        assert_eq!(" Sunday ".parse::<DayOfWeek>(), Ok(DayOfWeek::Sunday));
        assert!("Funday".parse::<DayOfWeek>().is_err());
    }

    #[test]
    fn test_day_of_week_of_date() {
        // 2024-01-15 was a Monday
        assert_eq!(DayOfWeek::of_date(make_date(2024, 1, 15)), DayOfWeek::Monday);
        assert_eq!(DayOfWeek::of_date(make_date(2024, 1, 21)), DayOfWeek::Sunday);
    }

    #[test]
    fn test_day_window_defaults() {
        let window = DayWindow::new(DayOfWeek::Monday, make_time(9, 0), make_time(18, 0));

        assert!(window.is_active);
        assert_eq!(window.slot_duration, 15);
        assert_eq!(window.break_time, 0);
        assert_eq!(window.duration_hours(), 9.0);
        assert_eq!(window.duration_minutes(), 540);
    }

    #[test]
    fn test_day_window_incomplete_has_zero_duration() {
        let mut window = DayWindow::new(DayOfWeek::Monday, make_time(9, 0), make_time(18, 0));
        window.to_time = None;

        assert_eq!(window.duration_hours(), 0.0);
        assert_eq!(window.duration_minutes(), 0);
        assert!(window.time_range().is_none());
    }

    #[test]
    fn test_block_affects_is_inclusive() {
        let block = BlockInterval::new(make_date(2024, 1, 15), make_time(12, 0), make_time(13, 0));

        assert!(block.affects(make_date(2024, 1, 15), make_time(12, 0)));
        assert!(block.affects(make_date(2024, 1, 15), make_time(13, 0)));
        assert!(!block.affects(make_date(2024, 1, 15), make_time(13, 1)));
        assert!(!block.affects(make_date(2024, 1, 16), make_time(12, 30)));
    }

    #[test]
    fn test_day_window_deserializes_form_layout() {
        let json = r#"{
            "dayOfWeek": "Wednesday",
            "fromTime": "08:30",
            "toTime": "",
            "breakTime": 5
        }"#;
        let window: DayWindow = serde_json::from_str(json).unwrap();

        assert_eq!(window.day_of_week, Some(DayOfWeek::Wednesday));
        assert_eq!(window.from_time, Some(make_time(8, 30)));
        assert_eq!(window.to_time, None);
        assert_eq!(window.slot_duration, DEFAULT_SLOT_DURATION);
        assert_eq!(window.break_time, 5);
        assert!(window.is_active);
    }

    #[test]
    fn test_block_interval_wire_layout() {
        let block = BlockInterval::new(make_date(2024, 1, 20), make_time(10, 0), make_time(12, 0))
            .with_reason("Conference")
            .with_type(BlockType::Meeting)
            .with_id(Uuid::nil());
        let value = serde_json::to_value(&block).unwrap();

        assert_eq!(value["date"], "2024-01-20");
        assert_eq!(value["fromTime"], "10:00");
        assert_eq!(value["type"], "meeting");
        assert_eq!(value["isRecurring"], false);
    }

    #[test]
    fn test_schedule_new_uses_given_time() {
        let now = Utc.with_ymd_and_hms(2024, 1, 10, 9, 0, 0).unwrap();
        let schedule = Schedule::new(Uuid::nil(), "Dr. John Smith", "UTC+00:00 - GMT/UTC", now);

        assert_eq!(schedule.created_date, now);
        assert_eq!(schedule.updated_date, now);
        assert_eq!(schedule.status, ScheduleStatus::Active);
    }

    #[test]
    fn test_schedule_requires_timestamps_on_wire() {
        let json = r#"{
            "providerId": "00000000-0000-0000-0000-000000000002",
            "providerName": "Dr. John Smith",
            "timeZone": "UTC+00:00 - GMT/UTC"
        }"#;
        assert!(serde_json::from_str::<Schedule>(json).is_err());
    }
}
