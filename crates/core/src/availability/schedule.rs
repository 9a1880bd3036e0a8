//! Aggregate operations on a provider schedule.
//!
//! These mutate only the caller's own `Schedule` value. Block intervals are
//! never checked against each other on insert; use
//! [`Schedule::block_conflicts`] to find overlaps explicitly.

use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use super::error::ScheduleError;
use super::operations::{
    ranges_overlap, total_slots, total_weekly_hours, validate_block_interval, validate_day_window,
};
use super::slots::generate_slots;
use super::types::{BlockInterval, DayOfWeek, DayWindow, Schedule, ScheduleSummary, TimeSlot};

impl Schedule {
    /// Adds a day window, keeping windows ordered by weekday.
    ///
    /// Windows without a weekday are appended; they fail validation later.
    pub fn add_day_window(
        &mut self,
        window: DayWindow,
        now: DateTime<Utc>,
    ) -> Result<(), ScheduleError> {
        if let Some(day) = window.day_of_week {
            if self.is_available_on(day) {
                return Err(ScheduleError::DuplicateDay(day));
            }
            let position = self
                .day_windows
                .iter()
                .position(|existing| existing.day_of_week.is_none_or(|d| d > day))
                .unwrap_or(self.day_windows.len());
            self.day_windows.insert(position, window);
        } else {
            self.day_windows.push(window);
        }
        self.updated_date = now;
        Ok(())
    }

    /// Removes the window for a weekday, returning it if present.
    pub fn remove_day_window(&mut self, day: DayOfWeek, now: DateTime<Utc>) -> Option<DayWindow> {
        let index = self
            .day_windows
            .iter()
            .position(|window| window.day_of_week == Some(day))?;
        self.updated_date = now;
        Some(self.day_windows.remove(index))
    }

    /// Adds a block interval without any overlap check.
    pub fn add_block_interval(&mut self, block: BlockInterval, now: DateTime<Utc>) {
        self.block_intervals.push(block);
        self.updated_date = now;
    }

    /// Removes a block interval by ID, returning it if present.
    pub fn remove_block_interval(&mut self, id: Uuid, now: DateTime<Utc>) -> Option<BlockInterval> {
        let index = self.block_intervals.iter().position(|block| block.id == id)?;
        self.updated_date = now;
        Some(self.block_intervals.remove(index))
    }

    /// Returns the working window for a weekday.
    pub fn day_window(&self, day: DayOfWeek) -> Option<&DayWindow> {
        self.day_windows
            .iter()
            .find(|window| window.day_of_week == Some(day))
    }

    /// True when the schedule has working hours on the given weekday.
    pub fn is_available_on(&self, day: DayOfWeek) -> bool {
        self.day_window(day).is_some()
    }

    /// Weekdays that do not have a window yet, in week order.
    pub fn available_days(&self) -> Vec<DayOfWeek> {
        DayOfWeek::ALL
            .into_iter()
            .filter(|day| !self.is_available_on(*day))
            .collect()
    }

    pub fn total_working_days(&self) -> usize {
        self.day_windows.len()
    }

    pub fn total_block_days(&self) -> usize {
        self.block_intervals.len()
    }

    pub fn total_weekly_hours(&self) -> f64 {
        total_weekly_hours(self)
    }

    pub fn total_slots(&self) -> usize {
        total_slots(self)
    }

    /// Validates the schedule and everything it contains.
    ///
    /// Per-window and per-block errors are wrapped with their position so a
    /// caller can show each one next to the offending row.
    pub fn validate(&self, today: NaiveDate) -> Vec<ScheduleError> {
        let mut errors = Vec::new();

        if self.provider_name.trim().is_empty() {
            errors.push(ScheduleError::MissingProviderName);
        }
        if self.time_zone.trim().is_empty() {
            errors.push(ScheduleError::MissingTimeZone);
        }
        if self.day_windows.is_empty() {
            errors.push(ScheduleError::NoWorkingDays);
        }

        let mut seen = Vec::with_capacity(self.day_windows.len());
        for day in self.day_windows.iter().filter_map(|w| w.day_of_week) {
            if seen.contains(&day) {
                errors.push(ScheduleError::DuplicateDay(day));
            } else {
                seen.push(day);
            }
        }

        for (index, window) in self.day_windows.iter().enumerate() {
            let window_errors = validate_day_window(window);
            if !window_errors.is_empty() {
                errors.push(ScheduleError::DayWindow {
                    index,
                    errors: window_errors,
                });
            }
        }

        for (index, block) in self.block_intervals.iter().enumerate() {
            let block_errors = validate_block_interval(block, today);
            if !block_errors.is_empty() {
                errors.push(ScheduleError::BlockInterval {
                    index,
                    errors: block_errors,
                });
            }
        }

        errors
    }

    /// Slots of the date's weekday window that no block on that date overlaps.
    ///
    /// Inactive windows offer no slots.
    pub fn open_slots(&self, date: NaiveDate) -> Vec<TimeSlot> {
        let Some(window) = self
            .day_window(DayOfWeek::of_date(date))
            .filter(|window| window.is_active)
        else {
            return Vec::new();
        };

        let blocked: Vec<_> = self
            .block_intervals
            .iter()
            .filter(|block| block.date == Some(date))
            .filter_map(BlockInterval::time_range)
            .collect();

        generate_slots(window)
            .filter(|slot| {
                blocked
                    .iter()
                    .all(|range| !ranges_overlap(slot.time_range(), *range))
            })
            .collect()
    }

    /// Index pairs of blocks on the same date whose ranges overlap.
    pub fn block_conflicts(&self) -> Vec<(usize, usize)> {
        let mut conflicts = Vec::new();
        for (i, a) in self.block_intervals.iter().enumerate() {
            for (j, b) in self.block_intervals.iter().enumerate().skip(i + 1) {
                let same_date = a.date.is_some() && a.date == b.date;
                if let (true, Some(ra), Some(rb)) = (same_date, a.time_range(), b.time_range()) {
                    if ranges_overlap(ra, rb) {
                        conflicts.push((i, j));
                    }
                }
            }
        }
        conflicts
    }

    /// The row shown in the saved-availability list.
    pub fn summary(&self) -> ScheduleSummary {
        ScheduleSummary {
            provider_name: self.provider_name.clone(),
            total_days: self.total_working_days(),
            total_hours: self.total_weekly_hours(),
            block_days: self.total_block_days(),
            status: self.status,
        }
    }
}
