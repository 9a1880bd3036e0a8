use std::iter::FusedIterator;

use chrono::NaiveTime;

use super::types::{minute_of_day, DayWindow, TimeSlot};

/// Lazy iterator over the slot grid of a day window.
///
/// Slots start at `from_time`, last `slot_duration` minutes and start
/// `slot_duration + break_time` minutes apart. A slot is only emitted when it
/// ends at or before `to_time`. Each call to [`generate_slots`] starts a
/// fresh pass over the same window.
#[derive(Debug, Clone)]
pub struct Slots {
    cursor: u32,
    end: u32,
    slot_duration: u32,
    step: u32,
}

impl Slots {
    fn empty() -> Self {
        Self {
            cursor: 0,
            end: 0,
            slot_duration: 0,
            step: 0,
        }
    }
}

impl Iterator for Slots {
    type Item = TimeSlot;

    fn next(&mut self) -> Option<TimeSlot> {
        let slot_end = self
            .cursor
            .checked_add(self.slot_duration)
            .filter(|end| self.slot_duration > 0 && *end <= self.end);
        let Some(slot_end) = slot_end else {
            self.slot_duration = 0;
            return None;
        };

        let slot = TimeSlot {
            start_time: time_from_minutes(self.cursor)?,
            end_time: time_from_minutes(slot_end)?,
            duration: self.slot_duration,
        };
        // A step past u32::MAX leaves no room for another slot.
        match self.cursor.checked_add(self.step) {
            Some(next) => self.cursor = next,
            None => self.slot_duration = 0,
        }
        Some(slot)
    }
}

impl FusedIterator for Slots {}

/// Produces the slot grid for a day window.
///
/// Incomplete windows and windows with a zero slot duration yield nothing.
pub fn generate_slots(window: &DayWindow) -> Slots {
    match (window.from_time, window.to_time) {
        (Some(from), Some(to)) if window.slot_duration > 0 => Slots {
            cursor: minute_of_day(from),
            end: minute_of_day(to),
            slot_duration: window.slot_duration,
            step: window.slot_duration.saturating_add(window.break_time),
        },
        _ => Slots::empty(),
    }
}

fn time_from_minutes(minutes: u32) -> Option<NaiveTime> {
    NaiveTime::from_hms_opt(minutes / 60, minutes % 60, 0)
}
