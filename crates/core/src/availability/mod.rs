mod error;
mod mock_data;
mod operations;
mod schedule;
mod slots;
mod types;

pub use error::{ScheduleError, ValidationError};
pub use mock_data::sample_schedule;
pub use operations::{
    compute_duration, is_time_blocked, ranges_overlap, time_options, total_slots,
    total_weekly_hours, validate_block_interval, validate_day_window, TIME_ZONES,
};
pub use slots::{generate_slots, Slots};
pub use types::{
    BlockInterval, BlockType, DayOfWeek, DayWindow, Schedule, ScheduleStatus, ScheduleSummary,
    TimeRange, TimeSlot, DEFAULT_SLOT_DURATION,
};
