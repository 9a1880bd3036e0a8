//! Availability CLI commands.

use chrono::{NaiveDate, NaiveTime};
use clap::{Parser, Subcommand, ValueEnum};

use super::{parse_date_arg, parse_time_arg};

// Re-export core DayOfWeek for command handling
pub use healthfirst_core::availability::DayOfWeek as CoreDayOfWeek;

/// Provider schedule commands.
#[derive(Debug, Parser)]
pub struct AvailabilityCommand {
    #[command(subcommand)]
    pub action: AvailabilityAction,
}

/// CLI weekday (with clap ValueEnum).
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl From<Day> for CoreDayOfWeek {
    fn from(d: Day) -> Self {
        match d {
            Day::Monday => CoreDayOfWeek::Monday,
            Day::Tuesday => CoreDayOfWeek::Tuesday,
            Day::Wednesday => CoreDayOfWeek::Wednesday,
            Day::Thursday => CoreDayOfWeek::Thursday,
            Day::Friday => CoreDayOfWeek::Friday,
            Day::Saturday => CoreDayOfWeek::Saturday,
            Day::Sunday => CoreDayOfWeek::Sunday,
        }
    }
}

/// Available availability actions.
#[derive(Debug, Subcommand)]
pub enum AvailabilityAction {
    /// Show the saved-availability summary row.
    Summary,
    /// List the slot grid for every working day, or one day.
    Slots {
        /// Only this weekday.
        #[arg(long, value_enum)]
        day: Option<Day>,
    },
    /// Total weekly working hours.
    Hours,
    /// Validate the schedule and its blocks.
    Validate {
        /// Date blocks must not precede (YYYY-MM-DD, default: today).
        #[arg(long, value_parser = parse_date_arg)]
        today: Option<NaiveDate>,
    },
    /// Check whether a moment falls inside a block.
    Blocked {
        /// Date (YYYY-MM-DD).
        #[arg(long, value_parser = parse_date_arg)]
        date: NaiveDate,
        /// Time (HH:MM).
        #[arg(long, value_parser = parse_time_arg)]
        time: NaiveTime,
    },
    /// Slots on a date that no block overlaps.
    Open {
        /// Date (YYYY-MM-DD).
        #[arg(long, value_parser = parse_date_arg)]
        date: NaiveDate,
    },
    /// Pairs of blocks that overlap on the same date.
    Conflicts,
    /// Time picker options.
    TimeOptions {
        /// Minutes between options (default: HEALTHFIRST_TIME_OPTION_INTERVAL or 15).
        #[arg(long)]
        interval: Option<u32>,
    },
}
