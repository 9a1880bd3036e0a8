//! CLI command definitions.

pub mod appointments;
pub mod availability;

use std::path::PathBuf;

use chrono::{NaiveDate, NaiveTime};
use clap::{Parser, Subcommand, ValueEnum};

/// Provider availability and appointment list tools.
#[derive(Debug, Parser)]
#[command(name = "healthfirst")]
#[command(about = "Provider availability and appointment list tools", long_about = None)]
pub struct Cli {
    /// Output format.
    #[arg(long, global = true, default_value = "pretty")]
    pub format: OutputFormat,

    /// Suppress non-essential output.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Schedule snapshot (JSON) to use instead of the built-in sample.
    #[arg(long, global = true, value_name = "PATH")]
    pub schedule: Option<PathBuf>,

    /// Appointment list (JSON) to use instead of the built-in sample.
    #[arg(long, global = true, value_name = "PATH")]
    pub appointments: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Raw JSON output.
    Json,
    /// Human-readable output.
    #[default]
    Pretty,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Provider schedule and slot tools.
    Availability(availability::AvailabilityCommand),
    /// Appointment list tools.
    Appointments(appointments::AppointmentsCommand),
}

/// Parses a `YYYY-MM-DD` argument.
pub fn parse_date_arg(s: &str) -> Result<NaiveDate, String> {
    healthfirst_core::serde::parse_date(s).map_err(|e| format!("expected YYYY-MM-DD: {e}"))
}

/// Parses an `HH:MM` (or `HH:MM:SS`) argument.
pub fn parse_time_arg(s: &str) -> Result<NaiveTime, String> {
    healthfirst_core::serde::parse_time(s).map_err(|e| format!("expected HH:MM: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "healthfirst",
            "availability",
            "hours",
            "--format",
            "json",
            "--schedule",
            "schedule.json",
        ])
        .unwrap();

        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.schedule, Some(PathBuf::from("schedule.json")));
        assert!(!cli.quiet);
    }

    #[test]
    fn test_default_format_is_pretty() {
        let cli = Cli::try_parse_from(["healthfirst", "appointments", "stats"]).unwrap();
        assert_eq!(cli.format, OutputFormat::Pretty);
        assert_eq!(cli.appointments, None);
    }

    #[test]
    fn test_subcommand_required() {
        assert!(Cli::try_parse_from(["healthfirst"]).is_err());
    }

    #[test]
    fn test_parse_args() {
        assert_eq!(
            parse_date_arg("2024-01-15"),
            Ok(NaiveDate::from_ymd_opt(2024, 1, 15).unwrap())
        );
        assert_eq!(
            parse_time_arg("09:30"),
            Ok(NaiveTime::from_hms_opt(9, 30, 0).unwrap())
        );
        assert!(parse_date_arg("15/01/2024").is_err());
        assert!(parse_time_arg("9am").is_err());
    }
}
