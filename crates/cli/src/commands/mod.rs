//! Command execution.
//!
//! Each command loads its snapshot, calls into the core and renders the
//! result as a string; `main` only prints it.

pub mod appointments;
pub mod availability;

use chrono::{DateTime, Local, Utc};

use crate::cli::{Cli, Commands};
use crate::config::Config;
use crate::data;
use crate::error::Result;

/// Rendered command output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub output: String,
    /// False when the command found problems the exit code should report.
    pub success: bool,
}

impl Outcome {
    pub fn ok(output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
            success: true,
        }
    }

    pub fn failed(output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
            success: false,
        }
    }
}

/// Run the parsed command against the configured snapshots.
///
/// Flags take precedence over the environment.
pub fn run(cli: &Cli, config: &Config, now: DateTime<Local>) -> Result<Outcome> {
    match &cli.command {
        Commands::Availability(cmd) => {
            let path = cli.schedule.as_deref().or(config.schedule_path.as_deref());
            let schedule = data::load_schedule(path)?;
            Ok(availability::run(
                &cmd.action,
                &schedule,
                cli.format,
                config,
                now.date_naive(),
            ))
        }
        Commands::Appointments(cmd) => {
            let path = cli
                .appointments
                .as_deref()
                .or(config.appointments_path.as_deref());
            let mut records = data::load_appointments(path)?;
            appointments::run(
                &cmd.action,
                &mut records,
                cli,
                config,
                now.with_timezone(&Utc),
            )
        }
    }
}
