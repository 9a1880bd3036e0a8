//! Loading schedule and appointment snapshots.
//!
//! A path points at a JSON file in the portal's wire shape; without one the
//! built-in samples are used.

use std::fs;
use std::path::Path;

use healthfirst_core::appointments::{sample_appointments, AppointmentRecord};
use healthfirst_core::availability::{sample_schedule, Schedule};
use serde::de::DeserializeOwned;

use crate::error::{CliError, Result};

/// Load a schedule from `path`, or the sample schedule.
pub fn load_schedule(path: Option<&Path>) -> Result<Schedule> {
    match path {
        Some(path) => {
            let schedule: Schedule = read_json(path)?;
            tracing::info!(
                path = %path.display(),
                provider = %schedule.provider_name,
                days = schedule.day_windows.len(),
                blocks = schedule.block_intervals.len(),
                "Loaded schedule"
            );
            Ok(schedule)
        }
        None => {
            tracing::debug!("Using sample schedule");
            Ok(sample_schedule())
        }
    }
}

/// Load an appointment list from `path`, or the sample list.
pub fn load_appointments(path: Option<&Path>) -> Result<Vec<AppointmentRecord>> {
    match path {
        Some(path) => {
            let records: Vec<AppointmentRecord> = read_json(path)?;
            tracing::info!(path = %path.display(), count = records.len(), "Loaded appointments");
            Ok(records)
        }
        None => {
            tracing::debug!("Using sample appointments");
            Ok(sample_appointments())
        }
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let contents = fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&contents).map_err(|source| CliError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
