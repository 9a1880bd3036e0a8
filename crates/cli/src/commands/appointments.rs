use chrono::{DateTime, Utc};
use healthfirst_core::appointments::{
    run_query, status_counts, AppointmentRecord, AppointmentStatus, FilterCriteria, QueryParams,
};
use serde::Serialize;

use super::Outcome;
use crate::cli::appointments::AppointmentsAction;
use crate::cli::{Cli, OutputFormat};
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::{format_output, pretty};

#[derive(Debug, Serialize)]
struct StatusCount {
    status: AppointmentStatus,
    count: usize,
}

/// Execute an appointment action against a loaded list.
///
/// `set-status` changes the in-memory list only; nothing is written back.
pub fn run(
    action: &AppointmentsAction,
    records: &mut [AppointmentRecord],
    cli: &Cli,
    config: &Config,
    now: DateTime<Utc>,
) -> Result<Outcome> {
    let format = cli.format;
    match action {
        AppointmentsAction::List {
            search,
            status,
            appointment_type,
            sort,
            order,
            page,
            page_size,
        } => {
            let params = QueryParams {
                criteria: FilterCriteria::from_params(search.as_str(), status, appointment_type),
                sort_key: (*sort).into(),
                sort_order: (*order).into(),
                page: *page,
                page_size: page_size.unwrap_or(config.page_size),
            };
            tracing::debug!(?params, "Running appointment query");

            let page = run_query(records, &params);
            tracing::info!(
                total = page.total_items,
                shown = page.items.len(),
                page = page.page,
                "Appointment page ready"
            );
            Ok(Outcome::ok(match format {
                OutputFormat::Json => format_output(&page, format),
                OutputFormat::Pretty => pretty::format_page(&page),
            }))
        }
        AppointmentsAction::Stats => {
            let counts = status_counts(records);
            Ok(Outcome::ok(match format {
                OutputFormat::Json => {
                    let rows: Vec<StatusCount> = counts
                        .iter()
                        .map(|&(status, count)| StatusCount { status, count })
                        .collect();
                    format_output(&rows, format)
                }
                OutputFormat::Pretty => pretty::format_status_counts(&counts),
            }))
        }
        AppointmentsAction::SetStatus { id, status } => {
            let status: AppointmentStatus = status.parse()?;
            let record = records
                .iter_mut()
                .find(|r| r.id == *id)
                .ok_or(CliError::NotFound(*id))?;
            let previous = record.status;
            record.set_status(status, now);
            tracing::info!(%id, from = %previous, to = %status, "Appointment status changed");

            Ok(Outcome::ok(match format {
                OutputFormat::Json => format_output(&*record, format),
                OutputFormat::Pretty if cli.quiet => pretty::format_appointment(record),
                OutputFormat::Pretty => {
                    format!("Updated:\n{}", pretty::format_appointment(record))
                }
            }))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use healthfirst_core::appointments::sample_appointments;
    use uuid::Uuid;

    fn make_config() -> Config {
        Config {
            page_size: 10,
            schedule_path: None,
            appointments_path: None,
            time_option_interval: 15,
        }
    }

    fn execute(args: &[&str]) -> Result<Outcome> {
        let cli = Cli::try_parse_from(args).unwrap();
        let crate::cli::Commands::Appointments(cmd) = &cli.command else {
            panic!("expected an appointments command");
        };
        let mut records = sample_appointments();
        run(&cmd.action, &mut records, &cli, &make_config(), Utc::now())
    }

    fn execute_json(args: &[&str]) -> serde_json::Value {
        let mut full = vec!["healthfirst", "--format", "json"];
        full.extend_from_slice(args);
        serde_json::from_str(&execute(&full).unwrap().output).unwrap()
    }

    #[test]
    fn test_list_default_page() {
        let page = execute_json(&["appointments", "list"]);

        assert_eq!(page["totalItems"], 12);
        assert_eq!(page["totalPages"], 2);
        assert_eq!(page["items"].as_array().unwrap().len(), 10);
        // Newest first: 2021-03-10 20:01
        assert_eq!(page["items"][0]["id"], Uuid::from_u128(5).to_string());
    }

    #[test]
    fn test_list_uses_configured_page_size() {
        let cli = Cli::try_parse_from(["healthfirst", "--format", "json", "appointments", "list"])
            .unwrap();
        let crate::cli::Commands::Appointments(cmd) = &cli.command else {
            panic!("expected an appointments command");
        };
        let mut config = make_config();
        config.page_size = 4;

        let mut records = sample_appointments();
        let outcome = run(&cmd.action, &mut records, &cli, &config, Utc::now()).unwrap();
        let page: serde_json::Value = serde_json::from_str(&outcome.output).unwrap();

        assert_eq!(page["pageSize"], 4);
        assert_eq!(page["totalPages"], 3);
    }

    #[test]
    fn test_list_filters_by_status_and_search() {
        let page = execute_json(&[
            "appointments",
            "list",
            "--status",
            "Cancelled",
            "--search",
            "cooper",
        ]);

        assert_eq!(page["totalItems"], 2);
        let items = page["items"].as_array().unwrap();
        assert!(items.iter().all(|r| r["patientName"] == "Jane Cooper"));
    }

    #[test]
    fn test_list_status_is_exact() {
        let page = execute_json(&["appointments", "list", "--status", "cancelled"]);
        assert_eq!(page["totalItems"], 0);

        let page = execute_json(&["appointments", "list", "--status", "Pending"]);
        assert_eq!(page["totalItems"], 0);
        assert_eq!(page["items"].as_array().unwrap().len(), 0);
    }

    #[test]
    fn test_set_status_rejects_unknown_status() {
        let err = execute(&[
            "healthfirst",
            "appointments",
            "set-status",
            "00000000-0000-0000-0000-000000000001",
            "Pending",
        ])
        .unwrap_err();
        assert!(matches!(err, CliError::Status(_)));
    }

    #[test]
    fn test_stats() {
        let rows = execute_json(&["appointments", "stats"]);
        let rows = rows.as_array().unwrap();

        assert_eq!(rows.len(), 7);
        assert_eq!(rows[0]["status"], "Scheduled");
        assert_eq!(rows[0]["count"], 4);
        assert_eq!(rows[2]["status"], "In Exam");
        assert_eq!(rows[2]["count"], 2);
    }

    #[test]
    fn test_set_status() {
        let record = execute_json(&[
            "appointments",
            "set-status",
            "00000000-0000-0000-0000-000000000001",
            "no-show",
        ]);
        assert_eq!(record["status"], "No Show");
    }

    #[test]
    fn test_set_status_unknown_id() {
        let err = execute(&[
            "healthfirst",
            "appointments",
            "set-status",
            "00000000-0000-0000-0000-0000000000ff",
            "Completed",
        ])
        .unwrap_err();
        assert!(matches!(err, CliError::NotFound(id) if id == Uuid::from_u128(0xff)));
    }

    #[test]
    fn test_set_status_quiet_pretty() {
        let outcome = execute(&[
            "healthfirst",
            "--quiet",
            "appointments",
            "set-status",
            "00000000-0000-0000-0000-000000000002",
            "Completed",
        ])
        .unwrap();
        assert!(outcome.output.starts_with("Arlene McCoy [Completed]"));
    }
}
