use chrono::{NaiveDate, NaiveTime};
use healthfirst_core::availability::{
    generate_slots, is_time_blocked, time_options, BlockInterval, DayOfWeek, Schedule,
    ScheduleError, TimeSlot,
};
use serde::Serialize;
use serde_json::json;

use super::Outcome;
use crate::cli::availability::AvailabilityAction;
use crate::cli::OutputFormat;
use crate::config::Config;
use crate::output::{format_output, pretty};

/// One working day's slot grid.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct WindowSlots {
    day_of_week: Option<DayOfWeek>,
    is_active: bool,
    slots: Vec<TimeSlot>,
}

/// A pair of blocks whose ranges overlap on the same date.
#[derive(Debug, Serialize)]
struct Conflict<'a> {
    first: &'a BlockInterval,
    second: &'a BlockInterval,
}

/// Execute an availability action against a loaded schedule.
pub fn run(
    action: &AvailabilityAction,
    schedule: &Schedule,
    format: OutputFormat,
    config: &Config,
    today: NaiveDate,
) -> Outcome {
    match action {
        AvailabilityAction::Summary => {
            let summary = schedule.summary();
            Outcome::ok(match format {
                OutputFormat::Json => format_output(&summary, format),
                OutputFormat::Pretty => pretty::format_summary(&summary),
            })
        }
        AvailabilityAction::Slots { day } => {
            let day = day.map(DayOfWeek::from);
            let windows: Vec<_> = schedule
                .day_windows
                .iter()
                .filter(|w| day.is_none() || w.day_of_week == day)
                .collect();
            Outcome::ok(match format {
                OutputFormat::Json => {
                    let grids: Vec<WindowSlots> = windows
                        .iter()
                        .map(|w| WindowSlots {
                            day_of_week: w.day_of_week,
                            is_active: w.is_active,
                            slots: generate_slots(w).collect(),
                        })
                        .collect();
                    format_output(&grids, format)
                }
                OutputFormat::Pretty if windows.is_empty() => "No working days found.".to_string(),
                OutputFormat::Pretty => windows
                    .iter()
                    .map(|w| {
                        let slots: Vec<_> = generate_slots(w).collect();
                        pretty::format_window_slots(w, &slots)
                    })
                    .collect::<Vec<_>>()
                    .join("\n\n"),
            })
        }
        AvailabilityAction::Hours => {
            let hours = schedule.total_weekly_hours();
            Outcome::ok(match format {
                OutputFormat::Json => format_output(&json!({ "totalHours": hours }), format),
                OutputFormat::Pretty => format!(
                    "Total weekly hours: {}\nTotal slots: {}",
                    hours,
                    schedule.total_slots()
                ),
            })
        }
        AvailabilityAction::Validate { today: as_of } => {
            let as_of = as_of.unwrap_or(today);
            let errors = schedule.validate(as_of);
            if errors.is_empty() {
                tracing::info!(%as_of, "Schedule is valid");
            } else {
                tracing::warn!(%as_of, count = errors.len(), "Schedule has validation errors");
            }
            let output = match format {
                OutputFormat::Json => {
                    let messages: Vec<String> = errors.iter().map(ScheduleError::to_string).collect();
                    format_output(
                        &json!({ "valid": errors.is_empty(), "errors": messages }),
                        format,
                    )
                }
                OutputFormat::Pretty => pretty::format_schedule_errors(&errors),
            };
            if errors.is_empty() {
                Outcome::ok(output)
            } else {
                Outcome::failed(output)
            }
        }
        AvailabilityAction::Blocked { date, time } => {
            let blocked = is_time_blocked(schedule, *date, *time);
            Outcome::ok(match format {
                OutputFormat::Json => format_output(
                    &json!({
                        "date": date,
                        "time": time.format("%H:%M").to_string(),
                        "blocked": blocked,
                    }),
                    format,
                ),
                OutputFormat::Pretty => format!(
                    "{} {} is {}",
                    date.format("%Y-%m-%d"),
                    pretty::format_time(*time),
                    if blocked { "blocked" } else { "not blocked" }
                ),
            })
        }
        AvailabilityAction::Open { date } => {
            let slots = schedule.open_slots(*date);
            tracing::debug!(%date, count = slots.len(), "Computed open slots");
            Outcome::ok(match format {
                OutputFormat::Json => format_output(&slots, format),
                OutputFormat::Pretty => pretty::format_slots(&slots),
            })
        }
        AvailabilityAction::Conflicts => {
            let pairs: Vec<_> = schedule
                .block_conflicts()
                .into_iter()
                .map(|(i, j)| (&schedule.block_intervals[i], &schedule.block_intervals[j]))
                .collect();
            Outcome::ok(match format {
                OutputFormat::Json => {
                    let conflicts: Vec<Conflict<'_>> = pairs
                        .iter()
                        .map(|&(first, second)| Conflict { first, second })
                        .collect();
                    format_output(&conflicts, format)
                }
                OutputFormat::Pretty => pretty::format_conflicts(&pairs),
            })
        }
        AvailabilityAction::TimeOptions { interval } => {
            let interval = interval.unwrap_or(config.time_option_interval);
            let options = time_options(interval);
            Outcome::ok(match format {
                OutputFormat::Json => {
                    let labels: Vec<String> = options
                        .iter()
                        .map(|t| t.format("%H:%M").to_string())
                        .collect();
                    format_output(&labels, format)
                }
                OutputFormat::Pretty => format_time_options(&options),
            })
        }
    }
}

fn format_time_options(options: &[NaiveTime]) -> String {
    if options.is_empty() {
        return "No time options.".to_string();
    }
    let mut output = format!("TIME OPTIONS ({})\n", options.len());
    output.push_str(&"-".repeat(40));
    for time in options {
        output.push_str(&format!("\n{}", pretty::format_time(*time)));
    }
    output
}
