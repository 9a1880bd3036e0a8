//! Pretty output formatting.

use chrono::NaiveTime;
use healthfirst_core::appointments::{AppointmentRecord, AppointmentStatus, Page};
use healthfirst_core::availability::{
    BlockInterval, DayWindow, ScheduleError, ScheduleSummary, TimeSlot,
};

/// Format a time of day the way the portal shows it, e.g. `9:00 AM`.
pub fn format_time(time: NaiveTime) -> String {
    time.format("%-I:%M %p").to_string()
}

/// Format a slot as `start - end`.
pub fn format_slot(slot: &TimeSlot) -> String {
    format!(
        "{} - {}",
        format_time(slot.start_time),
        format_time(slot.end_time)
    )
}

/// Format the saved-availability row.
pub fn format_summary(summary: &ScheduleSummary) -> String {
    format!(
        "{} [{}]\n  Days: {}\n  Hours: {}\n  Blocked days: {}",
        summary.provider_name,
        summary.status.as_str(),
        summary.total_days,
        summary.total_hours,
        summary.block_days
    )
}

/// Format a window's header line.
pub fn format_day_window(window: &DayWindow) -> String {
    let day = window.day_of_week.map(|d| d.as_str()).unwrap_or("(no day)");
    let hours = match (window.from_time, window.to_time) {
        (Some(from), Some(to)) => format!("{} - {}", format_time(from), format_time(to)),
        _ => "(incomplete)".to_string(),
    };
    let mut output = format!(
        "{day} {hours} ({} min slots, {} min break)",
        window.slot_duration, window.break_time
    );
    if !window.is_active {
        output.push_str(" [inactive]");
    }
    output
}

/// Format one window's slot grid.
pub fn format_window_slots(window: &DayWindow, slots: &[TimeSlot]) -> String {
    let mut output = format_day_window(window);
    if slots.is_empty() {
        output.push_str("\n  No slots.");
    }
    for slot in slots {
        output.push_str(&format!("\n  {}", format_slot(slot)));
    }
    output
}

/// Format slots for display.
pub fn format_slots(slots: &[TimeSlot]) -> String {
    if slots.is_empty() {
        return "No open slots found.".to_string();
    }
    let mut output = format!("OPEN SLOTS ({})\n", slots.len());
    output.push_str(&"-".repeat(40));
    for slot in slots {
        output.push_str(&format!("\n{}", format_slot(slot)));
    }
    output
}

/// Format validation errors for display.
pub fn format_schedule_errors(errors: &[ScheduleError]) -> String {
    if errors.is_empty() {
        return "Schedule is valid.".to_string();
    }
    let mut output = format!("ERRORS ({})\n", errors.len());
    output.push_str(&"-".repeat(40));
    for error in errors {
        output.push_str(&format!("\n{}", error));
    }
    output
}

/// Format a block for display.
pub fn format_block(block: &BlockInterval) -> String {
    let date = block
        .date
        .map(|d| d.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "(no date)".to_string());
    let mut output = match (block.from_time, block.to_time) {
        (Some(from), Some(to)) => {
            format!("{date} {} - {}", format_time(from), format_time(to))
        }
        _ => format!("{date} (incomplete)"),
    };
    if !block.reason.is_empty() {
        output.push_str(&format!(" {}", block.reason));
    }
    output
}

/// Format overlapping block pairs for display.
pub fn format_conflicts(conflicts: &[(&BlockInterval, &BlockInterval)]) -> String {
    if conflicts.is_empty() {
        return "No conflicts found.".to_string();
    }
    let mut output = format!("CONFLICTS ({})\n", conflicts.len());
    output.push_str(&"-".repeat(40));
    for (a, b) in conflicts {
        output.push_str(&format!("\n{}\n  overlaps {}", format_block(a), format_block(b)));
    }
    output
}

/// Format an appointment for display.
pub fn format_appointment(record: &AppointmentRecord) -> String {
    format!(
        "{} [{}]\n  ID: {}\n  When: {} {}\n  Type: {} ({})\n  Provider: {}\n  Reason: {}\n  Contact: {}",
        record.patient_name,
        record.status,
        record.id,
        record.appointment_date.format("%m/%d/%Y"),
        format_time(record.appointment_time),
        record.appointment_type,
        record.appointment_mode,
        record.provider_name,
        record.reason_for_visit,
        record.contact_details
    )
}

/// Format a page of appointments with its pager line.
pub fn format_page(page: &Page<AppointmentRecord>) -> String {
    if page.items.is_empty() {
        return "No appointments found.".to_string();
    }
    let mut output = format!("APPOINTMENTS ({})\n", page.total_items);
    output.push_str(&"-".repeat(40));
    for record in &page.items {
        output.push_str(&format!("\n{}", format_appointment(record)));
        output.push('\n');
    }
    output.push_str(&format!(
        "\nShowing {} to {} of {} (page {} of {})",
        page.first_item_number(),
        page.last_item_number(),
        page.total_items,
        page.page,
        page.total_pages
    ));
    output
}

/// Format per-status counts for display.
pub fn format_status_counts(counts: &[(AppointmentStatus, usize)]) -> String {
    let mut output = "STATUS\n".to_string();
    output.push_str(&"-".repeat(40));
    for (status, count) in counts {
        output.push_str(&format!("\n{:<12} {}", status.as_str(), count));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use healthfirst_core::appointments::{paginate, sample_appointments};
    use healthfirst_core::availability::{sample_schedule, DayOfWeek};

    fn make_time(hour: u32, min: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, min, 0).unwrap()
    }

    #[test]
    fn test_format_time_is_twelve_hour() {
        assert_eq!(format_time(make_time(9, 0)), "9:00 AM");
        assert_eq!(format_time(make_time(13, 5)), "1:05 PM");
        assert_eq!(format_time(make_time(0, 15)), "12:15 AM");
    }

    #[test]
    fn test_format_summary() {
        let output = format_summary(&sample_schedule().summary());
        assert!(output.starts_with("Dr. John Smith [active]"));
        assert!(output.contains("Hours: 54"));
    }

    #[test]
    fn test_format_window_header() {
        let schedule = sample_schedule();
        let window = schedule.day_window(DayOfWeek::Monday).unwrap();
        assert_eq!(
            format_day_window(window),
            "Monday 9:00 AM - 6:00 PM (15 min slots, 0 min break)"
        );
    }

    #[test]
    fn test_empty_lists() {
        assert_eq!(format_slots(&[]), "No open slots found.");
        assert_eq!(format_conflicts(&[]), "No conflicts found.");
        assert_eq!(format_schedule_errors(&[]), "Schedule is valid.");
    }

    #[test]
    fn test_format_page_pager_line() {
        let page = paginate(&sample_appointments(), 2, 5);
        let output = format_page(&page);

        assert!(output.starts_with("APPOINTMENTS (12)"));
        assert!(output.ends_with("Showing 6 to 10 of 12 (page 2 of 3)"));
    }

    #[test]
    fn test_format_empty_page() {
        let page = paginate(&sample_appointments(), 9, 5);
        assert_eq!(format_page(&page), "No appointments found.");
    }
}
