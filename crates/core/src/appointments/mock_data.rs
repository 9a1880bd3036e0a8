//! Demo appointment list used by the CLI and tests.
//!
//! Pure functions with no side effects; IDs and timestamps are fixed.

use chrono::{NaiveDate, NaiveTime, TimeZone, Utc};
use uuid::Uuid;

use super::types::{
    AppointmentMode, AppointmentRecord, AppointmentStatus, DEFAULT_APPOINTMENT_DURATION,
};

/// (date, time, type, patient, contact, provider, reason, status, mode, amount)
type Row = (
    (i32, u32, u32),
    (u32, u32),
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    &'static str,
    AppointmentStatus,
    AppointmentMode,
    f64,
);

#[rustfmt::skip]
const ROWS: [Row; 12] = [
    ((2021, 2, 24), (11, 17), "New", "Heena West", "202-555-0188", "Jacob Jones", "Infection Disease", AppointmentStatus::Scheduled, AppointmentMode::InPerson, 150.0),
    ((2021, 2, 26), (21, 40), "Follow Up", "Arlene McCoy", "202-555-0186", "Bessie Cooper", "Itching", AppointmentStatus::CheckedIn, AppointmentMode::VideoCall, 100.0),
    ((2021, 3, 7), (5, 23), "New", "Esther Howard", "202-555-0172", "Wade Warren", "Insomnia", AppointmentStatus::Scheduled, AppointmentMode::InPerson, 200.0),
    ((2021, 3, 1), (6, 5), "Follow Up", "Jane Cooper", "202-555-0124", "Darrell Steward", "Blurred Vision", AppointmentStatus::Cancelled, AppointmentMode::HomeVisit, 120.0),
    ((2021, 3, 10), (20, 1), "Follow Up", "Darrell Steward", "202-555-0198", "Savannah Nguyen", "Hearing Loss", AppointmentStatus::Scheduled, AppointmentMode::VideoCall, 175.0),
    ((2021, 3, 3), (10, 48), "New", "Esther Howard", "202-555-0164", "Arlene McCoy", "Headache", AppointmentStatus::CheckedIn, AppointmentMode::InPerson, 90.0),
    ((2021, 2, 26), (21, 40), "Follow Up", "Bessie Cooper", "202-555-0175", "Darlene Robertson", "Stomach Pain", AppointmentStatus::InExam, AppointmentMode::InPerson, 130.0),
    ((2021, 3, 8), (20, 1), "New", "Bessie Cooper", "202-555-0186", "Bessie Cooper", "Itching", AppointmentStatus::CheckedIn, AppointmentMode::VideoCall, 110.0),
    ((2021, 3, 10), (11, 43), "Follow Up", "Arlene McCoy", "202-555-0172", "Wade Warren", "Insomnia", AppointmentStatus::InExam, AppointmentMode::HomeVisit, 160.0),
    ((2021, 3, 7), (12, 27), "New", "Jane Cooper", "202-555-0123", "Darrell Steward", "Blurred Vision", AppointmentStatus::Cancelled, AppointmentMode::InPerson, 140.0),
    ((2021, 3, 5), (18, 16), "Follow Up", "Darrell Steward", "202-555-0198", "Savannah Nguyen", "Hearing Loss", AppointmentStatus::Scheduled, AppointmentMode::VideoCall, 185.0),
    ((2021, 2, 24), (11, 17), "New", "Esther Howard", "202-555-0165", "Robert Fox", "Eye Redness", AppointmentStatus::Cancelled, AppointmentMode::InPerson, 95.0),
];

/// The twelve-row appointment list the provider portal ships with.
///
/// Record `n` (1-based) has ID `Uuid::from_u128(n)`.
///
/// # Example
///
/// ```
/// use healthfirst_core::appointments::sample_appointments;
///
/// let records = sample_appointments();
/// assert_eq!(records.len(), 12);
/// assert_eq!(records[0].patient_name, "Heena West");
/// ```
pub fn sample_appointments() -> Vec<AppointmentRecord> {
    let date_of_birth = NaiveDate::from_ymd_opt(1959, 10, 21);
    let created = Utc
        .with_ymd_and_hms(2021, 2, 1, 9, 0, 0)
        .single()
        .unwrap_or_default();

    ROWS.iter()
        .zip(1u128..)
        .filter_map(|(row, n)| {
            let ((y, mo, d), (h, mi), kind, patient, contact, provider, reason, status, mode, amount) =
                *row;
            Some(AppointmentRecord {
                id: Uuid::from_u128(n),
                patient_id: Uuid::from_u128(0x1000 + n),
                patient_name: patient.to_string(),
                date_of_birth,
                contact_details: contact.to_string(),
                provider_id: Uuid::from_u128(0x2000 + n),
                provider_name: provider.to_string(),
                appointment_date: NaiveDate::from_ymd_opt(y, mo, d)?,
                appointment_time: NaiveTime::from_hms_opt(h, mi, 0)?,
                appointment_type: kind.to_string(),
                appointment_mode: mode,
                reason_for_visit: reason.to_string(),
                estimated_amount: amount,
                actual_amount: None,
                status,
                notes: String::new(),
                duration: DEFAULT_APPOINTMENT_DURATION,
                room_number: None,
                check_in_time: None,
                cancellation_reason: None,
                reschedule_history: Vec::new(),
                created_date: created,
                updated_date: created,
            })
        })
        .collect()
}
