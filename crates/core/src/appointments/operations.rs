use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};

use super::types::{AppointmentRecord, AppointmentStatus, RescheduleRecord};

impl AppointmentRecord {
    /// The appointment's local date and time.
    pub fn date_time(&self) -> NaiveDateTime {
        self.appointment_date.and_time(self.appointment_time)
    }

    pub fn is_today(&self, today: NaiveDate) -> bool {
        self.appointment_date == today
    }

    pub fn is_past(&self, now: NaiveDateTime) -> bool {
        self.date_time() < now
    }

    /// Scheduled or checked-in appointments that have not started yet.
    pub fn can_be_cancelled(&self, now: NaiveDateTime) -> bool {
        matches!(
            self.status,
            AppointmentStatus::Scheduled | AppointmentStatus::CheckedIn
        ) && !self.is_past(now)
    }

    /// Only scheduled appointments that have not started yet.
    pub fn can_be_rescheduled(&self, now: NaiveDateTime) -> bool {
        self.status == AppointmentStatus::Scheduled && !self.is_past(now)
    }

    /// Sets any status, regardless of the current one.
    pub fn set_status(&mut self, status: AppointmentStatus, now: DateTime<Utc>) {
        self.status = status;
        self.updated_date = now;
    }

    /// Marks the patient as arrived.
    pub fn check_in(&mut self, now: DateTime<Utc>) {
        self.check_in_time = Some(now);
        self.set_status(AppointmentStatus::CheckedIn, now);
    }

    pub fn cancel(&mut self, reason: impl Into<String>, now: DateTime<Utc>) {
        self.cancellation_reason = Some(reason.into());
        self.set_status(AppointmentStatus::Cancelled, now);
    }

    /// Moves the appointment and records where it was before.
    pub fn reschedule(
        &mut self,
        new_date: NaiveDate,
        new_time: NaiveTime,
        reason: impl Into<String>,
        rescheduled_by: Option<String>,
        now: DateTime<Utc>,
    ) {
        self.reschedule_history.push(RescheduleRecord {
            original_date: self.appointment_date,
            original_time: self.appointment_time,
            new_date,
            new_time,
            reason: reason.into(),
            rescheduled_by,
            rescheduled_date: now,
        });
        self.appointment_date = new_date;
        self.appointment_time = new_time;
        self.set_status(AppointmentStatus::Rescheduled, now);
    }
}

/// Number of records in each status, in status order.
pub fn status_counts(records: &[AppointmentRecord]) -> Vec<(AppointmentStatus, usize)> {
    AppointmentStatus::ALL
        .into_iter()
        .map(|status| {
            let count = records.iter().filter(|r| r.status == status).count();
            (status, count)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::appointments::mock_data::sample_appointments;

    fn make_date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn make_time(hour: u32, min: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, min, 0).unwrap()
    }

    fn scheduled() -> AppointmentRecord {
        // 2021-02-24 11:17, Scheduled
        sample_appointments().remove(0)
    }

    #[test]
    fn test_is_today_and_is_past() {
        let record = scheduled();
        let before = make_date(2021, 2, 24).and_time(make_time(11, 0));
        let after = make_date(2021, 2, 24).and_time(make_time(11, 30));

        assert!(record.is_today(make_date(2021, 2, 24)));
        assert!(!record.is_today(make_date(2021, 2, 25)));
        assert!(!record.is_past(before));
        assert!(record.is_past(after));
    }

    #[test]
    fn test_can_be_cancelled() {
        let now = make_date(2021, 1, 1).and_time(make_time(8, 0));
        let mut record = scheduled();
        assert!(record.can_be_cancelled(now));

        record.status = AppointmentStatus::CheckedIn;
        assert!(record.can_be_cancelled(now));

        record.status = AppointmentStatus::InExam;
        assert!(!record.can_be_cancelled(now));

        record.status = AppointmentStatus::Scheduled;
        let later = make_date(2022, 1, 1).and_time(make_time(8, 0));
        assert!(!record.can_be_cancelled(later));
    }

    #[test]
    fn test_can_be_rescheduled_only_when_scheduled() {
        let now = make_date(2021, 1, 1).and_time(make_time(8, 0));
        let mut record = scheduled();
        assert!(record.can_be_rescheduled(now));

        record.status = AppointmentStatus::CheckedIn;
        assert!(!record.can_be_rescheduled(now));
    }

    #[test]
    fn test_set_status_is_unconstrained() {
        let now = Utc::now();
        let mut record = scheduled();
        record.set_status(AppointmentStatus::Completed, now);
        record.set_status(AppointmentStatus::Scheduled, now);

        assert_eq!(record.status, AppointmentStatus::Scheduled);
        assert_eq!(record.updated_date, now);
    }

    #[test]
    fn test_check_in_and_cancel() {
        let now = Utc::now();
        let mut record = scheduled();

        record.check_in(now);
        assert_eq!(record.status, AppointmentStatus::CheckedIn);
        assert_eq!(record.check_in_time, Some(now));

        record.cancel("Patient unwell", now);
        assert_eq!(record.status, AppointmentStatus::Cancelled);
        assert_eq!(record.cancellation_reason.as_deref(), Some("Patient unwell"));
    }

    #[test]
    fn test_reschedule_keeps_history() {
        let now = Utc::now();
        let mut record = scheduled();
        record.reschedule(
            make_date(2021, 3, 1),
            make_time(9, 30),
            "Provider unavailable",
            Some("front desk".to_string()),
            now,
        );

        assert_eq!(record.status, AppointmentStatus::Rescheduled);
        assert_eq!(record.date_time(), make_date(2021, 3, 1).and_time(make_time(9, 30)));
        assert_eq!(record.reschedule_history.len(), 1);
        let history = &record.reschedule_history[0];
        assert_eq!(history.original_date, make_date(2021, 2, 24));
        assert_eq!(history.original_time, make_time(11, 17));
        assert_eq!(history.rescheduled_date, now);
    }

    #[test]
    fn test_status_counts() {
        let counts = status_counts(&sample_appointments());

        assert_eq!(counts.len(), 7);
        assert_eq!(counts[0], (AppointmentStatus::Scheduled, 4));
        assert_eq!(counts[1], (AppointmentStatus::CheckedIn, 3));
        assert_eq!(counts[2], (AppointmentStatus::InExam, 2));
        assert_eq!(counts[4], (AppointmentStatus::Cancelled, 3));
        assert_eq!(counts.iter().map(|(_, n)| n).sum::<usize>(), 12);
    }
}
