mod error;
mod mock_data;
mod operations;
mod query;
mod requests;
mod types;

pub use error::{AppointmentError, QueryError};
pub use mock_data::sample_appointments;
pub use operations::status_counts;
pub use query::{
    filter_appointments, paginate, run_query, sort_appointments, FilterCriteria, Page,
    QueryParams, SortKey, SortOrder, DEFAULT_PAGE_SIZE,
};
pub use requests::{ScheduleAppointmentRequest, UpdateAppointmentRequest};
pub use types::{
    AppointmentMode, AppointmentRecord, AppointmentStatus, RescheduleRecord, APPOINTMENT_TYPES,
    DEFAULT_APPOINTMENT_DURATION,
};
