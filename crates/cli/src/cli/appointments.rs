//! Appointment CLI commands.

use clap::{Parser, Subcommand, ValueEnum};
use uuid::Uuid;

// Re-export core sort types for command handling
pub use healthfirst_core::appointments::{SortKey as CoreSortKey, SortOrder as CoreSortOrder};

/// Appointment list commands.
#[derive(Debug, Parser)]
pub struct AppointmentsCommand {
    #[command(subcommand)]
    pub action: AppointmentsAction,
}

/// CLI sort key (with clap ValueEnum).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum SortKey {
    #[default]
    DateTime,
    AppointmentType,
    PatientName,
    ProviderName,
    Status,
    ReasonForVisit,
}

impl From<SortKey> for CoreSortKey {
    fn from(k: SortKey) -> Self {
        match k {
            SortKey::DateTime => CoreSortKey::DateTime,
            SortKey::AppointmentType => CoreSortKey::AppointmentType,
            SortKey::PatientName => CoreSortKey::PatientName,
            SortKey::ProviderName => CoreSortKey::ProviderName,
            SortKey::Status => CoreSortKey::Status,
            SortKey::ReasonForVisit => CoreSortKey::ReasonForVisit,
        }
    }
}

/// CLI sort order (with clap ValueEnum).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl From<SortOrder> for CoreSortOrder {
    fn from(o: SortOrder) -> Self {
        match o {
            SortOrder::Asc => CoreSortOrder::Asc,
            SortOrder::Desc => CoreSortOrder::Desc,
        }
    }
}

/// Available appointment actions.
#[derive(Debug, Subcommand)]
pub enum AppointmentsAction {
    /// List one page of appointments.
    List {
        /// Match patient name, date of birth or contact details.
        #[arg(long, default_value = "")]
        search: String,
        /// Status filter, matched exactly, e.g. "Checked In" ("all" for any).
        #[arg(long, default_value = "all")]
        status: String,
        /// Appointment type filter, matched exactly ("all" for any).
        #[arg(long = "type", default_value = "all")]
        appointment_type: String,
        /// Sort key.
        #[arg(long, value_enum, default_value = "date-time")]
        sort: SortKey,
        /// Sort order.
        #[arg(long, value_enum, default_value = "desc")]
        order: SortOrder,
        /// 1-based page number.
        #[arg(long, default_value = "1")]
        page: usize,
        /// Rows per page (default: HEALTHFIRST_PAGE_SIZE or 10).
        #[arg(long)]
        page_size: Option<usize>,
    },
    /// Count appointments per status.
    Stats,
    /// Set an appointment's status.
    SetStatus {
        /// Appointment ID.
        id: Uuid,
        /// New status, e.g. "checked-in" or "Completed".
        status: String,
    },
}
