//! Filter, sort and paginate an appointment list for display.
//!
//! Every function takes the caller's records by reference and returns freshly
//! built collections; inputs are never modified.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::types::AppointmentRecord;

/// Default number of rows per page.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Which records an appointment list shows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterCriteria {
    /// Matched against patient name, date of birth and contact details.
    #[serde(default)]
    pub search_text: String,
    /// Compared verbatim against the status display name; `None` matches
    /// every status.
    #[serde(default)]
    pub status: Option<String>,
    /// `None` matches every type.
    #[serde(default)]
    pub appointment_type: Option<String>,
}

impl FilterCriteria {
    /// Builds criteria from the list screen's string parameters.
    ///
    /// `"all"` or an empty string leaves a field unconstrained. Any other
    /// value must equal the record's field exactly, so an unknown status or
    /// type simply matches nothing.
    pub fn from_params(
        search_text: impl Into<String>,
        status: &str,
        appointment_type: &str,
    ) -> Self {
        Self {
            search_text: search_text.into(),
            status: constraint(status),
            appointment_type: constraint(appointment_type),
        }
    }

    /// True when the record satisfies every criterion.
    pub fn matches(&self, record: &AppointmentRecord) -> bool {
        self.matches_search(record)
            && self
                .status
                .as_deref()
                .is_none_or(|status| record.status.as_str() == status)
            && self
                .appointment_type
                .as_deref()
                .is_none_or(|kind| record.appointment_type == kind)
    }

    fn matches_search(&self, record: &AppointmentRecord) -> bool {
        let needle = self.search_text.to_lowercase();
        record.patient_name.to_lowercase().contains(&needle)
            || record
                .date_of_birth
                .is_some_and(|dob| dob.format("%Y-%m-%d").to_string().contains(&needle))
            || record.contact_details.contains(&self.search_text)
    }
}

fn constraint(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("all") {
        None
    } else {
        Some(value.to_string())
    }
}

/// Field an appointment list is ordered by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    /// Chronological by appointment date and time.
    #[default]
    DateTime,
    AppointmentType,
    PatientName,
    ProviderName,
    Status,
    ReasonForVisit,
}

impl SortKey {
    fn compare(&self, a: &AppointmentRecord, b: &AppointmentRecord) -> Ordering {
        match self {
            SortKey::DateTime => a.date_time().cmp(&b.date_time()),
            SortKey::AppointmentType => a.appointment_type.cmp(&b.appointment_type),
            SortKey::PatientName => a.patient_name.cmp(&b.patient_name),
            SortKey::ProviderName => a.provider_name.cmp(&b.provider_name),
            SortKey::Status => a.status.as_str().cmp(b.status.as_str()),
            SortKey::ReasonForVisit => a.reason_for_visit.cmp(&b.reason_for_visit),
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

/// One page of a list, with the totals needed for pager controls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    /// 1-based page number that was requested.
    pub page: usize,
    pub page_size: usize,
    pub total_items: usize,
    pub total_pages: usize,
}

impl<T> Page<T> {
    /// 1-based position of the first item on this page, or 0 when empty.
    pub fn first_item_number(&self) -> usize {
        if self.items.is_empty() {
            0
        } else {
            (self.page - 1) * self.page_size + 1
        }
    }

    /// 1-based position of the last item on this page, or 0 when empty.
    pub fn last_item_number(&self) -> usize {
        if self.items.is_empty() {
            0
        } else {
            (self.page - 1) * self.page_size + self.items.len()
        }
    }
}

/// Everything the list screen needs to produce one page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryParams {
    #[serde(default)]
    pub criteria: FilterCriteria,
    #[serde(default)]
    pub sort_key: SortKey,
    #[serde(default)]
    pub sort_order: SortOrder,
    #[serde(default = "default_page")]
    pub page: usize,
    #[serde(default = "default_page_size")]
    pub page_size: usize,
}

impl Default for QueryParams {
    fn default() -> Self {
        Self {
            criteria: FilterCriteria::default(),
            sort_key: SortKey::default(),
            sort_order: SortOrder::default(),
            page: default_page(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

fn default_page() -> usize {
    1
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

/// Records that match every criterion, in their original order.
pub fn filter_appointments(
    records: &[AppointmentRecord],
    criteria: &FilterCriteria,
) -> Vec<AppointmentRecord> {
    records
        .iter()
        .filter(|record| criteria.matches(record))
        .cloned()
        .collect()
}

/// Stable sort by one field.
///
/// Descending order reverses the comparator, so records with equal keys keep
/// their original relative order either way.
pub fn sort_appointments(
    records: &[AppointmentRecord],
    key: SortKey,
    order: SortOrder,
) -> Vec<AppointmentRecord> {
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| match order {
        SortOrder::Asc => key.compare(a, b),
        SortOrder::Desc => key.compare(a, b).reverse(),
    });
    sorted
}

/// Slices out a 1-based page.
///
/// Pages past the end, page 0 and a page size of 0 all give an empty page
/// rather than an error.
pub fn paginate<T: Clone>(records: &[T], page: usize, page_size: usize) -> Page<T> {
    let total_items = records.len();
    let total_pages = if page_size == 0 {
        0
    } else {
        total_items.div_ceil(page_size)
    };

    let items = page
        .checked_sub(1)
        .and_then(|index| index.checked_mul(page_size))
        .filter(|start| *start < total_items && page_size > 0)
        .map(|start| {
            let end = start.saturating_add(page_size).min(total_items);
            records[start..end].to_vec()
        })
        .unwrap_or_default();

    Page {
        items,
        page,
        page_size,
        total_items,
        total_pages,
    }
}

/// Filter, then sort, then paginate.
pub fn run_query(records: &[AppointmentRecord], params: &QueryParams) -> Page<AppointmentRecord> {
    let filtered = filter_appointments(records, &params.criteria);
    let sorted = sort_appointments(&filtered, params.sort_key, params.sort_order);
    paginate(&sorted, params.page, params.page_size)
}
