//! Functional core for the HealthFirst provider portal.
//!
//! Two engines live here:
//!
//! - [`availability`]: provider weekly schedules, blocked intervals and the
//!   bookable slots derived from them.
//! - [`appointments`]: filtering, sorting and paging of the appointment list,
//!   plus the record lifecycle.
//!
//! Nothing in this crate reads the clock or touches the filesystem; callers
//! pass `today`/`now` explicitly.

pub mod appointments;
pub mod availability;
pub mod serde;
