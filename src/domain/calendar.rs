//! Period-to-bucket mapping for the calendar spending caps.
//!
//! Both caps need a well-defined grouping of periods; these are pure
//! functions from timestamp to bucket key, applied once while building
//! constraints. Weeks follow ISO-8601, so an early-January period can land
//! in the last week of the previous ISO year.

use chrono::{DateTime, Datelike, Utc};

/// Calendar bucket for the monthly spending cap.
pub fn month_key(timestamp: DateTime<Utc>) -> (i32, u32) {
    (timestamp.year(), timestamp.month())
}

/// ISO week bucket for the weekly spending cap.
pub fn week_key(timestamp: DateTime<Utc>) -> (i32, u32) {
    let iso = timestamp.iso_week();
    (iso.year(), iso.week())
}
