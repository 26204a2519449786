//! Calendar helpers for window boundaries.

use chrono::NaiveDate;

pub use pricegrid_types::{DATE_FORMAT, parse_date};

/// The calendar day before `date`.
///
/// Month and year boundaries are handled by the calendar, so the day before
/// `2019-03-01` is `2019-02-28` and the day before `2020-03-01` is
/// `2020-02-29`. Saturates at `NaiveDate::MIN`.
#[must_use]
pub fn day_before(date: NaiveDate) -> NaiveDate {
    date.pred_opt().unwrap_or(NaiveDate::MIN)
}

/// Format a date the way it is read: `YYYY-MM-DD`.
#[must_use]
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}
