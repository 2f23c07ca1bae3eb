//! Month-grid construction and event date indexing.
//!
//! All date math works on local calendar fields (`NaiveDate`), never on
//! UTC-normalized timestamps, so an event stored for the 3rd never
//! drifts to the 2nd or 4th for clients away from UTC.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate, NaiveTime};

use crate::error::CoreError;
use crate::types::EventRef;

/// Default number of events shown in the "upcoming" strip.
pub const DEFAULT_UPCOMING_LIMIT: usize = 4;

/// A rectangular month layout: leading/trailing `None` placeholders
/// around day numbers `1..=days_in_month`, padded to full weeks.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct MonthGrid {
    pub year: i32,
    pub month: u32,
    /// `None` for padding cells, `Some(day)` for days of the month.
    /// Always a multiple of 7 long (5 or 6 weeks).
    pub cells: Vec<Option<u32>>,
}

/// Build the day-cell grid for one month.
///
/// Weeks start on Sunday (weekday 0). The first row is padded with
/// `None` up to the weekday of the 1st; the last row is padded with
/// `None` to a multiple of 7.
pub fn build_month_grid(year: i32, month: u32) -> Result<MonthGrid, CoreError> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| CoreError::Validation(format!("invalid month {year}-{month:02}")))?;

    let leading = first.weekday().num_days_from_sunday() as usize;
    let total_days = days_in_month(year, month);

    let mut cells: Vec<Option<u32>> = Vec::with_capacity(42);
    cells.extend(std::iter::repeat_n(None, leading));
    cells.extend((1..=total_days).map(Some));
    while cells.len() % 7 != 0 {
        cells.push(None);
    }

    Ok(MonthGrid { year, month, cells })
}

/// Number of days in a month. `month` must already be validated.
fn days_in_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)
        .unwrap()
        .pred_opt()
        .unwrap()
        .day()
}

/// Group events by their local calendar date, ascending.
pub fn index_events_by_date(events: &[EventRef]) -> BTreeMap<NaiveDate, Vec<&EventRef>> {
    let mut index: BTreeMap<NaiveDate, Vec<&EventRef>> = BTreeMap::new();
    for event in events {
        index.entry(event.event_date).or_default().push(event);
    }
    index
}

/// The next `limit` events on or after `today`, ascending by
/// (date, start time). Events without a start time sort as midnight,
/// i.e. before same-day timed events.
pub fn upcoming_events<'a>(
    events: &'a [EventRef],
    today: NaiveDate,
    limit: usize,
) -> Vec<&'a EventRef> {
    let midnight = NaiveTime::from_hms_opt(0, 0, 0).unwrap();

    let mut upcoming: Vec<&EventRef> = events
        .iter()
        .filter(|e| e.event_date >= today)
        .collect();
    upcoming.sort_by_key(|e| (e.event_date, e.start_time.unwrap_or(midnight), e.id));
    upcoming.truncate(limit);
    upcoming
}
