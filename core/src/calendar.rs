//! Calendar helpers: month iteration and in-month timestamp sampling.

use crate::rng::SimRng;
use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime};

/// Walks calendar months from the month containing `start` for as long as
/// the first day of the month is <= `end`.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthCursor {
    current: Option<NaiveDate>,
    end: NaiveDate,
}

impl MonthCursor {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            current: start.with_day(1),
            end,
        }
    }
}

impl Iterator for MonthCursor {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<NaiveDate> {
        let month = self.current.filter(|m| *m <= self.end)?;
        self.current = first_of_next_month(month);
        Some(month)
    }
}

/// First day of the month after `date`.
pub fn first_of_next_month(date: NaiveDate) -> Option<NaiveDate> {
    if date.month() == 12 {
        NaiveDate::from_ymd_opt(date.year() + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(date.year(), date.month() + 1, 1)
    }
}

/// Midnight at the start of `date`.
pub fn midnight(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::default())
}

/// Uniform timestamp, to the second, in `[start, end]` (both included).
pub fn random_instant(
    start: NaiveDateTime,
    end: NaiveDateTime,
    rng: &mut SimRng,
) -> NaiveDateTime {
    let span = (end - start).num_seconds().max(0) as u64;
    start + chrono::Duration::seconds(rng.range_inclusive(0, span) as i64)
}

/// Uniform open timestamp between day 1 00:00 and `last_day` 00:00 of the
/// month starting at `month`. Days after `last_day` are never produced.
pub fn random_instant_in_month(
    month: NaiveDate,
    last_day: u32,
    rng: &mut SimRng,
) -> NaiveDateTime {
    let first = midnight(month);
    let last = month.with_day(last_day).map(midnight).unwrap_or(first);
    random_instant(first, last, rng)
}
