//! Calendar-day helpers shared by the expansion strategies.
//!
//! All arithmetic is on local wall-clock values; there is no timezone handling.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};

use crate::model::{Weekday, WeekdaySet};

/// Joins a calendar date and a time of day.
#[must_use]
pub fn combine(date: NaiveDate, time: NaiveTime) -> NaiveDateTime {
    date.and_time(time)
}

/// Iterator over consecutive calendar days, both ends included.
#[derive(Debug, Clone)]
pub struct DaySpan {
    next: Option<NaiveDate>,
    last: NaiveDate,
}

impl Iterator for DaySpan {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.filter(|day| *day <= self.last)?;
        self.next = current.succ_opt();
        Some(current)
    }
}

/// Every day from `first` through `last`. Empty when `first > last`.
#[must_use]
pub fn days_inclusive(first: NaiveDate, last: NaiveDate) -> DaySpan {
    DaySpan {
        next: Some(first),
        last,
    }
}

/// Every day strictly between `after` and `before`.
#[must_use]
pub fn days_between(after: NaiveDate, before: NaiveDate) -> DaySpan {
    match (after.succ_opt(), before.pred_opt()) {
        (Some(first), Some(last)) => days_inclusive(first, last),
        _ => DaySpan {
            next: None,
            last: before,
        },
    }
}

/// Keeps only the days whose weekday is in `weekdays`.
pub fn on_weekdays(days: DaySpan, weekdays: WeekdaySet) -> impl Iterator<Item = NaiveDate> {
    days.filter(move |day| weekdays.contains(Weekday::of(*day)))
}

/// Length of the window from `start` to `end`.
#[must_use]
pub fn span(start: NaiveDateTime, end: NaiveDateTime) -> TimeDelta {
    end.signed_duration_since(start)
}
