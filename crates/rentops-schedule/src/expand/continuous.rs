//! `CONTINUOUS` events: weekday cleanings strictly inside the window.

use super::{ExpansionStrategy, Window};
use crate::date::{days_between, on_weekdays};
use crate::engine::EngineOptions;
use crate::error::GenerationResult;
use crate::model::{Event, EventType, Occurrence};

/// Scans from the day after mobilization up to the day before demobilization.
///
/// Neither window day gets a cleaning; demobilization covers the closing day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ContinuousStrategy {
    options: EngineOptions,
}

impl ContinuousStrategy {
    #[must_use]
    pub const fn new(options: EngineOptions) -> Self {
        Self { options }
    }
}

impl ExpansionStrategy for ContinuousStrategy {
    fn event_type(&self) -> EventType {
        EventType::Continuous
    }

    fn expand(&self, event: &Event) -> GenerationResult<Vec<Occurrence>> {
        let window = Window::checked(event, &EventType::Continuous, &self.options)?;

        let days = days_between(window.mobilization.date(), window.demobilization.date());
        let cleanings = window.weekly_cleanings(on_weekdays(days, window.cleaning_weekdays));

        Ok(window.bookend(cleanings))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{OperationType, Weekday, WeekdaySet};
    use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

    fn at(day: u32, hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, day)
            .and_then(|d| d.and_hms_opt(hour, 0, 0))
            .expect("valid datetime")
    }

    fn every_day() -> WeekdaySet {
        Weekday::all().into_iter().collect()
    }

    #[test]
    fn test_window_days_excluded() {
        let event = Event::new("c-1", EventType::Continuous, at(1, 8), at(8, 18))
            .with_cleaning_time(NaiveTime::from_hms_opt(19, 0, 0).expect("valid time"))
            .with_cleaning_weekdays(
                WeekdaySet::new()
                    .with(Weekday::Monday)
                    .with(Weekday::Friday),
            );

        let occurrences = ContinuousStrategy::default()
            .expand(&event)
            .expect("valid event");

        let cleanings: Vec<_> = occurrences
            .iter()
            .filter(|o| o.operation_type == OperationType::Cleaning)
            .map(|o| o.scheduled_start)
            .collect();
        assert_eq!(cleanings, vec![at(5, 19)]);
        assert_eq!(occurrences.len(), 3);
    }

    #[test]
    fn test_every_day_fills_interior() {
        let event = Event::new("c-2", EventType::Continuous, at(10, 8), at(15, 8))
            .with_cleaning_time(NaiveTime::from_hms_opt(6, 0, 0).expect("valid time"))
            .with_cleaning_weekdays(every_day());

        let occurrences = ContinuousStrategy::default()
            .expand(&event)
            .expect("valid event");

        // 11, 12, 13, 14
        assert_eq!(occurrences.len(), 6);
    }

    #[test]
    fn test_same_or_adjacent_day_has_no_cleanings() {
        let same_day = Event::new("c-3", EventType::Continuous, at(3, 8), at(3, 20))
            .with_cleaning_time(NaiveTime::from_hms_opt(12, 0, 0).expect("valid time"))
            .with_cleaning_weekdays(every_day());
        let next_day = Event::new("c-4", EventType::Continuous, at(3, 8), at(4, 20))
            .with_cleaning_time(NaiveTime::from_hms_opt(12, 0, 0).expect("valid time"))
            .with_cleaning_weekdays(every_day());

        let strategy = ContinuousStrategy::default();
        assert_eq!(strategy.expand(&same_day).expect("valid event").len(), 2);
        assert_eq!(strategy.expand(&next_day).expect("valid event").len(), 2);
    }
}
