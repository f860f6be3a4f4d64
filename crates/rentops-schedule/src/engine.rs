//! ## Summary
//! Engine façade: validate, dispatch to the matching strategy, sort.
//!
//! The engine holds only its limits. It is `Copy` and can be shared freely
//! across threads; `generate` reads nothing but its argument.

use rentops_core::config::{DEFAULT_MAX_WINDOW_DAYS, EngineConfig, Settings};

use crate::error::{GenerationError, GenerationResult};
use crate::expand::{ExpansionStrategy, Strategy, sort_occurrences};
use crate::model::{Event, Occurrence};
use crate::summary::{OccurrenceSummary, summarize};
use crate::validate::{ValidationResult, validate_with};

/// Limits applied while validating and expanding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineOptions {
    /// Longest accepted event window, in whole days.
    pub max_window_days: u32,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            max_window_days: DEFAULT_MAX_WINDOW_DAYS,
        }
    }
}

impl From<EngineConfig> for EngineOptions {
    fn from(config: EngineConfig) -> Self {
        Self {
            max_window_days: config.max_window_days,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OccurrenceEngine {
    options: EngineOptions,
}

impl OccurrenceEngine {
    #[must_use]
    pub const fn new(options: EngineOptions) -> Self {
        Self { options }
    }

    #[must_use]
    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.engine.into())
    }

    #[must_use]
    pub const fn options(&self) -> EngineOptions {
        self.options
    }

    /// Validates an event against this engine's limits.
    #[must_use]
    pub fn validate(&self, event: &Event) -> ValidationResult {
        validate_with(event, &self.options)
    }

    /// ## Summary
    /// Expands an event into its ordered occurrences.
    ///
    /// Output is sorted by scheduled instant; occurrences sharing an instant
    /// are ordered mobilization, cleaning, demobilization.
    ///
    /// ## Errors
    /// - `UnsupportedEventType` if the event type is not one of the known three.
    /// - `InvalidEventConfiguration` with every validation message otherwise.
    #[tracing::instrument(skip_all, fields(event_id = %event.id, event_type = %event.event_type))]
    pub fn generate(&self, event: &Event) -> GenerationResult<Vec<Occurrence>> {
        let strategy = Strategy::for_event_type(&event.event_type, self.options)?;

        let validation = self.validate(event);
        if !validation.is_valid {
            tracing::warn!(errors = ?validation.errors, "Rejected event configuration");
            return Err(GenerationError::InvalidEventConfiguration(validation.errors));
        }

        let mut occurrences = strategy.expand(event)?;
        sort_occurrences(&mut occurrences);

        tracing::debug!(count = occurrences.len(), "Generated occurrences");
        Ok(occurrences)
    }

    /// ## Summary
    /// Expands an event and summarizes the result.
    ///
    /// ## Errors
    /// Same as [`OccurrenceEngine::generate`].
    pub fn generate_with_summary(
        &self,
        event: &Event,
    ) -> GenerationResult<(Vec<Occurrence>, OccurrenceSummary)> {
        let occurrences = self.generate(event)?;
        let summary = summarize(&occurrences);
        Ok((occurrences, summary))
    }
}

/// ## Summary
/// Expands an event using the default engine limits.
///
/// ## Errors
/// Same as [`OccurrenceEngine::generate`].
pub fn generate(event: &Event) -> GenerationResult<Vec<Occurrence>> {
    OccurrenceEngine::default().generate(event)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{EventType, OperationType, Weekday, WeekdaySet};
    use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

    fn at(day: u32, hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, day)
            .and_then(|d| d.and_hms_opt(hour, 0, 0))
            .expect("valid datetime")
    }

    fn time(hour: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, 0, 0).expect("valid time")
    }

    #[test]
    fn test_engine_is_thread_safe() {
        fn assert_send_sync<T: Send + Sync + Copy>() {}
        assert_send_sync::<OccurrenceEngine>();
        assert_send_sync::<EngineOptions>();

        let engine = OccurrenceEngine::default();
        let event = Event::new("t", EventType::Continuous, at(1, 8), at(8, 18))
            .with_cleaning_time(time(19))
            .with_cleaning_weekdays(WeekdaySet::new().with(Weekday::Friday));
        let expected = engine.generate(&event).expect("valid event");

        std::thread::scope(|scope| {
            let handles: Vec<_> = (0..4)
                .map(|_| scope.spawn(|| engine.generate(&event)))
                .collect();
            for handle in handles {
                let occurrences = handle
                    .join()
                    .expect("worker should not panic")
                    .expect("valid event");
                assert_eq!(occurrences, expected);
            }
        });
    }

    #[test_log::test]
    fn test_unsupported_type_wins_over_validation() {
        let event = Event {
            id: "e".to_string(),
            event_type: EventType::parse("BIWEEKLY"),
            mobilization_instant: None,
            demobilization_instant: None,
            cleaning_time: None,
            cleaning_weekdays: WeekdaySet::new(),
        };

        assert_eq!(
            generate(&event),
            Err(GenerationError::UnsupportedEventType("BIWEEKLY".to_string()))
        );
    }

    #[test_log::test]
    fn test_invalid_event_produces_nothing() {
        let event = Event::new("e", EventType::Continuous, at(5, 8), at(1, 8));

        let Err(GenerationError::InvalidEventConfiguration(errors)) = generate(&event) else {
            panic!("expected invalid configuration");
        };
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn test_output_is_sorted_with_early_cleaning() {
        // Cleaning at 07:00 on the mobilization day precedes the 08:00 mobilization.
        let event = Event::new("e", EventType::Intermittent, at(1, 8), at(2, 8))
            .with_cleaning_time(time(7))
            .with_cleaning_weekdays(WeekdaySet::new().with(Weekday::Monday));

        let occurrences = generate(&event).expect("valid event");
        let kinds: Vec<_> = occurrences.iter().map(|o| o.operation_type).collect();

        assert_eq!(
            kinds,
            vec![
                OperationType::Cleaning,
                OperationType::Mobilization,
                OperationType::Demobilization,
            ]
        );
    }

    #[test]
    fn test_same_instant_tie_break() {
        // Unique cleaning at the demobilization instant sorts before it.
        let event = Event::new("e", EventType::Unique, at(1, 8), at(1, 18)).with_cleaning_time(time(18));

        let occurrences = generate(&event).expect("valid event");
        assert_eq!(occurrences[1].operation_type, OperationType::Cleaning);
        assert_eq!(occurrences[2].operation_type, OperationType::Demobilization);
        assert_eq!(occurrences[1].scheduled_start, occurrences[2].scheduled_start);
    }

    #[test]
    fn test_engine_limits_apply() {
        let engine = OccurrenceEngine::new(EngineOptions { max_window_days: 2 });
        let event = Event::new("e", EventType::Unique, at(1, 8), at(9, 8)).with_cleaning_time(time(9));

        assert!(engine.generate(&event).is_err());
        assert!(generate(&event).is_ok());
    }

    #[test]
    fn test_from_engine_config() {
        let engine = OccurrenceEngine::new(EngineConfig { max_window_days: 7 }.into());
        assert_eq!(engine.options().max_window_days, 7);
    }

    #[test]
    fn test_generate_with_summary() {
        let event = Event::new("e", EventType::Unique, at(1, 8), at(3, 8)).with_cleaning_time(time(9));

        let (occurrences, summary) = OccurrenceEngine::default()
            .generate_with_summary(&event)
            .expect("valid event");

        assert_eq!(summary.total, occurrences.len());
        assert_eq!(summary.cleanings, 1);
    }
}
