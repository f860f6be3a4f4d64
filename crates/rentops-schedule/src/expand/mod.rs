//! Expansion strategies, one per event type.
//!
//! Each strategy turns a validated event window into mobilization, cleaning and
//! demobilization occurrences. [`Strategy`] dispatches on the event type.

mod continuous;
mod intermittent;
mod unique;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

pub use continuous::ContinuousStrategy;
pub use intermittent::IntermittentStrategy;
pub use unique::UniqueStrategy;

use crate::date::combine;
use crate::engine::EngineOptions;
use crate::error::{GenerationError, GenerationResult};
use crate::model::{Event, EventType, Occurrence, OperationType, Weekday, WeekdaySet};
use crate::validate::validate_with;

/// Common contract for the per-type expansion algorithms.
pub trait ExpansionStrategy {
    /// The event type this strategy handles.
    fn event_type(&self) -> EventType;

    /// ## Summary
    /// Expands the event into occurrences sorted by instant, then by
    /// operation priority.
    ///
    /// ## Errors
    /// Returns `InvalidEventConfiguration` if the event does not validate.
    fn expand(&self, event: &Event) -> GenerationResult<Vec<Occurrence>>;
}

/// Enum dispatch over the three strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    Unique(UniqueStrategy),
    Intermittent(IntermittentStrategy),
    Continuous(ContinuousStrategy),
}

impl Strategy {
    /// ## Summary
    /// Selects the strategy for an event type.
    ///
    /// ## Errors
    /// Returns `UnsupportedEventType` for types outside the known three.
    pub fn for_event_type(event_type: &EventType, options: EngineOptions) -> GenerationResult<Self> {
        match event_type {
            EventType::Unique => Ok(Self::Unique(UniqueStrategy::new(options))),
            EventType::Intermittent => Ok(Self::Intermittent(IntermittentStrategy::new(options))),
            EventType::Continuous => Ok(Self::Continuous(ContinuousStrategy::new(options))),
            EventType::Unsupported(raw) => Err(GenerationError::UnsupportedEventType(raw.clone())),
        }
    }
}

impl ExpansionStrategy for Strategy {
    fn event_type(&self) -> EventType {
        match self {
            Self::Unique(strategy) => strategy.event_type(),
            Self::Intermittent(strategy) => strategy.event_type(),
            Self::Continuous(strategy) => strategy.event_type(),
        }
    }

    fn expand(&self, event: &Event) -> GenerationResult<Vec<Occurrence>> {
        match self {
            Self::Unique(strategy) => strategy.expand(event),
            Self::Intermittent(strategy) => strategy.expand(event),
            Self::Continuous(strategy) => strategy.expand(event),
        }
    }
}

/// Sorts by instant, then by operation priority. Stable for equal keys.
pub fn sort_occurrences(occurrences: &mut [Occurrence]) {
    occurrences.sort_by_key(Occurrence::sort_key);
}

/// The validated fields a strategy works from.
struct Window<'a> {
    event_id: &'a str,
    event_type: &'a EventType,
    mobilization: NaiveDateTime,
    demobilization: NaiveDateTime,
    cleaning_time: NaiveTime,
    cleaning_weekdays: WeekdaySet,
}

impl<'a> Window<'a> {
    /// Validates `event` and extracts its window.
    fn checked(event: &'a Event, expected: &EventType, options: &EngineOptions) -> GenerationResult<Self> {
        if &event.event_type != expected {
            return Err(GenerationError::InvalidEventConfiguration(vec![format!(
                "{} strategy cannot expand a {} event",
                expected, event.event_type
            )]));
        }

        validate_with(event, options).into_result()?;

        let (Some(mobilization), Some(demobilization), Some(cleaning_time)) = (
            event.mobilization_instant,
            event.demobilization_instant,
            event.cleaning_time,
        ) else {
            return Err(GenerationError::InvalidEventConfiguration(vec![
                "Event window is incomplete".to_string(),
            ]));
        };

        Ok(Self {
            event_id: &event.id,
            event_type: &event.event_type,
            mobilization,
            demobilization,
            cleaning_time,
            cleaning_weekdays: event.cleaning_weekdays,
        })
    }

    fn mobilization(&self) -> Occurrence {
        let occurrence = Occurrence::scheduled(
            self.event_id,
            OperationType::Mobilization,
            self.mobilization,
            format!("Equipment setup at start of {} event", self.event_type),
        );
        tracing::trace!(at = %occurrence.scheduled_start, "Mobilization");
        occurrence
    }

    fn demobilization(&self) -> Occurrence {
        let occurrence = Occurrence::scheduled(
            self.event_id,
            OperationType::Demobilization,
            self.demobilization,
            format!("Equipment teardown at end of {} event", self.event_type),
        );
        tracing::trace!(at = %occurrence.scheduled_start, "Demobilization");
        occurrence
    }

    fn cleaning(&self, date: NaiveDate, notes: String) -> Occurrence {
        let occurrence = Occurrence::scheduled(
            self.event_id,
            OperationType::Cleaning,
            combine(date, self.cleaning_time),
            notes,
        );
        tracing::trace!(at = %occurrence.scheduled_start, "Cleaning");
        occurrence
    }

    /// One cleaning per day, noted with the weekday it recurs on.
    fn weekly_cleanings(&self, days: impl Iterator<Item = NaiveDate>) -> Vec<Occurrence> {
        days.map(|date| {
            let notes = format!(
                "Recurring {} cleaning for {} event",
                Weekday::of(date),
                self.event_type
            );
            self.cleaning(date, notes)
        })
        .collect()
    }

    /// Mobilization, the given cleanings and demobilization, in output order.
    fn bookend(&self, cleanings: Vec<Occurrence>) -> Vec<Occurrence> {
        let mut occurrences = Vec::with_capacity(cleanings.len() + 2);
        occurrences.push(self.mobilization());
        occurrences.extend(cleanings);
        occurrences.push(self.demobilization());
        sort_occurrences(&mut occurrences);
        occurrences
    }
}
