//! `INTERMITTENT` events: weekday cleanings across the whole window.

use super::{ExpansionStrategy, Window};
use crate::date::{days_inclusive, on_weekdays};
use crate::engine::EngineOptions;
use crate::error::GenerationResult;
use crate::model::{Event, EventType, Occurrence};

/// Scans mobilization date through demobilization date, both included.
///
/// A matching demobilization date gets a cleaning as well as the
/// demobilization itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IntermittentStrategy {
    options: EngineOptions,
}

impl IntermittentStrategy {
    #[must_use]
    pub const fn new(options: EngineOptions) -> Self {
        Self { options }
    }
}

impl ExpansionStrategy for IntermittentStrategy {
    fn event_type(&self) -> EventType {
        EventType::Intermittent
    }

    fn expand(&self, event: &Event) -> GenerationResult<Vec<Occurrence>> {
        let window = Window::checked(event, &EventType::Intermittent, &self.options)?;

        let days = days_inclusive(window.mobilization.date(), window.demobilization.date());
        let cleanings = window.weekly_cleanings(on_weekdays(days, window.cleaning_weekdays));

        Ok(window.bookend(cleanings))
    }
}
