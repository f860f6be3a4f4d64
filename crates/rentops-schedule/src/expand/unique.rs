//! `UNIQUE` events: one post-use cleaning on the closing day.

use super::{ExpansionStrategy, Window};
use crate::engine::EngineOptions;
use crate::error::GenerationResult;
use crate::model::{Event, EventType, Occurrence};

/// Always produces exactly three occurrences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UniqueStrategy {
    options: EngineOptions,
}

impl UniqueStrategy {
    #[must_use]
    pub const fn new(options: EngineOptions) -> Self {
        Self { options }
    }
}

impl ExpansionStrategy for UniqueStrategy {
    fn event_type(&self) -> EventType {
        EventType::Unique
    }

    fn expand(&self, event: &Event) -> GenerationResult<Vec<Occurrence>> {
        let window = Window::checked(event, &EventType::Unique, &self.options)?;

        let cleaning = window.cleaning(
            window.demobilization.date(),
            "Post-use cleaning on closing day of UNIQUE event".to_string(),
        );

        Ok(window.bookend(vec![cleaning]))
    }
}
