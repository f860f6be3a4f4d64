//! Event input shape.

use std::fmt;

use chrono::{NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use super::WeekdaySet;

/// Event type, selecting the expansion strategy.
///
/// Unknown strings are kept in `Unsupported` so callers get
/// `UnsupportedEventType` instead of a deserialization failure.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EventType {
    /// One-off use: a single post-use cleaning on the closing day.
    Unique,
    /// Recurring cleanings on chosen weekdays, both window days included.
    Intermittent,
    /// Recurring cleanings strictly inside the window.
    Continuous,
    Unsupported(String),
}

impl EventType {
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Unique => "UNIQUE",
            Self::Intermittent => "INTERMITTENT",
            Self::Continuous => "CONTINUOUS",
            Self::Unsupported(raw) => raw.as_str(),
        }
    }

    /// Parses an event type (case-insensitive, surrounding whitespace ignored).
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.trim().to_ascii_uppercase().as_str() {
            "UNIQUE" => Self::Unique,
            "INTERMITTENT" => Self::Intermittent,
            "CONTINUOUS" => Self::Continuous,
            _ => Self::Unsupported(s.to_string()),
        }
    }

    /// Whether cleanings repeat on a weekday set.
    #[must_use]
    pub const fn is_recurring(&self) -> bool {
        matches!(self, Self::Intermittent | Self::Continuous)
    }
}

impl From<String> for EventType {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

impl From<EventType> for String {
    fn from(event_type: EventType) -> Self {
        match event_type {
            EventType::Unsupported(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A rental engagement to expand into occurrences.
///
/// Window endpoints and the cleaning time are optional because callers build
/// events from hand-entered form fields; the validator reports what is missing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub event_type: EventType,
    #[serde(default)]
    pub mobilization_instant: Option<NaiveDateTime>,
    #[serde(default)]
    pub demobilization_instant: Option<NaiveDateTime>,
    #[serde(default)]
    pub cleaning_time: Option<NaiveTime>,
    /// Ignored for `UNIQUE` events.
    #[serde(default)]
    pub cleaning_weekdays: WeekdaySet,
}

impl Event {
    /// Creates an event with the given window and no cleaning configuration.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        event_type: EventType,
        mobilization: NaiveDateTime,
        demobilization: NaiveDateTime,
    ) -> Self {
        Self {
            id: id.into(),
            event_type,
            mobilization_instant: Some(mobilization),
            demobilization_instant: Some(demobilization),
            cleaning_time: None,
            cleaning_weekdays: WeekdaySet::new(),
        }
    }

    #[must_use]
    pub fn with_cleaning_time(mut self, time: NaiveTime) -> Self {
        self.cleaning_time = Some(time);
        self
    }

    #[must_use]
    pub fn with_cleaning_weekdays(mut self, weekdays: WeekdaySet) -> Self {
        self.cleaning_weekdays = weekdays;
        self
    }
}
