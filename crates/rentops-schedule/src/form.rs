//! ## Summary
//! Builds an [`Event`] from the raw strings an event form submits.
//!
//! Dates arrive as `YYYY-MM-DD` and times as `HH:MM` or `HH:MM:SS`; an
//! instant is the date and time joined with `T`. Fields that fail to parse
//! are left unset on the event and reported, and the validator then adds its
//! own findings, so the form gets every problem in one pass.

use chrono::{NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::engine::OccurrenceEngine;
use crate::model::{Event, EventType, Weekday, WeekdaySet};
use crate::validate::ValidationResult;

const INSTANT_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"];
const TIME_FORMATS: &[&str] = &["%H:%M:%S", "%H:%M"];

/// Event fields as entered in the form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EventForm {
    pub id: String,
    pub event_type: String,
    pub mobilization_date: String,
    pub mobilization_time: String,
    pub demobilization_date: String,
    pub demobilization_time: String,
    pub cleaning_time: String,
    /// Sunday-based indices (0–6).
    pub cleaning_weekdays: Vec<u8>,
}

/// An event built from a form, with any field-level parse problems.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedForm {
    pub event: Event,
    pub problems: Vec<String>,
}

impl EventForm {
    /// Parses the form into an event, collecting parse problems.
    #[must_use]
    pub fn parse(&self) -> ParsedForm {
        let mut problems = Vec::new();

        let mobilization_instant = parse_instant(
            "Mobilization",
            &self.mobilization_date,
            &self.mobilization_time,
            &mut problems,
        );
        let demobilization_instant = parse_instant(
            "Demobilization",
            &self.demobilization_date,
            &self.demobilization_time,
            &mut problems,
        );
        let cleaning_time = parse_time(&self.cleaning_time, &mut problems);

        let mut cleaning_weekdays = WeekdaySet::new();
        for &index in &self.cleaning_weekdays {
            match Weekday::try_from(index) {
                Ok(day) => cleaning_weekdays.insert(day),
                Err(err) => problems.push(format!("Cleaning weekday rejected: {err}")),
            }
        }

        let event = Event {
            id: self.id.trim().to_string(),
            event_type: EventType::parse(&self.event_type),
            mobilization_instant,
            demobilization_instant,
            cleaning_time,
            cleaning_weekdays,
        };

        if !problems.is_empty() {
            tracing::debug!(event_id = %event.id, problems = ?problems, "Form fields failed to parse");
        }

        ParsedForm { event, problems }
    }

    /// ## Summary
    /// Parses and validates the form in one pass.
    ///
    /// Parse problems come first, followed by validator messages.
    #[must_use]
    pub fn validate(&self, engine: &OccurrenceEngine) -> ValidationResult {
        let ParsedForm { event, mut problems } = self.parse();
        problems.extend(engine.validate(&event).errors);
        ValidationResult::from_errors(problems)
    }
}

fn parse_instant(
    label: &str,
    date: &str,
    time: &str,
    problems: &mut Vec<String>,
) -> Option<NaiveDateTime> {
    let (date, time) = (date.trim(), time.trim());
    if date.is_empty() || time.is_empty() {
        return None;
    }

    let joined = format!("{date}T{time}");
    let parsed = INSTANT_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(&joined, format).ok());
    if parsed.is_none() {
        problems.push(format!("{label} '{date} {time}' is not a valid date and time"));
    }
    parsed
}

fn parse_time(time: &str, problems: &mut Vec<String>) -> Option<NaiveTime> {
    let time = time.trim();
    if time.is_empty() {
        return None;
    }

    let parsed = TIME_FORMATS
        .iter()
        .find_map(|format| NaiveTime::parse_from_str(time, format).ok());
    if parsed.is_none() {
        problems.push(format!("Cleaning time '{time}' is not a valid time of day"));
    }
    parsed
}
