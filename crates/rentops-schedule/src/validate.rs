//! ## Summary
//! Event validation ahead of expansion.
//!
//! Every check runs; the result lists all failures so the form can show them
//! together instead of stopping at the first.

use chrono::TimeDelta;
use serde::{Deserialize, Serialize};

use crate::date::span;
use crate::engine::EngineOptions;
use crate::error::{GenerationError, GenerationResult};
use crate::model::{Event, EventType};

/// Outcome of validating an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<String>,
}

impl ValidationResult {
    #[must_use]
    pub fn from_errors(errors: Vec<String>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
        }
    }

    /// ## Summary
    /// Converts the result into a `GenerationResult`.
    ///
    /// ## Errors
    /// Returns `InvalidEventConfiguration` carrying every message if invalid.
    pub fn into_result(self) -> GenerationResult<()> {
        if self.is_valid {
            Ok(())
        } else {
            Err(GenerationError::InvalidEventConfiguration(self.errors))
        }
    }
}

/// Validates an event with the default engine limits.
#[must_use]
pub fn validate(event: &Event) -> ValidationResult {
    validate_with(event, &EngineOptions::default())
}

/// ## Summary
/// Validates an event against the given engine limits.
///
/// Checks, all accumulated:
/// - both window endpoints are present
/// - demobilization is strictly after mobilization
/// - recurring types have a cleaning time and at least one weekday
/// - `UNIQUE` has a cleaning time
/// - `INTERMITTENT` spans at least 24 hours
/// - the window does not exceed `max_window_days`
/// - the event type is known
#[must_use]
pub fn validate_with(event: &Event, options: &EngineOptions) -> ValidationResult {
    let mut errors = Vec::new();

    if let EventType::Unsupported(raw) = &event.event_type {
        errors.push(format!("Unsupported event type: {raw}"));
    }

    if event.mobilization_instant.is_none() {
        errors.push("Mobilization date and time are required".to_string());
    }
    if event.demobilization_instant.is_none() {
        errors.push("Demobilization date and time are required".to_string());
    }

    if let (Some(mobilization), Some(demobilization)) =
        (event.mobilization_instant, event.demobilization_instant)
    {
        let window = span(mobilization, demobilization);

        if window <= TimeDelta::zero() {
            errors.push("Demobilization must be after mobilization".to_string());
        } else {
            if event.event_type == EventType::Intermittent && window < TimeDelta::days(1) {
                errors.push(
                    "INTERMITTENT events must span at least one full day".to_string(),
                );
            }
            if window.num_days() > i64::from(options.max_window_days) {
                errors.push(format!(
                    "Event window spans {} days; the limit is {} days",
                    window.num_days(),
                    options.max_window_days
                ));
            }
        }
    }

    if event.event_type.is_recurring() && event.cleaning_weekdays.is_empty() {
        errors.push(format!(
            "At least one cleaning weekday is required for {} events",
            event.event_type
        ));
    }
    if event.cleaning_time.is_none() && !matches!(event.event_type, EventType::Unsupported(_)) {
        errors.push(format!(
            "Cleaning time is required for {} events",
            event.event_type
        ));
    }

    if !errors.is_empty() {
        tracing::debug!(
            event_id = %event.id,
            error_count = errors.len(),
            "Event failed validation"
        );
    }

    ValidationResult::from_errors(errors)
}
