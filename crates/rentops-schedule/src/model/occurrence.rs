//! Generated occurrence shape.

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Namespace for occurrence ids (UUID v5).
pub const OCCURRENCE_NAMESPACE: Uuid = Uuid::from_u128(0x6f1c_2a4e_93d7_4b8a_a0c5_1e7f_4d92_b036);

/// Kind of operational task.
///
/// Variant order is the tie-break order for occurrences sharing an instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OperationType {
    Mobilization,
    Cleaning,
    Demobilization,
}

impl OperationType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Mobilization => "MOBILIZATION",
            Self::Cleaning => "CLEANING",
            Self::Demobilization => "DEMOBILIZATION",
        }
    }
}

impl fmt::Display for OperationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lifecycle status of an operation.
///
/// Generation only produces `Scheduled`; dispatch advances the rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OccurrenceStatus {
    Scheduled,
    InProgress,
    Completed,
    Cancelled,
}

impl OccurrenceStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Scheduled => "SCHEDULED",
            Self::InProgress => "IN_PROGRESS",
            Self::Completed => "COMPLETED",
            Self::Cancelled => "CANCELLED",
        }
    }
}

impl fmt::Display for OccurrenceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One concrete, dated task derived from an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Occurrence {
    pub id: Uuid,
    /// Id of the event this task was generated from.
    pub event_id: String,
    pub operation_type: OperationType,
    pub scheduled_start: NaiveDateTime,
    /// Always equal to `scheduled_start`; tasks are instantaneous.
    pub scheduled_end: NaiveDateTime,
    pub status: OccurrenceStatus,
    pub notes: String,
    pub is_automatic: bool,
}

impl Occurrence {
    /// Creates a scheduled, automatic occurrence at `at`.
    #[must_use]
    pub fn scheduled(
        event_id: &str,
        operation_type: OperationType,
        at: NaiveDateTime,
        notes: impl Into<String>,
    ) -> Self {
        Self {
            id: Self::derive_id(event_id, operation_type, at),
            event_id: event_id.to_string(),
            operation_type,
            scheduled_start: at,
            scheduled_end: at,
            status: OccurrenceStatus::Scheduled,
            notes: notes.into(),
            is_automatic: true,
        }
    }

    /// ## Summary
    /// Derives the occurrence id from its identifying fields.
    ///
    /// The same event id, operation type and instant always give the same id.
    #[must_use]
    pub fn derive_id(event_id: &str, operation_type: OperationType, at: NaiveDateTime) -> Uuid {
        let name = format!(
            "{event_id}/{}/{}",
            operation_type.as_str(),
            at.format("%Y-%m-%dT%H:%M:%S%.f")
        );
        Uuid::new_v5(&OCCURRENCE_NAMESPACE, name.as_bytes())
    }

    /// Calendar date of the task.
    #[must_use]
    pub fn date(&self) -> NaiveDate {
        self.scheduled_start.date()
    }

    /// Ordering key: instant first, then operation type.
    #[must_use]
    pub fn sort_key(&self) -> (NaiveDateTime, OperationType) {
        (self.scheduled_start, self.operation_type)
    }
}
