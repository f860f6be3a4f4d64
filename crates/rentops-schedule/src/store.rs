//! ## Summary
//! Storage seam for generated operations.
//!
//! The operations table belongs to the storage collaborator; this module only
//! defines the row shape an [`Occurrence`] maps to, the trait a store
//! implements, and the form-submission flow that feeds it. An in-memory store
//! backs tests.

use std::collections::HashMap;
use std::sync::Mutex;

use chrono::NaiveDateTime;
use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

use crate::engine::OccurrenceEngine;
use crate::error::GenerationError;
use crate::model::{Event, Occurrence};

/// Errors reported by an operation store.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Operation store unavailable: {0}")]
    Unavailable(String),

    #[error("Operations rejected: {0}")]
    Rejected(String),
}

/// Errors from generating and persisting an event's operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error(transparent)]
    Generation(#[from] GenerationError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// One row of the operations table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationRecord {
    pub id: Uuid,
    pub event_id: String,
    pub operation_type: &'static str,
    pub scheduled_start: NaiveDateTime,
    pub scheduled_end: NaiveDateTime,
    pub status: &'static str,
    pub notes: String,
    pub is_automatic: bool,
}

impl From<&Occurrence> for OperationRecord {
    fn from(occurrence: &Occurrence) -> Self {
        Self {
            id: occurrence.id,
            event_id: occurrence.event_id.clone(),
            operation_type: occurrence.operation_type.as_str(),
            scheduled_start: occurrence.scheduled_start,
            scheduled_end: occurrence.scheduled_end,
            status: occurrence.status.as_str(),
            notes: occurrence.notes.clone(),
            is_automatic: occurrence.is_automatic,
        }
    }
}

/// Record store keyed by event id.
pub trait OperationStore {
    /// ## Summary
    /// Appends operations for an event. Returns how many were written.
    ///
    /// ## Errors
    /// Returns a `StoreError` if the store cannot accept the rows.
    fn insert_operations(
        &self,
        event_id: &str,
        records: &[OperationRecord],
    ) -> Result<usize, StoreError>;

    /// ## Summary
    /// Returns every operation stored for an event, in insertion order.
    ///
    /// ## Errors
    /// Returns a `StoreError` if the store cannot be read.
    fn operations_for(&self, event_id: &str) -> Result<Vec<OperationRecord>, StoreError>;
}

/// Process-local store. Appends only; repeated submissions duplicate rows.
#[derive(Debug, Default)]
pub struct InMemoryOperationStore {
    rows: Mutex<HashMap<String, Vec<OperationRecord>>>,
}

impl InMemoryOperationStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl OperationStore for InMemoryOperationStore {
    fn insert_operations(
        &self,
        event_id: &str,
        records: &[OperationRecord],
    ) -> Result<usize, StoreError> {
        if let Some(stray) = records.iter().find(|record| record.event_id != event_id) {
            return Err(StoreError::Rejected(format!(
                "operation {} belongs to event {}, not {event_id}",
                stray.id, stray.event_id
            )));
        }

        let mut rows = self
            .rows
            .lock()
            .map_err(|_err| StoreError::Unavailable("operation store lock poisoned".to_string()))?;
        rows.entry(event_id.to_string())
            .or_default()
            .extend_from_slice(records);
        Ok(records.len())
    }

    fn operations_for(&self, event_id: &str) -> Result<Vec<OperationRecord>, StoreError> {
        let rows = self
            .rows
            .lock()
            .map_err(|_err| StoreError::Unavailable("operation store lock poisoned".to_string()))?;
        Ok(rows.get(event_id).cloned().unwrap_or_default())
    }
}

/// ## Summary
/// Generates an event's occurrences and bulk-inserts them.
///
/// Nothing is written when generation fails.
///
/// ## Errors
/// Returns `SubmitError::Generation` for invalid or unsupported events and
/// `SubmitError::Store` if the insert fails.
#[tracing::instrument(skip_all, fields(event_id = %event.id))]
pub fn submit_event<S>(
    store: &S,
    engine: &OccurrenceEngine,
    event: &Event,
) -> Result<Vec<Occurrence>, SubmitError>
where
    S: OperationStore + ?Sized,
{
    let occurrences = engine.generate(event)?;
    let records: Vec<OperationRecord> = occurrences.iter().map(OperationRecord::from).collect();

    let written = store.insert_operations(&event.id, &records)?;
    tracing::info!(written, "Stored generated operations");

    Ok(occurrences)
}
