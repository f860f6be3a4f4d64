//! Occurrence generation for rental events.
//!
//! ## Summary
//! Expands an event's type and time window into the ordered set of operational
//! tasks (mobilization, cleanings, demobilization) that dispatch consumes.
//! Everything here is a pure, synchronous computation over value types; the
//! only stateful piece is the in-memory [`store::InMemoryOperationStore`] used
//! by tests and the preview tool.

pub mod date;
pub mod engine;
pub mod error;
pub mod expand;
pub mod form;
pub mod model;
pub mod store;
pub mod summary;
pub mod validate;

pub use engine::{EngineOptions, OccurrenceEngine, generate};
pub use error::{GenerationError, GenerationResult};
pub use model::{
    Event, EventType, Occurrence, OccurrenceStatus, OperationType, Weekday, WeekdaySet,
};
pub use summary::{OccurrenceSummary, summarize};
pub use validate::{ValidationResult, validate};
