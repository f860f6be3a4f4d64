//! Value types for events and the occurrences generated from them.

mod event;
mod occurrence;
mod weekday;

pub use event::{Event, EventType};
pub use occurrence::{OCCURRENCE_NAMESPACE, Occurrence, OccurrenceStatus, OperationType};
pub use weekday::{Weekday, WeekdaySet};
