//! Rota recurring-event engine - rule evaluation and occurrence scheduling.
//!
//! Given an event's start/end bounds, one recurrence rule, and a set of
//! blackout dates, the engine produces the chronologically ordered dates the
//! event falls on, and merges the streams of many events into one ordered
//! sequence over a bounded window. It is pure with respect to dates: records
//! come in already materialized, occurrence dates come out, and no I/O
//! happens in between.

pub mod blackout;
pub mod document;
pub mod error;
pub mod event;
pub mod occurrence;
pub mod pool;
pub mod record;
pub mod rule;

pub use blackout::{Blackout, BlackoutSet};
pub use document::{
    BlackoutDocument, OccurrenceDocument, RuleDocument, occurrence_documents,
    occurrence_documents_between, occurrence_documents_from,
};
pub use error::{EngineError, EngineResult};
pub use event::{Event, Occurrences};
pub use occurrence::Occurrence;
pub use pool::{PoolOrder, feed, pool_order};
pub use record::{BlackoutRecord, EventRecord, RuleRecord, assemble_event};
pub use rule::{ExactRule, IntervalUnit, Ordinal, RecurrenceRule, RelativeRule, RelativeUnit};
