//! Rota recurring-event engine - integration test support.
//!
//! This crate re-exports the workspace crates to support integration tests
//! that use `component::` paths, and provides the in-memory record store
//! standing in for the persistence collaborator.

use std::collections::HashMap;

use rota_core::types::EventId;
use rota_engine::{
    BlackoutRecord, EngineError, EngineResult, Event, EventRecord, RuleRecord, assemble_event,
};

pub mod component {
    // Engine API at the component level
    pub use rota_engine::*;

    // Shared foundation from the core crate
    pub mod config {
        pub use rota_core::config::*;
    }

    pub mod types {
        pub use rota_core::types::*;
    }
}

/// In-memory stand-in for the persistence collaborator: raw rows go in,
/// assembled events come out.
#[derive(Debug, Default)]
pub struct RecordStore {
    events: HashMap<EventId, EventRecord>,
    rules: HashMap<EventId, RuleRecord>,
    blackouts: Vec<BlackoutRecord>,
}

impl RecordStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_event(&mut self, record: EventRecord) {
        self.events.insert(record.id, record);
    }

    pub fn insert_rule(&mut self, record: RuleRecord) {
        self.rules.insert(record.event_id(), record);
    }

    pub fn insert_blackout(&mut self, record: BlackoutRecord) {
        self.blackouts.push(record);
    }

    /// ## Summary
    /// Loads and assembles one event the way a persistence layer would:
    /// event row, its rule row, and every blackout row referencing it.
    ///
    /// ## Errors
    /// Returns [`EngineError::NotFound`] when no event row exists under
    /// `id`, and whatever assembly returns for missing rules, inconsistent
    /// references, or invalid stored tokens.
    pub fn load_event(&self, id: EventId) -> EngineResult<Event> {
        let Some(record) = self.events.get(&id) else {
            return Err(EngineError::NotFound(format!(
                "no event stored under id {id}"
            )));
        };

        let rule = self.rules.get(&id).cloned();
        let blackouts: Vec<BlackoutRecord> = self
            .blackouts
            .iter()
            .filter(|blackout| blackout.event_id == id)
            .copied()
            .collect();

        assemble_event(record.clone(), rule, blackouts)
    }

    /// ## Summary
    /// Loads every stored event, in ascending id order.
    ///
    /// ## Errors
    /// Fails on the first event that does not assemble.
    pub fn load_all(&self) -> EngineResult<Vec<Event>> {
        let mut ids: Vec<EventId> = self.events.keys().copied().collect();
        ids.sort_unstable();
        ids.into_iter().map(|id| self.load_event(id)).collect()
    }
}
