//! Blackout dates: days an event would fall on but must never be reported.

use chrono::NaiveDate;
use rota_core::types::{BlackoutId, EventId};
use serde::{Deserialize, Serialize};

/// One blacked-out date, keyed to its owning event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Blackout {
    pub id: BlackoutId,
    pub event_id: EventId,
    pub date: NaiveDate,
}

impl Blackout {
    #[must_use]
    pub const fn new(id: BlackoutId, event_id: EventId, date: NaiveDate) -> Self {
        Self { id, event_id, date }
    }

    /// A blackout that has not been persisted yet.
    #[must_use]
    pub const fn unsaved(event_id: EventId, date: NaiveDate) -> Self {
        Self::new(BlackoutId::UNSAVED, event_id, date)
    }
}

/// Unordered collection of the blackouts owned by one event, with
/// date-membership lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlackoutSet {
    entries: Vec<Blackout>,
}

impl BlackoutSet {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Whether `date` is blacked out (exact year/month/day equality).
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.entries.iter().any(|blackout| blackout.date == date)
    }

    pub fn add(&mut self, blackout: Blackout) {
        self.entries.push(blackout);
    }

    /// Removes one blackout for `date`, if any. The set is unordered, so
    /// which of several duplicate entries goes is unspecified.
    pub fn remove_date(&mut self, date: NaiveDate) -> Option<Blackout> {
        let index = self
            .entries
            .iter()
            .position(|blackout| blackout.date == date)?;
        Some(self.entries.swap_remove(index))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn entries(&self) -> &[Blackout] {
        &self.entries
    }
}

impl FromIterator<Blackout> for BlackoutSet {
    fn from_iter<I: IntoIterator<Item = Blackout>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}
