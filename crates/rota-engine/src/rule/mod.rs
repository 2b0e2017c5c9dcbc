//! Recurrence rules.
//!
//! Every event owns exactly one rule, either exact (fixed calendar step) or
//! relative (weekday position within a month). The closed enum keeps call
//! sites exhaustive: serialization and stepping both match on the variant,
//! so a new rule kind cannot be added without the compiler pointing at every
//! spot that must learn about it.

mod exact;
mod relative;
mod tokens;

pub use exact::ExactRule;
pub use relative::RelativeRule;
pub use tokens::{IntervalUnit, Ordinal, RelativeUnit, parse_weekday, weekday_token};

use chrono::NaiveDate;

use crate::blackout::BlackoutSet;

/// A recurrence rule, one per event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecurrenceRule {
    Exact(ExactRule),
    Relative(RelativeRule),
}

impl RecurrenceRule {
    /// ## Summary
    /// Seed of the occurrence sequence for an event starting at `start`.
    ///
    /// Exact rules begin on the start date itself, stepping past it only
    /// when it is blacked out. Relative rules treat the start date as a
    /// lower bound and resolve their weekday pattern from it.
    ///
    /// Returns `None` when no occurrence is representable.
    #[must_use]
    pub fn first_occurrence(&self, start: NaiveDate, blackouts: &BlackoutSet) -> Option<NaiveDate> {
        match self {
            Self::Exact(rule) => {
                if blackouts.contains(start) {
                    rule.increment(start, blackouts)
                } else {
                    Some(start)
                }
            }
            Self::Relative(rule) => rule.seed(start),
        }
    }

    /// ## Summary
    /// Advances one step from `current`.
    ///
    /// Only exact rules consult the blackout set; relative rules ignore it.
    /// Returns `None` on calendar overflow, which ends the sequence.
    #[must_use]
    pub fn increment(&self, current: NaiveDate, blackouts: &BlackoutSet) -> Option<NaiveDate> {
        match self {
            Self::Exact(rule) => rule.increment(current, blackouts),
            Self::Relative(rule) => rule.increment(current),
        }
    }
}

impl From<ExactRule> for RecurrenceRule {
    fn from(rule: ExactRule) -> Self {
        Self::Exact(rule)
    }
}

impl From<RelativeRule> for RecurrenceRule {
    fn from(rule: RelativeRule) -> Self {
        Self::Relative(rule)
    }
}
