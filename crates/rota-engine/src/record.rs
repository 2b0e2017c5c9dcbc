//! Collaborator records: the already-materialized rows a persistence layer
//! hands over, and their assembly into live events.

use chrono::NaiveDate;
use rota_core::types::{BlackoutId, EventId, GroupId, UserId};
use serde::{Deserialize, Serialize};

use crate::blackout::Blackout;
use crate::error::{EngineError, EngineResult};
use crate::event::Event;
use crate::rule::{ExactRule, RecurrenceRule, RelativeRule};

/// Event row as stored: calendar bounds plus ownership and group grants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    pub id: EventId,
    pub owner: UserId,
    pub name: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub groups: Vec<GroupId>,
}

/// Rule row, one variant per rule table, carrying the raw tokens as stored.
/// Tokens are parsed (and validated) only at assembly time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RuleRecord {
    Exact {
        event_id: EventId,
        time_interval: String,
        skip_every: i64,
    },
    Relative {
        event_id: EventId,
        time_interval: String,
        skip_every: i64,
        day_of_week: String,
        posn: i64,
    },
}

impl RuleRecord {
    /// The event this rule row belongs to.
    #[must_use]
    pub const fn event_id(&self) -> EventId {
        match self {
            Self::Exact { event_id, .. } | Self::Relative { event_id, .. } => *event_id,
        }
    }

    /// ## Summary
    /// Parses the stored tokens into a validated rule.
    ///
    /// ## Errors
    /// Returns [`EngineError::ValidationError`] for an unknown unit or
    /// weekday token, a non-positive exact step, a zero relative step, or a
    /// posn outside 1-5.
    pub fn to_rule(&self) -> EngineResult<RecurrenceRule> {
        match self {
            Self::Exact {
                time_interval,
                skip_every,
                ..
            } => ExactRule::parse(time_interval, *skip_every).map(Into::into),
            Self::Relative {
                time_interval,
                skip_every,
                day_of_week,
                posn,
                ..
            } => RelativeRule::parse(time_interval, *skip_every, day_of_week, *posn)
                .map(Into::into),
        }
    }
}

/// Blackout row as stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlackoutRecord {
    pub id: BlackoutId,
    pub event_id: EventId,
    pub date: NaiveDate,
}

/// ## Summary
/// Reconstructs a live [`Event`] from its stored rows. An event cannot exist
/// without its rule, and every row must reference the event being assembled.
///
/// ## Errors
/// - [`EngineError::NotFound`] when `rule` is `None`;
/// - [`EngineError::ConsistencyError`] when the rule row or a blackout row
///   references a different event;
/// - [`EngineError::ValidationError`] when stored tokens fail to parse or
///   the stored name is empty.
pub fn assemble_event(
    record: EventRecord,
    rule: Option<RuleRecord>,
    blackouts: Vec<BlackoutRecord>,
) -> EngineResult<Event> {
    let EventRecord {
        id,
        owner,
        name,
        start_date,
        end_date,
        groups,
    } = record;

    let Some(rule_record) = rule else {
        return Err(EngineError::NotFound(format!(
            "no recurrence rule stored for event {id}"
        )));
    };

    if rule_record.event_id() != id {
        tracing::warn!(
            expected = %id,
            found = %rule_record.event_id(),
            "Rule row does not reference the event being assembled"
        );
        return Err(EngineError::ConsistencyError {
            expected: id,
            found: rule_record.event_id(),
        });
    }

    let mut event =
        Event::new(id, owner, name, start_date, rule_record.to_rule()?)?.with_groups(groups);
    event.set_end_date(end_date);

    for blackout in blackouts {
        if blackout.event_id != id {
            tracing::warn!(
                expected = %id,
                found = %blackout.event_id,
                "Blackout row does not reference the event being assembled"
            );
            return Err(EngineError::ConsistencyError {
                expected: id,
                found: blackout.event_id,
            });
        }
        event.insert_blackout(Blackout::new(blackout.id, blackout.event_id, blackout.date));
    }

    tracing::trace!(
        event_id = %event.id(),
        blackout_count = event.blackouts().len(),
        "Assembled event from stored rows"
    );

    Ok(event)
}
