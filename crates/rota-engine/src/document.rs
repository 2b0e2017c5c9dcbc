//! Wire documents: the serialized shapes the presentation layer consumes.
//!
//! Field names and date formatting are load-bearing. Existing consumers
//! parse these documents as-is, so the `camelCase` keys, the single-character
//! rule tokens and the `YYYY-MM-DD` blackout date form must not change.

use chrono::{Datelike, NaiveDate};
use rota_core::constants::WIRE_DATE_FORMAT;
use rota_core::types::{BlackoutId, EventId};
use serde::{Deserialize, Serialize};

use crate::blackout::Blackout;
use crate::error::EngineError;
use crate::event::Event;
use crate::occurrence::Occurrence;
use crate::rule::{ExactRule, RecurrenceRule, RelativeRule, weekday_token};

/// Serialized rule, tagged by `kind`. Tokens are the canonical
/// single-character forms from the rule vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum RuleDocument {
    #[serde(rename = "exact", rename_all = "camelCase")]
    Exact {
        event_id: EventId,
        time_interval: String,
        skip_every: i64,
    },
    #[serde(rename = "relative", rename_all = "camelCase")]
    Relative {
        event_id: EventId,
        time_interval: String,
        skip_every: i64,
        day_of_week: String,
        posn: i64,
    },
}

impl RuleDocument {
    /// Serializes `rule` on behalf of the event that owns it.
    #[must_use]
    pub fn from_rule(event_id: EventId, rule: RecurrenceRule) -> Self {
        match rule {
            RecurrenceRule::Exact(exact) => Self::Exact {
                event_id,
                time_interval: exact.unit().token().to_string(),
                skip_every: i64::from(exact.step()),
            },
            RecurrenceRule::Relative(relative) => Self::Relative {
                event_id,
                time_interval: relative.unit().token().to_string(),
                skip_every: i64::from(relative.step()),
                day_of_week: weekday_token(relative.weekday()).to_string(),
                posn: i64::from(relative.ordinal().posn()),
            },
        }
    }

    #[must_use]
    pub const fn event_id(&self) -> EventId {
        match self {
            Self::Exact { event_id, .. } | Self::Relative { event_id, .. } => *event_id,
        }
    }
}

impl TryFrom<&RuleDocument> for RecurrenceRule {
    type Error = EngineError;

    /// Parses a document's tokens back through the rule vocabulary,
    /// reconstructing the variant and parameters it was serialized from.
    fn try_from(document: &RuleDocument) -> Result<Self, Self::Error> {
        match document {
            RuleDocument::Exact {
                time_interval,
                skip_every,
                ..
            } => ExactRule::parse(time_interval, *skip_every).map(Into::into),
            RuleDocument::Relative {
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

/// Serialized blackout. The date is pre-formatted so consumers never see a
/// representation other than `YYYY-MM-DD`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlackoutDocument {
    pub blackout_id: BlackoutId,
    pub event_id: EventId,
    pub blackout_date: String,
}

impl From<&Blackout> for BlackoutDocument {
    fn from(blackout: &Blackout) -> Self {
        Self {
            blackout_id: blackout.id,
            event_id: blackout.event_id,
            blackout_date: blackout.date.format(WIRE_DATE_FORMAT).to_string(),
        }
    }
}

/// Serialized occurrence: the owning event plus the calendar components of
/// the date it falls on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OccurrenceDocument {
    pub event_id: EventId,
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl From<&Occurrence<'_>> for OccurrenceDocument {
    fn from(occurrence: &Occurrence<'_>) -> Self {
        Self {
            event_id: occurrence.event.id(),
            year: occurrence.date.year(),
            month: occurrence.date.month(),
            day: occurrence.date.day(),
        }
    }
}

/// ## Summary
/// The first `limit` occurrences of `event`, serialized from the start of
/// its sequence.
#[must_use]
pub fn occurrence_documents(event: &Event, limit: usize) -> Vec<OccurrenceDocument> {
    let documents: Vec<OccurrenceDocument> = event
        .occurrences()
        .take(limit)
        .map(|occurrence| OccurrenceDocument::from(&occurrence))
        .collect();

    tracing::trace!(
        event_id = %event.id(),
        count = documents.len(),
        "Fetched occurrence documents"
    );
    documents
}

/// ## Summary
/// The first `limit` occurrences of `event` dated on or after `from`.
#[must_use]
pub fn occurrence_documents_from(
    event: &Event,
    limit: usize,
    from: NaiveDate,
) -> Vec<OccurrenceDocument> {
    let documents: Vec<OccurrenceDocument> = event
        .occurrences()
        .skip_while(|occurrence| occurrence.date < from)
        .take(limit)
        .map(|occurrence| OccurrenceDocument::from(&occurrence))
        .collect();

    tracing::trace!(
        event_id = %event.id(),
        count = documents.len(),
        from = %from,
        "Fetched occurrence documents from threshold"
    );
    documents
}

/// ## Summary
/// Every occurrence of `event` inside the inclusive window `[start, stop]`,
/// serialized.
#[must_use]
pub fn occurrence_documents_between(
    event: &Event,
    start: NaiveDate,
    stop: NaiveDate,
) -> Vec<OccurrenceDocument> {
    let documents: Vec<OccurrenceDocument> = event
        .occurrences()
        .skip_while(|occurrence| occurrence.date < start)
        .take_while(|occurrence| occurrence.date <= stop)
        .map(|occurrence| OccurrenceDocument::from(&occurrence))
        .collect();

    tracing::trace!(
        event_id = %event.id(),
        count = documents.len(),
        start = %start,
        stop = %stop,
        "Fetched occurrence documents in window"
    );
    documents
}
