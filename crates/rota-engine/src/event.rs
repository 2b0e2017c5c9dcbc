//! Events own a recurrence rule, calendar bounds, blackouts and group
//! grants, and answer occurrence queries.

use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

use chrono::{Local, NaiveDate};
use rota_core::types::{EventId, GroupId, UserId};

use crate::blackout::{Blackout, BlackoutSet};
use crate::error::{EngineError, EngineResult};
use crate::occurrence::Occurrence;
use crate::rule::RecurrenceRule;

/// A recurring occasion: one rule, a start date, an optional end date, a
/// blackout set and opaque group grants.
///
/// Equality and hashing use identity semantics: two events are equal exactly
/// when their ids are equal, whatever their other fields say.
#[derive(Debug, Clone)]
pub struct Event {
    id: EventId,
    owner: UserId,
    name: String,
    start_date: NaiveDate,
    end_date: Option<NaiveDate>,
    rule: RecurrenceRule,
    blackouts: BlackoutSet,
    groups: Vec<GroupId>,
}

impl Event {
    /// ## Summary
    /// Creates an event with no end date, no blackouts and no group grants.
    ///
    /// ## Errors
    /// Returns [`EngineError::ValidationError`] when `name` is empty or
    /// all whitespace.
    pub fn new(
        id: EventId,
        owner: UserId,
        name: impl Into<String>,
        start_date: NaiveDate,
        rule: RecurrenceRule,
    ) -> EngineResult<Self> {
        let name = validate_name(name.into())?;
        Ok(Self {
            id,
            owner,
            name,
            start_date,
            end_date: None,
            rule,
            blackouts: BlackoutSet::new(),
            groups: Vec::new(),
        })
    }

    /// Bounds the sequence: no occurrence past `end_date` is ever emitted.
    /// The bound is not required to lie on or after the start date; an end
    /// date before the start yields an empty sequence.
    #[must_use]
    pub fn with_end_date(mut self, end_date: NaiveDate) -> Self {
        self.end_date = Some(end_date);
        self
    }

    /// Attaches the group grants this event is visible to. The engine never
    /// interprets them.
    #[must_use]
    pub fn with_groups(mut self, groups: Vec<GroupId>) -> Self {
        self.groups = groups;
        self
    }

    #[must_use]
    pub const fn id(&self) -> EventId {
        self.id
    }

    #[must_use]
    pub const fn owner(&self) -> UserId {
        self.owner
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub const fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    #[must_use]
    pub const fn end_date(&self) -> Option<NaiveDate> {
        self.end_date
    }

    #[must_use]
    pub const fn rule(&self) -> RecurrenceRule {
        self.rule
    }

    #[must_use]
    pub const fn blackouts(&self) -> &BlackoutSet {
        &self.blackouts
    }

    #[must_use]
    pub fn groups(&self) -> &[GroupId] {
        &self.groups
    }

    /// ## Errors
    /// Returns [`EngineError::ValidationError`] when `name` is empty or
    /// all whitespace.
    pub fn set_name(&mut self, name: impl Into<String>) -> EngineResult<()> {
        self.name = validate_name(name.into())?;
        Ok(())
    }

    /// Replaces the recurrence rule. Rules are validated at construction, so
    /// any value handed here is already well formed.
    pub fn set_rule(&mut self, rule: RecurrenceRule) {
        self.rule = rule;
    }

    pub fn set_start_date(&mut self, start_date: NaiveDate) {
        self.start_date = start_date;
    }

    pub fn set_end_date(&mut self, end_date: Option<NaiveDate>) {
        self.end_date = end_date;
    }

    /// Blacks out `date` for this event. The new entry carries the unsaved
    /// id until a collaborator persists it.
    pub fn add_blackout(&mut self, date: NaiveDate) {
        self.blackouts.add(Blackout::unsaved(self.id, date));
    }

    /// Lifts one blackout for `date`, returning it if it existed.
    pub fn remove_blackout(&mut self, date: NaiveDate) -> Option<Blackout> {
        self.blackouts.remove_date(date)
    }

    pub(crate) fn insert_blackout(&mut self, blackout: Blackout) {
        self.blackouts.add(blackout);
    }

    /// ## Summary
    /// The lazy occurrence sequence, chronologically increasing from the
    /// rule's seed. Unbounded unless an end date is set; each call starts a
    /// fresh cursor, so the sequence is restartable.
    #[must_use]
    pub fn occurrences(&self) -> Occurrences<'_> {
        Occurrences {
            event: self,
            next: self.rule.first_occurrence(self.start_date, &self.blackouts),
        }
    }

    /// ## Summary
    /// The first occurrence dated on or after `threshold`.
    ///
    /// Returns `None` only when the sequence is finite (an end date is set
    /// or the calendar overflows) and exhausts before reaching `threshold`.
    /// Idempotent while the event is unmutated.
    #[must_use]
    pub fn nearest_occurrence(&self, threshold: NaiveDate) -> Option<Occurrence<'_>> {
        self.occurrences()
            .find(|occurrence| occurrence.date >= threshold)
    }

    /// [`Self::nearest_occurrence`] anchored at today's local date.
    #[must_use]
    pub fn nearest_from_today(&self) -> Option<Occurrence<'_>> {
        self.nearest_occurrence(Local::now().date_naive())
    }

    /// Sort key for upcoming-first orderings: the nearest occurrence date on
    /// or after `today`. Events with nothing left map to [`NaiveDate::MAX`]
    /// so they sort after every event that still has a date.
    #[must_use]
    pub fn upcoming_sort_key(&self, today: NaiveDate) -> NaiveDate {
        self.nearest_occurrence(today)
            .map_or(NaiveDate::MAX, |occurrence| occurrence.date)
    }

    /// Compares two events by [`Self::upcoming_sort_key`].
    #[must_use]
    pub fn cmp_upcoming(&self, other: &Self, today: NaiveDate) -> Ordering {
        self.upcoming_sort_key(today)
            .cmp(&other.upcoming_sort_key(today))
    }
}

impl PartialEq for Event {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Event {}

impl Hash for Event {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

fn validate_name(name: String) -> EngineResult<String> {
    if name.trim().is_empty() {
        return Err(EngineError::ValidationError(
            "event name must not be empty".to_owned(),
        ));
    }
    Ok(name)
}

/// Lazy iterator over an event's occurrences, in chronological order.
///
/// Ends when a candidate passes the event's end date or the calendar
/// overflows; without an end date the sequence is infinite and the consumer
/// must bound it.
#[derive(Debug, Clone)]
pub struct Occurrences<'a> {
    event: &'a Event,
    next: Option<NaiveDate>,
}

impl<'a> Iterator for Occurrences<'a> {
    type Item = Occurrence<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let date = self.next.take()?;
        if self.event.end_date.is_some_and(|end| date > end) {
            return None;
        }
        self.next = self.event.rule.increment(date, &self.event.blackouts);
        Some(Occurrence::new(self.event, date))
    }
}
