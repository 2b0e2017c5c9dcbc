//! An occurrence pairs an event with one concrete date its rule produces.

use std::cmp::Ordering;

use chrono::NaiveDate;

use crate::event::Event;

/// One date on which an event falls.
///
/// Occurrences order by date first and by the owning event's id second, so a
/// merged stream from several events is deterministic even when dates tie.
#[derive(Debug, Clone, Copy)]
pub struct Occurrence<'a> {
    pub event: &'a Event,
    pub date: NaiveDate,
}

impl<'a> Occurrence<'a> {
    #[must_use]
    pub const fn new(event: &'a Event, date: NaiveDate) -> Self {
        Self { event, date }
    }
}

impl PartialEq for Occurrence<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.date == other.date && self.event.id() == other.event.id()
    }
}

impl Eq for Occurrence<'_> {}

impl PartialOrd for Occurrence<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Occurrence<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.date
            .cmp(&other.date)
            .then_with(|| self.event.id().cmp(&other.event.id()))
    }
}
