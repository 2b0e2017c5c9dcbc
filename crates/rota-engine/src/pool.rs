//! Pool scheduler: merges the occurrence streams of many events into one
//! chronologically increasing sequence over a bounded window.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use chrono::{Days, NaiveDate};
use rota_core::config::SchedulerConfig;

use crate::error::EngineResult;
use crate::event::{Event, Occurrences};
use crate::occurrence::Occurrence;

/// Per-event cursor held by the pool: the cursor's current date plus the
/// iterator it advances on.
#[derive(Debug)]
struct PoolEntry<'a> {
    date: NaiveDate,
    index: usize,
    event: &'a Event,
    occurrences: Occurrences<'a>,
}

impl PartialEq for PoolEntry<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.date == other.date && self.index == other.index
    }
}

impl Eq for PoolEntry<'_> {}

impl PartialOrd for PoolEntry<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// Reversed: BinaryHeap is a max-heap, and popping must yield the smallest
// (date, input index) pair so date ties come out in input order.
impl Ord for PoolEntry<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .date
            .cmp(&self.date)
            .then_with(|| other.index.cmp(&self.index))
    }
}

/// Lazy merged occurrence stream produced by [`pool_order`].
#[derive(Debug)]
pub struct PoolOrder<'a> {
    heap: BinaryHeap<PoolEntry<'a>>,
    stop: NaiveDate,
}

impl<'a> Iterator for PoolOrder<'a> {
    type Item = Occurrence<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut entry = self.heap.pop()?;
        let event = entry.event;
        let emitted_date = entry.date;

        let advanced = entry
            .occurrences
            .find(|occurrence| occurrence.date > emitted_date)
            .filter(|next| next.date <= self.stop);
        if let Some(next) = advanced {
            entry.date = next.date;
            self.heap.push(entry);
        }

        Some(Occurrence::new(event, emitted_date))
    }
}

/// ## Summary
/// Merges the occurrence streams of `events` into one chronologically
/// increasing sequence covering the inclusive window `[start, stop]`.
///
/// Each event's cursor seeds at its nearest occurrence on or after `start`;
/// events with none drop out silently. Date ties are emitted together, in
/// input order. After an occurrence at `d` is emitted, that event's cursor
/// advances to its next occurrence strictly after `d`; cursors that pass
/// `stop` retire.
#[must_use]
pub fn pool_order(events: &[Event], start: NaiveDate, stop: NaiveDate) -> PoolOrder<'_> {
    let mut heap = BinaryHeap::with_capacity(events.len());
    for (index, event) in events.iter().enumerate() {
        let mut occurrences = event.occurrences();
        let seed = occurrences
            .find(|occurrence| occurrence.date >= start)
            .filter(|seed| seed.date <= stop);
        if let Some(seed) = seed {
            heap.push(PoolEntry {
                date: seed.date,
                index,
                event,
                occurrences,
            });
        }
    }

    tracing::trace!(
        pool_size = heap.len(),
        start = %start,
        stop = %stop,
        "Pool scheduler seeded"
    );

    PoolOrder { heap, stop }
}

/// ## Summary
/// The calendar-feed view of a pool: occurrences of `events` from `from`
/// through the configured horizon, inclusive on both ends.
///
/// ## Errors
/// Returns an error if `config` fails validation.
pub fn feed<'a>(
    events: &'a [Event],
    from: NaiveDate,
    config: &SchedulerConfig,
) -> EngineResult<PoolOrder<'a>> {
    config.validate()?;
    let stop = from
        .checked_add_days(Days::new(config.horizon_days))
        .unwrap_or(NaiveDate::MAX);
    Ok(pool_order(events, from, stop))
}
