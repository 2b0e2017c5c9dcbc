//! Ordering events by their next upcoming occurrence.

use std::cmp::Ordering;

use chrono::NaiveDate;
use rota_test::component::Event;
use rota_test::component::types::EventId;

use super::helpers::{date, seeded_store};

#[test_log::test]
fn test_events_sort_by_upcoming_occurrence() {
    let store = seeded_store();
    let mut events = store.load_all().expect("fixtures load");
    let today = date(2017, 2, 1);

    // Run is due Feb 1, rent skips its February blackout to Mar 10, and the
    // offsite only comes around again in January 2018.
    events.sort_by(|left, right| left.cmp_upcoming(right, today));
    let ids: Vec<EventId> = events.iter().map(Event::id).collect();
    assert_eq!(ids, vec![EventId::new(1), EventId::new(2), EventId::new(3)]);
}

#[test_log::test]
fn test_exhausted_event_sorts_after_live_ones() {
    let store = seeded_store();
    let live = store.load_event(EventId::new(1)).expect("fixture loads");
    let done = store.load_event(EventId::new(3)).expect("fixture loads");
    let today = date(2019, 6, 1);

    assert_eq!(done.upcoming_sort_key(today), NaiveDate::MAX);
    assert_eq!(done.cmp_upcoming(&live, today), Ordering::Greater);
    assert_eq!(live.cmp_upcoming(&done, today), Ordering::Less);
}

#[test_log::test]
fn test_occurrences_order_by_date_then_event_id() {
    let store = seeded_store();
    let daily = store.load_event(EventId::new(1)).expect("fixture loads");
    let monthly = store.load_event(EventId::new(2)).expect("fixture loads");

    let first_daily = daily
        .nearest_occurrence(date(2017, 1, 10))
        .expect("occurrence exists");
    let first_monthly = monthly
        .nearest_occurrence(date(2017, 1, 10))
        .expect("occurrence exists");
    let next_daily = daily
        .nearest_occurrence(date(2017, 1, 11))
        .expect("occurrence exists");

    // Same date orders by event id; otherwise the date decides.
    assert!(first_daily < first_monthly);
    assert!(first_monthly < next_daily);
}

#[test_log::test]
fn test_nearest_occurrence_is_idempotent_at_its_own_date() {
    let store = seeded_store();
    let event = store.load_event(EventId::new(2)).expect("fixture loads");

    let nearest = event
        .nearest_occurrence(date(2017, 2, 1))
        .expect("occurrence exists");
    let again = event
        .nearest_occurrence(nearest.date)
        .expect("occurrence exists");
    assert_eq!(again.date, nearest.date);
}
