//! Shared-snapshot queries from multiple threads.

use std::thread;

use chrono::NaiveDate;
use rota_test::component::pool_order;
use rota_test::component::types::EventId;

use super::helpers::{date, seeded_store};

#[test_log::test]
fn test_parallel_pool_queries_agree() {
    let store = seeded_store();
    let events = store.load_all().expect("fixtures load");
    let start = date(2017, 1, 1);
    let stop = date(2017, 6, 30);

    let baseline: Vec<(EventId, NaiveDate)> = pool_order(&events, start, stop)
        .map(|occurrence| (occurrence.event.id(), occurrence.date))
        .collect();

    thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                let run: Vec<(EventId, NaiveDate)> = pool_order(&events, start, stop)
                    .map(|occurrence| (occurrence.event.id(), occurrence.date))
                    .collect();
                assert_eq!(run, baseline);
            });
        }
    });
}

#[test_log::test]
fn test_parallel_nearest_queries_agree() {
    let store = seeded_store();
    let event = store.load_event(EventId::new(2)).expect("fixture loads");
    let threshold = date(2017, 2, 1);
    let expected = event
        .nearest_occurrence(threshold)
        .map(|occurrence| occurrence.date);

    thread::scope(|scope| {
        for _ in 0..8 {
            scope.spawn(|| {
                let nearest = event
                    .nearest_occurrence(threshold)
                    .map(|occurrence| occurrence.date);
                assert_eq!(nearest, expected);
            });
        }
    });
}
