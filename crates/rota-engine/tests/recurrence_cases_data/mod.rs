use chrono::NaiveDate;
use rota_core::types::{BlackoutId, EventId, UserId};
use rota_engine::{BlackoutRecord, Event, EventRecord, RuleRecord, assemble_event};

pub struct RecurrenceCase {
    pub name: &'static str,
    pub time_interval: &'static str,
    pub skip_every: i64,
    pub day_of_week: Option<&'static str>,
    pub posn: Option<i64>,
    pub start: &'static str,
    pub end: Option<&'static str>,
    pub blackouts: &'static [&'static str],
    pub expected: Option<&'static [&'static str]>,
    pub expected_len: Option<usize>,
    pub limit: usize,
}

#[expect(clippy::too_many_lines)]
pub fn recurrence_cases() -> Vec<RecurrenceCase> {
    vec![
        RecurrenceCase {
            name: "daily_basic",
            time_interval: "d",
            skip_every: 1,
            day_of_week: None,
            posn: None,
            start: "2017-01-10",
            end: None,
            blackouts: &[],
            expected: Some(&["2017-01-10", "2017-01-11", "2017-01-12"]),
            expected_len: None,
            limit: 3,
        },
        RecurrenceCase {
            name: "weekly_step_two",
            time_interval: "w",
            skip_every: 2,
            day_of_week: None,
            posn: None,
            start: "2017-01-02",
            end: None,
            blackouts: &[],
            expected: Some(&["2017-01-02", "2017-01-16", "2017-01-30"]),
            expected_len: None,
            limit: 3,
        },
        RecurrenceCase {
            name: "monthly_blackout_skip",
            time_interval: "month",
            skip_every: 1,
            day_of_week: None,
            posn: None,
            start: "2017-01-10",
            end: None,
            blackouts: &["2017-02-10"],
            expected: Some(&["2017-01-10", "2017-03-10", "2017-04-10"]),
            expected_len: None,
            limit: 3,
        },
        RecurrenceCase {
            name: "monthly_day_clamps_then_drifts",
            time_interval: "m",
            skip_every: 1,
            day_of_week: None,
            posn: None,
            start: "2017-01-31",
            end: None,
            blackouts: &[],
            expected: Some(&["2017-01-31", "2017-02-28", "2017-03-28"]),
            expected_len: None,
            limit: 3,
        },
        RecurrenceCase {
            name: "yearly_from_leap_day",
            time_interval: "y",
            skip_every: 1,
            day_of_week: None,
            posn: None,
            start: "2016-02-29",
            end: None,
            blackouts: &[],
            expected: Some(&["2016-02-29", "2017-02-28", "2018-02-28"]),
            expected_len: None,
            limit: 3,
        },
        RecurrenceCase {
            name: "yearly_long_token",
            time_interval: "yearly",
            skip_every: 1,
            day_of_week: None,
            posn: None,
            start: "2017-05-04",
            end: None,
            blackouts: &[],
            expected: Some(&["2017-05-04", "2018-05-04"]),
            expected_len: None,
            limit: 2,
        },
        RecurrenceCase {
            name: "blacked_out_start_advances_seed",
            time_interval: "d",
            skip_every: 1,
            day_of_week: None,
            posn: None,
            start: "2017-01-10",
            end: None,
            blackouts: &["2017-01-10"],
            expected: Some(&["2017-01-11", "2017-01-12"]),
            expected_len: None,
            limit: 2,
        },
        RecurrenceCase {
            name: "consecutive_blackouts_chain",
            time_interval: "d",
            skip_every: 1,
            day_of_week: None,
            posn: None,
            start: "2017-01-10",
            end: None,
            blackouts: &["2017-01-11", "2017-01-12"],
            expected: Some(&["2017-01-10", "2017-01-13", "2017-01-14"]),
            expected_len: None,
            limit: 3,
        },
        RecurrenceCase {
            name: "second_monday_yearly_with_end",
            time_interval: "y",
            skip_every: 1,
            day_of_week: Some("m"),
            posn: Some(2),
            start: "2017-01-07",
            end: Some("2020-01-01"),
            blackouts: &[],
            expected: Some(&["2017-01-09", "2018-01-08", "2019-01-14"]),
            expected_len: None,
            limit: 10,
        },
        RecurrenceCase {
            name: "last_thursday_monthly",
            time_interval: "m",
            skip_every: 1,
            day_of_week: Some("r"),
            posn: Some(5),
            start: "2017-01-01",
            end: None,
            blackouts: &[],
            expected: Some(&["2017-01-26", "2017-02-23", "2017-03-30"]),
            expected_len: None,
            limit: 3,
        },
        RecurrenceCase {
            name: "first_friday_snaps_past_start",
            time_interval: "m",
            skip_every: 1,
            day_of_week: Some("f"),
            posn: Some(1),
            start: "2017-01-07",
            end: None,
            blackouts: &[],
            expected: Some(&["2017-02-03", "2017-03-03", "2017-04-07"]),
            expected_len: None,
            limit: 3,
        },
        RecurrenceCase {
            name: "relative_long_tokens",
            time_interval: "monthly",
            skip_every: 1,
            day_of_week: Some("friday"),
            posn: Some(1),
            start: "2017-02-01",
            end: None,
            blackouts: &[],
            expected: Some(&["2017-02-03", "2017-03-03"]),
            expected_len: None,
            limit: 2,
        },
        RecurrenceCase {
            name: "negative_step_walks_backward",
            time_interval: "m",
            skip_every: -1,
            day_of_week: Some("w"),
            posn: Some(1),
            start: "2017-06-01",
            end: None,
            blackouts: &[],
            expected: Some(&["2017-06-07", "2017-05-03", "2017-04-05"]),
            expected_len: None,
            limit: 3,
        },
        RecurrenceCase {
            name: "end_date_cuts_the_tail",
            time_interval: "m",
            skip_every: 1,
            day_of_week: None,
            posn: None,
            start: "2017-01-10",
            end: Some("2017-03-15"),
            blackouts: &[],
            expected: Some(&["2017-01-10", "2017-02-10", "2017-03-10"]),
            expected_len: None,
            limit: 10,
        },
        RecurrenceCase {
            name: "end_date_itself_is_emitted",
            time_interval: "m",
            skip_every: 1,
            day_of_week: None,
            posn: None,
            start: "2017-01-10",
            end: Some("2017-02-10"),
            blackouts: &[],
            expected: Some(&["2017-01-10", "2017-02-10"]),
            expected_len: None,
            limit: 10,
        },
        RecurrenceCase {
            name: "end_before_start_is_empty",
            time_interval: "d",
            skip_every: 1,
            day_of_week: None,
            posn: None,
            start: "2017-01-10",
            end: Some("2017-01-09"),
            blackouts: &[],
            expected: Some(&[]),
            expected_len: None,
            limit: 10,
        },
        RecurrenceCase {
            name: "daily_spans_two_plain_years",
            time_interval: "daily",
            skip_every: 1,
            day_of_week: None,
            posn: None,
            start: "2017-01-01",
            end: Some("2018-12-31"),
            blackouts: &[],
            expected: None,
            expected_len: Some(730),
            limit: 1000,
        },
    ]
}

pub fn assert_case(case: &RecurrenceCase) {
    let event = build_event(case);
    let actual: Vec<NaiveDate> = event
        .occurrences()
        .take(case.limit)
        .map(|occurrence| occurrence.date)
        .collect();

    if let Some(expected) = case.expected {
        let expected_dates: Vec<NaiveDate> = expected.iter().copied().map(parse_date).collect();
        assert_eq!(
            actual, expected_dates,
            "Case {} did not match",
            case.name
        );
    }

    if let Some(expected_len) = case.expected_len {
        assert_eq!(
            actual.len(),
            expected_len,
            "Case {} expected {} occurrences",
            case.name,
            expected_len
        );
    }
}

fn build_event(case: &RecurrenceCase) -> Event {
    let event_id = EventId::new(1);

    let record = EventRecord {
        id: event_id,
        owner: UserId::new(1),
        name: case.name.to_owned(),
        start_date: parse_date(case.start),
        end_date: case.end.map(parse_date),
        groups: Vec::new(),
    };

    let rule = match (case.day_of_week, case.posn) {
        (Some(day_of_week), Some(posn)) => RuleRecord::Relative {
            event_id,
            time_interval: case.time_interval.to_owned(),
            skip_every: case.skip_every,
            day_of_week: day_of_week.to_owned(),
            posn,
        },
        _ => RuleRecord::Exact {
            event_id,
            time_interval: case.time_interval.to_owned(),
            skip_every: case.skip_every,
        },
    };

    let blackouts: Vec<BlackoutRecord> = (1u64..)
        .zip(case.blackouts)
        .map(|(row, value)| BlackoutRecord {
            id: BlackoutId::new(row),
            event_id,
            date: parse_date(value),
        })
        .collect();

    assemble_event(record, Some(rule), blackouts)
        .unwrap_or_else(|err| panic!("Failed to assemble case {}: {err}", case.name))
}

fn parse_date(value: &str) -> NaiveDate {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .unwrap_or_else(|err| panic!("Failed to parse date {value}: {err}"))
}
