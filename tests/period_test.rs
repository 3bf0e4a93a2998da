use chrono::{DateTime, TimeDelta, Utc};
use daterange::{parse_instant, DateError, DateRange, Interval};

fn date(text: &str) -> DateTime<Utc> {
    parse_instant(text).unwrap()
}

fn daily(start: &str, finish: &str) -> DateRange {
    DateRange::new(Some(date(start)), Some(date(finish)), Some(Interval::days(1))).unwrap()
}

fn days(period: impl Iterator<Item = DateTime<Utc>>) -> Vec<String> {
    period
        .map(|instant| instant.format("%Y-%m-%d").to_string())
        .collect()
}

#[test]
fn test_period_includes_endpoints() {
    let range = daily("2018-01-10", "2018-01-15");
    let period = range.period(true).unwrap();

    assert_eq!(period.start(), date("2018-01-10"));
    assert_eq!(period.end().format("%Y-%m-%d").to_string(), "2018-01-15");
    assert_eq!(period.end(), date("2018-01-15 00:00:01"));

    assert_eq!(
        days(period),
        vec![
            "2018-01-10",
            "2018-01-11",
            "2018-01-12",
            "2018-01-13",
            "2018-01-14",
            "2018-01-15"
        ]
    );
}

#[test]
fn test_period_excludes_endpoints() {
    let range = daily("2018-01-10", "2018-01-15");
    let period = range.period(false).unwrap();

    assert_eq!(period.start(), date("2018-01-11"));
    assert_eq!(period.end().format("%Y-%m-%d").to_string(), "2018-01-14");

    let listed = days(period);
    assert_eq!(listed.len(), 4);
    assert_eq!(listed.first().map(String::as_str), Some("2018-01-11"));
    assert_eq!(listed.last().map(String::as_str), Some("2018-01-14"));
}

#[test]
fn test_period_needs_both_bounds() {
    let ranges = [
        DateRange::new(None, Some(date("2018-01-15")), Some(Interval::days(1))).unwrap(),
        DateRange::new(Some(date("2018-01-10")), None, Some(Interval::days(1))).unwrap(),
    ];

    for range in ranges {
        for inclusive in [true, false] {
            let err = range.period(inclusive).unwrap_err();
            assert!(matches!(err, DateError::CannotCreatePeriod));
            assert_eq!(
                err.to_string(),
                "A date period cannot be constructed when one of the start of finish dates are null. Please provide both start and finish dates."
            );
        }
    }
}

#[test]
fn test_each_call_is_a_fresh_sequence() {
    let range = daily("2018-01-10", "2018-01-15");

    let mut first = range.period(true).unwrap();
    first.next();
    first.next();

    assert_eq!(range.period(true).unwrap().count(), 6);
    assert_eq!(first.count(), 4);
    assert_eq!(
        range.iter().unwrap().collect::<Vec<_>>(),
        range.period(true).unwrap().collect::<Vec<_>>()
    );
}

#[test]
fn test_period_is_fused() {
    let range = daily("2018-01-10", "2018-01-10");
    let mut period = range.period(true).unwrap();

    assert_eq!(period.next(), Some(date("2018-01-10")));
    assert_eq!(period.next(), None);
    assert_eq!(period.next(), None);
}

#[test]
fn test_uneven_step_stops_before_finish() {
    let range = DateRange::new(
        Some(date("2018-01-10")),
        Some(date("2018-01-15")),
        Some(Interval::days(2)),
    )
    .unwrap();

    assert_eq!(
        days(range.period(true).unwrap()),
        vec!["2018-01-10", "2018-01-12", "2018-01-14"]
    );
    assert_eq!(days(range.period(false).unwrap()), vec!["2018-01-12"]);
}

#[test]
fn test_exclusive_period_of_short_range_is_empty() {
    let range = daily("2018-01-10", "2018-01-11");
    assert_eq!(range.period(false).unwrap().count(), 0);
}

#[test]
fn test_monthly_period() {
    let range = DateRange::new(
        Some(date("2018-01-31")),
        Some(date("2018-05-31")),
        Some("P1M".parse().unwrap()),
    )
    .unwrap();

    // 逐次相加，二月底之後停在 28 號
    assert_eq!(
        days(range.period(true).unwrap()),
        vec!["2018-01-31", "2018-02-28", "2018-03-28", "2018-04-28", "2018-05-28"]
    );
}

#[test]
fn test_hourly_period_with_timezone_input() {
    let range = DateRange::new(
        Some(date("2018-01-10T10:00:00+10:00")),
        Some(date("2018-01-10T03:00:00Z")),
        Some(Interval::hours(1)),
    )
    .unwrap();

    let instants: Vec<_> = range.period(true).unwrap().collect();
    assert_eq!(instants.len(), 4);
    assert_eq!(instants[0], date("2018-01-10 00:00:00"));
    assert_eq!(instants[3] - instants[0], TimeDelta::hours(3));
}

#[test]
fn test_sub_second_finish_is_within_one_second_shift() {
    let start = date("2018-01-10");
    let finish = start + TimeDelta::milliseconds(500);
    let step = Interval::new(0, TimeDelta::milliseconds(400));
    let range = DateRange::new(Some(start), Some(finish), Some(step)).unwrap();

    // 終點往後推一秒，所以 0.8s 與 1.2s 也會出現
    let instants: Vec<_> = range.period(true).unwrap().collect();
    assert_eq!(instants.len(), 4);
    assert_eq!(instants[3], start + TimeDelta::milliseconds(1200));
}

#[test]
fn test_backward_interval_is_rejected() {
    let backward = Interval::new(0, -TimeDelta::days(1));
    let range = DateRange::new(
        Some(date("2018-01-10")),
        Some(date("2018-01-15")),
        Some(backward),
    )
    .unwrap();

    for inclusive in [true, false] {
        assert!(matches!(
            range.period(inclusive),
            Err(DateError::InvalidInterval { .. })
        ));
    }
}

#[test]
fn test_interval_with_no_net_progress_is_rejected() {
    // 一個月減 31 天，從一月一日出發會原地不動
    let standing = Interval::new(1, -TimeDelta::days(31));
    let range = DateRange::new(
        Some(date("2018-01-01")),
        Some(date("2018-03-01")),
        Some(standing),
    )
    .unwrap();

    assert!(matches!(
        range.period(true),
        Err(DateError::InvalidInterval { .. })
    ));
}

#[test]
fn test_mixed_interval_stops_when_steps_stall() {
    // 一個月減 30 天：起初每步前進一天，到一月二十九日後停滯
    let drifting = Interval::new(1, -TimeDelta::days(30));
    let range = DateRange::new(
        Some(date("2018-01-01")),
        Some(date("2018-03-01")),
        Some(drifting),
    )
    .unwrap();

    let instants: Vec<_> = range.period(true).unwrap().collect();
    assert_eq!(instants.len(), 29);
    assert_eq!(instants.last(), Some(&date("2018-01-29")));
    assert!(instants.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn test_missing_interval_fails() {
    let range = DateRange::between(date("2018-01-10"), date("2018-01-15"));
    assert!(matches!(range.period(true), Err(DateError::MissingInterval)));
}

#[test]
fn test_overflow_near_max_instant() {
    let max = DateTime::<Utc>::MAX_UTC;
    let range = DateRange::new(Some(max), Some(max), Some(Interval::days(1))).unwrap();

    assert!(matches!(range.period(true), Err(DateError::OutOfRange)));
    assert!(matches!(range.period(false), Err(DateError::OutOfRange)));
}
