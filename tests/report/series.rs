use chrono::{TimeZone, Utc};
use fxnews_rs::{
    Article, CurrencyTopic, Pipeline,
    news::parse_feed,
    report::{parse_time_published, time_series},
};

use crate::common::news_fixture;

#[test]
fn parses_provider_and_iso_timestamps() {
    let expected = Utc.with_ymd_and_hms(2025, 1, 14, 15, 30, 0).unwrap();
    assert_eq!(parse_time_published("20250114T153000"), Some(expected));
    assert_eq!(parse_time_published("20250114T1530"), Some(expected));
    assert_eq!(parse_time_published("2025-01-14T15:30:00"), Some(expected));
    assert_eq!(parse_time_published("2025-01-14 15:30"), Some(expected));
    assert_eq!(parse_time_published("2025-01-14T16:30:00+01:00"), Some(expected));
    assert_eq!(
        parse_time_published("2025-01-14"),
        Some(Utc.with_ymd_and_hms(2025, 1, 14, 0, 0, 0).unwrap())
    );
}

#[test]
fn rejects_garbage_timestamps() {
    assert_eq!(parse_time_published("not-a-date"), None);
    assert_eq!(parse_time_published(""), None);
    assert_eq!(parse_time_published("20251399T000000"), None);
}

#[test]
fn series_always_has_both_chart_topics() {
    let series = time_series(&[]);
    assert_eq!(
        series.keys().copied().collect::<Vec<_>>(),
        [CurrencyTopic::Usd, CurrencyTopic::Eur]
    );
    assert!(series.values().all(Vec::is_empty));
}

#[test]
fn series_from_fixture_skips_unplottable_items() {
    let annotated = Pipeline::new()
        .unwrap()
        .run(&parse_feed(&news_fixture()).unwrap());
    let series = time_series(&annotated);

    // The USD item has no summary and no valid timestamp; the Both item is not charted.
    assert!(series[&CurrencyTopic::Usd].is_empty());

    let eur = &series[&CurrencyTopic::Eur];
    assert_eq!(eur.len(), 1);
    assert_eq!(eur[0].time, Utc.with_ymd_and_hms(2025, 1, 12, 8, 15, 0).unwrap());
    assert!(eur[0].compound > 0.0);
}

#[test]
fn series_is_sorted_by_time() {
    let articles = vec![
        Article::new("Greenback firms", "The greenback rallied.").with_time_published("20250103T120000"),
        Article::new("Greenback slips", "The greenback slumped.").with_time_published("20250101T120000"),
        Article::new("Greenback flat", "The greenback was unchanged.").with_time_published("20250102T120000"),
    ];
    let annotated = Pipeline::new().unwrap().run(&articles);
    let usd = &time_series(&annotated)[&CurrencyTopic::Usd];

    let days: Vec<_> = usd.iter().map(|p| p.time.format("%d").to_string()).collect();
    assert_eq!(days, ["01", "02", "03"]);
    assert!(usd[0].compound < 0.0);
    assert!(usd[2].compound > 0.0);
}
