use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::{pipeline::AnnotatedArticle, topic::CurrencyTopic};

/// Topics plotted on the sentiment-over-time chart.
pub const CHART_TOPICS: [CurrencyTopic; 2] = [CurrencyTopic::Usd, CurrencyTopic::Eur];

const NAIVE_FORMATS: &[&str] = &[
    "%Y%m%dT%H%M%S",
    "%Y%m%dT%H%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// One chart point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesPoint {
    pub time: DateTime<Utc>,
    pub compound: f64,
}

/// Parses a provider timestamp; naive values are taken as UTC.
///
/// Accepts the compact `YYYYMMDDTHHMMSS` form, RFC 3339, and a few common
/// ISO-like variants. Anything else is `None`.
pub fn parse_time_published(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    NAIVE_FORMATS
        .iter()
        .find_map(|f| NaiveDateTime::parse_from_str(raw, f).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
        .map(|naive| naive.and_utc())
}

/// Compound sentiment over time for each of [`CHART_TOPICS`], sorted by time.
///
/// Articles with an unparseable timestamp or without a compound score are
/// left out of the series; both topics are always present as keys.
pub fn time_series(articles: &[AnnotatedArticle]) -> BTreeMap<CurrencyTopic, Vec<SeriesPoint>> {
    let mut out: BTreeMap<CurrencyTopic, Vec<SeriesPoint>> =
        CHART_TOPICS.iter().map(|t| (*t, Vec::new())).collect();

    for a in articles {
        let Some(points) = out.get_mut(&a.currency_topic) else {
            continue;
        };
        let time = a
            .article
            .time_published
            .as_deref()
            .and_then(parse_time_published);
        if let (Some(time), Some(compound)) = (time, a.compound()) {
            points.push(SeriesPoint { time, compound });
        }
    }

    for points in out.values_mut() {
        points.sort_by_key(|p| p.time);
    }
    out
}
