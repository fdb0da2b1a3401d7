//! Data for the consumers of annotated news: the display table, the
//! sentiment-over-time chart and the tabular export.

mod export;
mod series;

pub use export::{CSV_FIXED_COLUMNS, export_csv, write_csv};
pub use series::{CHART_TOPICS, SeriesPoint, parse_time_published, time_series};

use serde::Serialize;

use crate::{pipeline::AnnotatedArticle, sentiment::SentimentLabel, topic::CurrencyTopic};

/// Rows shown in the summary table by default.
pub const DEFAULT_DISPLAY_ROWS: usize = 20;

/// One row of the display table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayRow<'a> {
    pub title: Option<&'a str>,
    pub summary: Option<&'a str>,
    pub currency_topic: CurrencyTopic,
    pub compound: Option<f64>,
    pub sentiment_text: SentimentLabel,
}

/// Projects the first `limit` articles onto the display columns.
pub fn display_rows(articles: &[AnnotatedArticle], limit: usize) -> Vec<DisplayRow<'_>> {
    articles
        .iter()
        .take(limit)
        .map(|a| DisplayRow {
            title: a.title(),
            summary: a.summary(),
            currency_topic: a.currency_topic,
            compound: a.compound(),
            sentiment_text: a.sentiment_label,
        })
        .collect()
}

#[cfg(feature = "dataframe")]
impl crate::core::dataframe::ToDataFrame for [AnnotatedArticle] {
    fn to_dataframe(&self) -> polars::prelude::PolarsResult<polars::prelude::DataFrame> {
        use polars::prelude::*;

        let title: Vec<Option<&str>> = self.iter().map(AnnotatedArticle::title).collect();
        let summary: Vec<Option<&str>> = self.iter().map(AnnotatedArticle::summary).collect();
        let time_published: Vec<Option<&str>> = self
            .iter()
            .map(|a| a.article.time_published.as_deref())
            .collect();
        let topic: Vec<&str> = self.iter().map(|a| a.currency_topic.as_str()).collect();
        let neg: Vec<Option<f64>> = self.iter().map(|a| a.sentiment.map(|s| s.negative)).collect();
        let neu: Vec<Option<f64>> = self.iter().map(|a| a.sentiment.map(|s| s.neutral)).collect();
        let pos: Vec<Option<f64>> = self.iter().map(|a| a.sentiment.map(|s| s.positive)).collect();
        let compound: Vec<Option<f64>> = self.iter().map(AnnotatedArticle::compound).collect();
        let label: Vec<&str> = self.iter().map(|a| a.sentiment_label.as_str()).collect();

        df!(
            "title" => title,
            "summary" => summary,
            "time_published" => time_published,
            "currency_topic" => topic,
            "neg" => neg,
            "neu" => neu,
            "pos" => pos,
            "compound" => compound,
            "sentiment_text" => label,
        )
    }
}
