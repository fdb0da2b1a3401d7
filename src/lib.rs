//! fxnews-rs: EUR/USD news relevance, currency topic and sentiment.
//!
//! A batch of news records goes through three stateless stages:
//!
//! 1. [`RelevanceFilter`] drops what an EUR/USD reader does not need
//!    (corporate earnings, crypto that is not about euro stablecoins, and
//!    anything without a macro/FX hook).
//! 2. [`TopicClassifier`] labels each headline `USD`, `EUR`, `Both` or `Other`.
//! 3. [`SentimentScorer`] scores the summary and buckets the compound score.
//!
//! [`Pipeline`] runs all three. [`NewsBuilder`] fetches a batch from the
//! Alpha Vantage `NEWS_SENTIMENT` query, and [`report`] turns results into
//! display rows, chart series and CSV.
//!
//! ```no_run
//! use fxnews_rs::{FxClient, NewsBuilder, Pipeline};
//!
//! # async fn run() -> Result<(), fxnews_rs::FxError> {
//! let client = FxClient::builder().api_key_from_env().build()?;
//! let articles = NewsBuilder::new(&client).limit(200).fetch().await?;
//! let annotated = Pipeline::new()?.run(&articles);
//! fxnews_rs::report::export_csv("av_news.csv", &annotated)?;
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod filter;
pub mod news;
pub mod pipeline;
pub mod report;
pub mod sentiment;
pub mod topic;

pub use crate::core::{
    FxClient, FxClientBuilder, FxError,
    client::{Backoff, CacheMode, RetryConfig},
};
#[cfg(feature = "dataframe")]
pub use crate::core::dataframe::ToDataFrame;
pub use filter::{Decision, RelevanceFilter, RelevanceFilterBuilder, Rule, Verdict};
pub use news::{Article, NewsBuilder, SortOrder};
pub use pipeline::{AnnotatedArticle, Pipeline, PipelineReport};
pub use sentiment::{
    LexiconAnalyzer, SentimentEngine, SentimentLabel, SentimentScorer, SentimentScores, label,
};
pub use topic::{CurrencyTopic, TopicClassifier};
