mod api;
mod model;
mod wire;

pub use model::{Article, SortOrder};

use chrono::{Datelike, NaiveDate, NaiveDateTime, Utc};

use crate::{
    FxClient, FxError,
    core::client::{CacheMode, RetryConfig},
};

/// Topic tickers queried by default: the two legs of EUR/USD.
pub const DEFAULT_TICKERS: &[&str] = &["FOREX:USD", "FOREX:EUR"];

/// Default number of records requested.
pub const DEFAULT_LIMIT: u32 = 1000;

/// Parses a raw `NEWS_SENTIMENT` payload into articles.
///
/// # Errors
///
/// Returns [`FxError::MissingFeed`] when the payload has no `feed` array and
/// [`FxError::Json`] when it is not JSON at all.
pub fn parse_feed(body: &str) -> Result<Vec<Article>, FxError> {
    api::parse_feed(body)
}

/// A builder for fetching a batch of news articles from the `NEWS_SENTIMENT` query.
#[derive(Clone)]
pub struct NewsBuilder {
    client: FxClient,
    tickers: Vec<String>,
    limit: u32,
    sort: SortOrder,
    time_from: Option<NaiveDateTime>,
    cache_mode: CacheMode,
    retry_override: Option<RetryConfig>,
}

impl NewsBuilder {
    /// Creates a new `NewsBuilder` with the EUR/USD defaults.
    ///
    /// The start-time cutoff defaults to January 1st of the previous year.
    pub fn new(client: &FxClient) -> Self {
        Self {
            client: client.clone(),
            tickers: DEFAULT_TICKERS.iter().map(|t| (*t).to_string()).collect(),
            limit: DEFAULT_LIMIT,
            sort: SortOrder::default(),
            time_from: start_of_previous_year(Utc::now().year()),
            cache_mode: CacheMode::Use,
            retry_override: None,
        }
    }

    /// Replaces the topic tickers (e.g. `FOREX:USD`).
    #[must_use]
    pub fn tickers<I, S>(mut self, tickers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tickers = tickers.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the maximum number of articles to return.
    #[must_use]
    pub const fn limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    /// Sets the result ordering.
    #[must_use]
    pub const fn sort(mut self, sort: SortOrder) -> Self {
        self.sort = sort;
        self
    }

    /// Only return articles published at or after `from`. `None` removes the cutoff.
    #[must_use]
    pub const fn time_from(mut self, from: Option<NaiveDateTime>) -> Self {
        self.time_from = from;
        self
    }

    /// Sets the cache mode for this specific API call.
    #[must_use]
    pub const fn cache_mode(mut self, mode: CacheMode) -> Self {
        self.cache_mode = mode;
        self
    }

    /// Overrides the default retry policy for this specific API call.
    #[must_use]
    pub fn retry_policy(mut self, cfg: Option<RetryConfig>) -> Self {
        self.retry_override = cfg;
        self
    }

    /// Executes the request and returns the articles of the `feed` array.
    ///
    /// # Errors
    ///
    /// Returns an `FxError` if no API key is configured, the request fails,
    /// the provider answers with a non-2xx status, or the payload has no
    /// `feed` (typically an API-limit notice, see [`FxError::MissingFeed`]).
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err, fields(tickers = %self.tickers.join(","))))]
    pub async fn fetch(self) -> Result<Vec<Article>, FxError> {
        let articles = api::fetch_news(
            &self.client,
            api::NewsQuery {
                tickers: &self.tickers,
                limit: self.limit,
                sort: self.sort.as_str(),
                time_from: self.time_from,
            },
            self.cache_mode,
            self.retry_override.as_ref(),
        )
        .await?;

        #[cfg(feature = "tracing")]
        tracing::debug!(count = articles.len(), "fetched news");

        Ok(articles)
    }
}

fn start_of_previous_year(year: i32) -> Option<NaiveDateTime> {
    NaiveDate::from_ymd_opt(year - 1, 1, 1).and_then(|d| d.and_hms_opt(0, 0, 0))
}
