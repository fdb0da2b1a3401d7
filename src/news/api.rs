use chrono::NaiveDateTime;

use crate::{
    core::{
        FxClient, FxError,
        client::{CacheMode, RetryConfig},
        net,
    },
    news::{model::Article, wire},
};

pub(super) const TIME_FROM_FORMAT: &str = "%Y%m%dT%H%M";

pub(super) struct NewsQuery<'a> {
    pub(super) tickers: &'a [String],
    pub(super) limit: u32,
    pub(super) sort: &'a str,
    pub(super) time_from: Option<NaiveDateTime>,
}

pub(super) async fn fetch_news(
    client: &FxClient,
    query: NewsQuery<'_>,
    cache_mode: CacheMode,
    retry_override: Option<&RetryConfig>,
) -> Result<Vec<Article>, FxError> {
    let api_key = client
        .api_key()
        .ok_or_else(|| FxError::InvalidParams("an API key is required".into()))?;
    if query.tickers.is_empty() {
        return Err(FxError::InvalidParams("at least one ticker is required".into()));
    }

    let tickers = query.tickers.join(",");
    let mut url = client.base_query().clone();
    {
        let mut qp = url.query_pairs_mut();
        qp.append_pair("function", "NEWS_SENTIMENT")
            .append_pair("tickers", &tickers)
            .append_pair("apikey", api_key)
            .append_pair("limit", &query.limit.to_string())
            .append_pair("sort", query.sort);
        if let Some(from) = query.time_from {
            qp.append_pair("time_from", &from.format(TIME_FROM_FORMAT).to_string());
        }
    }

    let cached = if cache_mode == CacheMode::Use {
        client.cache_get(&url).await
    } else {
        None
    };

    if let Some(body) = cached {
        return parse_feed(&body);
    }

    let req = client.http().get(url.clone());
    let resp = client.send_with_retry(req, retry_override).await?;

    if !resp.status().is_success() {
        return Err(FxError::Status {
            status: resp.status().as_u16(),
            url: redact_key(resp.url()),
        });
    }

    let body = net::get_text(resp, "news_sentiment", &tickers, "json").await?;
    let articles = parse_feed(&body)?;
    // Reached only with a real feed; limit notices never stick.
    if cache_mode != CacheMode::Bypass {
        client.cache_put(&url, &body, None).await;
    }
    Ok(articles)
}

pub(super) fn parse_feed(body: &str) -> Result<Vec<Article>, FxError> {
    let envelope: wire::NewsEnvelope = serde_json::from_str(body)?;

    let Some(items) = envelope.feed else {
        return Err(FxError::MissingFeed {
            message: envelope.error_message.or(envelope.information).or(envelope.note),
        });
    };

    let articles = items
        .into_iter()
        // Non-object entries are not articles.
        .filter(serde_json::Value::is_object)
        .filter_map(|raw| serde_json::from_value::<Article>(raw).ok())
        .collect();

    Ok(articles)
}

fn redact_key(url: &url::Url) -> String {
    let mut out = url.clone();
    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| {
            let v = if k == "apikey" { "***".into() } else { v.into_owned() };
            (k.into_owned(), v)
        })
        .collect();
    out.query_pairs_mut().clear().extend_pairs(pairs);
    out.to_string()
}
