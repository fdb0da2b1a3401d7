use httpmock::{Method::GET, MockServer};
use fxnews_rs::NewsBuilder;

use crate::common::{mock_client, news_fixture};

#[tokio::test]
async fn news_offline_parses_every_feed_item() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/query")
            .query_param("function", "NEWS_SENTIMENT")
            .query_param("tickers", "FOREX:USD,FOREX:EUR")
            .query_param("apikey", "demo-key");
        then.status(200)
            .header("content-type", "application/json")
            .body(news_fixture());
    });

    let client = mock_client(&server).build().unwrap();
    let articles = NewsBuilder::new(&client).fetch().await.unwrap();
    mock.assert();

    assert_eq!(articles.len(), 6);

    let first = &articles[0];
    assert_eq!(
        first.title(),
        Some("EUR/USD slips as Fed officials push back on rate cut bets")
    );
    assert_eq!(first.time_published.as_deref(), Some("20250114T153000"));
    assert_eq!(first.extra["source"], "Example Wire");
    assert!(first.extra.contains_key("ticker_sentiment"));
    assert!(!first.extra.contains_key("title"));

    let greenback = &articles[4];
    assert_eq!(greenback.title(), Some("Greenback steady ahead of payrolls"));
    assert_eq!(greenback.summary(), None, "null summary should not become text");
}

#[test]
fn parse_feed_skips_non_object_items_and_non_string_fields() {
    let body = r#"{"feed": [
        {"title": 42, "summary": "EUR rallies", "url": "u1"},
        "not an article",
        null,
        {"title": "Dollar slips"}
    ]}"#;

    let articles = fxnews_rs::news::parse_feed(body).unwrap();
    assert_eq!(articles.len(), 2);

    assert_eq!(articles[0].title(), None);
    assert_eq!(articles[0].extra["title"], 42, "raw value kept for export");
    assert_eq!(articles[0].summary(), Some("EUR rallies"));
    assert_eq!(articles[0].extra["url"], "u1");

    assert_eq!(articles[1].title(), Some("Dollar slips"));
    assert_eq!(articles[1].summary(), None);
}

#[test]
fn parse_feed_empty_feed_is_empty() {
    let articles = fxnews_rs::news::parse_feed(r#"{"items": "0", "feed": []}"#).unwrap();
    assert!(articles.is_empty());
}

#[test]
fn parse_feed_rejects_non_json() {
    let err = fxnews_rs::news::parse_feed("<html>oops</html>").unwrap_err();
    assert!(matches!(err, fxnews_rs::FxError::Json(_)), "got {err:?}");
}
