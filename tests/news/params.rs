use chrono::NaiveDate;
use httpmock::{Method::GET, MockServer};
use fxnews_rs::{FxClient, FxError, NewsBuilder, SortOrder};

use crate::common::{mock_client, news_fixture};

#[tokio::test]
async fn news_params_are_forwarded() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/query")
            .query_param("function", "NEWS_SENTIMENT")
            .query_param("tickers", "FOREX:EUR")
            .query_param("limit", "50")
            .query_param("sort", "EARLIEST")
            .query_param("time_from", "20240301T0930");
        then.status(200)
            .header("content-type", "application/json")
            .body(news_fixture());
    });

    let client = mock_client(&server).build().unwrap();
    let from = NaiveDate::from_ymd_opt(2024, 3, 1)
        .unwrap()
        .and_hms_opt(9, 30, 0)
        .unwrap();

    let articles = NewsBuilder::new(&client)
        .tickers(["FOREX:EUR"])
        .limit(50)
        .sort(SortOrder::Earliest)
        .time_from(Some(from))
        .fetch()
        .await
        .unwrap();

    mock.assert();
    assert_eq!(articles.len(), 6);
}

#[tokio::test]
async fn news_defaults_use_latest_and_full_limit() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/query")
            .query_param("limit", "1000")
            .query_param("sort", "LATEST")
            .query_param_exists("time_from");
        then.status(200)
            .header("content-type", "application/json")
            .body(news_fixture());
    });

    let client = mock_client(&server).build().unwrap();
    NewsBuilder::new(&client).fetch().await.unwrap();
    mock.assert();
}

#[tokio::test]
async fn news_without_api_key_is_invalid() {
    let client = FxClient::builder().build().unwrap();
    let err = NewsBuilder::new(&client).fetch().await.unwrap_err();
    assert!(matches!(err, FxError::InvalidParams(_)), "got {err:?}");
}

#[tokio::test]
async fn news_without_tickers_is_invalid() {
    let server = MockServer::start();
    let client = mock_client(&server).build().unwrap();

    let err = NewsBuilder::new(&client)
        .tickers(Vec::<String>::new())
        .fetch()
        .await
        .unwrap_err();
    assert!(matches!(err, FxError::InvalidParams(_)), "got {err:?}");
}
