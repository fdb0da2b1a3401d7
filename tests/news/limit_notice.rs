use httpmock::{Method::GET, MockServer};
use std::time::Duration;
use fxnews_rs::{FxError, NewsBuilder};

use crate::common::mock_client;

const NOTICE: &str = "Thank you for using Alpha Vantage! Our standard API rate limit is 25 requests per day.";

#[tokio::test]
async fn information_payload_is_missing_feed() {
    let server = MockServer::start();

    server.mock(|when, then| {
        when.method(GET).path("/query");
        then.status(200)
            .header("content-type", "application/json")
            .body(format!(r#"{{"Information": "{NOTICE}"}}"#));
    });

    let client = mock_client(&server).build().unwrap();
    let err = NewsBuilder::new(&client).fetch().await.unwrap_err();

    match &err {
        FxError::MissingFeed { message } => assert_eq!(message.as_deref(), Some(NOTICE)),
        other => panic!("expected MissingFeed, got {other:?}"),
    }
    assert!(err.to_string().contains("rate limit"));
}

#[test]
fn error_message_takes_precedence() {
    let err = fxnews_rs::news::parse_feed(
        r#"{"Note": "slow down", "Error Message": "Invalid API call."}"#,
    )
    .unwrap_err();
    match err {
        FxError::MissingFeed { message } => {
            assert_eq!(message.as_deref(), Some("Invalid API call."));
        }
        other => panic!("expected MissingFeed, got {other:?}"),
    }
}

#[test]
fn empty_object_is_missing_feed_without_message() {
    let err = fxnews_rs::news::parse_feed("{}").unwrap_err();
    assert!(matches!(err, FxError::MissingFeed { message: None }), "got {err:?}");
}

#[tokio::test]
async fn limit_notices_are_not_cached() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(GET).path("/query");
        then.status(200)
            .header("content-type", "application/json")
            .body(format!(r#"{{"Note": "{NOTICE}"}}"#));
    });

    let client = mock_client(&server)
        .cache_ttl(Duration::from_secs(10))
        .build()
        .unwrap();
    let builder = NewsBuilder::new(&client);

    assert!(builder.clone().fetch().await.is_err());
    assert!(builder.clone().fetch().await.is_err());
    mock.assert_calls(2);
}

#[tokio::test]
async fn null_feed_notices_are_not_cached() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(GET).path("/query");
        then.status(200)
            .header("content-type", "application/json")
            .body(r#"{"feed": null, "Information": "rate limit"}"#);
    });

    let client = mock_client(&server)
        .cache_ttl(Duration::from_secs(10))
        .build()
        .unwrap();
    let builder = NewsBuilder::new(&client);

    for _ in 0..2 {
        match builder.clone().fetch().await {
            Err(FxError::MissingFeed { message }) => {
                assert_eq!(message.as_deref(), Some("rate limit"));
            }
            other => panic!("expected MissingFeed, got {other:?}"),
        }
    }
    mock.assert_calls(2);
}
