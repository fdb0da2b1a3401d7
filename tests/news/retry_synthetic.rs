use httpmock::Method::GET;
use httpmock::MockServer;
use std::time::Duration;
use fxnews_rs::{Backoff, FxError, NewsBuilder, RetryConfig};

use crate::common::{mock_client, news_fixture};

fn fast_retries(max_retries: u32) -> RetryConfig {
    RetryConfig {
        max_retries,
        backoff: Backoff::Fixed(Duration::from_millis(1)),
        ..RetryConfig::default()
    }
}

#[tokio::test]
async fn news_retries_on_persistent_5xx() {
    let server = MockServer::start();

    let fail_mock = server.mock(|when, then| {
        when.method(GET).path("/query");
        then.status(503).body("Service Unavailable");
    });

    let client = mock_client(&server)
        .retry_config(fast_retries(2))
        .build()
        .unwrap();

    let result = NewsBuilder::new(&client).fetch().await;

    // 1 initial + 2 retries.
    fail_mock.assert_calls(3);

    match result {
        Err(FxError::Status { status, url }) => {
            assert_eq!(status, 503);
            assert!(url.contains("apikey=***"), "key not redacted: {url}");
            assert!(!url.contains("demo-key"));
        }
        other => panic!("expected a Status error, got {other:?}"),
    }
}

#[tokio::test]
async fn news_does_not_retry_client_errors() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(GET).path("/query");
        then.status(403).body("Forbidden");
    });

    let client = mock_client(&server)
        .retry_config(fast_retries(3))
        .build()
        .unwrap();

    let err = NewsBuilder::new(&client).fetch().await.unwrap_err();
    mock.assert_calls(1);
    assert!(matches!(err, FxError::Status { status: 403, .. }), "got {err:?}");
}

#[tokio::test]
async fn news_per_call_retry_override_wins() {
    let server = MockServer::start();

    let mock = server.mock(|when, then| {
        when.method(GET).path("/query");
        then.status(502).body("Bad Gateway");
    });

    let client = mock_client(&server)
        .retry_config(fast_retries(4))
        .build()
        .unwrap();

    let disabled = RetryConfig {
        enabled: false,
        ..fast_retries(4)
    };
    let _ = NewsBuilder::new(&client)
        .retry_policy(Some(disabled))
        .fetch()
        .await;
    mock.assert_calls(1);
}

#[tokio::test]
async fn news_success_is_not_retried() {
    let server = MockServer::start();

    let ok = server.mock(|when, then| {
        when.method(GET).path("/query").query_param("limit", "7");
        then.status(200)
            .header("content-type", "application/json")
            .body(news_fixture());
    });

    let client = mock_client(&server)
        .retry_config(fast_retries(2))
        .build()
        .unwrap();

    let articles = NewsBuilder::new(&client).limit(7).fetch().await.unwrap();
    ok.assert_calls(1);
    assert_eq!(articles.len(), 6);
}

#[test]
fn exponential_backoff_grows_and_caps() {
    let backoff = Backoff::Exponential {
        base: Duration::from_millis(100),
        factor: 2.0,
        max: Duration::from_millis(500),
        jitter: false,
    };
    assert_eq!(backoff.delay(0), Duration::from_millis(100));
    assert_eq!(backoff.delay(2), Duration::from_millis(400));
    assert_eq!(backoff.delay(3), Duration::from_millis(500));
    assert_eq!(backoff.delay(u32::MAX), Duration::from_millis(500));
}

#[test]
fn exponential_backoff_with_huge_cap_saturates() {
    let backoff = Backoff::Exponential {
        base: Duration::from_secs(1),
        factor: 10.0,
        max: Duration::MAX,
        jitter: true,
    };
    for attempt in [0, 30, 1_000, u32::MAX] {
        let d = backoff.delay(attempt);
        assert!(d <= Duration::MAX);
    }
    assert!(backoff.delay(30) >= Duration::from_secs(1));
}
