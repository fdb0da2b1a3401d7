//! Public client surface + builder.
//! Internals are split into `retry` (backoff + cache policy) and `constants` (UA + defaults).

mod constants;
mod retry;

pub use retry::{Backoff, CacheMode, RetryConfig};

use crate::core::FxError;
use constants::{API_KEY_ENV, DEFAULT_BASE_QUERY, USER_AGENT};
use reqwest::Client;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;
use url::Url;

#[derive(Debug)]
struct CacheEntry {
    body: String,
    expires_at: Instant,
}

#[derive(Debug)]
struct CacheStore {
    map: RwLock<HashMap<String, CacheEntry>>,
    default_ttl: Duration,
}

/// Client for the Alpha Vantage query API.
///
/// Cheap to clone; clones share the HTTP connection pool and the response cache.
#[derive(Debug, Clone)]
pub struct FxClient {
    http: Client,
    base_query: Url,
    api_key: Option<String>,
    retry: RetryConfig,
    cache: Option<Arc<CacheStore>>,
}

impl FxClient {
    /// Create a new builder.
    pub fn builder() -> FxClientBuilder {
        FxClientBuilder::default()
    }

    /* -------- internal getters used by other modules -------- */

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }
    pub(crate) fn base_query(&self) -> &Url {
        &self.base_query
    }
    pub(crate) fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    /// The retry policy applied when a call does not override it.
    pub fn retry_config(&self) -> &RetryConfig {
        &self.retry
    }

    pub fn cache_enabled(&self) -> bool {
        self.cache.is_some()
    }

    pub(crate) async fn cache_get(&self, url: &Url) -> Option<String> {
        let store = self.cache.as_ref()?;
        let guard = store.map.read().await;
        if let Some(entry) = guard.get(url.as_str())
            && Instant::now() <= entry.expires_at
        {
            return Some(entry.body.clone());
        }
        None
    }

    pub(crate) async fn cache_put(&self, url: &Url, body: &str, ttl_override: Option<Duration>) {
        let Some(store) = self.cache.as_ref() else {
            return;
        };
        let ttl = ttl_override.unwrap_or(store.default_ttl);
        let entry = CacheEntry {
            body: body.to_string(),
            expires_at: Instant::now() + ttl,
        };
        store.map.write().await.insert(url.as_str().to_string(), entry);
    }

    /// Clears every cached response.
    pub async fn clear_cache(&self) {
        if let Some(store) = &self.cache {
            store.map.write().await.clear();
        }
    }

    /// Sends a request, retrying on the statuses and transport errors the policy names.
    ///
    /// The last response is returned as-is when retries are exhausted, so callers
    /// still see the final status code.
    pub(crate) async fn send_with_retry(
        &self,
        req: reqwest::RequestBuilder,
        retry_override: Option<&RetryConfig>,
    ) -> Result<reqwest::Response, FxError> {
        let cfg = retry_override.unwrap_or(&self.retry);
        let mut attempt = 0u32;

        loop {
            let Some(this_req) = req.try_clone() else {
                // Streaming bodies cannot be replayed; send once.
                return Ok(req.send().await?);
            };

            match this_req.send().await {
                Ok(resp) => {
                    let status = resp.status().as_u16();
                    if attempt < cfg.max_retries && cfg.should_retry_status(status) {
                        #[cfg(feature = "tracing")]
                        tracing::debug!(status, attempt, "retrying after status");
                    } else {
                        return Ok(resp);
                    }
                }
                Err(e) => {
                    if attempt < cfg.max_retries && cfg.should_retry_error(&e) {
                        #[cfg(feature = "tracing")]
                        tracing::debug!(error = %e, attempt, "retrying after transport error");
                    } else {
                        return Err(FxError::Http(e));
                    }
                }
            }

            tokio::time::sleep(cfg.backoff.delay(attempt)).await;
            attempt += 1;
        }
    }
}

/* ----------------------- Builder ----------------------- */

#[derive(Default)]
pub struct FxClientBuilder {
    user_agent: Option<String>,
    base_query: Option<Url>,
    api_key: Option<String>,
    retry: Option<RetryConfig>,

    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    cache_ttl: Option<Duration>,
}

impl FxClientBuilder {
    /// Override the User-Agent.
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Override the query API endpoint (e.g., `https://www.alphavantage.co/query`).
    #[must_use]
    pub fn base_query(mut self, url: Url) -> Self {
        self.base_query = Some(url);
        self
    }

    /// Set the access key sent as `apikey`.
    #[must_use]
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Read the access key from `ALPHAVANTAGE_API_KEY`, if set.
    #[must_use]
    pub fn api_key_from_env(mut self) -> Self {
        if let Ok(key) = std::env::var(API_KEY_ENV)
            && !key.trim().is_empty()
        {
            self.api_key = Some(key.trim().to_string());
        }
        self
    }

    /// Set the default retry policy.
    #[must_use]
    pub fn retry_config(mut self, cfg: RetryConfig) -> Self {
        self.retry = Some(cfg);
        self
    }

    /// Set a global request timeout (overall). Default: none.
    #[must_use]
    pub const fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    #[must_use]
    pub const fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// Enable in-memory caching with a default TTL.
    /// If not set, caching is disabled.
    #[must_use]
    pub const fn cache_ttl(mut self, dur: Duration) -> Self {
        self.cache_ttl = Some(dur);
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Returns an error if the default endpoint cannot be parsed or the HTTP
    /// client cannot be constructed.
    pub fn build(self) -> Result<FxClient, FxError> {
        let base_query = match self.base_query {
            Some(u) => u,
            None => Url::parse(DEFAULT_BASE_QUERY)?,
        };

        let mut httpb =
            reqwest::Client::builder().user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT));

        if let Some(t) = self.timeout {
            httpb = httpb.timeout(t);
        }
        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }

        let http = httpb.build()?;

        Ok(FxClient {
            http,
            base_query,
            api_key: self.api_key,
            retry: self.retry.unwrap_or_default(),
            cache: self.cache_ttl.map(|ttl| {
                Arc::new(CacheStore {
                    map: RwLock::new(HashMap::new()),
                    default_ttl: ttl,
                })
            }),
        })
    }
}
