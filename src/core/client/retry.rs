use std::time::Duration;

/// Wait between two attempts of the same request.
#[derive(Clone, Debug)]
pub enum Backoff {
    /// Same pause after every failure.
    Fixed(Duration),
    /// `base * factor^attempt`, capped at `max`.
    Exponential {
        /// Pause after the first failure.
        base: Duration,
        /// Growth per attempt.
        factor: f64,
        /// Upper bound before jitter.
        max: Duration,
        /// Scale each pause by a random factor in `[0.5, 1.5)`.
        jitter: bool,
    },
}

impl Backoff {
    /// The delay before retry number `attempt` (zero-based).
    pub fn delay(&self, attempt: u32) -> Duration {
        match self {
            Self::Fixed(d) => *d,
            Self::Exponential {
                base,
                factor,
                max,
                jitter,
            } => {
                let exp = i32::try_from(attempt).unwrap_or(i32::MAX);
                let capped = (base.as_secs_f64() * factor.powi(exp)).min(max.as_secs_f64());
                let secs = if *jitter {
                    capped * rand::random_range(0.5..1.5)
                } else {
                    capped
                };
                // Saturate instead of panicking on overflow or a NaN factor.
                Duration::try_from_secs_f64(secs.max(0.0)).unwrap_or(*max)
            }
        }
    }
}

/// When and how often a failed news request is sent again.
///
/// The provider answers rate limits with `429` or, on the free tier, with a
/// `200` carrying a notice; only the former is retried here.
#[derive(Clone, Debug)]
pub struct RetryConfig {
    /// Master switch; `false` sends every request exactly once.
    pub enabled: bool,
    /// Retries after the first attempt.
    pub max_retries: u32,
    pub backoff: Backoff,
    /// Statuses worth another attempt.
    pub retry_on_status: Vec<u16>,
    /// Retry when the request timed out.
    pub retry_on_timeout: bool,
    /// Retry when the connection could not be established.
    pub retry_on_connect: bool,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            max_retries: 4,
            backoff: Backoff::Exponential {
                base: Duration::from_millis(250),
                factor: 2.0,
                max: Duration::from_secs(4),
                jitter: true,
            },
            retry_on_status: vec![408, 429, 500, 502, 503, 504],
            retry_on_timeout: true,
            retry_on_connect: true,
        }
    }
}

impl RetryConfig {
    pub(crate) fn should_retry_status(&self, status: u16) -> bool {
        self.enabled && self.retry_on_status.contains(&status)
    }

    pub(crate) fn should_retry_error(&self, err: &reqwest::Error) -> bool {
        self.enabled
            && ((self.retry_on_timeout && err.is_timeout())
                || (self.retry_on_connect && err.is_connect()))
    }
}

/// How a single fetch uses the client's response cache.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CacheMode {
    /// Serve a fresh cached body if there is one; otherwise fetch and store.
    Use,
    /// Always fetch, then store the new body.
    Refresh,
    /// Always fetch and leave the cache untouched.
    Bypass,
}
