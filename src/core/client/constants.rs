//! Centralized constants for default endpoints and UA.

/// Default UA sent with every request.
pub(crate) const USER_AGENT: &str = concat!("fxnews-rs/", env!("CARGO_PKG_VERSION"));

/// Alpha Vantage query endpoint; the `function` parameter selects the API.
pub(crate) const DEFAULT_BASE_QUERY: &str = "https://www.alphavantage.co/query";

/// Environment variable read by [`super::FxClientBuilder::api_key_from_env`].
pub(crate) const API_KEY_ENV: &str = "ALPHAVANTAGE_API_KEY";
