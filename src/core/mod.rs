//! Core components of the `fxnews-rs` crate.
//!
//! This module contains the foundational building blocks of the library, including:
//! - The [`FxClient`] used by the news fetcher, and its builder.
//! - The primary [`FxError`] type.
//! - Internal networking and text helpers.

/// The news client (`FxClient`), builder, and retry/cache configuration.
pub mod client;
/// The primary error type (`FxError`) for the crate.
pub mod error;

#[cfg(feature = "dataframe")]
/// Conversion of annotated results into Polars DataFrames.
pub mod dataframe;

#[cfg(feature = "test-mode")]
pub(crate) mod fixtures;

pub(crate) mod net;
pub(crate) mod text;

// convenient re-exports so most code can just `use crate::core::FxClient`
pub use client::{FxClient, FxClientBuilder};
pub use error::FxError;
