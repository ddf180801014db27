//! Core components of the `headline-sentiment` crate.
//!
//! This module contains the foundational building blocks of the library, including:
//! - The news [`NewsClient`] and its builder.
//! - The primary [`HsError`] type.
//! - Shared data models like [`FetchParameters`] and [`HeadlineRecord`].
//! - The [`SentimentModel`] seam and internal networking helpers.

/// The news client (`NewsClient`), builder, and endpoint defaults.
pub mod client;
/// The primary error type (`HsError`) for the crate.
pub mod error;
/// Shared data models used across modules.
pub mod models;
/// Service traits abstracting the sentiment model.
pub mod services;

pub(crate) mod net;

// convenient re-exports so most code can just `use crate::core::NewsClient`
pub use client::{NewsClient, NewsClientBuilder};
pub use error::{ErrorKind, HsError};
pub use models::{
    ApiKey, DEFAULT_RESULTS, FetchParameters, HeadlineRecord, LabelScore, MAX_RESULTS,
    MIN_RESULTS,
};
pub use services::{PredictFuture, SentimentModel};
