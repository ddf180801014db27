use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::HsError;

/// Smallest number of headlines a run may request.
pub const MIN_RESULTS: u32 = 5;
/// Largest number of headlines a run may request.
pub const MAX_RESULTS: u32 = 50;
/// Result count used when none is given.
pub const DEFAULT_RESULTS: u32 = 20;

/// A non-empty news API credential.
///
/// The `Debug` impl never prints the key.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Wraps a credential, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`HsError::MissingCredential`] if the key is empty after trimming.
    pub fn new(key: impl AsRef<str>) -> Result<Self, HsError> {
        let key = key.as_ref().trim();
        if key.is_empty() {
            return Err(HsError::MissingCredential);
        }
        Ok(Self(key.to_string()))
    }

    /// The raw key, for placing on the wire.
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

/// Everything one run needs to fetch headlines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchParameters {
    /// Credential for the news endpoint.
    pub api_key: ApiKey,
    /// Number of headlines to request, within [`MIN_RESULTS`]..=[`MAX_RESULTS`].
    pub max_results: u32,
    /// Earliest publication instant, inclusive. `None` disables date filtering.
    pub from_date: Option<DateTime<Utc>>,
}

impl FetchParameters {
    /// Validates and bundles the parameters for a run, with no date filter.
    ///
    /// # Errors
    ///
    /// Returns [`HsError::InvalidParameter`] if `max_results` is out of range.
    pub fn new(api_key: ApiKey, max_results: u32) -> Result<Self, HsError> {
        if !(MIN_RESULTS..=MAX_RESULTS).contains(&max_results) {
            return Err(HsError::InvalidParameter(format!(
                "max_results must be between {MIN_RESULTS} and {MAX_RESULTS}, got {max_results}"
            )));
        }
        Ok(Self {
            api_key,
            max_results,
            from_date: None,
        })
    }

    /// Sets the earliest publication instant.
    #[must_use]
    pub const fn with_from(mut self, from: DateTime<Utc>) -> Self {
        self.from_date = Some(from);
        self
    }
}

/// One label and its confidence, as returned by a sentiment model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelScore {
    /// Label as emitted by the model (any case).
    pub label: String,
    /// Confidence in `[0, 1]`.
    pub score: f64,
}

/// A classified headline. Records keep fetch order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeadlineRecord {
    /// The article title.
    pub headline: String,
    /// Lower-cased label, e.g. `positive`.
    pub sentiment: String,
    /// Confidence of `sentiment`.
    pub score: f64,
}
