//! Run inputs: credentials and endpoints from a secrets file or the
//! environment, plus parsing of the date cutoff.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;
use std::fmt;
use std::path::Path;
use url::Url;

use crate::core::{ApiKey, FetchParameters, HsError, NewsClient};
use crate::sentiment::InferenceModel;

/// Default location of the secrets file.
pub const DEFAULT_SECRETS_PATH: &str = "secrets.toml";

/// Prefix of environment variables that override the secrets file.
pub const ENV_PREFIX: &str = "HEADLINES";

/// Wire format of the `from` query parameter.
const FROM_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Settings for one session, read once at startup and passed in explicitly.
#[derive(Clone, Default, Deserialize)]
pub struct Settings {
    /// News API key.
    #[serde(default)]
    pub gnews_api: Option<String>,
    /// Bearer token for the hosted sentiment model.
    #[serde(default)]
    pub hf_token: Option<String>,
    /// Override for the top-headlines endpoint.
    #[serde(default)]
    pub news_base_url: Option<String>,
    /// Override for the sentiment model endpoint.
    #[serde(default)]
    pub model_url: Option<String>,
    /// Per-request timeout in seconds for both endpoints.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("gnews_api", &self.gnews_api.as_ref().map(|_| "***"))
            .field("hf_token", &self.hf_token.as_ref().map(|_| "***"))
            .field("news_base_url", &self.news_base_url)
            .field("model_url", &self.model_url)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl Settings {
    /// Loads settings from an optional TOML file, overridden by `HEADLINES_*` variables.
    ///
    /// A missing file is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`HsError::Config`] if the file exists but cannot be parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, HsError> {
        let cfg = Config::builder()
            .add_source(
                File::from(path.as_ref())
                    .format(FileFormat::Toml)
                    .required(false),
            )
            .add_source(Environment::with_prefix(ENV_PREFIX))
            .build()?;
        Ok(cfg.try_deserialize()?)
    }

    /// The news credential.
    ///
    /// # Errors
    ///
    /// Returns [`HsError::MissingCredential`] when no non-blank key is configured.
    pub fn api_key(&self) -> Result<ApiKey, HsError> {
        ApiKey::new(self.gnews_api.as_deref().unwrap_or_default())
    }

    fn timeout(&self) -> Option<std::time::Duration> {
        self.timeout_secs.map(std::time::Duration::from_secs)
    }

    /// Builds the news client these settings describe.
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint override is not a valid URL.
    pub fn news_client(&self) -> Result<NewsClient, HsError> {
        let mut b = NewsClient::builder();
        if let Some(u) = &self.news_base_url {
            b = b.base_news(Url::parse(u)?);
        }
        if let Some(t) = self.timeout() {
            b = b.timeout(t);
        }
        b.build()
    }

    /// Builds the sentiment model handle these settings describe.
    ///
    /// # Errors
    ///
    /// Returns an error if the endpoint override is not a valid URL.
    pub fn inference_model(&self) -> Result<InferenceModel, HsError> {
        let mut b = InferenceModel::builder();
        if let Some(u) = &self.model_url {
            b = b.endpoint(Url::parse(u)?);
        }
        if let Some(token) = self.hf_token.as_deref().filter(|t| !t.trim().is_empty()) {
            b = b.token(token);
        }
        if let Some(t) = self.timeout() {
            b = b.timeout(t);
        }
        b.build()
    }
}

/// Validates raw user input into run parameters.
///
/// The credential is checked first, so a blank key never reaches the network.
///
/// # Errors
///
/// Returns [`HsError::MissingCredential`] for a missing or blank key and
/// [`HsError::InvalidParameter`] for an out-of-range `max_results`.
pub fn collect(
    api_key: Option<&str>,
    max_results: u32,
    from_date: Option<DateTime<Utc>>,
) -> Result<FetchParameters, HsError> {
    let key = ApiKey::new(api_key.unwrap_or_default())?;
    let params = FetchParameters::new(key, max_results)?;
    Ok(match from_date {
        Some(from) => params.with_from(from),
        None => params,
    })
}

/// Picks the credential: an explicit non-blank `flag` wins over the settings.
#[must_use]
pub fn resolve_api_key<'a>(flag: Option<&'a str>, settings: &'a Settings) -> Option<&'a str> {
    flag.filter(|k| !k.trim().is_empty())
        .or(settings.gnews_api.as_deref())
}

/// Resolves the date cutoff for a run.
///
/// `no_filter` disables it; otherwise `from` is parsed, and an absent `from`
/// means [`default_from`] of `now`.
///
/// # Errors
///
/// Returns [`HsError::InvalidParameter`] if `from` cannot be parsed.
pub fn resolve_from(
    from: Option<&str>,
    no_filter: bool,
    now: DateTime<Utc>,
) -> Result<Option<DateTime<Utc>>, HsError> {
    if no_filter {
        return Ok(None);
    }
    match from {
        Some(s) => parse_from_date(s).map(Some),
        None => Ok(Some(default_from(now))),
    }
}

/// Cutoff used when the caller enables date filtering without choosing a date.
#[must_use]
pub fn default_from(now: DateTime<Utc>) -> DateTime<Utc> {
    now - Duration::hours(24)
}

/// Parses a cutoff given either as `YYYY-MM-DD` (midnight UTC) or as RFC 3339.
///
/// # Errors
///
/// Returns [`HsError::InvalidParameter`] if neither form matches.
pub fn parse_from_date(s: &str) -> Result<DateTime<Utc>, HsError> {
    let s = s.trim();
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Ok(date.and_time(chrono::NaiveTime::MIN).and_utc());
    }
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| {
            HsError::InvalidParameter(format!(
                "expected a date like 2024-01-01 or 2024-01-01T00:00:00Z, got `{s}`"
            ))
        })
}

/// Renders a cutoff the way the news endpoint expects it.
#[must_use]
pub fn format_from(dt: DateTime<Utc>) -> String {
    dt.format(FROM_FORMAT).to_string()
}
