//! Centralized constants for default endpoints and UA.

/// Identifies this crate to upstream services.
pub(crate) const USER_AGENT: &str = concat!("headline-sentiment/", env!("CARGO_PKG_VERSION"));

/// GNews top-headlines endpoint.
pub(crate) const DEFAULT_BASE_NEWS: &str = "https://gnews.io/api/v4/top-headlines";

/// Hosted inference endpoint for the default English sentiment model.
pub(crate) const DEFAULT_MODEL_URL: &str = "https://api-inference.huggingface.co/models/distilbert/distilbert-base-uncased-finetuned-sst-2-english";

/// Language filter sent with every headline request.
pub(crate) const DEFAULT_LANG: &str = "en";

/// Country filter sent with every headline request.
pub(crate) const DEFAULT_COUNTRY: &str = "in";
