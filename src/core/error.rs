use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
#[derive(Debug, Error)]
pub enum HsError {
    /// No API key was supplied, so no request was attempted.
    #[error("missing API key: set `gnews_api` in the secrets file or pass --api-key")]
    MissingCredential,

    /// A user-supplied parameter was outside its accepted range or could not be parsed.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// An error occurred during an HTTP request.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// A provided URL could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The server returned an unexpected or unsuccessful HTTP status code.
    #[error("Unexpected response status: {status} at {url}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error, with its query string removed.
        url: String,
    },

    /// The response body was not valid JSON.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// The data received from the API was in an unexpected format or was missing a required field.
    #[error("Data format unexpected or missing field: {0}")]
    Data(String),

    /// The sentiment model failed for one or more headlines.
    #[error("sentiment model failed: {0}")]
    Classifier(String),

    /// The settings file or environment could not be read.
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

/// Coarse classification of an [`HsError`], used by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// No credential; nothing was fetched.
    MissingCredential,
    /// The news endpoint could not be reached or answered with an error status.
    Transport,
    /// The response could not be parsed or lacked expected keys.
    MalformedResponse,
    /// The sentiment model failed.
    Classifier,
    /// Bad user input or configuration.
    InvalidInput,
}

impl HsError {
    /// Maps this error onto the run-level taxonomy.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingCredential => ErrorKind::MissingCredential,
            Self::Http(_) | Self::Status { .. } => ErrorKind::Transport,
            Self::Json(_) | Self::Data(_) => ErrorKind::MalformedResponse,
            Self::Classifier(_) => ErrorKind::Classifier,
            Self::InvalidParameter(_) | Self::Url(_) | Self::Config(_) => ErrorKind::InvalidInput,
        }
    }

    pub(crate) fn status(resp: &reqwest::Response) -> Self {
        let mut url = resp.url().clone();
        url.set_query(None);
        Self::Status {
            status: resp.status().as_u16(),
            url: url.to_string(),
        }
    }
}
