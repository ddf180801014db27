//! Public client surface + builder.
//! Defaults (UA and endpoints) live in `constants`.

pub(crate) mod constants;

use crate::core::HsError;
use constants::{DEFAULT_BASE_NEWS, USER_AGENT};
use reqwest::Client;
use std::time::Duration;
use url::Url;

/// HTTP client for the news endpoint.
///
/// Cloning is cheap: the underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct NewsClient {
    http: Client,
    base_news: Url,
}

impl NewsClient {
    /// Create a new builder.
    pub fn builder() -> NewsClientBuilder {
        NewsClientBuilder::default()
    }

    /* -------- internal getters used by other modules -------- */

    pub(crate) fn http(&self) -> &Client {
        &self.http
    }

    pub(crate) fn base_news(&self) -> &Url {
        &self.base_news
    }
}

/* ----------------------- Builder ----------------------- */

/// Builder for [`NewsClient`]. Unset options fall back to the GNews endpoint and no timeouts.
#[derive(Debug, Default)]
pub struct NewsClientBuilder {
    user_agent: Option<String>,
    base_news: Option<Url>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
}

impl NewsClientBuilder {
    /// Override the User-Agent.
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Override the top-headlines endpoint (e.g., `https://gnews.io/api/v4/top-headlines`).
    #[must_use]
    pub fn base_news(mut self, url: Url) -> Self {
        self.base_news = Some(url);
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

    /// Builds the client.
    ///
    /// # Errors
    ///
    /// Returns an error if the default endpoint fails to parse or the HTTP client cannot be built.
    pub fn build(self) -> Result<NewsClient, HsError> {
        let base_news = match self.base_news {
            Some(u) => u,
            None => Url::parse(DEFAULT_BASE_NEWS)?,
        };

        let mut httpb =
            reqwest::Client::builder().user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT));

        if let Some(t) = self.timeout {
            httpb = httpb.timeout(t);
        }
        if let Some(ct) = self.connect_timeout {
            httpb = httpb.connect_timeout(ct);
        }

        Ok(NewsClient {
            http: httpb.build()?,
            base_news,
        })
    }
}
