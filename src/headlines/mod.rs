mod api;
mod wire;

use crate::core::{
    FetchParameters, HsError, NewsClient,
    client::constants::{DEFAULT_COUNTRY, DEFAULT_LANG},
};

/// A builder for fetching top headlines.
#[derive(Debug)]
pub struct HeadlinesBuilder {
    client: NewsClient,
    params: FetchParameters,
    lang: String,
    country: String,
}

impl HeadlinesBuilder {
    /// Creates a new `HeadlinesBuilder` for the given run parameters.
    ///
    /// Language and country default to English headlines from India.
    pub fn new(client: &NewsClient, params: FetchParameters) -> Self {
        Self {
            client: client.clone(),
            params,
            lang: DEFAULT_LANG.to_string(),
            country: DEFAULT_COUNTRY.to_string(),
        }
    }

    /// Sets the `lang` query parameter.
    #[must_use]
    pub fn lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = lang.into();
        self
    }

    /// Sets the `country` query parameter.
    #[must_use]
    pub fn country(mut self, country: impl Into<String>) -> Self {
        self.country = country.into();
        self
    }

    /// Executes the request and returns headline titles in article order.
    ///
    /// Articles without a `title` are skipped. An empty vector means the endpoint
    /// had nothing to return; it is not an error.
    ///
    /// # Errors
    ///
    /// Returns a `HsError` if the request fails, the endpoint answers with a
    /// non-success status, or the body is not the expected JSON shape.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(skip(self), err, fields(max = self.params.max_results, country = %self.country))
    )]
    pub async fn fetch(self) -> Result<Vec<String>, HsError> {
        api::fetch_headlines(&self.client, &self.params, &self.lang, &self.country).await
    }
}
