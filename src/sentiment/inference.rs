use reqwest::Client;
use reqwest::header::AUTHORIZATION;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;
use url::Url;

use crate::core::{
    HsError, LabelScore, PredictFuture, SentimentModel,
    client::constants::{DEFAULT_MODEL_URL, USER_AGENT},
    net::{self, Fixture},
};

#[derive(Serialize)]
struct InferenceOptions {
    wait_for_model: bool,
}

#[derive(Serialize)]
struct InferencePayload<'a> {
    inputs: &'a [String],
    options: InferenceOptions,
}

/// The endpoint answers with one list per input, except for some deployments that
/// flatten a single-input batch.
#[derive(Deserialize)]
#[serde(untagged)]
enum InferenceResponse {
    Batch(Vec<Vec<LabelScore>>),
    Single(Vec<LabelScore>),
    Error { error: String },
}

/// A sentiment model served over HTTP by a hosted inference endpoint.
///
/// Build one per session and reuse it; each call reuses the same connection pool.
#[derive(Clone)]
pub struct InferenceModel {
    http: Client,
    endpoint: Url,
    token: Option<String>,
}

impl fmt::Debug for InferenceModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InferenceModel")
            .field("endpoint", &self.endpoint.as_str())
            .field("token", &self.token.as_ref().map(|_| "***"))
            .finish_non_exhaustive()
    }
}

impl InferenceModel {
    /// Create a new builder.
    pub fn builder() -> InferenceModelBuilder {
        InferenceModelBuilder::default()
    }

    async fn call(&self, inputs: &[String]) -> Result<Vec<Vec<LabelScore>>, HsError> {
        let payload = InferencePayload {
            inputs,
            options: InferenceOptions {
                wait_for_model: true,
            },
        };

        let mut req = self.http.post(self.endpoint.clone()).json(&payload);
        if let Some(token) = &self.token {
            req = req.header(AUTHORIZATION, format!("Bearer {token}"));
        }

        let resp = req
            .send()
            .await
            .map_err(|e| HsError::Classifier(e.to_string()))?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            // The status alone is enough to report when the body is unreadable.
            let body = resp
                .text()
                .await
                .ok()
                .unwrap_or_else(|| "<unreadable body>".to_string());
            return Err(HsError::Classifier(format!(
                "inference endpoint returned {status}: {}",
                body.trim()
            )));
        }

        let body = net::read_body(resp, Fixture::Inference)
            .await
            .map_err(|e| HsError::Classifier(e.to_string()))?;
        parse_response(&body, inputs.len())
    }
}

fn parse_response(body: &str, expected: usize) -> Result<Vec<Vec<LabelScore>>, HsError> {
    let parsed: InferenceResponse = serde_json::from_str(body)
        .map_err(|e| HsError::Classifier(format!("unreadable inference response: {e}")))?;

    match parsed {
        InferenceResponse::Batch(b) => Ok(b),
        // A flat list is only unambiguous for a single input.
        InferenceResponse::Single(s) if expected == 1 => Ok(vec![s]),
        InferenceResponse::Single(s) => Ok(s.into_iter().map(|ls| vec![ls]).collect()),
        InferenceResponse::Error { error } => Err(HsError::Classifier(error)),
    }
}

impl SentimentModel for InferenceModel {
    fn predict<'a>(&'a self, inputs: &'a [String]) -> PredictFuture<'a> {
        Box::pin(self.call(inputs))
    }
}

/* ----------------------- Builder ----------------------- */

/// Builder for [`InferenceModel`]. Defaults to the hosted English SST-2 model with no token.
#[derive(Default)]
pub struct InferenceModelBuilder {
    endpoint: Option<Url>,
    token: Option<String>,
    timeout: Option<Duration>,
}

impl InferenceModelBuilder {
    /// Override the model endpoint.
    #[must_use]
    pub fn endpoint(mut self, url: Url) -> Self {
        self.endpoint = Some(url);
        self
    }

    /// Sets the bearer token sent with every request.
    #[must_use]
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set a per-request timeout. Default: none.
    #[must_use]
    pub const fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Builds the model handle.
    ///
    /// # Errors
    ///
    /// Returns an error if the default endpoint fails to parse or the HTTP client cannot be built.
    pub fn build(self) -> Result<InferenceModel, HsError> {
        let endpoint = match self.endpoint {
            Some(u) => u,
            None => Url::parse(DEFAULT_MODEL_URL)?,
        };
        let mut httpb = Client::builder().user_agent(USER_AGENT);
        if let Some(t) = self.timeout {
            httpb = httpb.timeout(t);
        }
        Ok(InferenceModel {
            http: httpb.build()?,
            endpoint,
            token: self.token,
        })
    }
}
