#![allow(dead_code)]

use headline_sentiment::{
    ApiKey, FetchParameters, LabelScore, NewsClient, SentimentModel, core::PredictFuture,
};
use httpmock::{Method::GET, Mock, MockServer};
use std::sync::Mutex;
use std::{fs, path::Path};
use url::Url;

pub const API_KEY: &str = "test-key";
pub const HEADLINES_PATH: &str = "/api/v4/top-headlines";

pub fn setup_server() -> MockServer {
    MockServer::start()
}

pub fn fixture(endpoint: &str, key: &str, ext: &str) -> String {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures");
    let path = dir.join(format!("{endpoint}_{key}.{ext}"));
    fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read fixture {}: {}", path.display(), e))
}

pub fn news_client(server: &MockServer) -> NewsClient {
    NewsClient::builder()
        .base_news(Url::parse(&format!("{}{}", server.base_url(), HEADLINES_PATH)).unwrap())
        .build()
        .unwrap()
}

pub fn params(max: u32) -> FetchParameters {
    FetchParameters::new(ApiKey::new(API_KEY).unwrap(), max).unwrap()
}

pub fn mock_headlines<'a>(server: &'a MockServer, max: u32, body: &'a str) -> Mock<'a> {
    server.mock(|when, then| {
        when.method(GET)
            .path(HEADLINES_PATH)
            .query_param("lang", "en")
            .query_param("country", "in")
            .query_param("max", max.to_string())
            .query_param("apikey", API_KEY);
        then.status(200)
            .header("content-type", "application/json")
            .body(body);
    })
}

/// Deterministic stand-in for the pretrained model: positive when a headline
/// contains an upbeat keyword, negative otherwise.
#[derive(Default)]
pub struct KeywordModel {
    pub calls: Mutex<usize>,
    pub fail: bool,
}

const UPBEAT: &[&str] = &["surges", "successfully", "wins"];

impl KeywordModel {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> usize {
        *self.calls.lock().unwrap()
    }
}

impl SentimentModel for KeywordModel {
    fn predict<'a>(&'a self, inputs: &'a [String]) -> PredictFuture<'a> {
        Box::pin(async move {
            *self.calls.lock().unwrap() += 1;
            if self.fail {
                return Err(headline_sentiment::HsError::Classifier("model offline".into()));
            }
            Ok(inputs
                .iter()
                .map(|t| {
                    let pos = if UPBEAT.iter().any(|w| t.contains(w)) { 0.97 } else { 0.04 };
                    vec![
                        LabelScore { label: "POSITIVE".into(), score: pos },
                        LabelScore { label: "NEGATIVE".into(), score: 1.0 - pos },
                    ]
                })
                .collect())
        })
    }
}
