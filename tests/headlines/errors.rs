use headline_sentiment::{ErrorKind, HeadlinesBuilder, HsError};
use httpmock::Method::GET;

use crate::common::{self, API_KEY, HEADLINES_PATH};

#[tokio::test]
async fn server_error_is_a_transport_failure() {
    let server = common::setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET).path(HEADLINES_PATH);
        then.status(500).body("internal error");
    });

    let client = common::news_client(&server);
    let err = HeadlinesBuilder::new(&client, common::params(5))
        .fetch()
        .await
        .unwrap_err();

    mock.assert();
    assert_eq!(err.kind(), ErrorKind::Transport);
    match err {
        HsError::Status { status, url } => {
            assert_eq!(status, 500);
            assert!(url.ends_with(HEADLINES_PATH));
            assert!(!url.contains(API_KEY), "credential leaked into {url}");
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn unauthorized_key_is_a_transport_failure() {
    let server = common::setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET).path(HEADLINES_PATH);
        then.status(401)
            .header("content-type", "application/json")
            .body(r#"{"errors":["You did not provide a valid API key."]}"#);
    });

    let client = common::news_client(&server);
    let err = HeadlinesBuilder::new(&client, common::params(5))
        .fetch()
        .await
        .unwrap_err();

    mock.assert();
    assert!(matches!(err, HsError::Status { status: 401, .. }));
    assert!(!err.to_string().contains(API_KEY));
}

#[tokio::test]
async fn html_body_is_malformed() {
    let server = common::setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET).path(HEADLINES_PATH);
        then.status(200)
            .header("content-type", "text/html")
            .body("<html>maintenance</html>");
    });

    let client = common::news_client(&server);
    let err = HeadlinesBuilder::new(&client, common::params(5))
        .fetch()
        .await
        .unwrap_err();

    mock.assert();
    assert_eq!(err.kind(), ErrorKind::MalformedResponse);
}

#[tokio::test]
async fn missing_articles_key_is_malformed() {
    let server = common::setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET).path(HEADLINES_PATH);
        then.status(200).body(r#"{"totalArticles":3}"#);
    });

    let client = common::news_client(&server);
    let err = HeadlinesBuilder::new(&client, common::params(5))
        .fetch()
        .await
        .unwrap_err();

    mock.assert();
    assert!(matches!(err, HsError::Data(_)));
}

#[tokio::test]
async fn unreachable_endpoint_is_a_transport_failure() {
    // Nothing listens on the discard port.
    let client = headline_sentiment::NewsClient::builder()
        .base_news(url::Url::parse("http://127.0.0.1:9/api/v4/top-headlines").unwrap())
        .build()
        .unwrap();
    let err = HeadlinesBuilder::new(&client, common::params(5))
        .fetch()
        .await
        .unwrap_err();

    assert!(matches!(err, HsError::Http(_)));
    assert_eq!(err.kind(), ErrorKind::Transport);
    assert!(!err.to_string().contains(API_KEY), "credential leaked into {err}");
    let shown = headline_sentiment::render::message(&Err(err)).unwrap();
    assert!(!shown.contains(API_KEY), "credential leaked into {shown}");
}
