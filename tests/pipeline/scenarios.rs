use headline_sentiment::{ErrorKind, RunOutcome, Session, config, render};
use httpmock::Method::GET;

use crate::common::{self, HEADLINES_PATH, KeywordModel};

#[tokio::test]
async fn five_titled_articles_yield_a_full_report() {
    let server = common::setup_server();
    let body = common::fixture("headlines", "in", "json");
    let mock = common::mock_headlines(&server, 5, &body);

    let session = Session::new(common::news_client(&server), KeywordModel::default());
    let outcome = session.run(&common::params(5)).await.unwrap();

    mock.assert();
    let RunOutcome::Report(report) = outcome else {
        panic!("expected a report");
    };
    assert_eq!(report.len(), 5);
    assert!(
        report
            .records()
            .iter()
            .all(|r| ["positive", "negative", "neutral"].contains(&r.sentiment.as_str()))
    );

    let tally = report.tally();
    assert_eq!(tally.total(), 5);
    assert_eq!(tally.get("positive"), 3);
    assert_eq!(tally.get("negative"), 2);
    assert_eq!(tally.entries()[0].0, "positive");

    let top: Vec<&str> = report.top("negative", 5).collect();
    assert_eq!(
        top,
        vec![
            "Heavy rains flood Chennai, schools shut for two days",
            "Train delays worsen as fog grips north India",
        ]
    );
}

#[tokio::test]
async fn model_is_reused_across_runs() {
    let server = common::setup_server();
    let body = common::fixture("headlines", "in", "json");
    let mock = common::mock_headlines(&server, 5, &body);

    let session = Session::new(common::news_client(&server), KeywordModel::default());
    let first = session.run(&common::params(5)).await.unwrap();
    let second = session.run(&common::params(5)).await.unwrap();

    mock.assert_calls(2);
    // one batch per run against the same handle
    assert_eq!(session.model().calls(), 2);
    assert_eq!(first, second);

    let (RunOutcome::Report(a), RunOutcome::Report(b)) = (&first, &second) else {
        panic!("expected reports");
    };
    assert_eq!(render::full(a, 30, 5), render::full(b, 30, 5));
}

#[tokio::test]
async fn empty_articles_is_a_no_data_state() {
    let server = common::setup_server();
    let mock = common::mock_headlines(&server, 5, r#"{"totalArticles":0,"articles":[]}"#);

    let session = Session::new(common::news_client(&server), KeywordModel::default());
    let outcome = session.run(&common::params(5)).await;

    mock.assert();
    assert!(matches!(outcome, Ok(RunOutcome::Empty)));
    assert_eq!(session.model().calls(), 0);
    assert_eq!(
        render::message(&outcome).as_deref(),
        Some(render::EMPTY_MESSAGE)
    );
}

#[tokio::test]
async fn server_error_aborts_without_a_table() {
    let server = common::setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET).path(HEADLINES_PATH);
        then.status(500);
    });

    let session = Session::new(common::news_client(&server), KeywordModel::default());
    let outcome = session.run(&common::params(5)).await;

    mock.assert();
    let err = outcome.as_ref().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Transport);
    assert_eq!(session.model().calls(), 0);
    let msg = render::message(&outcome).unwrap();
    assert!(msg.starts_with("Error fetching news:"));
    assert!(msg.contains("500"));
}

#[tokio::test]
async fn classifier_failure_aborts_the_run() {
    let server = common::setup_server();
    let body = common::fixture("headlines", "in", "json");
    let mock = common::mock_headlines(&server, 5, &body);

    let session = Session::new(common::news_client(&server), KeywordModel::failing());
    let outcome = session.run(&common::params(5)).await;

    mock.assert();
    assert_eq!(outcome.unwrap_err().kind(), ErrorKind::Classifier);
}

#[tokio::test]
async fn blank_credential_never_reaches_the_network() {
    let server = common::setup_server();
    let mock = server.mock(|when, then| {
        when.method(GET).path(HEADLINES_PATH);
        then.status(200).body(r#"{"articles":[]}"#);
    });

    let session = Session::new(common::news_client(&server), KeywordModel::default());
    let outcome = match config::collect(Some("  "), 5, None) {
        Ok(params) => session.run(&params).await,
        Err(e) => Err(e),
    };

    mock.assert_calls(0);
    assert_eq!(outcome.unwrap_err().kind(), ErrorKind::MissingCredential);
}

#[tokio::test]
async fn over_returning_endpoint_is_capped() {
    let server = common::setup_server();
    let titles: Vec<_> = (0..8)
        .map(|i| serde_json::json!({ "title": format!("story {i}") }))
        .collect();
    let body = serde_json::json!({ "articles": titles }).to_string();
    let mock = common::mock_headlines(&server, 5, &body);

    let session = Session::new(common::news_client(&server), KeywordModel::default());
    let outcome = session.run(&common::params(5)).await.unwrap();

    mock.assert();
    let RunOutcome::Report(report) = outcome else {
        panic!("expected a report");
    };
    assert_eq!(report.len(), 5);
    assert_eq!(report.tally().total(), 5);
}
