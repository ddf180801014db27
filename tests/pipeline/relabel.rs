use headline_sentiment::{PseudoLabelTrainer, RunOutcome, Session};

use crate::common::{self, KeywordModel};

#[tokio::test]
async fn relabelled_run_keeps_order_and_binary_labels() {
    let server = common::setup_server();
    let body = common::fixture("headlines", "in", "json");
    let mock = common::mock_headlines(&server, 5, &body);

    let session = Session::new(common::news_client(&server), KeywordModel::default())
        .relabel(Some(PseudoLabelTrainer::default()));
    let outcome = session.run(&common::params(5)).await.unwrap();

    mock.assert();
    let RunOutcome::Report(report) = outcome else {
        panic!("expected a report");
    };
    assert_eq!(report.len(), 5);
    assert_eq!(
        report.records()[1].headline,
        "Heavy rains flood Chennai, schools shut for two days"
    );
    assert!(
        report
            .records()
            .iter()
            .all(|r| r.sentiment == "positive" || r.sentiment == "negative")
    );
    assert_eq!(report.tally().total(), 5);
}
