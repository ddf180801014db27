//! Plain-text rendering for terminals.

use std::fmt::Write as _;

use super::{Report, SentimentTally};
use crate::core::HsError;
use crate::pipeline::RunOutcome;

/// Shown instead of a table when the fetch came back empty.
pub const EMPTY_MESSAGE: &str = "No headlines found for the selected date.";

const BAR: char = '█';

fn pad(s: &str, width: usize) -> String {
    let len = s.chars().count();
    format!("{s}{}", " ".repeat(width.saturating_sub(len)))
}

/// Index, headline, and sentiment per row, in fetch order.
#[must_use]
pub fn table(report: &Report) -> String {
    let idx_w = report.len().saturating_sub(1).to_string().len().max(1);
    let head_w = report
        .records()
        .iter()
        .map(|r| r.headline.chars().count())
        .max()
        .unwrap_or(0)
        .max("headline".len());
    let sent_w = report
        .records()
        .iter()
        .map(|r| r.sentiment.chars().count())
        .max()
        .unwrap_or(0)
        .max("sentiment".len());

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} | {} | {}",
        pad("", idx_w),
        pad("headline", head_w),
        pad("sentiment", sent_w)
    );
    let _ = writeln!(
        out,
        "{}-+-{}-+-{}",
        "-".repeat(idx_w),
        "-".repeat(head_w),
        "-".repeat(sent_w)
    );
    for (i, r) in report.records().iter().enumerate() {
        let _ = writeln!(
            out,
            "{:>idx_w$} | {} | {}",
            i,
            pad(&r.headline, head_w),
            pad(&r.sentiment, sent_w)
        );
    }
    out
}

/// Horizontal bars, one per label, scaled so the largest count spans `width`.
#[must_use]
pub fn bar_chart(tally: &SentimentTally, width: usize) -> String {
    let label_w = tally
        .entries()
        .iter()
        .map(|(l, _)| l.chars().count())
        .max()
        .unwrap_or(0);
    let max = tally.max().max(1);

    let mut out = String::new();
    for (label, n) in tally.entries() {
        // round half up, and never hide a non-zero count
        let len = ((n * width + max / 2) / max).max(usize::from(*n > 0));
        let _ = writeln!(
            out,
            "{} {} {n}",
            pad(label, label_w),
            BAR.to_string().repeat(len)
        );
    }
    out
}

/// The first `n` positive and negative headlines, in fetch order.
#[must_use]
pub fn top_lists(report: &Report, n: usize) -> String {
    let mut out = String::new();
    for (title, label) in [
        ("Top Positive Headlines", "positive"),
        ("Top Negative Headlines", "negative"),
    ] {
        let _ = writeln!(out, "{title}");
        let mut any = false;
        for h in report.top(label, n) {
            any = true;
            let _ = writeln!(out, "  - {h}");
        }
        if !any {
            let _ = writeln!(out, "  (none)");
        }
    }
    out
}

/// Full text for a successful run: table, distribution chart, and top lists.
#[must_use]
pub fn full(report: &Report, chart_width: usize, top_n: usize) -> String {
    format!(
        "Headlines with Sentiment\n{}\nSentiment Distribution\n{}\n{}",
        table(report),
        bar_chart(&report.tally(), chart_width),
        top_lists(report, top_n)
    )
}

/// The single user-visible line for a run that produced no table.
///
/// Returns `None` when the run produced a report.
#[must_use]
pub fn message(outcome: &Result<RunOutcome, HsError>) -> Option<String> {
    match outcome {
        Ok(RunOutcome::Report(_)) => None,
        Ok(RunOutcome::Empty) => Some(EMPTY_MESSAGE.to_string()),
        Err(e) => Some(format!("Error fetching news: {e}")),
    }
}
