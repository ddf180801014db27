//! Tabulation of classified headlines.

#[cfg(feature = "dataframe")]
mod dataframe;
pub mod render;

use serde::Serialize;
use std::collections::HashMap;

use crate::core::HeadlineRecord;

/// Classified headlines for one run, in fetch order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    records: Vec<HeadlineRecord>,
}

impl Report {
    /// Wraps records without reordering them.
    #[must_use]
    pub const fn new(records: Vec<HeadlineRecord>) -> Self {
        Self { records }
    }

    /// All records, in fetch order.
    #[must_use]
    pub fn records(&self) -> &[HeadlineRecord] {
        &self.records
    }

    /// Number of classified headlines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the report holds no headlines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Label counts, recomputed from the records on every call.
    #[must_use]
    pub fn tally(&self) -> SentimentTally {
        SentimentTally::from_records(&self.records)
    }

    /// The first `n` headlines carrying `label`, in fetch order.
    pub fn top<'a>(&'a self, label: &'a str, n: usize) -> impl Iterator<Item = &'a str> + 'a {
        self.records
            .iter()
            .filter(move |r| r.sentiment == label)
            .take(n)
            .map(|r| r.headline.as_str())
    }
}

/// Count of headlines per label.
///
/// Entries are ordered by descending count, then by label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SentimentTally {
    entries: Vec<(String, usize)>,
}

impl SentimentTally {
    fn from_records(records: &[HeadlineRecord]) -> Self {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for r in records {
            *counts.entry(r.sentiment.as_str()).or_default() += 1;
        }
        let mut entries: Vec<(String, usize)> = counts
            .into_iter()
            .map(|(label, n)| (label.to_string(), n))
            .collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        Self { entries }
    }

    /// `(label, count)` pairs, largest first.
    #[must_use]
    pub fn entries(&self) -> &[(String, usize)] {
        &self.entries
    }

    /// Count for `label`, zero if absent.
    #[must_use]
    pub fn get(&self, label: &str) -> usize {
        self.entries
            .iter()
            .find(|(l, _)| l == label)
            .map_or(0, |(_, n)| *n)
    }

    /// Sum of all counts; equals the number of records tallied.
    #[must_use]
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, n)| n).sum()
    }

    /// Largest single count.
    #[must_use]
    pub fn max(&self) -> usize {
        self.entries.first().map_or(0, |(_, n)| *n)
    }
}
