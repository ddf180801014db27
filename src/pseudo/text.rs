//! Bag-of-words features: whitespace tokenizer, stopword removal, count vectors.

use ndarray::Array2;
use std::collections::BTreeMap;

/// English stopwords removed before vectorizing.
const STOPWORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "am", "an", "and", "any", "are",
    "as", "at", "be", "because", "been", "before", "being", "below", "between", "both", "but",
    "by", "can", "could", "did", "do", "does", "doing", "down", "during", "each", "few", "for",
    "from", "further", "had", "has", "have", "having", "he", "her", "here", "hers", "herself",
    "him", "himself", "his", "how", "i", "if", "in", "into", "is", "it", "its", "itself", "just",
    "me", "more", "most", "my", "myself", "no", "nor", "not", "now", "of", "off", "on", "once",
    "only", "or", "other", "our", "ours", "ourselves", "out", "over", "own", "same", "she",
    "should", "so", "some", "such", "than", "that", "the", "their", "theirs", "them",
    "themselves", "then", "there", "these", "they", "this", "those", "through", "to", "too",
    "under", "until", "up", "very", "was", "we", "were", "what", "when", "where", "which",
    "while", "who", "whom", "why", "will", "with", "would", "you", "your", "yours", "yourself",
    "yourselves",
];

/// Lower-cases and splits on whitespace.
pub(crate) fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace().map(str::to_lowercase).collect()
}

pub(crate) fn remove_stopwords(tokens: Vec<String>) -> Vec<String> {
    tokens
        .into_iter()
        .filter(|t| !STOPWORDS.contains(&t.as_str()))
        .collect()
}

/// Term-count vectorizer with a vocabulary fixed at fit time.
#[derive(Debug, Default, Clone)]
pub(crate) struct CountVectorizer {
    vocabulary: BTreeMap<String, usize>,
}

impl CountVectorizer {
    /// Learns the vocabulary (sorted) from tokenized documents.
    pub(crate) fn fit(docs: &[Vec<String>]) -> Self {
        let mut terms: Vec<&String> = docs.iter().flatten().collect();
        terms.sort();
        terms.dedup();
        let vocabulary = terms
            .into_iter()
            .enumerate()
            .map(|(i, t)| (t.clone(), i))
            .collect();
        Self { vocabulary }
    }

    pub(crate) fn len(&self) -> usize {
        self.vocabulary.len()
    }

    /// One row per document; unknown terms are ignored.
    pub(crate) fn transform(&self, docs: &[Vec<String>]) -> Array2<f64> {
        let mut x = Array2::<f64>::zeros((docs.len(), self.len()));
        for (row, doc) in docs.iter().enumerate() {
            for term in doc {
                if let Some(&col) = self.vocabulary.get(term) {
                    x[[row, col]] += 1.0;
                }
            }
        }
        x
    }
}
