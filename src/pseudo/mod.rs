//! Optional relabelling pass: a bag-of-words logistic regression trained on the
//! pretrained model's own labels and then applied to the same headlines.
//!
//! There is no held-out data, so the output says nothing about generalization.
//! The pass exists to replace the pretrained labels with a second opinion of the
//! same shape (`positive` or `negative` per headline).

mod logistic;
mod text;

use ndarray::Array1;

use crate::core::HeadlineRecord;
use logistic::LogisticRegression;

/// Label emitted for predicted class 1.
pub const POSITIVE: &str = "positive";
/// Label emitted for predicted class 0.
pub const NEGATIVE: &str = "negative";

/// Turns a pretrained label and its confidence into a 0/1 target.
///
/// Any label other than `positive` contributes `1 - score` as the positive probability.
#[must_use]
pub fn pseudo_label(record: &HeadlineRecord) -> u8 {
    let p_positive = if record.sentiment == POSITIVE {
        record.score
    } else {
        1.0 - record.score
    };
    u8::from(p_positive >= 0.5)
}

/// Fits and applies the relabelling model.
#[derive(Debug, Clone)]
pub struct PseudoLabelTrainer {
    learning_rate: f64,
    max_iter: usize,
}

impl Default for PseudoLabelTrainer {
    fn default() -> Self {
        Self {
            learning_rate: 0.5,
            max_iter: 100,
        }
    }
}

impl PseudoLabelTrainer {
    /// Sets the gradient-descent step size.
    #[must_use]
    pub const fn learning_rate(mut self, lr: f64) -> Self {
        self.learning_rate = lr;
        self
    }

    /// Sets the number of gradient-descent iterations.
    #[must_use]
    pub const fn max_iter(mut self, n: usize) -> Self {
        self.max_iter = n;
        self
    }

    /// Returns new records, same order, labelled by the fitted model.
    ///
    /// `score` becomes the fitted probability of the predicted label.
    #[must_use]
    pub fn relabel(&self, records: &[HeadlineRecord]) -> Vec<HeadlineRecord> {
        if records.is_empty() {
            return Vec::new();
        }

        let docs: Vec<Vec<String>> = records
            .iter()
            .map(|r| text::remove_stopwords(text::tokenize(&r.headline)))
            .collect();
        let vectorizer = text::CountVectorizer::fit(&docs);
        let x = vectorizer.transform(&docs);
        let y: Array1<f64> = records.iter().map(|r| f64::from(pseudo_label(r))).collect();

        let model = LogisticRegression::fit(&x, &y, self.learning_rate, self.max_iter);
        let proba = model.predict_proba(&x);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            rows = records.len(),
            vocabulary = vectorizer.len(),
            "fitted pseudo-label model"
        );

        records
            .iter()
            .zip(proba.iter())
            .map(|(r, &p)| {
                let (sentiment, score) = if p >= 0.5 {
                    (POSITIVE, p)
                } else {
                    (NEGATIVE, 1.0 - p)
                };
                HeadlineRecord {
                    headline: r.headline.clone(),
                    sentiment: sentiment.to_string(),
                    score,
                }
            })
            .collect()
    }
}
