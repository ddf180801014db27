//! Per-headline sentiment labelling on top of a [`SentimentModel`].

mod inference;

pub use inference::{InferenceModel, InferenceModelBuilder};

use crate::core::{HeadlineRecord, HsError, LabelScore, SentimentModel};

/// Longest input, in characters, the model accepts.
pub const MAX_INPUT_CHARS: usize = 512;

/// Headlines sent to the model per call.
pub const DEFAULT_BATCH_SIZE: usize = 16;

/// Returns at most the first [`MAX_INPUT_CHARS`] characters of `text`.
#[must_use]
pub fn truncate(text: &str) -> &str {
    match text.char_indices().nth(MAX_INPUT_CHARS) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

fn top_label(scores: &[LabelScore]) -> Option<&LabelScore> {
    scores.iter().fold(None, |best, ls| match best {
        Some(b) if b.score >= ls.score => Some(b),
        _ => Some(ls),
    })
}

/// Labels every headline, preserving order.
///
/// Inputs are truncated to [`MAX_INPUT_CHARS`] and sent in batches of `batch_size`.
/// Each record carries the original (untruncated) headline and the model's
/// highest-scoring label, lower-cased.
///
/// # Errors
///
/// Returns [`HsError::Classifier`] if the model fails, returns the wrong number of
/// predictions, or returns an empty label list for any headline. No partial
/// result is returned.
pub async fn classify<M>(
    model: &M,
    headlines: &[String],
    batch_size: usize,
) -> Result<Vec<HeadlineRecord>, HsError>
where
    M: SentimentModel + ?Sized,
{
    let mut records = Vec::with_capacity(headlines.len());

    for chunk in headlines.chunks(batch_size.max(1)) {
        let inputs: Vec<String> = chunk.iter().map(|h| truncate(h).to_string()).collect();
        let predictions = model.predict(&inputs).await?;

        if predictions.len() != chunk.len() {
            return Err(HsError::Classifier(format!(
                "expected {} predictions, got {}",
                chunk.len(),
                predictions.len()
            )));
        }

        for (headline, scores) in chunk.iter().zip(&predictions) {
            let best = top_label(scores).ok_or_else(|| {
                HsError::Classifier(format!("no label returned for `{headline}`"))
            })?;
            records.push(HeadlineRecord {
                headline: headline.clone(),
                sentiment: best.label.to_lowercase(),
                score: best.score,
            });
        }
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(count = records.len(), "classified headlines");

    Ok(records)
}
