use crate::core::{HsError, LabelScore};

/// Boxed future returned by [`SentimentModel::predict`].
pub type PredictFuture<'a> = core::pin::Pin<
    Box<dyn core::future::Future<Output = Result<Vec<Vec<LabelScore>>, HsError>> + Send + 'a>,
>;

/// A pretrained sentiment classifier.
///
/// This is the seam between the pipeline and whatever hosts the model. A handle is
/// acquired once per session and invoked for every batch of headlines. It is
/// implemented by [`InferenceModel`](crate::sentiment::InferenceModel).
pub trait SentimentModel: Send + Sync {
    /// Scores a batch of inputs.
    ///
    /// # Returns
    /// A `Future` resolving to one label list per input, in input order. Each list
    /// holds every label the model knows with its confidence.
    fn predict<'a>(&'a self, inputs: &'a [String]) -> PredictFuture<'a>;
}
