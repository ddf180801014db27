//! One run: fetch, classify, optionally relabel, then tabulate.

use crate::core::{FetchParameters, HsError, NewsClient, SentimentModel};
use crate::headlines::HeadlinesBuilder;
use crate::pseudo::PseudoLabelTrainer;
use crate::report::Report;
use crate::sentiment::{self, DEFAULT_BATCH_SIZE};

/// What a successful run produced.
#[derive(Debug, Clone, PartialEq)]
pub enum RunOutcome {
    /// At least one headline was fetched and classified.
    Report(Report),
    /// The endpoint returned no usable headlines. Nothing was classified.
    Empty,
}

/// A news client and a sentiment model held for the lifetime of a session.
///
/// The model is acquired once, when the session is built, and reused by every run.
///
/// # Example
///
/// ```no_run
/// # use headline_sentiment::{ApiKey, FetchParameters, InferenceModel, NewsClient, Session};
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let session = Session::new(NewsClient::builder().build()?, InferenceModel::builder().build()?);
/// let params = FetchParameters::new(ApiKey::new("my-key")?, 10)?;
/// let outcome = session.run(&params).await?;
/// # Ok(())
/// # }
/// ```
pub struct Session<M> {
    client: NewsClient,
    model: M,
    batch_size: usize,
    relabel: Option<PseudoLabelTrainer>,
}

impl<M: SentimentModel> Session<M> {
    /// Creates a session around an already-built client and model.
    pub const fn new(client: NewsClient, model: M) -> Self {
        Self {
            client,
            model,
            batch_size: DEFAULT_BATCH_SIZE,
            relabel: None,
        }
    }

    /// Number of headlines sent to the model per call.
    #[must_use]
    pub const fn batch_size(mut self, n: usize) -> Self {
        self.batch_size = n;
        self
    }

    /// Replaces the pretrained labels with those of a bag-of-words model fitted on them.
    #[must_use]
    pub fn relabel(mut self, trainer: Option<PseudoLabelTrainer>) -> Self {
        self.relabel = trainer;
        self
    }

    /// The model handle this session owns.
    pub const fn model(&self) -> &M {
        &self.model
    }

    /// Runs the pipeline once.
    ///
    /// # Errors
    ///
    /// Any fetch or classification failure aborts the run; no partial report is returned.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(skip(self, params), err, fields(max = params.max_results))
    )]
    pub async fn run(&self, params: &FetchParameters) -> Result<RunOutcome, HsError> {
        let headlines = HeadlinesBuilder::new(&self.client, params.clone())
            .fetch()
            .await?;
        if headlines.is_empty() {
            return Ok(RunOutcome::Empty);
        }

        let mut records = sentiment::classify(&self.model, &headlines, self.batch_size).await?;
        if let Some(trainer) = &self.relabel {
            records = trainer.relabel(&records);
        }

        Ok(RunOutcome::Report(Report::new(records)))
    }
}
