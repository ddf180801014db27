//! headline-sentiment: top news headlines, labelled by a pretrained sentiment model.
//!
//! A run fetches up to `max_results` headlines, labels each one, and tabulates
//! the label distribution:
//!
//! ```no_run
//! use headline_sentiment::{config, render, RunOutcome, Session, Settings};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let settings = Settings::load(config::DEFAULT_SECRETS_PATH)?;
//! let session = Session::new(settings.news_client()?, settings.inference_model()?);
//! let params = config::collect(settings.gnews_api.as_deref(), 20, None)?;
//!
//! let outcome = session.run(&params).await;
//! match &outcome {
//!     Ok(RunOutcome::Report(report)) => println!("{}", render::full(report, 40, 5)),
//!     _ => eprintln!("{}", render::message(&outcome).unwrap_or_default()),
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod core;
pub mod headlines;
pub mod pipeline;
pub mod pseudo;
pub mod report;
pub mod sentiment;

pub use crate::config::Settings;
pub use crate::core::{
    ApiKey, ErrorKind, FetchParameters, HeadlineRecord, HsError, LabelScore, NewsClient,
    NewsClientBuilder, SentimentModel,
};
pub use headlines::HeadlinesBuilder;
pub use pipeline::{RunOutcome, Session};
pub use pseudo::PseudoLabelTrainer;
pub use report::{Report, SentimentTally, render};
pub use sentiment::{InferenceModel, InferenceModelBuilder, classify};
