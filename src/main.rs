use chrono::Utc;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

use headline_sentiment::core::{DEFAULT_RESULTS, MAX_RESULTS, MIN_RESULTS};
use headline_sentiment::{
    HsError, PseudoLabelTrainer, RunOutcome, Session, Settings, config, render,
};

#[derive(Parser, Debug)]
#[command(
    name = "headline-sentiment",
    version,
    about = "Live news sentiment for top headlines from India"
)]
struct Cli {
    #[arg(long, help = "News API key (overrides the secrets file and environment)")]
    api_key: Option<String>,
    #[arg(long, default_value = config::DEFAULT_SECRETS_PATH, help = "TOML secrets file")]
    secrets: PathBuf,
    #[arg(
        long,
        default_value_t = DEFAULT_RESULTS,
        value_parser = clap::value_parser!(u32).range(i64::from(MIN_RESULTS)..=i64::from(MAX_RESULTS)),
        help = "Number of headlines to fetch"
    )]
    max: u32,
    #[arg(long, help = "Show news after this date (YYYY-MM-DD or RFC 3339); defaults to 24h ago")]
    from: Option<String>,
    #[arg(long, conflicts_with = "from", help = "Do not filter by date")]
    no_date_filter: bool,
    #[arg(long, help = "Relabel with a bag-of-words model fitted on the pretrained labels")]
    relabel: bool,
    #[arg(long, help = "Output machine-readable JSON")]
    json: bool,
    #[arg(long, default_value_t = 5, help = "Headlines listed per label")]
    top: usize,
    #[arg(long, default_value_t = 40, help = "Width of the longest bar")]
    chart_width: usize,
}

async fn run(cli: &Cli) -> Result<RunOutcome, HsError> {
    let settings = Settings::load(&cli.secrets)?;

    let from = config::resolve_from(cli.from.as_deref(), cli.no_date_filter, Utc::now())?;
    let api_key = config::resolve_api_key(cli.api_key.as_deref(), &settings);
    let params = config::collect(api_key, cli.max, from)?;

    let session = Session::new(settings.news_client()?, settings.inference_model()?)
        .relabel(cli.relabel.then(PseudoLabelTrainer::default));
    session.run(&params).await
}

#[tokio::main]
async fn main() -> ExitCode {
    #[cfg(feature = "tracing-subscriber")]
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let outcome = run(&cli).await;

    if cli.json {
        let value = match &outcome {
            Ok(RunOutcome::Report(report)) => serde_json::json!({
                "records": report.records(),
                "tally": report.tally().entries(),
            }),
            Ok(RunOutcome::Empty) => serde_json::json!({ "records": [], "tally": [] }),
            Err(e) => serde_json::json!({ "error": e.to_string() }),
        };
        println!("{value}");
    } else if let Ok(RunOutcome::Report(report)) = &outcome {
        print!("{}", render::full(report, cli.chart_width, cli.top));
    } else if let Some(msg) = render::message(&outcome) {
        eprintln!("{msg}");
    }

    if outcome.is_err() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
