//! Command-line interface for the multitran.ru dictionary client.

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use mtrn::{ClientConfig, Language, MtrnClient, QueryError};

#[derive(Parser, Debug)]
#[command(name = "mtrn", version, about = "Query the multitran.ru dictionary")]
struct Cli {
    /// Source language.
    #[arg(short = 'f', long, default_value = "english")]
    from: String,

    /// Target language.
    #[arg(short = 't', long, default_value = "russian")]
    to: String,

    /// Print the result as JSON instead of a plaintext table.
    #[arg(long)]
    json: bool,

    /// Per-request timeout in seconds.
    #[arg(long, value_name = "SECONDS", default_value_t = 30)]
    timeout: u64,

    /// Query text; multiple words are joined with spaces.
    #[arg(required = true)]
    query: Vec<String>,
}

fn available_languages() -> String {
    let known: Vec<&str> = Language::ALL.iter().map(|l| l.name()).collect();
    known.join(", ")
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            match err.downcast_ref::<QueryError>() {
                Some(QueryError::EmptyQuery | QueryError::InvalidLanguage { .. }) => {
                    ExitCode::from(2)
                }
                _ => ExitCode::FAILURE,
            }
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let from: Language = cli
        .from
        .parse()
        .with_context(|| format!("available languages: {}", available_languages()))?;
    let to: Language = cli
        .to
        .parse()
        .with_context(|| format!("available languages: {}", available_languages()))?;
    let query = cli.query.join(" ");

    let config = ClientConfig {
        timeout: std::time::Duration::from_secs(cli.timeout),
        ..Default::default()
    };
    let client = MtrnClient::new(config).context("failed to create client")?;

    let outcome = client.query(&query, from, to).await?;

    for warning in &outcome.warnings {
        eprintln!(
            "Warning: skipped '{}' ({}): {}",
            warning.label, warning.url, warning.error
        );
    }

    if cli.json {
        println!("{}", mtrn::render::render_json(&outcome.pages)?);
    } else {
        print!("{}", mtrn::render::render_plain(&outcome.pages));
    }
    Ok(())
}
