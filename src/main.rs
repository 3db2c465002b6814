use anyhow::{bail, Context};
use clap::Parser;
use sqlc::core::query::executor::ExecutionResult;
use sqlc::{Config, Connection, SqlcError};
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(name = "sqlc")]
#[command(version)]
#[command(about = "Compile and run SQL statements against a JSON-backed in-memory database", long_about = None)]
struct Cli {
    /// SQL file to run; may hold several `;`-separated statements
    file: Option<PathBuf>,

    /// SQL text to run instead of a file
    #[arg(short, long)]
    query: Option<String>,

    /// Write the JSON result here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Database snapshot to load before and save after running
    #[arg(short, long)]
    db: Option<PathBuf>,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log pipeline stages at debug level
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            match err.downcast_ref::<SqlcError>() {
                Some(sqlc_err) => eprintln!("error[{}]: {}", sqlc_err.kind(), sqlc_err),
                None => eprintln!("error: {err:#}"),
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let mut config = Config::load_or_default(cli.config.as_deref())?;
    if let Some(db) = &cli.db {
        config.snapshot_path = Some(db.clone());
    }
    init_tracing(&config, cli.verbose);

    let sql = match (&cli.file, &cli.query) {
        (Some(file), _) => fs::read_to_string(file)
            .with_context(|| format!("Failed to read SQL file '{}'", file.display()))?,
        (None, Some(query)) => query.clone(),
        (None, None) => bail!("no SQL given; pass a FILE or --query"),
    };

    let mut conn = Connection::open_with_config(&config)?;
    let results = conn.execute_batch(&sql)?;

    let rendered = render(&results, config.pretty_output)?;
    match &cli.output {
        Some(path) => {
            fs::write(path, rendered + "\n")
                .with_context(|| format!("Failed to write result to '{}'", path.display()))?;
            tracing::info!(path = %path.display(), "result written");
        }
        None => println!("{rendered}"),
    }

    if conn.snapshot_path().is_some() && config.persist_after_execute {
        conn.persist()?;
    }
    Ok(())
}

// One statement prints its result object; a batch prints an array.
fn render(results: &[ExecutionResult], pretty: bool) -> Result<String, SqlcError> {
    let json = match results {
        [single] if pretty => serde_json::to_string_pretty(single)?,
        [single] => serde_json::to_string(single)?,
        many if pretty => serde_json::to_string_pretty(many)?,
        many => serde_json::to_string(many)?,
    };
    Ok(json)
}

fn init_tracing(config: &Config, verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_filter))
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}
