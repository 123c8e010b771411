use clap::{Parser, Subcommand};
use match_client::{MatchClient, MatchResult, ProfileId, Settings};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "match-client")]
#[command(about = "Fetch the next match and report match outcomes")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Configuration file (defaults to config/default.toml and config/local.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Origin the base path is resolved against, e.g. http://localhost:5000
    #[arg(long)]
    origin: Option<String>,

    /// Path of the match endpoint
    #[arg(long)]
    base_url: Option<String>,
}

#[derive(Subcommand)]
enum Command {
    /// Fetch the next match
    Next,
    /// Report the outcome of a match: success or denial
    Update {
        other_profile_id: String,
        result: String,
        /// Send the profile id as a JSON number instead of a string
        #[arg(long)]
        numeric_id: bool,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    // Load .env file if present
    dotenv::dotenv().ok();

    let cli = Cli::parse();

    let settings = match &cli.config {
        Some(path) => Settings::load_from(path),
        None => Settings::load(),
    };
    let mut settings = match settings {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    init_logging(&settings.logging.level, &settings.logging.format);

    if let Some(origin) = cli.origin.clone() {
        settings.client.origin = origin;
    }
    if let Some(base_url) = cli.base_url.clone() {
        settings.client.base_url = base_url;
    }

    match run(cli.command, &settings).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(level: &str, format: &str) {
    // RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true);

    if format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.compact().init();
    }
}

async fn run(command: Command, settings: &Settings) -> Result<(), Box<dyn std::error::Error>> {
    let client = MatchClient::from_settings(&settings.client)?;

    info!("Using match endpoint {}", client.endpoint()?);

    let response = match command {
        Command::Next => client.get_next_match().await?,
        Command::Update {
            other_profile_id,
            result,
            numeric_id,
        } => {
            // Validate before anything goes over the wire
            let result: MatchResult = result.parse()?;
            let other_profile_id = if numeric_id {
                ProfileId::from(other_profile_id.parse::<i64>()?)
            } else {
                ProfileId::from(other_profile_id)
            };
            client.update_match(other_profile_id, result).await?
        }
    };

    println!("{}", serde_json::to_string_pretty(&response)?);

    Ok(())
}
