use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use posekit_analysis::AnalysisPipeline;
use posekit_api::{ApiConfig, LoggingConfig};
use posekit_core::{LandmarkFrame, LandmarkIndex};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Body landmark analysis tools", long_about = None)]
struct Args {
    /// Configuration file (TOML, YAML or JSON)
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Analyze a landmark frame stored as JSON
    Analyze {
        /// Frame file: an array of landmarks or {"landmarks": [...]}
        frame: PathBuf,

        /// Pretty-print the result
        #[arg(long, default_value_t = false)]
        pretty: bool,
    },

    /// Print the landmark index/name table
    Landmarks,
}

fn init_tracing(logging: &LoggingConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => ApiConfig::from_file(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => ApiConfig::from_env().context("failed to load config from environment")?,
    };

    init_tracing(&config.logging);

    match args.command {
        Command::Analyze { frame, pretty } => {
            let content = fs::read_to_string(&frame)
                .with_context(|| format!("failed to read {}", frame.display()))?;
            let landmarks: LandmarkFrame = serde_json::from_str(&content)
                .with_context(|| format!("invalid landmark frame in {}", frame.display()))?;

            tracing::info!("Analyzing {} landmarks from {}", landmarks.len(), frame.display());

            let result = AnalysisPipeline::new(config.analysis).analyze(&landmarks);
            let output = if pretty {
                serde_json::to_string_pretty(&result)?
            } else {
                serde_json::to_string(&result)?
            };
            println!("{}", output);
        }
        Command::Landmarks => {
            for landmark in LandmarkIndex::ALL {
                println!("{:>2}  {}", landmark.index(), landmark.name());
            }
        }
    }

    Ok(())
}
