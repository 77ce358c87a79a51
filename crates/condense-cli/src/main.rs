//! Condense CLI - extractive prompt compression

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use condense_core::models::{CompressionRequest, CompressionResult};
use condense_core::CondenseConfig;
use condense_dispatch::StrategyDispatcher;
use tracing::debug;

#[derive(Parser)]
#[command(name = "condense")]
#[command(author, version, about = "Shrink prompts to a token budget", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format (text or json)
    #[arg(long, global = true, default_value = "text")]
    format: OutputFormat,

    /// TOML config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Clone, Copy, Default, clap::ValueEnum)]
enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Compress a file, or stdin when no file is given
    Compress {
        /// Input file
        file: Option<PathBuf>,
        /// Fraction of tokens to remove (0.0 to 0.9)
        #[arg(short, long)]
        ratio: Option<f64>,
        /// What the prompt is for; matching sentences are kept first
        #[arg(short, long)]
        intent: Option<String>,
        /// Compression mode (heuristic, llm)
        #[arg(short, long)]
        mode: Option<String>,
    },

    /// List supported compression modes
    Modes,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref())?;
    condense_observability::init_tracing_with(&config.observability);

    let dispatcher = StrategyDispatcher::from_config(&config)?;

    match cli.command {
        Commands::Compress {
            file,
            ratio,
            intent,
            mode,
        } => {
            let text = read_input(file.as_deref())?;
            let mut request =
                CompressionRequest::new(text, ratio.unwrap_or(config.heuristic.default_ratio));
            request.intent = intent;

            let result = dispatcher.compress(mode.as_deref(), &request).await?;
            print_result(&result, cli.format)
        }

        Commands::Modes => {
            let modes = dispatcher.supported_modes();
            match cli.format {
                OutputFormat::Json => println!("{}", serde_json::to_string(&modes)?),
                OutputFormat::Text => {
                    for mode in modes {
                        println!("{mode}");
                    }
                }
            }
            Ok(())
        }
    }
}

fn load_config(path: Option<&Path>) -> anyhow::Result<CondenseConfig> {
    match path {
        Some(path) => CondenseConfig::from_file(path)
            .with_context(|| format!("failed to load config from {}", path.display())),
        None => Ok(CondenseConfig::default()),
    }
}

fn read_input(file: Option<&Path>) -> anyhow::Result<String> {
    match file {
        Some(path) => {
            debug!(path = %path.display(), "reading input file");
            std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))
        }
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("failed to read stdin")?;
            Ok(text)
        }
    }
}

fn print_result(result: &CompressionResult, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(result)?);
        }
        OutputFormat::Text => {
            println!("{}", result.compressed_text);
            for warning in &result.warnings {
                eprintln!("warning: {warning}");
            }
            eprintln!(
                "tokens: {} -> {} (target {})",
                result.metrics.original_tokens,
                result.metrics.final_tokens,
                result.metrics.target_tokens
            );
        }
    }
    Ok(())
}
