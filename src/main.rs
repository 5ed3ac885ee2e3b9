use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::info;

use comment_compass::config::Config;
use comment_compass::pipeline::analyze::Analyzer;

/// Comment Compass: turn viewer comments into ranked content ideas.
///
/// Annotates each comment with language, sentiment, intent tags, keywords
/// and relevance, then ranks the questions and suggestions worth answering.
#[derive(Parser)]
#[command(name = "comment-compass", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP analysis service
    #[cfg(feature = "web")]
    Serve {
        /// Address to bind (default: COMPASS_BIND or 0.0.0.0)
        #[arg(long)]
        bind: Option<String>,

        /// Port to listen on (default: COMPASS_PORT or 8000)
        #[arg(long)]
        port: Option<u16>,
    },

    /// Analyze a comment batch from a JSON file (or stdin) and print a report
    Analyze {
        /// Path to a {"comments": [...]} JSON file; reads stdin when omitted
        file: Option<PathBuf>,

        /// Print the raw JSON result instead of the terminal report
        #[arg(long)]
        json: bool,
    },

    /// Download the ONNX sentiment model (~67 MB)
    DownloadModel,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("comment_compass=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        #[cfg(feature = "web")]
        Commands::Serve { bind, port } => {
            let analyzer = Analyzer::from_config(&config)?;
            let bind = bind.unwrap_or_else(|| config.bind.clone());
            let port = port.unwrap_or(config.port);
            comment_compass::web::run_server(analyzer, port, &bind).await?;
        }

        Commands::Analyze { file, json } => {
            let body = read_input(file.as_ref())?;
            let analyzer = Analyzer::from_config(&config)?;
            let result = analyzer.analyze_json(&body).await?;

            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                comment_compass::output::terminal::display_analysis(&result);
            }
        }

        Commands::DownloadModel => {
            println!("Downloading sentiment model to {}", config.model_dir.display());
            comment_compass::sentiment::download::download_model(&config.model_dir).await?;
            info!(model_dir = %config.model_dir.display(), "Model download complete");
            println!("\n{}", "Model ready. The service will use it on next start.".bold());
        }
    }

    Ok(())
}

/// Read the request body from a file, or stdin when no path is given.
fn read_input(file: Option<&PathBuf>) -> Result<Vec<u8>> {
    match file {
        Some(path) => {
            std::fs::read(path).with_context(|| format!("Failed to read {}", path.display()))
        }
        None => {
            let mut buf = Vec::new();
            std::io::stdin()
                .read_to_end(&mut buf)
                .context("Failed to read comments from stdin")?;
            Ok(buf)
        }
    }
}
