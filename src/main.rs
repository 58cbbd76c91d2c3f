//! Depclosure CLI - Command-line interface for the dependency closure calculator

mod commands;

use clap::{Parser, Subcommand};
use depclosure::OutputFormat;
use depclosure::config::load_config;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "depclosure")]
#[command(version)]
#[command(about = "Dependency closure calculator - resolves transitive library dependencies")]
#[command(long_about = r#"
Depclosure reads declaration files made of lines like

  A depends on B C

and prints, for each declared library, every library it depends on
directly or transitively.

Example usage:
  depclosure resolve deps.txt
  depclosure batch tests/test_data --pattern "*.txt"
  depclosure --format json resolve deps.txt
"#)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format (overrides the config file)
    #[arg(short, long, global = true, value_enum)]
    format: Option<OutputFormat>,

    /// Path to the config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve the dependencies of every library in one declaration file
    Resolve {
        /// Path to the declaration file
        input: PathBuf,
    },

    /// Resolve every declaration file in a directory
    Batch {
        /// Directory holding declaration files (defaults to tests/test_data)
        dir: Option<PathBuf>,

        /// File name pattern to match (defaults to *.txt)
        #[arg(short, long)]
        pattern: Option<String>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging; stdout is reserved for reports
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            depclosure::ui::error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let config = load_config(cli.config.as_deref())?.unwrap_or_default();
    let format = cli.format.or(config.format).unwrap_or_default();

    match cli.command {
        Commands::Resolve { input } => {
            tracing::debug!("Resolving {}", input.display());
            commands::run_resolve(&input, format)
        }

        Commands::Batch { dir, pattern } => {
            let dir = dir
                .or_else(|| config.data_dir.map(PathBuf::from))
                .unwrap_or_else(|| PathBuf::from(depclosure::batch::DEFAULT_DATA_DIR));
            let pattern = pattern
                .or(config.pattern)
                .unwrap_or_else(|| depclosure::batch::DEFAULT_PATTERN.to_string());
            tracing::debug!("Batch over {} ({})", dir.display(), pattern);
            commands::run_batch(&dir, &pattern, format)
        }
    }
}
