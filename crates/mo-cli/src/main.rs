//! # marshall
//!
//! Command-line front end for Marshall mix-design analysis.
//!
//! ## Usage
//!
//! ```bash
//! # Print the reference request payload
//! marshall example > request.json
//!
//! # Regression curves and optimum asphalt content
//! marshall analyze request.json --pretty
//!
//! # Plain-text summary for a 3.5 % air-void target
//! marshall analyze request.json --target-voids 3.5 --summary
//!
//! # Properties at a chosen asphalt content
//! marshall at 5.5 request.json
//! ```
//!
//! Exit codes: 0 on success, 2 when the request must be fixed by the caller,
//! 1 on unexpected failures.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use log::error;

use mo_cli::{
    failure_exit_code, handle_analyze, handle_at, handle_summary, load_config, read_input, Reply,
};
use mo_models::MarshallInput;

/// Marshall mix design - optimum asphalt binder content
#[derive(Parser)]
#[command(name = "marshall")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Verbosity level (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,

    /// TOML file with analysis settings
    #[arg(short, long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fit every property and solve for the optimum asphalt content
    Analyze {
        /// Request payload (JSON), or - for stdin
        #[arg(value_name = "INPUT", default_value = "-")]
        input: PathBuf,

        /// Target air voids (%), overrides the payload
        #[arg(short, long)]
        target_voids: Option<f64>,

        /// Print a text summary instead of JSON
        #[arg(short, long)]
        summary: bool,

        /// Pretty-print JSON
        #[arg(short, long)]
        pretty: bool,
    },

    /// Predict every property at a chosen asphalt content
    At {
        /// Asphalt content (%)
        #[arg(value_name = "ASPHALT_CONTENT")]
        asphalt_content: f64,

        /// Request payload (JSON), or - for stdin
        #[arg(value_name = "INPUT", default_value = "-")]
        input: PathBuf,

        /// Pretty-print JSON
        #[arg(short, long)]
        pretty: bool,
    },

    /// Print the reference request payload
    Example,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    let log_level = match (cli.quiet, cli.verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    match run(cli) {
        Ok(reply) => {
            if reply.is_success() {
                println!("{}", reply.body);
            } else {
                eprintln!("{}", reply.body);
            }
            ExitCode::from(reply.exit_code())
        }
        Err(err) => {
            error!("{err:#}");
            ExitCode::from(failure_exit_code(&err))
        }
    }
}

fn run(cli: Cli) -> Result<Reply> {
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Analyze {
            input,
            target_voids,
            summary,
            pretty,
        } => {
            let mut request = read_input(&input)?;
            if let Some(target) = target_voids {
                request.target_voids = target;
            }

            if summary {
                handle_summary(&request, &config)
            } else {
                handle_analyze(&request, &config, pretty)
            }
        }
        Commands::At {
            asphalt_content,
            input,
            pretty,
        } => {
            let request = read_input(&input)?;
            handle_at(&request, &config, asphalt_content, pretty)
        }
        Commands::Example => {
            let body = serde_json::to_string_pretty(&MarshallInput::example())?;
            Ok(Reply {
                kind: None,
                body,
            })
        }
    }
}
