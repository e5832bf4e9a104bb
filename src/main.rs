//! Gini Scan CLI
//!
//! Samples validator voting power across a range of block heights on a
//! Tendermint-based chain and reports the Gini coefficient per height
//! plus the average over the range.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;

use gini_scan::commands::{execute_gini, validate_args, GiniArgs};
use gini_scan::utils::config::{DEFAULT_CONCURRENCY, DEFAULT_RPC_URL, DEFAULT_STEP};

/// Gini Scan - voting-power inequality across block heights
#[derive(Parser, Debug)]
#[command(name = "gini")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Calculate the Gini coefficient for apps built with Cosmos SDK
    Gini {
        /// Tendermint RPC URL
        #[arg(long, default_value_t = String::from(DEFAULT_RPC_URL))]
        rpc: String,

        /// Maximum number of RPC requests concurrently pending
        #[arg(long, default_value_t = DEFAULT_CONCURRENCY)]
        concurrency: usize,

        /// The starting block height to include in the average calculation
        #[arg(long = "startHeight")]
        start_height: u64,

        /// The ending block height to include in the average calculation
        #[arg(long = "endHeight")]
        end_height: u64,

        /// The number of blocks to increase per iteration
        #[arg(long, default_value_t = DEFAULT_STEP)]
        step: u64,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Execute command
    match cli.command {
        Commands::Gini {
            rpc,
            concurrency,
            start_height,
            end_height,
            step,
        } => {
            let args = GiniArgs {
                rpc_url: rpc,
                concurrency,
                start_height,
                end_height,
                step,
            };

            // Validate args before any network activity
            validate_args(&args)?;

            execute_gini(args).await?;
        }
    }

    Ok(())
}
