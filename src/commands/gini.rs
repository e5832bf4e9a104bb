//! Gini command implementation.
//!
//! The gini command:
//! 1. Validates the height range and connection options
//! 2. Derives the heights to sample
//! 3. Fetches each validator set under the concurrency cap
//! 4. Computes the per-height Gini coefficients
//! 5. Averages the coefficients and prints the summary

use crate::rpc::RpcClient;
use crate::scan::{run_limited, sample_heights, HeightSample, RunResult};
use crate::stats::{gini_coefficient, mean};
use crate::utils::config::{DEFAULT_CONCURRENCY, DEFAULT_RPC_URL, DEFAULT_STEP};
use crate::utils::error::{ConfigError, ScanError};
use anyhow::{Context, Result};
use log::info;
use std::time::Instant;

/// Arguments for the gini command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct GiniArgs {
    /// Base URL of the node's RPC endpoint
    pub rpc_url: String,

    /// Maximum number of concurrently pending RPC requests
    pub concurrency: usize,

    /// First height sampled
    pub start_height: u64,

    /// Upper bound of the sampled range (not necessarily sampled itself)
    pub end_height: u64,

    /// Height increment per sample
    pub step: u64,
}

impl Default for GiniArgs {
    fn default() -> Self {
        Self {
            rpc_url: DEFAULT_RPC_URL.to_string(),
            concurrency: DEFAULT_CONCURRENCY,
            start_height: 0,
            end_height: 0,
            step: DEFAULT_STEP,
        }
    }
}

/// Validate gini command arguments
///
/// **Public** - called before execute_gini, before any network activity
///
/// # Returns
/// Ok if the arguments are valid, a [`ConfigError`] describing the
/// first violation otherwise
pub fn validate_args(args: &GiniArgs) -> Result<(), ConfigError> {
    if args.rpc_url.is_empty() {
        return Err(ConfigError::EmptyRpcUrl);
    }

    if !args.rpc_url.starts_with("http://") && !args.rpc_url.starts_with("https://") {
        return Err(ConfigError::InvalidRpcUrl(args.rpc_url.clone()));
    }

    if args.start_height >= args.end_height {
        return Err(ConfigError::HeightRange {
            start: args.start_height,
            end: args.end_height,
        });
    }

    if args.step == 0 {
        return Err(ConfigError::ZeroStep);
    }

    if args.concurrency == 0 {
        return Err(ConfigError::ZeroConcurrency);
    }

    Ok(())
}

/// Execute the gini command
///
/// **Public** - main entry point called from main.rs
///
/// Fetches the validator set at every derived height, computes the Gini
/// coefficient per height (printing each as soon as it is known, so
/// lines from concurrent heights interleave), then prints the range
/// average with four decimals. The first failed fetch aborts the run;
/// no partial average is produced.
///
/// # Errors
/// * RPC connection or response-shape failures at any sampled height
/// * A scan task failing to complete
pub async fn execute_gini(args: GiniArgs) -> Result<RunResult> {
    let start_time = Instant::now();

    info!(
        "Scanning blocks {}-{} (step {}) via {}",
        args.start_height, args.end_height, args.step, args.rpc_url
    );

    let client = RpcClient::new(&args.rpc_url).context("Failed to create RPC client")?;

    let heights = sample_heights(args.start_height, args.end_height, args.step);

    info!(
        "Sampling {} heights, at most {} requests in flight",
        heights.len(),
        args.concurrency
    );

    let tasks: Vec<_> = heights
        .iter()
        .map(|&height| gini_at_height(client.clone(), height))
        .collect();

    let samples = run_limited(args.concurrency, tasks)
        .await
        .context("Height scan failed")?;

    let coefficients: Vec<f64> = samples.iter().map(|sample| sample.coefficient).collect();
    let average = mean(&coefficients);

    println!(
        "{:.4} avg. Gini coefficient between blocks {}-{}",
        average, args.start_height, args.end_height
    );

    let elapsed = start_time.elapsed();
    info!("Scan completed in {:.2}s", elapsed.as_secs_f64());

    Ok(RunResult { samples, average })
}

/// Fetch one height and compute its coefficient
///
/// **Private** - the per-height task body
async fn gini_at_height(client: RpcClient, height: u64) -> Result<HeightSample, ScanError> {
    let powers = client
        .fetch_voting_powers(height)
        .await
        .map_err(|source| ScanError::Height { height, source })?;

    let coefficient = gini_coefficient(&powers);

    println!("{} Gini coefficient for block {}", coefficient, height);

    Ok(HeightSample {
        height,
        coefficient,
    })
}
