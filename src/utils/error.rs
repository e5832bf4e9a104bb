//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use thiserror::Error;

/// Errors detected while validating command arguments.
///
/// These are all reported synchronously, before any network activity.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("start height {start} must be less than end height {end}")]
    HeightRange { start: u64, end: u64 },

    #[error("RPC URL cannot be empty")]
    EmptyRpcUrl,

    #[error("RPC URL must start with http:// or https://, got: {0}")]
    InvalidRpcUrl(String),

    #[error("step must be at least 1")]
    ZeroStep,

    #[error("concurrency must be at least 1")]
    ZeroConcurrency,
}

/// Errors that can occur during RPC communication
#[derive(Error, Debug)]
pub enum RpcError {
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("Invalid RPC response: {0}")]
    InvalidResponse(String),
}

/// Errors that can occur while driving the concurrent height scan
#[derive(Error, Debug)]
pub enum ScanError {
    #[error("fetching validators at height {height} failed: {source}")]
    Height {
        height: u64,
        #[source]
        source: RpcError,
    },

    #[error("scan task did not complete: {0}")]
    TaskFailed(#[from] tokio::task::JoinError),

    #[error("concurrency gate closed while tasks were pending")]
    GateClosed,
}
