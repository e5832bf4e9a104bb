//! RPC client for querying a Tendermint node's validator sets.

pub mod client;
pub mod types;

// Re-export main types
pub use client::RpcClient;
