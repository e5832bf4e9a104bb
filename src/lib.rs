//! Gini Scan
//!
//! Voting-power inequality analysis for Tendermint-based chains.
//!
//! This crate provides the core implementation for the `gini` CLI
//! tool: an RPC client for the node's `/validators` query, the Gini
//! coefficient calculation, and a bounded-concurrency scan across a
//! range of block heights.
//!
//! ## Getting Started
//!
//! Most users should install and use the CLI:
//!
//! ```bash
//! cargo install gini-scan
//! gini gini --startHeight 9000000 --endHeight 9500000
//! ```
//!
//! The modules are public so integration tests can drive a scan
//! against a mocked RPC endpoint.

pub mod commands;
pub mod rpc;
pub mod scan;
pub mod stats;
pub mod utils;
