//! Configuration and constants for the CLI.

/// Default Tendermint RPC endpoint
pub const DEFAULT_RPC_URL: &str = "http://localhost:26657";

/// Default maximum number of concurrently pending RPC requests
pub const DEFAULT_CONCURRENCY: usize = 3;

/// Default number of blocks to advance per sampled height
pub const DEFAULT_STEP: u64 = 500;

// Fixed page size for the /validators query. There is no follow-up
// paging: networks with more than this many active validators come
// back silently truncated.
pub const VALIDATORS_PER_PAGE: u32 = 200;
