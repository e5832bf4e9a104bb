//! HTTP client for the node's `/validators` RPC query.

use super::types::ValidatorsResponse;
use crate::utils::config::VALIDATORS_PER_PAGE;
use crate::utils::error::RpcError;
use log::debug;
use reqwest::Client;

/// RPC client for fetching validator sets from a Tendermint node
///
/// Cloning is cheap: the underlying `reqwest::Client` is a handle to a
/// shared connection pool, so one client serves all concurrent fetches.
#[derive(Debug, Clone)]
pub struct RpcClient {
    client: Client,
    base_url: String,
}

impl RpcClient {
    /// Create a new RPC client
    ///
    /// No request timeout is configured: a request that never resolves
    /// holds its concurrency slot until the process exits.
    pub fn new(base_url: impl Into<String>) -> Result<Self, RpcError> {
        let client = Client::builder().build().map_err(RpcError::RequestFailed)?;

        Ok(Self {
            client,
            base_url: normalize_base_url(&base_url.into()),
        })
    }

    /// Fetch the voting powers of the validator set at one block height
    ///
    /// Issues a single GET asking for up to `VALIDATORS_PER_PAGE`
    /// validators; larger sets come back truncated. Powers are returned
    /// in server order.
    ///
    /// # Errors
    /// Transport failures, non-2xx statuses, and unexpected body shapes
    /// are all fatal for this height; nothing is retried or defaulted.
    pub async fn fetch_voting_powers(&self, height: u64) -> Result<Vec<f64>, RpcError> {
        let url = format!(
            "{}/validators?height={}&per_page={}",
            self.base_url, height, VALIDATORS_PER_PAGE
        );

        debug!("RPC request: GET {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(RpcError::RequestFailed)?;

        // Check HTTP status
        if !response.status().is_success() {
            return Err(RpcError::InvalidResponse(format!(
                "HTTP {}: {}",
                response.status(),
                response.text().await.unwrap_or_default()
            )));
        }

        // Parse the response envelope
        let parsed: ValidatorsResponse = response.json().await.map_err(RpcError::RequestFailed)?;

        let powers: Vec<f64> = parsed
            .result
            .validators
            .into_iter()
            .map(|validator| validator.voting_power)
            .collect();

        debug!("Height {}: {} validators", height, powers.len());

        Ok(powers)
    }
}

/// Trim trailing slashes so path concatenation yields a single separator
fn normalize_base_url(base_url: &str) -> String {
    base_url.trim_end_matches('/').to_string()
}
