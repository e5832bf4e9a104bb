//! Types for the Tendermint RPC `/validators` response.
//!
//! Only the fields this tool consumes are modeled; everything else the
//! node sends is ignored by serde.

use serde::{Deserialize, Deserializer};

/// Response envelope for the `/validators` query
#[derive(Debug, Deserialize)]
pub struct ValidatorsResponse {
    pub result: ValidatorsResult,
}

/// The `result` object of the `/validators` response
#[derive(Debug, Deserialize)]
pub struct ValidatorsResult {
    pub validators: Vec<ValidatorInfo>,
}

/// A single validator entry
///
/// Tendermint encodes `voting_power` as a decimal string (it is an i64
/// on the wire); some gateways re-encode it as a JSON number. Both are
/// accepted.
#[derive(Debug, Deserialize)]
pub struct ValidatorInfo {
    #[serde(deserialize_with = "voting_power_from_any")]
    pub voting_power: f64,
}

/// Deserialize a voting power from either a JSON string or a number
fn voting_power_from_any<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Number(value) => Ok(value),
        Raw::Text(text) => text.parse::<f64>().map_err(serde::de::Error::custom),
    }
}
