use alloy::primitives::{Address, Bytes, B256, U256};
use serde::{Deserialize, Serialize};

/// A contract deployed by one of the deployment scripts, as stored on disk.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Deployment {
    pub address: Address,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_hash: Option<B256>,
    #[serde(default)]
    pub args: Vec<String>,
}

/// ABI-encoded constructor arguments along with their printable form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConstructorArgs {
    pub encoded: Bytes,
    pub display: Vec<String>,
}

impl ConstructorArgs {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn new(encoded: impl Into<Bytes>, display: Vec<String>) -> Self {
        Self {
            encoded: encoded.into(),
            display,
        }
    }
}

/// The result of a script that minted a token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MintOutcome {
    pub contract: Address,
    pub token_id: U256,
    pub token_uri: String,
}
