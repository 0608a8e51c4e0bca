use std::path::PathBuf;
use std::time::Duration;

use alloy::primitives::{Address, U256};
use thiserror::Error;

use common::errors::{MissingEventError, MissingFieldError, RevertedError};

/// Errors that can occur while loading compiled contracts
#[derive(Debug, Error)]
pub enum ArtifactError {
    #[error("no artifact named {name} under {}", .dir.display())]
    NotFound { name: String, dir: PathBuf },

    #[error("artifact {name} has no bytecode (interface or abstract contract?)")]
    EmptyBytecode { name: String },

    #[error("artifact {name} has invalid bytecode: {source}")]
    InvalidBytecode {
        name: String,
        source: alloy::hex::FromHexError,
    },

    #[error("artifact {name} needs library linking, which is not supported")]
    UnlinkedLibraries { name: String },

    #[error("cannot read artifact {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("malformed artifact {}: {source}", .path.display())]
    Malformed {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Errors that can occur while running the deployment scripts
#[derive(Debug, Error)]
pub enum DeploymentError {
    #[error("no deployment recorded for {0}")]
    MissingDeployment(String),

    #[error("receipt of {0} deployment has no contract address")]
    NoContractAddress(String),

    #[error("deployer {account} holds {balance} LINK wei, {required} required")]
    InsufficientLink {
        account: Address,
        balance: U256,
        required: U256,
    },

    #[error("no randomness for token {token_id} after {waited:?}")]
    OracleTimeout { token_id: U256, waited: Duration },

    #[error(transparent)]
    Reverted(#[from] RevertedError),

    #[error(transparent)]
    MissingEvent(#[from] MissingEventError),

    #[error(transparent)]
    MissingField(#[from] MissingFieldError),
}
