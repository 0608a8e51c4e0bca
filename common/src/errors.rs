use alloy::primitives::B256;
use thiserror::Error;

#[derive(Debug, Error)]
#[error("missing configuration field: {field}")]
pub struct MissingFieldError {
    field: String,
}

impl MissingFieldError {
    pub fn new(field: &str) -> Self {
        Self {
            field: field.to_string(),
        }
    }

    /// The field name as it would be passed on the command line.
    pub fn flag(&self) -> String {
        format!("--{}", self.field.replace('_', "-"))
    }
}

#[derive(Debug, Error)]
#[error("transaction reverted: {tx_hash}")]
pub struct RevertedError {
    tx_hash: B256,
}

impl RevertedError {
    pub fn new(tx_hash: B256) -> Self {
        Self { tx_hash }
    }
}

#[derive(Debug, Error)]
#[error("event {event} not found in receipt of {tx_hash}")]
pub struct MissingEventError {
    event: &'static str,
    tx_hash: B256,
}

impl MissingEventError {
    pub fn new(event: &'static str, tx_hash: B256) -> Self {
        Self { event, tx_hash }
    }
}
