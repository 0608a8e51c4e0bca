use alloy::{
    rpc::types::{Log, TransactionReceipt},
    sol_types::SolEvent,
};

use common::errors::MissingEventError;

/// First log in `logs` that decodes as `E`.
pub fn decode_first<E: SolEvent>(logs: &[Log]) -> Option<E> {
    logs.iter()
        .find_map(|log| log.log_decode::<E>().ok())
        .map(|log| log.inner.data)
}

pub fn find_event<E: SolEvent>(receipt: &TransactionReceipt) -> Result<E, MissingEventError> {
    decode_first::<E>(receipt.inner.logs())
        .ok_or_else(|| MissingEventError::new(E::SIGNATURE, receipt.transaction_hash))
}
