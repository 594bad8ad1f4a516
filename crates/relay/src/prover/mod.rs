use alloy::{primitives::TxHash, transports::TransportError};

mod scc;
pub use scc::{message_slot, SccProver};

/// Errors returned while building an inclusion proof.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ProverError {
    /// No state batch on L1 covers the transaction yet.
    #[error("unable to find state root batch for tx index {tx_index}")]
    NoStateRootBatch {
        /// The L2 transaction index.
        tx_index: u64,
    },
    /// The source receipt has no block number.
    #[error("transaction {0} is not mined")]
    Unmined(TxHash),
    /// A transaction referenced by a receipt or log could not be fetched.
    #[error("transaction {0} not found")]
    MissingTransaction(TxHash),
    /// A `StateBatchAppended` log carries no transaction hash.
    #[error("state batch {batch_index} log has no transaction hash")]
    MissingBatchTransaction {
        /// The batch index.
        batch_index: u64,
    },
    /// The state roots in the batch calldata do not hash to the batch root.
    #[error("state roots of batch {batch_index} do not match its root")]
    BatchRootMismatch {
        /// The batch index.
        batch_index: u64,
    },
    /// The batch does not hold a state root for the transaction.
    #[error("batch {batch_index} has no state root at index {index}")]
    StateRootOutOfRange {
        /// The batch index.
        batch_index: u64,
        /// The index within the batch.
        index: u64,
    },
    /// `eth_getProof` returned no storage proof for the message slot.
    #[error("missing storage proof for message slot")]
    MissingStorageProof,
    /// Log or calldata decoding failed.
    #[error("failed to decode state batch: {0}")]
    Decode(#[from] alloy::sol_types::Error),
    /// RPC failure.
    #[error(transparent)]
    Rpc(#[from] TransportError),
    /// Contract call failure.
    #[error(transparent)]
    Contract(#[from] alloy::contract::Error),
}

impl ProverError {
    /// True if the proof may be built by retrying later.
    pub const fn is_transient(&self) -> bool {
        matches!(self, Self::NoStateRootBatch { .. })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn only_missing_batch_is_transient() {
        assert!(ProverError::NoStateRootBatch { tx_index: 4 }.is_transient());
        assert!(!ProverError::MissingStorageProof.is_transient());
        assert!(!ProverError::Unmined(TxHash::ZERO).is_transient());
    }
}
