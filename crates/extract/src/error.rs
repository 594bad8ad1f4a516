use alloy::primitives::TxHash;

/// Errors produced while extracting messages from a receipt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ExtractError {
    /// The receipt contains no `SentMessage` event from the expected
    /// messenger.
    #[error("no cross-domain message found in transaction {tx_hash}")]
    NoMessageFound {
        /// The hash of the inspected transaction.
        tx_hash: TxHash,
    },
}
