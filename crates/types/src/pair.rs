use crate::MessageIdentifier;
use alloy::rpc::types::{Transaction, TransactionReceipt};

/// Whether the destination messenger executed the message successfully.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum DeliveryOutcome {
    /// The messenger emitted `RelayedMessage`.
    Relayed,
    /// The messenger emitted `FailedRelayedMessage`. The message may be
    /// relayed again.
    Failed,
}

impl DeliveryOutcome {
    /// True if the message was executed.
    pub const fn is_relayed(&self) -> bool {
        matches!(self, Self::Relayed)
    }
}

/// A cross-domain message joined with both ends of its journey: the
/// transaction that sent it and the transaction that delivered it.
///
/// Constructed only once the delivery is observed on the destination chain.
#[derive(Debug, Clone)]
pub struct CrossDomainMessagePair {
    /// The identifier of the message.
    pub message_id: MessageIdentifier,
    /// The transaction that sent the message.
    pub tx: Transaction,
    /// The receipt of the sending transaction.
    pub receipt: TransactionReceipt,
    /// The transaction that delivered the message.
    pub remote_tx: Transaction,
    /// The receipt of the delivering transaction.
    pub remote_receipt: TransactionReceipt,
    /// The outcome reported by the destination messenger.
    pub outcome: DeliveryOutcome,
}

impl CrossDomainMessagePair {
    /// True if the delivering transaction did not revert.
    pub fn remote_status(&self) -> bool {
        self.remote_receipt.status()
    }

    /// True if the delivering transaction succeeded and the messenger
    /// executed the message.
    pub fn is_delivered(&self) -> bool {
        self.remote_status() && self.outcome.is_relayed()
    }
}
