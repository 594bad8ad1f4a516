use crate::{ExtractError, MessengerEvent};
use alloy::{
    primitives::{Address, TxHash},
    rpc::types::{Filter, Log, TransactionReceipt},
    sol_types::SolEvent,
};
use metis_relay_bindings::CrossDomainMessenger::{FailedRelayedMessage, RelayedMessage};
use metis_relay_types::{CrossDomainMessage, DeliveryOutcome, MessageIdentifier};
use tracing::trace;

/// Extracts cross-domain messages sent through one messenger.
///
/// Only logs emitted by the configured messenger are considered. If a chain
/// filter is set, `SentMessage` events addressed to other chains are skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageIndexer {
    messenger: Address,
    chain_filter: Option<u64>,
}

impl MessageIndexer {
    /// Create an indexer for a messenger.
    pub const fn new(messenger: Address) -> Self {
        Self { messenger, chain_filter: None }
    }

    /// Only extract messages addressed to `chain_id`.
    pub const fn with_chain_filter(mut self, chain_id: u64) -> Self {
        self.chain_filter = Some(chain_id);
        self
    }

    /// Get the messenger address.
    pub const fn messenger(&self) -> Address {
        self.messenger
    }

    /// Get the chain filter.
    pub const fn chain_filter(&self) -> Option<u64> {
        self.chain_filter
    }

    /// Decode messenger events from logs, in log order, skipping logs from
    /// other contracts.
    pub fn events<'a>(
        &'a self,
        logs: impl IntoIterator<Item = &'a Log> + 'a,
    ) -> impl Iterator<Item = MessengerEvent> + 'a {
        logs.into_iter()
            .filter(move |log| log.address() == self.messenger)
            .filter_map(move |log| MessengerEvent::decode(&log.inner, self.chain_filter))
    }

    /// Extract the messages sent in a set of logs, in log order.
    pub fn messages_in_logs<'a>(
        &'a self,
        logs: impl IntoIterator<Item = &'a Log> + 'a,
    ) -> impl Iterator<Item = CrossDomainMessage> + 'a {
        self.events(logs).filter_map(|e| e.to_message())
    }

    /// Extract every message sent by a transaction.
    ///
    /// Errors if the receipt contains no matching `SentMessage` event.
    pub fn extract_messages(
        &self,
        receipt: &TransactionReceipt,
    ) -> Result<Vec<CrossDomainMessage>, ExtractError> {
        self.extract_from_logs(receipt.transaction_hash, receipt.inner.logs())
    }

    /// Extract every message in `logs`, which belong to transaction
    /// `tx_hash`.
    pub fn extract_from_logs(
        &self,
        tx_hash: TxHash,
        logs: &[Log],
    ) -> Result<Vec<CrossDomainMessage>, ExtractError> {
        let messages: Vec<_> = self.messages_in_logs(logs).collect();
        trace!(%tx_hash, count = messages.len(), messenger = %self.messenger, "extracted messages");

        if messages.is_empty() {
            return Err(ExtractError::NoMessageFound { tx_hash });
        }
        Ok(messages)
    }

    /// Extract the identifiers of every message sent by a transaction.
    pub fn message_ids(
        &self,
        receipt: &TransactionReceipt,
    ) -> Result<Vec<MessageIdentifier>, ExtractError> {
        self.extract_messages(receipt).map(|m| m.iter().map(CrossDomainMessage::identifier).collect())
    }

    /// The delivery event in a log, if it was emitted by this messenger.
    pub fn delivery(&self, log: &Log) -> Option<(MessageIdentifier, DeliveryOutcome)> {
        if log.address() != self.messenger {
            return None;
        }
        MessengerEvent::decode(&log.inner, None)?.delivery()
    }

    /// A log filter matching `RelayedMessage` and `FailedRelayedMessage`
    /// events for `id` from this messenger.
    pub fn delivery_filter(&self, id: MessageIdentifier) -> Filter {
        Filter::new()
            .address(self.messenger)
            .event_signature(vec![RelayedMessage::SIGNATURE_HASH, FailedRelayedMessage::SIGNATURE_HASH])
            .topic1(id.hash())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use alloy::primitives::{address, bytes, B256, U256};
    use metis_relay_bindings::CrossDomainMessenger::SentMessage;

    const MESSENGER: Address = address!("0x4200000000000000000000000000000000000007");

    fn rpc_log(address: Address, data: alloy::primitives::LogData) -> Log {
        Log {
            inner: alloy::primitives::Log { address, data },
            block_hash: None,
            block_number: Some(10),
            block_timestamp: None,
            transaction_hash: Some(B256::repeat_byte(0xee)),
            transaction_index: Some(0),
            log_index: Some(0),
            removed: false,
        }
    }

    fn sent(nonce: u64, chain_id: u64) -> SentMessage {
        SentMessage {
            target: address!("0x00000000000000000000000000000000000000bb"),
            sender: address!("0x00000000000000000000000000000000000000aa"),
            message: bytes!("c0ffee"),
            messageNonce: U256::from(nonce),
            gasLimit: U256::from(1_000_000),
            chainId: U256::from(chain_id),
        }
    }

    #[test]
    fn extracts_in_log_order() {
        let logs = vec![
            rpc_log(MESSENGER, sent(1, 1088).encode_log_data()),
            rpc_log(MESSENGER, sent(2, 1088).encode_log_data()),
        ];
        let msgs = MessageIndexer::new(MESSENGER).extract_from_logs(B256::ZERO, &logs).unwrap();
        assert_eq!(msgs.len(), 2);
        assert_eq!(msgs[0].nonce(), U256::from(1));
        assert_eq!(msgs[1].nonce(), U256::from(2));
    }

    #[test]
    fn skips_other_emitters_and_chains() {
        let logs = vec![
            rpc_log(Address::repeat_byte(9), sent(1, 1088).encode_log_data()),
            rpc_log(MESSENGER, sent(2, 59901).encode_log_data()),
            rpc_log(MESSENGER, sent(3, 1088).encode_log_data()),
        ];
        let indexer = MessageIndexer::new(MESSENGER).with_chain_filter(1088);
        let msgs = indexer.extract_from_logs(B256::ZERO, &logs).unwrap();
        assert_eq!(msgs.len(), 1);
        assert_eq!(msgs[0].nonce(), U256::from(3));
    }

    #[test]
    fn no_message_is_an_error() {
        let tx_hash = B256::repeat_byte(4);
        let logs = vec![rpc_log(Address::repeat_byte(9), sent(1, 1088).encode_log_data())];
        let err = MessageIndexer::new(MESSENGER).extract_from_logs(tx_hash, &logs).unwrap_err();
        assert_eq!(err, ExtractError::NoMessageFound { tx_hash });
    }

    #[test]
    fn delivery_from_messenger_only() {
        let id = MessageIdentifier::new(B256::repeat_byte(7));
        let data = RelayedMessage { msgHash: id.hash() }.encode_log_data();
        let indexer = MessageIndexer::new(MESSENGER);

        assert_eq!(
            indexer.delivery(&rpc_log(MESSENGER, data.clone())),
            Some((id, DeliveryOutcome::Relayed))
        );
        assert_eq!(indexer.delivery(&rpc_log(Address::ZERO, data)), None);
    }

    #[test]
    fn delivery_filter_matches_both_outcomes() {
        let id = MessageIdentifier::new(B256::repeat_byte(7));
        let filter = MessageIndexer::new(MESSENGER).delivery_filter(id);

        assert!(filter.address.matches(&MESSENGER));
        assert!(filter.topics[0].matches(&RelayedMessage::SIGNATURE_HASH));
        assert!(filter.topics[0].matches(&FailedRelayedMessage::SIGNATURE_HASH));
        assert!(filter.topics[1].matches(&id.hash()));
        assert!(!filter.topics[1].matches(&B256::ZERO));
    }
}
