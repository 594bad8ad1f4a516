use alloy::{
    primitives::{Log, LogData},
    sol_types::SolEventInterface,
};
use metis_relay_bindings::CrossDomainMessenger::{
    CrossDomainMessengerEvents, FailedRelayedMessage, RelayedMessage, SentMessage,
};
use metis_relay_types::{CrossDomainMessage, DeliveryOutcome, MessageIdentifier};

/// Events emitted by a cross-domain messenger.
///
/// `SentMessage` is emitted on the source chain when a message is sent.
/// `RelayedMessage` and `FailedRelayedMessage` are emitted on the destination
/// chain when the message is executed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessengerEvent {
    /// A [`SentMessage`] event.
    Sent(SentMessage),
    /// A [`RelayedMessage`] event.
    Relayed(RelayedMessage),
    /// A [`FailedRelayedMessage`] event.
    RelayFailed(FailedRelayedMessage),
}

impl From<SentMessage> for MessengerEvent {
    fn from(e: SentMessage) -> Self {
        Self::Sent(e)
    }
}

impl From<RelayedMessage> for MessengerEvent {
    fn from(e: RelayedMessage) -> Self {
        Self::Relayed(e)
    }
}

impl From<FailedRelayedMessage> for MessengerEvent {
    fn from(e: FailedRelayedMessage) -> Self {
        Self::RelayFailed(e)
    }
}

impl MessengerEvent {
    /// Decode a cross-domain messenger event from a log.
    ///
    /// If `filter_chain_id` is set, `SentMessage` events addressed to a
    /// different chain are discarded.
    pub fn decode(log: &Log<LogData>, filter_chain_id: Option<u64>) -> Option<Self> {
        let event = CrossDomainMessengerEvents::decode_log(log).ok().map(|log| log.data)?;

        match event {
            CrossDomainMessengerEvents::SentMessage(e)
                if filter_chain_id.is_none_or(|id| e.chain_id() == id) =>
            {
                Some(Self::Sent(e))
            }
            CrossDomainMessengerEvents::SentMessage(_) => None,
            CrossDomainMessengerEvents::RelayedMessage(e) => Some(Self::Relayed(e)),
            CrossDomainMessengerEvents::FailedRelayedMessage(e) => Some(Self::RelayFailed(e)),
        }
    }

    /// True if this event is a [`SentMessage`] event.
    pub const fn is_sent(&self) -> bool {
        matches!(self, Self::Sent(_))
    }

    /// Fallible cast to a [`SentMessage`] event.
    pub const fn as_sent(&self) -> Option<&SentMessage> {
        match self {
            Self::Sent(e) => Some(e),
            _ => None,
        }
    }

    /// Convert a sent event into the message it carries.
    pub fn to_message(&self) -> Option<CrossDomainMessage> {
        self.as_sent().map(CrossDomainMessage::from)
    }

    /// The identifier and outcome of a delivery event. `None` for
    /// `SentMessage`.
    pub const fn delivery(&self) -> Option<(MessageIdentifier, DeliveryOutcome)> {
        match self {
            Self::Sent(_) => None,
            Self::Relayed(e) => Some((MessageIdentifier::new(e.msgHash), DeliveryOutcome::Relayed)),
            Self::RelayFailed(e) => {
                Some((MessageIdentifier::new(e.msgHash), DeliveryOutcome::Failed))
            }
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use alloy::{
        primitives::{address, bytes, B256, U256},
        sol_types::SolEvent,
    };

    fn sent(chain_id: u64) -> SentMessage {
        SentMessage {
            target: address!("0x00000000000000000000000000000000000000bb"),
            sender: address!("0x00000000000000000000000000000000000000aa"),
            message: bytes!("c0ffee"),
            messageNonce: U256::from(3),
            gasLimit: U256::from(1_000_000),
            chainId: U256::from(chain_id),
        }
    }

    fn log_of(data: LogData) -> Log {
        Log { address: address!("0x4200000000000000000000000000000000000007"), data }
    }

    #[test]
    fn decodes_sent_with_filter() {
        let log = log_of(sent(1088).encode_log_data());

        assert!(MessengerEvent::decode(&log, None).unwrap().is_sent());
        assert!(MessengerEvent::decode(&log, Some(1088)).unwrap().is_sent());
        assert_eq!(MessengerEvent::decode(&log, Some(59901)), None);
    }

    #[test]
    fn decodes_delivery_events() {
        let hash = B256::repeat_byte(0xab);
        let relayed = log_of(RelayedMessage { msgHash: hash }.encode_log_data());
        let failed = log_of(FailedRelayedMessage { msgHash: hash }.encode_log_data());

        // the chain filter only applies to sent messages
        let relayed = MessengerEvent::decode(&relayed, Some(1)).unwrap();
        let failed = MessengerEvent::decode(&failed, Some(1)).unwrap();

        assert_eq!(
            relayed.delivery(),
            Some((MessageIdentifier::new(hash), DeliveryOutcome::Relayed))
        );
        assert_eq!(failed.delivery(), Some((MessageIdentifier::new(hash), DeliveryOutcome::Failed)));
        assert!(relayed.to_message().is_none());
    }

    #[test]
    fn ignores_unrelated_logs() {
        let log = log_of(LogData::new_unchecked(vec![B256::repeat_byte(1)], Default::default()));
        assert_eq!(MessengerEvent::decode(&log, None), None);
    }
}
