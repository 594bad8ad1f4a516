use alloy::{
    primitives::{keccak256, Address, Bytes, B256, U256},
    sol_types::SolCall,
};
use metis_relay_bindings::CrossDomainMessenger::{relayMessageCall, SentMessage};

/// A message sent through a cross-domain messenger, as decoded from its
/// `SentMessage` event.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct CrossDomainMessage {
    /// The account that called the source messenger.
    sender: Address,
    /// The contract the message is executed against on the destination chain.
    target: Address,
    /// The calldata executed against the target.
    payload: Bytes,
    /// The source messenger's nonce for this message.
    nonce: U256,
}

impl CrossDomainMessage {
    /// Create a new message.
    pub const fn new(sender: Address, target: Address, payload: Bytes, nonce: U256) -> Self {
        Self { sender, target, payload, nonce }
    }

    /// Get the sender.
    pub const fn sender(&self) -> Address {
        self.sender
    }

    /// Get the target.
    pub const fn target(&self) -> Address {
        self.target
    }

    /// Get the payload.
    pub const fn payload(&self) -> &Bytes {
        &self.payload
    }

    /// Get the nonce.
    pub const fn nonce(&self) -> U256 {
        self.nonce
    }

    /// ABI-encode the message as the `relayMessage` call the destination
    /// messenger executes. This is the preimage of the message identifier and
    /// of the L2 message passer storage key.
    pub fn encode_relay_calldata(&self) -> Vec<u8> {
        relayMessageCall {
            target: self.target,
            sender: self.sender,
            message: self.payload.clone(),
            messageNonce: self.nonce,
        }
        .abi_encode()
    }

    /// Compute the identifier of this message.
    pub fn identifier(&self) -> MessageIdentifier {
        MessageIdentifier::of(self)
    }
}

impl From<&SentMessage> for CrossDomainMessage {
    fn from(event: &SentMessage) -> Self {
        Self::new(event.sender(), event.target(), event.message().clone(), event.nonce())
    }
}

impl From<SentMessage> for CrossDomainMessage {
    fn from(event: SentMessage) -> Self {
        Self::new(event.sender, event.target, event.message, event.messageNonce)
    }
}

/// The canonical identifier of a [`CrossDomainMessage`].
///
/// This is the keccak hash of the message encoded as a `relayMessage` call.
/// The destination messenger emits it in `RelayedMessage` and
/// `FailedRelayedMessage` and uses it to reject a second successful relay of
/// the same message.
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct MessageIdentifier(B256);

impl MessageIdentifier {
    /// Wrap a raw hash.
    pub const fn new(hash: B256) -> Self {
        Self(hash)
    }

    /// Compute the identifier of a message.
    pub fn of(message: &CrossDomainMessage) -> Self {
        Self(keccak256(message.encode_relay_calldata()))
    }

    /// Get the raw hash.
    pub const fn hash(&self) -> B256 {
        self.0
    }
}

impl From<B256> for MessageIdentifier {
    fn from(hash: B256) -> Self {
        Self(hash)
    }
}

impl From<MessageIdentifier> for B256 {
    fn from(id: MessageIdentifier) -> Self {
        id.0
    }
}

impl core::fmt::Display for MessageIdentifier {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}
