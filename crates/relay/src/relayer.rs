use crate::{FailureClass, RelaySubmitter, Sleeper, SubmitFailure};
use alloy::{
    primitives::{Address, TxHash, U256},
    providers::Provider,
};
use metis_relay_bindings::CrossDomainMessenger;
use metis_relay_types::{CrossDomainMessage, InclusionProof, RelayTimings};
use std::time::Duration;
use tracing::{info, instrument, warn};

/// Errors returned by [`Relayer::relay`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum RelayError {
    /// The submission failed for an unrecognised reason. No further
    /// submission was attempted.
    #[error("relay failed: {0}")]
    Fatal(String),
    /// The relaying transaction was mined and reverted.
    #[error("relay transaction {0} reverted")]
    Reverted(TxHash),
}

/// How a relay completed.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RelayOutcome {
    /// This relayer's transaction delivered the message.
    Submitted(TxHash),
    /// The destination messenger had already received the message.
    AlreadyDelivered,
}

impl RelayOutcome {
    /// The hash of the relaying transaction, if this relayer submitted it.
    pub const fn tx_hash(&self) -> Option<TxHash> {
        match self {
            Self::Submitted(hash) => Some(*hash),
            Self::AlreadyDelivered => None,
        }
    }
}

/// Submits messages to the destination messenger, retrying transient
/// failures.
///
/// The loop ends on one of three outcomes: the message is delivered, the
/// messenger reports it was already received, or the failure is fatal.
/// There is no attempt ceiling.
#[derive(Debug, Clone)]
pub struct Relayer<S, Sl> {
    submitter: S,
    sleeper: Sl,
    retry_delay: Duration,
}

impl<S, Sl> Relayer<S, Sl> {
    /// Create a new relayer.
    pub const fn new(submitter: S, sleeper: Sl, retry_delay: Duration) -> Self {
        Self { submitter, sleeper, retry_delay }
    }

    /// Create a relayer using the relay retry delay from `timings`.
    pub const fn from_timings(submitter: S, sleeper: Sl, timings: &RelayTimings) -> Self {
        Self::new(submitter, sleeper, timings.relay_retry_delay)
    }

    /// Get a reference to the submitter.
    pub const fn submitter(&self) -> &S {
        &self.submitter
    }
}

impl<S, Sl> Relayer<S, Sl>
where
    S: RelaySubmitter,
    Sl: Sleeper,
{
    /// Relay `message` with its inclusion proof.
    #[instrument(skip_all, fields(message_id = %message.identifier()))]
    pub async fn relay(
        &self,
        message: &CrossDomainMessage,
        proof: &InclusionProof,
    ) -> Result<RelayOutcome, RelayError> {
        let mut attempts = 0u64;
        loop {
            attempts += 1;
            let SubmitFailure { class, reason, reverted } =
                match self.submitter.submit(message, proof).await {
                    Ok(tx_hash) => {
                        info!(attempts, %tx_hash, "relayed message");
                        return Ok(RelayOutcome::Submitted(tx_hash));
                    }
                    Err(failure) => failure,
                };

            match class {
                FailureClass::AlreadyDelivered => {
                    info!(attempts, "message has already been received");
                    return Ok(RelayOutcome::AlreadyDelivered);
                }
                FailureClass::Transient => {
                    warn!(attempts, %reason, retry_in = ?self.retry_delay, "relay failed, retrying");
                    self.sleeper.sleep(self.retry_delay).await;
                }
                FailureClass::Fatal => {
                    warn!(attempts, %reason, "relay failed");
                    return Err(reverted.map_or(RelayError::Fatal(reason), RelayError::Reverted));
                }
            }
        }
    }
}

/// [`RelaySubmitter`] calling `relayMessageViaChainId` on an L1 messenger.
///
/// This is the only place where the error text of the chain is inspected:
/// every failure is passed through [`SubmitFailure::from_error`].
#[derive(Debug, Clone)]
pub struct MessengerSubmitter<P> {
    messenger: CrossDomainMessenger::CrossDomainMessengerInstance<P>,
    l2_chain_id: u64,
}

impl<P: Provider> MessengerSubmitter<P> {
    /// Create a submitter for the messenger at `address`. The provider must
    /// be able to sign and send transactions.
    pub fn new(address: Address, provider: P, l2_chain_id: u64) -> Self {
        Self { messenger: CrossDomainMessenger::new(address, provider), l2_chain_id }
    }

    /// Get the messenger address.
    pub fn address(&self) -> &Address {
        self.messenger.address()
    }
}

impl<P: Provider> RelaySubmitter for MessengerSubmitter<P> {
    async fn submit(
        &self,
        message: &CrossDomainMessage,
        proof: &InclusionProof,
    ) -> Result<TxHash, SubmitFailure> {
        let receipt = self
            .messenger
            .relayMessageViaChainId(
                U256::from(self.l2_chain_id),
                message.target(),
                message.sender(),
                message.payload().clone(),
                message.nonce(),
                proof.to_sol(),
            )
            .send()
            .await
            .map_err(SubmitFailure::from_error)?
            .get_receipt()
            .await
            .map_err(SubmitFailure::from_error)?;

        if !receipt.status() {
            return Err(SubmitFailure::reverted(receipt.transaction_hash));
        }
        Ok(receipt.transaction_hash)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use alloy::{
        primitives::{Bytes, B256},
        providers::ProviderBuilder,
        transports::mock::Asserter,
    };
    use metis_relay_bindings::{ChainBatchHeader, ChainInclusionProof};

    fn message() -> CrossDomainMessage {
        CrossDomainMessage::new(
            Address::repeat_byte(0xaa),
            Address::repeat_byte(0xbb),
            Bytes::from_static(&[1, 2, 3]),
            U256::from(9),
        )
    }

    fn proof() -> InclusionProof {
        InclusionProof::new(
            B256::repeat_byte(1),
            ChainBatchHeader {
                batchIndex: U256::ZERO,
                batchRoot: B256::repeat_byte(1),
                batchSize: U256::from(1),
                prevTotalElements: U256::ZERO,
                extraData: Bytes::new(),
            },
            ChainInclusionProof { index: U256::ZERO, siblings: vec![] },
            Bytes::new(),
            Bytes::new(),
        )
    }

    fn submitter(asserter: &Asserter) -> MessengerSubmitter<impl Provider> {
        let provider = ProviderBuilder::new()
            .disable_recommended_fillers()
            .connect_mocked_client(asserter.clone());
        MessengerSubmitter::new(Address::repeat_byte(0x11), provider, 59902)
    }

    #[tokio::test]
    async fn node_errors_are_classified() {
        let asserter = Asserter::new();
        let submitter = submitter(&asserter);

        asserter.push_failure_msg("execution reverted: Provided message has already been received.");
        asserter.push_failure_msg("nonce too low");
        asserter.push_failure_msg("execution reverted: custom revert: foo");

        let classes = [FailureClass::AlreadyDelivered, FailureClass::Transient, FailureClass::Fatal];
        for class in classes {
            let failure = submitter.submit(&message(), &proof()).await.unwrap_err();
            assert_eq!(failure.class, class);
        }
    }

    #[test]
    fn outcome_hash() {
        let hash = B256::repeat_byte(5);
        assert_eq!(RelayOutcome::Submitted(hash).tx_hash(), Some(hash));
        assert_eq!(RelayOutcome::AlreadyDelivered.tx_hash(), None);
    }
}
