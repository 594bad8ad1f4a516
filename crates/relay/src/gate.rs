use crate::{FraudProofWindow, Sleeper};
use alloy::{primitives::Address, providers::Provider};
use metis_relay_bindings::{ChainBatchHeader, StateCommitmentChain};
use metis_relay_types::{InclusionProof, RelayTimings};
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Holds an L2 to L1 message back until its state batch can no longer be
/// challenged.
#[derive(Debug, Clone)]
pub struct FraudWindowGate<W, Sl> {
    window: W,
    sleeper: Sl,
    poll_delay: Duration,
}

impl<W, Sl> FraudWindowGate<W, Sl> {
    /// Create a new gate.
    pub const fn new(window: W, sleeper: Sl, poll_delay: Duration) -> Self {
        Self { window, sleeper, poll_delay }
    }

    /// Create a gate using the fraud window delay from `timings`.
    pub const fn from_timings(window: W, sleeper: Sl, timings: &RelayTimings) -> Self {
        Self::new(window, sleeper, timings.fraud_window_delay)
    }

    /// Get a reference to the predicate.
    pub const fn window(&self) -> &W {
        &self.window
    }
}

impl<W, Sl> FraudWindowGate<W, Sl>
where
    W: FraudProofWindow,
    Sl: Sleeper,
{
    /// Return once the batch of `proof` is outside the fraud proof window.
    ///
    /// Polls the predicate on a fixed delay while it holds. Predicate errors
    /// are returned immediately.
    #[instrument(skip_all, fields(batch_index = proof.batch_header().batch_index()))]
    pub async fn await_outside_fraud_window(&self, proof: &InclusionProof) -> Result<(), W::Error> {
        let mut polls = 0u64;
        while self.window.inside_fraud_proof_window(proof.batch_header()).await? {
            polls += 1;
            debug!(polls, retry_in = ?self.poll_delay, "batch inside fraud proof window");
            self.sleeper.sleep(self.poll_delay).await;
        }
        info!(polls, "batch outside fraud proof window");
        Ok(())
    }
}

/// [`FraudProofWindow`] backed by the state commitment chain contract.
#[derive(Debug, Clone)]
pub struct StateCommitmentChainWindow<P> {
    scc: StateCommitmentChain::StateCommitmentChainInstance<P>,
}

impl<P: Provider> StateCommitmentChainWindow<P> {
    /// Create a predicate for the contract at `address`.
    pub fn new(address: Address, provider: P) -> Self {
        Self { scc: StateCommitmentChain::new(address, provider) }
    }

    /// Get the contract address.
    pub fn address(&self) -> &Address {
        self.scc.address()
    }
}

impl<P: Provider> FraudProofWindow for StateCommitmentChainWindow<P> {
    type Error = alloy::contract::Error;

    async fn inside_fraud_proof_window(
        &self,
        header: &ChainBatchHeader,
    ) -> Result<bool, Self::Error> {
        self.scc.insideFraudProofWindow(header.clone()).call().await
    }
}
