use crate::{
    ChainEndpoint, FraudProofWindow, FraudWindowGate, InclusionProver, ProofBuilder, ProverError,
    RelayError, RelayOutcome, RelaySubmitter, Relayer, Sleeper, Watcher, WatcherError,
};
use alloy::primitives::TxHash;
use metis_relay_extract::ExtractError;
use metis_relay_types::{CrossDomainMessagePair, Direction};
use tracing::{info, instrument, warn};

/// Errors returned by the [`RelayOrchestrator`].
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum OrchestratorError {
    /// The source transaction sent no message.
    #[error(transparent)]
    Extract(#[from] ExtractError),
    /// Watching a chain failed.
    #[error(transparent)]
    Watcher(#[from] WatcherError),
    /// Building a proof failed.
    #[error(transparent)]
    Prover(#[from] ProverError),
    /// Checking the fraud proof window failed.
    #[error("fraud proof window check failed: {0}")]
    FraudWindow(#[source] Box<dyn core::error::Error + Send + Sync>),
    /// Relaying failed.
    #[error(transparent)]
    Relay(#[from] RelayError),
    /// The message was delivered, but the delivering transaction reverted.
    #[error("delivery transaction {tx_hash} reverted")]
    DeliveryReverted {
        /// The hash of the delivering transaction.
        tx_hash: TxHash,
    },
}

/// Composes the watcher, proof builder, fraud window gate and relayer into
/// the two end-to-end flows.
///
/// Each message goes through its stages strictly in order. Messages from one
/// transaction are processed one after another.
#[derive(Debug, Clone)]
pub struct RelayOrchestrator<L1, L2, Sl, P = (), W = (), S = ()> {
    watcher: Watcher<L1, L2, Sl>,
    proofs: P,
    gate: W,
    relayer: S,
}

impl<L1, L2, Sl> RelayOrchestrator<L1, L2, Sl> {
    /// Create an orchestrator that only confirms deposits.
    pub const fn deposits(watcher: Watcher<L1, L2, Sl>) -> Self {
        Self { watcher, proofs: (), gate: (), relayer: () }
    }
}

impl<L1, L2, Sl, P, W, S>
    RelayOrchestrator<L1, L2, Sl, ProofBuilder<P, Sl>, FraudWindowGate<W, Sl>, Relayer<S, Sl>>
{
    /// Create an orchestrator for both flows.
    pub const fn new(
        watcher: Watcher<L1, L2, Sl>,
        proofs: ProofBuilder<P, Sl>,
        gate: FraudWindowGate<W, Sl>,
        relayer: Relayer<S, Sl>,
    ) -> Self {
        Self { watcher, proofs, gate, relayer }
    }

    /// Get the proof builder.
    pub const fn proofs(&self) -> &ProofBuilder<P, Sl> {
        &self.proofs
    }

    /// Get the relayer.
    pub const fn relayer(&self) -> &Relayer<S, Sl> {
        &self.relayer
    }
}

impl<L1, L2, Sl, P, W, S> RelayOrchestrator<L1, L2, Sl, P, W, S> {
    /// Get the watcher.
    pub const fn watcher(&self) -> &Watcher<L1, L2, Sl> {
        &self.watcher
    }
}

/// A delivered message whose delivering transaction reverted is final.
fn ensure_delivered(pair: CrossDomainMessagePair) -> Result<CrossDomainMessagePair, OrchestratorError> {
    if !pair.remote_status() {
        warn!(id = %pair.message_id, tx_hash = %pair.remote_receipt.transaction_hash, "delivery reverted");
        return Err(OrchestratorError::DeliveryReverted {
            tx_hash: pair.remote_receipt.transaction_hash,
        });
    }
    if !pair.outcome.is_relayed() {
        warn!(id = %pair.message_id, "messenger reported a failed relay");
    }
    Ok(pair)
}

impl<L1, L2, Sl, P, W, S> RelayOrchestrator<L1, L2, Sl, P, W, S>
where
    L1: ChainEndpoint,
    L2: ChainEndpoint,
    Sl: Sleeper,
{
    /// Confirm the delivery on L2 of every message sent by L1 transaction
    /// `tx_hash`.
    ///
    /// The L2 sequencer delivers deposits; nothing is submitted.
    #[instrument(skip(self))]
    pub async fn confirm_deposit(
        &self,
        tx_hash: TxHash,
    ) -> Result<Vec<CrossDomainMessagePair>, OrchestratorError> {
        let direction = Direction::L1ToL2;
        let receipt = self.watcher.source_receipt(direction, tx_hash).await?;
        let messages = self.watcher.source_indexer(direction).extract_messages(&receipt)?;

        let mut pairs = Vec::with_capacity(messages.len());
        for message in &messages {
            let pair =
                self.watcher.wait_for_message(direction, receipt.clone(), message.identifier()).await?;
            pairs.push(ensure_delivered(pair)?);
        }
        info!(count = pairs.len(), "deposit confirmed");
        Ok(pairs)
    }
}

impl<L1, L2, Sl, P, W, S>
    RelayOrchestrator<L1, L2, Sl, ProofBuilder<P, Sl>, FraudWindowGate<W, Sl>, Relayer<S, Sl>>
where
    L1: ChainEndpoint,
    L2: ChainEndpoint,
    Sl: Sleeper,
    P: InclusionProver,
    W: FraudProofWindow,
    S: RelaySubmitter,
{
    /// Finalize on L1 every message sent by L2 transaction `tx_hash`.
    ///
    /// For each message: build the proof, wait out the fraud proof window,
    /// relay, then confirm the delivery.
    #[instrument(skip(self))]
    pub async fn finalize_withdrawal(
        &self,
        tx_hash: TxHash,
    ) -> Result<Vec<CrossDomainMessagePair>, OrchestratorError> {
        let direction = Direction::L2ToL1;
        let receipt = self.watcher.source_receipt(direction, tx_hash).await?;
        let messages = self.watcher.source_indexer(direction).extract_messages(&receipt)?;
        info!(count = messages.len(), "found messages");

        let mut pairs = Vec::with_capacity(messages.len());
        for message in &messages {
            let id = message.identifier();

            let proof = self.proofs.build_proof(&receipt, message).await?;
            self.gate
                .await_outside_fraud_window(&proof)
                .await
                .map_err(|err| OrchestratorError::FraudWindow(Box::new(err)))?;

            match self.relayer.relay(message, &proof).await? {
                RelayOutcome::Submitted(relay_tx) => info!(%id, %relay_tx, "relay submitted"),
                RelayOutcome::AlreadyDelivered => info!(%id, "relayed by another party"),
            }

            let pair = self.watcher.wait_for_message(direction, receipt.clone(), id).await?;
            pairs.push(ensure_delivered(pair)?);
        }
        info!(count = pairs.len(), "withdrawal finalized");
        Ok(pairs)
    }
}
