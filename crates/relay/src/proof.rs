use crate::{InclusionProver, ProverError, Sleeper};
use alloy::rpc::types::TransactionReceipt;
use metis_relay_types::{CrossDomainMessage, InclusionProof, RelayTimings};
use std::time::Duration;
use tracing::{info, instrument, warn};

/// Drives an [`InclusionProver`] until it produces a proof.
///
/// While the state commitment chain has no batch covering the transaction,
/// the prover is called again after a fixed delay. There is no attempt
/// ceiling. Any other prover error is returned at once.
#[derive(Debug, Clone)]
pub struct ProofBuilder<P, Sl> {
    prover: P,
    sleeper: Sl,
    retry_delay: Duration,
}

impl<P, Sl> ProofBuilder<P, Sl> {
    /// Create a new proof builder.
    pub const fn new(prover: P, sleeper: Sl, retry_delay: Duration) -> Self {
        Self { prover, sleeper, retry_delay }
    }

    /// Create a proof builder using the batch retry delay from `timings`.
    pub const fn from_timings(prover: P, sleeper: Sl, timings: &RelayTimings) -> Self {
        Self::new(prover, sleeper, timings.batch_retry_delay)
    }

    /// Get a reference to the prover.
    pub const fn prover(&self) -> &P {
        &self.prover
    }

    /// Get the retry delay.
    pub const fn retry_delay(&self) -> Duration {
        self.retry_delay
    }
}

impl<P, Sl> ProofBuilder<P, Sl>
where
    P: InclusionProver,
    Sl: Sleeper,
{
    /// Build the inclusion proof of `message`, sent by the transaction with
    /// `receipt`.
    #[instrument(skip_all, fields(tx_hash = %receipt.transaction_hash, nonce = %message.nonce()))]
    pub async fn build_proof(
        &self,
        receipt: &TransactionReceipt,
        message: &CrossDomainMessage,
    ) -> Result<InclusionProof, ProverError> {
        let mut attempts = 0u64;
        loop {
            attempts += 1;
            match self.prover.prove(receipt, message).await {
                Ok(proof) => {
                    info!(attempts, batch_index = proof.batch_header().batch_index(), "built proof");
                    return Ok(proof);
                }
                Err(err) if err.is_transient() => {
                    info!(attempts, retry_in = ?self.retry_delay, "no state root batch for tx yet, retrying");
                    self.sleeper.sleep(self.retry_delay).await;
                }
                Err(err) => {
                    warn!(%err, "failed to build proof");
                    return Err(err);
                }
            }
        }
    }
}
