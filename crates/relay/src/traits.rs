use crate::{ProverError, SubmitFailure};
use alloy::{
    primitives::TxHash,
    rpc::types::{Filter, Log, Transaction, TransactionReceipt},
};
use core::future::Future;
use metis_relay_bindings::ChainBatchHeader;
use metis_relay_types::{CrossDomainMessage, InclusionProof};

/// Read access to one chain.
///
/// Implemented for alloy providers, and by in-memory chains in tests. The
/// watcher holds one endpoint per chain; nothing in this crate reaches for a
/// global client.
pub trait ChainEndpoint {
    /// The error type returned by chain reads.
    type Error: core::error::Error + Send + Sync + 'static;

    /// Get the current block number.
    fn block_number(&self) -> impl Future<Output = Result<u64, Self::Error>> + Send;

    /// Get the logs matching a filter.
    fn logs(&self, filter: &Filter) -> impl Future<Output = Result<Vec<Log>, Self::Error>> + Send;

    /// Get a transaction by hash. `None` if the chain does not know it.
    fn transaction(
        &self,
        hash: TxHash,
    ) -> impl Future<Output = Result<Option<Transaction>, Self::Error>> + Send;

    /// Get a transaction receipt by hash. `None` if the transaction is not
    /// mined yet.
    fn receipt(
        &self,
        hash: TxHash,
    ) -> impl Future<Output = Result<Option<TransactionReceipt>, Self::Error>> + Send;
}

/// Builds inclusion proofs for L2 to L1 messages.
///
/// A prover that cannot find a state batch covering the transaction must
/// return [`ProverError::NoStateRootBatch`], which the [`ProofBuilder`]
/// retries. Every other error is fatal.
///
/// [`ProofBuilder`]: crate::ProofBuilder
pub trait InclusionProver {
    /// Build the proof that `message`, sent by the transaction with
    /// `receipt`, was committed to L1.
    fn prove(
        &self,
        receipt: &TransactionReceipt,
        message: &CrossDomainMessage,
    ) -> impl Future<Output = Result<InclusionProof, ProverError>> + Send;
}

/// The fraud proof window predicate of the state commitment chain.
pub trait FraudProofWindow {
    /// The error type returned by the predicate.
    type Error: core::error::Error + Send + Sync + 'static;

    /// True if the batch may still be challenged.
    fn inside_fraud_proof_window(
        &self,
        header: &ChainBatchHeader,
    ) -> impl Future<Output = Result<bool, Self::Error>> + Send;
}

/// Submits a message and its proof to the destination messenger.
///
/// Implementors translate every failure into a [`SubmitFailure`], classified
/// before it reaches the retry loop.
pub trait RelaySubmitter {
    /// Submit the relay call and wait for its receipt. Returns the hash of the
    /// relaying transaction.
    fn submit(
        &self,
        message: &CrossDomainMessage,
        proof: &InclusionProof,
    ) -> impl Future<Output = Result<TxHash, SubmitFailure>> + Send;
}

impl<T: ChainEndpoint + Sync> ChainEndpoint for &T {
    type Error = T::Error;

    fn block_number(&self) -> impl Future<Output = Result<u64, Self::Error>> + Send {
        T::block_number(self)
    }

    fn logs(&self, filter: &Filter) -> impl Future<Output = Result<Vec<Log>, Self::Error>> + Send {
        T::logs(self, filter)
    }

    fn transaction(
        &self,
        hash: TxHash,
    ) -> impl Future<Output = Result<Option<Transaction>, Self::Error>> + Send {
        T::transaction(self, hash)
    }

    fn receipt(
        &self,
        hash: TxHash,
    ) -> impl Future<Output = Result<Option<TransactionReceipt>, Self::Error>> + Send {
        T::receipt(self, hash)
    }
}

impl<T: InclusionProver + Sync> InclusionProver for &T {
    fn prove(
        &self,
        receipt: &TransactionReceipt,
        message: &CrossDomainMessage,
    ) -> impl Future<Output = Result<InclusionProof, ProverError>> + Send {
        T::prove(self, receipt, message)
    }
}

impl<T: FraudProofWindow + Sync> FraudProofWindow for &T {
    type Error = T::Error;

    fn inside_fraud_proof_window(
        &self,
        header: &ChainBatchHeader,
    ) -> impl Future<Output = Result<bool, Self::Error>> + Send {
        T::inside_fraud_proof_window(self, header)
    }
}

impl<T: RelaySubmitter + Sync> RelaySubmitter for &T {
    fn submit(
        &self,
        message: &CrossDomainMessage,
        proof: &InclusionProof,
    ) -> impl Future<Output = Result<TxHash, SubmitFailure>> + Send {
        T::submit(self, message, proof)
    }
}
