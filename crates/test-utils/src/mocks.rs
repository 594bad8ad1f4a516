//! Scripted collaborators for the relay stages.

use crate::{chain::MockChain, fixtures};
use alloy::{
    primitives::{Address, Bytes, TxHash, U256},
    rpc::types::TransactionReceipt,
    sol_types::SolCall,
};
use core::convert::Infallible;
use metis_relay::{
    FailureClass, FraudProofWindow, InclusionProver, ProverError, RelaySubmitter, SubmitFailure,
};
use metis_relay_bindings::{ChainBatchHeader, L2StandardBridge::finalizeDepositCall};
use metis_relay_extract::MessageIndexer;
use metis_relay_types::{CrossDomainMessage, InclusionProof, MessageIdentifier};
use std::{
    collections::{HashSet, VecDeque},
    sync::{Arc, Mutex},
};

/// Revert text of a messenger asked to relay a message twice.
pub const ALREADY_RECEIVED: &str = "execution reverted: Provided message has already been received.";

#[derive(Debug)]
struct ProverState {
    proof: InclusionProof,
    committed: bool,
    fatal: bool,
    calls: usize,
}

/// An [`InclusionProver`] returning a fixed proof once its batch is
/// committed.
#[derive(Debug, Clone)]
pub struct ScriptedProver {
    state: Arc<Mutex<ProverState>>,
}

impl ScriptedProver {
    /// A prover whose batch is already committed.
    pub fn committed(proof: InclusionProof) -> Self {
        let state = ProverState { proof, committed: true, fatal: false, calls: 0 };
        Self { state: Arc::new(Mutex::new(state)) }
    }

    /// A prover that reports a missing batch until [`Self::commit`] is called.
    pub fn pending(proof: InclusionProof) -> Self {
        let prover = Self::committed(proof);
        prover.state.lock().unwrap().committed = false;
        prover
    }

    /// A prover that fails with a non-retryable error.
    pub fn fatal() -> Self {
        let prover = Self::committed(fixtures::test_proof(0));
        prover.state.lock().unwrap().fatal = true;
        prover
    }

    /// Commit the batch.
    pub fn commit(&self) {
        self.state.lock().unwrap().committed = true;
    }

    /// The number of prove calls.
    pub fn calls(&self) -> usize {
        self.state.lock().unwrap().calls
    }
}

impl InclusionProver for ScriptedProver {
    async fn prove(
        &self,
        receipt: &TransactionReceipt,
        _message: &CrossDomainMessage,
    ) -> Result<InclusionProof, ProverError> {
        let mut state = self.state.lock().unwrap();
        state.calls += 1;
        if state.fatal {
            return Err(ProverError::MissingStorageProof);
        }
        if !state.committed {
            let tx_index = receipt.block_number.unwrap_or_default().saturating_sub(1);
            return Err(ProverError::NoStateRootBatch { tx_index });
        }
        Ok(state.proof.clone())
    }
}

#[derive(Debug, Default)]
struct WindowState {
    inside: bool,
    polls: usize,
    close_after: Option<usize>,
}

/// A [`FraudProofWindow`] that is open until closed.
#[derive(Debug, Clone, Default)]
pub struct ScriptedFraudWindow {
    state: Arc<Mutex<WindowState>>,
}

impl ScriptedFraudWindow {
    /// A window that has already closed.
    pub fn closed() -> Self {
        Self::default()
    }

    /// A window that is still open.
    pub fn open() -> Self {
        let window = Self::default();
        window.state.lock().unwrap().inside = true;
        window
    }

    /// A window that closes once it has been polled `polls` times.
    pub fn closing_after(polls: usize) -> Self {
        let window = Self::open();
        window.state.lock().unwrap().close_after = Some(polls);
        window
    }

    /// Close the window.
    pub fn close(&self) {
        self.state.lock().unwrap().inside = false;
    }

    /// The number of predicate polls.
    pub fn polls(&self) -> usize {
        self.state.lock().unwrap().polls
    }
}

impl FraudProofWindow for ScriptedFraudWindow {
    type Error = Infallible;

    async fn inside_fraud_proof_window(&self, _: &ChainBatchHeader) -> Result<bool, Self::Error> {
        let mut state = self.state.lock().unwrap();
        if state.close_after == Some(state.polls) {
            state.inside = false;
        }
        state.polls += 1;
        Ok(state.inside)
    }
}

#[derive(Debug, Default)]
struct MessengerState {
    received: HashSet<MessageIdentifier>,
    script: VecDeque<SubmitFailure>,
    attempts: usize,
    delivered: Vec<TxHash>,
    revert_deliveries: bool,
}

/// A destination messenger that executes relays on a [`MockChain`].
///
/// A successful relay mines a transaction emitting `RelayedMessage`. A second
/// relay of the same message fails with [`ALREADY_RECEIVED`]. Failures pushed
/// with [`Self::push_failure`] are returned first, in order. Clones share
/// state, so several relayers can race against one messenger.
#[derive(Debug, Clone)]
pub struct MockMessenger {
    chain: MockChain,
    address: Address,
    relayer: Address,
    state: Arc<Mutex<MessengerState>>,
}

impl MockMessenger {
    /// Create a messenger at `address` on `chain`.
    pub fn new(chain: MockChain, address: Address) -> Self {
        Self { chain, address, relayer: Address::repeat_byte(0xee), state: Default::default() }
    }

    /// Fail the next submission with `reason`, classified by its text.
    pub fn push_failure(&self, reason: &str) -> &Self {
        self.push(SubmitFailure::classify(reason))
    }

    /// Fail the next submission with an explicit class.
    pub fn push_classified(&self, class: FailureClass, reason: &str) -> &Self {
        self.push(SubmitFailure::new(class, reason))
    }

    /// Fail the next submission with `failure`.
    pub fn push(&self, failure: SubmitFailure) -> &Self {
        self.state.lock().unwrap().script.push_back(failure);
        self
    }

    /// Mine deliveries with a failed receipt status.
    pub fn revert_deliveries(&self) {
        self.state.lock().unwrap().revert_deliveries = true;
    }

    /// The number of submissions, including failed ones.
    pub fn attempts(&self) -> usize {
        self.state.lock().unwrap().attempts
    }

    /// The hashes of delivering transactions.
    pub fn delivered(&self) -> Vec<TxHash> {
        self.state.lock().unwrap().delivered.clone()
    }
}

impl RelaySubmitter for MockMessenger {
    async fn submit(
        &self,
        message: &CrossDomainMessage,
        _proof: &InclusionProof,
    ) -> Result<TxHash, SubmitFailure> {
        let id = message.identifier();
        let mut state = self.state.lock().unwrap();
        state.attempts += 1;

        if let Some(failure) = state.script.pop_front() {
            return Err(failure);
        }
        if !state.received.insert(id) {
            return Err(SubmitFailure::classify(ALREADY_RECEIVED));
        }

        let receipt = self.chain.include(
            self.relayer,
            self.address,
            Bytes::from(message.encode_relay_calldata()),
            vec![(self.address, fixtures::relayed_message(id))],
            !state.revert_deliveries,
        );
        state.delivered.push(receipt.transaction_hash);
        Ok(receipt.transaction_hash)
    }
}

/// Delivers deposits the way the L2 sequencer does.
///
/// Every L1 `SentMessage` from `l1_messenger` addressed to the L2 chain is
/// executed on L2: a `finalizeDeposit` payload credits the recipient, and a
/// transaction from the L2 messenger emitting `RelayedMessage` is mined.
#[derive(Debug, Clone)]
pub struct MockSequencer {
    l1: MockChain,
    l2: MockChain,
    l1_messenger: Address,
    l2_messenger: Address,
    delivered: Arc<Mutex<HashSet<MessageIdentifier>>>,
}

impl MockSequencer {
    /// Create a sequencer between two chains.
    pub fn new(l1: MockChain, l2: MockChain, l1_messenger: Address, l2_messenger: Address) -> Self {
        Self { l1, l2, l1_messenger, l2_messenger, delivered: Default::default() }
    }

    /// Deliver every pending deposit. Returns the number delivered.
    pub fn sync(&self) -> usize {
        let indexer = MessageIndexer::new(self.l1_messenger).with_chain_filter(self.l2.chain_id());
        let mut delivered = self.delivered.lock().unwrap();
        let mut count = 0;

        for message in indexer.messages_in_logs(&self.l1.all_logs()) {
            let id = message.identifier();
            if !delivered.insert(id) {
                continue;
            }
            if let Ok(call) = finalizeDepositCall::abi_decode(message.payload()) {
                self.l2.credit(call.to, call.amount);
            }
            self.l2.include(
                self.l2_messenger,
                message.target(),
                message.payload().clone(),
                vec![(self.l2_messenger, fixtures::relayed_message(id))],
                true,
            );
            count += 1;
        }
        count
    }

    /// Get the L2 balance of `who`.
    pub fn l2_balance(&self, who: Address) -> U256 {
        self.l2.balance_of(who)
    }
}
