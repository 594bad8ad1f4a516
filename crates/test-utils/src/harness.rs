//! Two in-memory chains wired up with the test network constants.

use crate::{
    chain::MockChain,
    fixtures,
    mocks::{MockMessenger, MockSequencer},
    sleeper::RecordingSleeper,
    test_constants::{L1_CHAIN_ID, L2_CHAIN_ID, TEST},
};
use alloy::{primitives::Address, rpc::types::TransactionReceipt};
use metis_relay::{
    FraudProofWindow, FraudWindowGate, InclusionProver, Layer, ProofBuilder, RelayOrchestrator,
    RelaySubmitter, Relayer, Watcher,
};
use metis_relay_extract::MessageIndexer;
use metis_relay_types::{CrossDomainMessage, RelayTimings};

/// A test orchestrator over two [`MockChain`]s.
pub type MockOrchestrator<P, W, S> = RelayOrchestrator<
    MockChain,
    MockChain,
    RecordingSleeper,
    ProofBuilder<P, RecordingSleeper>,
    FraudWindowGate<W, RecordingSleeper>,
    Relayer<S, RecordingSleeper>,
>;

/// An L1 and an L2 chain sharing one recording sleeper.
#[derive(Debug, Clone)]
pub struct Bridge {
    /// The L1 chain.
    pub l1: MockChain,
    /// The L2 chain.
    pub l2: MockChain,
    /// The sleeper shared by every stage.
    pub sleeper: RecordingSleeper,
    /// The relay timings.
    pub timings: RelayTimings,
}

impl Default for Bridge {
    fn default() -> Self {
        Self::new()
    }
}

impl Bridge {
    /// Create two empty chains with default timings.
    pub fn new() -> Self {
        Self {
            l1: MockChain::new(L1_CHAIN_ID),
            l2: MockChain::new(L2_CHAIN_ID),
            sleeper: RecordingSleeper::new(),
            timings: RelayTimings::default(),
        }
    }

    /// A watcher over both chains.
    pub fn watcher(&self) -> Watcher<MockChain, MockChain, RecordingSleeper> {
        let l1 = Layer::new(
            self.l1.clone(),
            MessageIndexer::new(TEST.l1_messenger()).with_chain_filter(L2_CHAIN_ID),
        );
        let l2 = Layer::new(self.l2.clone(), MessageIndexer::new(TEST.l2_messenger()));
        Watcher::from_timings(l1, l2, self.sleeper.clone(), &self.timings)
    }

    /// An orchestrator for both flows.
    pub fn orchestrator<P, W, S>(&self, prover: P, window: W, submitter: S) -> MockOrchestrator<P, W, S>
    where
        P: InclusionProver,
        W: FraudProofWindow,
        S: RelaySubmitter,
    {
        RelayOrchestrator::new(
            self.watcher(),
            ProofBuilder::from_timings(prover, self.sleeper.clone(), &self.timings),
            FraudWindowGate::from_timings(window, self.sleeper.clone(), &self.timings),
            Relayer::from_timings(submitter, self.sleeper.clone(), &self.timings),
        )
    }

    /// The L1 messenger, executing relays on L1.
    pub fn l1_messenger(&self) -> MockMessenger {
        MockMessenger::new(self.l1.clone(), TEST.l1_messenger())
    }

    /// A sequencer delivering deposits from L1 to L2.
    pub fn sequencer(&self) -> MockSequencer {
        MockSequencer::new(self.l1.clone(), self.l2.clone(), TEST.l1_messenger(), TEST.l2_messenger())
    }

    /// Mine an L1 transaction sending `message` to L2.
    pub fn send_from_l1(&self, message: &CrossDomainMessage) -> TransactionReceipt {
        self.l1.include(
            message.sender(),
            TEST.l1_messenger(),
            message.payload().clone(),
            vec![(TEST.l1_messenger(), fixtures::sent_message(message, L2_CHAIN_ID))],
            true,
        )
    }

    /// Mine an L2 transaction sending `message` to L1.
    pub fn send_from_l2(&self, message: &CrossDomainMessage) -> TransactionReceipt {
        self.send_many_from_l2(std::slice::from_ref(message))
    }

    /// Mine one L2 transaction sending every message in `messages` to L1.
    pub fn send_many_from_l2(&self, messages: &[CrossDomainMessage]) -> TransactionReceipt {
        let events = messages
            .iter()
            .map(|m| (TEST.l2_messenger(), fixtures::sent_message(m, L2_CHAIN_ID)))
            .collect();
        self.l2.include(Address::repeat_byte(0xaa), TEST.l2_messenger(), Default::default(), events, true)
    }
}
