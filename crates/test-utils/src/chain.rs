//! An in-memory chain implementing [`ChainEndpoint`].

use crate::fixtures::{self, TxLocation};
use alloy::{
    primitives::{keccak256, Address, Bytes, LogData, TxHash, B256, U256},
    rpc::types::{Filter, Log, Transaction, TransactionReceipt},
};
use core::convert::Infallible;
use metis_relay::ChainEndpoint;
use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

#[derive(Debug, Default)]
struct ChainState {
    chain_id: u64,
    head: u64,
    txs: HashMap<TxHash, (Transaction, TransactionReceipt)>,
    logs: Vec<Log>,
    balances: HashMap<Address, U256>,
    reads: usize,
}

/// A chain held in memory. Clones share the same state.
///
/// Every included transaction is mined in its own block.
#[derive(Debug, Clone, Default)]
pub struct MockChain {
    state: Arc<Mutex<ChainState>>,
}

impl MockChain {
    /// Create an empty chain.
    pub fn new(chain_id: u64) -> Self {
        let state = ChainState { chain_id, ..Default::default() };
        Self { state: Arc::new(Mutex::new(state)) }
    }

    /// Get the chain id.
    pub fn chain_id(&self) -> u64 {
        self.state.lock().unwrap().chain_id
    }

    /// Get the head block number.
    pub fn head(&self) -> u64 {
        self.state.lock().unwrap().head
    }

    /// Advance the head by `blocks` empty blocks.
    pub fn mine(&self, blocks: u64) -> u64 {
        let mut state = self.state.lock().unwrap();
        state.head += blocks;
        state.head
    }

    /// Include a transaction from `from` to `to` emitting `events` in a new
    /// block. Events are `(emitter, data)` pairs.
    pub fn include(
        &self,
        from: Address,
        to: Address,
        input: Bytes,
        events: Vec<(Address, LogData)>,
        status: bool,
    ) -> TransactionReceipt {
        let mut state = self.state.lock().unwrap();
        state.head += 1;

        let hash = keccak256([&state.chain_id.to_be_bytes()[..], &state.head.to_be_bytes()].concat());
        let at = TxLocation {
            hash,
            block_number: state.head,
            block_hash: keccak256(hash),
        };

        let logs: Vec<_> = events
            .into_iter()
            .enumerate()
            .map(|(i, (emitter, data))| fixtures::rpc_log(emitter, data, &at, i as u64))
            .collect();
        let tx = fixtures::transaction(&at, from, to, &input);
        let receipt = fixtures::receipt(&at, from, to, &logs, status);

        state.logs.extend(logs);
        state.txs.insert(hash, (tx, receipt.clone()));
        receipt
    }

    /// Credit `amount` to `who`.
    pub fn credit(&self, who: Address, amount: U256) {
        *self.state.lock().unwrap().balances.entry(who).or_default() += amount;
    }

    /// Get the balance of `who`.
    pub fn balance_of(&self, who: Address) -> U256 {
        self.state.lock().unwrap().balances.get(&who).copied().unwrap_or_default()
    }

    /// All logs on the chain, in order.
    pub fn all_logs(&self) -> Vec<Log> {
        self.state.lock().unwrap().logs.clone()
    }

    /// The number of reads served.
    pub fn reads(&self) -> usize {
        self.state.lock().unwrap().reads
    }

    fn read<T>(&self, f: impl FnOnce(&ChainState) -> T) -> T {
        let mut state = self.state.lock().unwrap();
        state.reads += 1;
        f(&state)
    }
}

fn matches(filter: &Filter, log: &Log) -> bool {
    let number = log.block_number.unwrap_or_default();
    let in_range = filter.get_from_block().is_none_or(|from| number >= from)
        && filter.get_to_block().is_none_or(|to| number <= to);
    let topics = log.topics();

    in_range
        && filter.address.matches(&log.address())
        && filter.topics.iter().enumerate().all(|(i, set)| {
            set.is_empty() || topics.get(i).is_some_and(|topic: &B256| set.matches(topic))
        })
}

impl ChainEndpoint for MockChain {
    type Error = Infallible;

    async fn block_number(&self) -> Result<u64, Self::Error> {
        Ok(self.read(|s| s.head))
    }

    async fn logs(&self, filter: &Filter) -> Result<Vec<Log>, Self::Error> {
        Ok(self.read(|s| s.logs.iter().filter(|log| matches(filter, log)).cloned().collect()))
    }

    async fn transaction(&self, hash: TxHash) -> Result<Option<Transaction>, Self::Error> {
        Ok(self.read(|s| s.txs.get(&hash).map(|(tx, _)| tx.clone())))
    }

    async fn receipt(&self, hash: TxHash) -> Result<Option<TransactionReceipt>, Self::Error> {
        Ok(self.read(|s| s.txs.get(&hash).map(|(_, receipt)| receipt.clone())))
    }
}
