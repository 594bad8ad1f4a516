use crate::{ChainEndpoint, Sleeper};
use alloy::{
    primitives::TxHash,
    rpc::types::{Transaction, TransactionReceipt},
};
use metis_relay_extract::{ExtractError, MessageIndexer};
use metis_relay_types::{
    CrossDomainMessagePair, DeliveryOutcome, Direction, MessageIdentifier, RelayTimings,
};
use std::time::Duration;
use tracing::{debug, info, instrument, trace};

/// Errors returned by the [`Watcher`].
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum WatcherError {
    /// A chain read failed.
    #[error("chain read failed: {0}")]
    Rpc(#[source] Box<dyn core::error::Error + Send + Sync>),
    /// The source transaction sent no message.
    #[error(transparent)]
    Extract(#[from] ExtractError),
    /// A transaction with a known receipt could not be fetched.
    #[error("transaction {0} not found")]
    MissingTransaction(TxHash),
    /// A delivery log carries no transaction hash.
    #[error("delivery log for message {0} has no transaction hash")]
    MissingLogTxHash(MessageIdentifier),
    /// More than one transaction successfully relayed the same message.
    #[error("found {count} transactions relaying message {id}")]
    DuplicateDelivery {
        /// The message identifier.
        id: MessageIdentifier,
        /// The number of successful deliveries found.
        count: usize,
    },
}

impl WatcherError {
    fn rpc(err: impl core::error::Error + Send + Sync + 'static) -> Self {
        Self::Rpc(Box::new(err))
    }
}

/// A delivery of a message observed on the destination chain.
#[derive(Debug, Clone)]
pub struct RemoteDelivery {
    /// The receipt of the delivering transaction.
    pub receipt: TransactionReceipt,
    /// Whether the messenger executed the message.
    pub outcome: DeliveryOutcome,
}

/// One side of the bridge: a chain endpoint and the messenger deployed on it.
#[derive(Debug, Clone)]
pub struct Layer<E> {
    /// The chain endpoint.
    pub endpoint: E,
    /// The indexer of the chain's cross-domain messenger.
    pub indexer: MessageIndexer,
}

impl<E> Layer<E> {
    /// Create a new layer.
    pub const fn new(endpoint: E, indexer: MessageIndexer) -> Self {
        Self { endpoint, indexer }
    }
}

impl<E: ChainEndpoint> Layer<E> {
    async fn transaction(&self, hash: TxHash) -> Result<Transaction, WatcherError> {
        self.endpoint
            .transaction(hash)
            .await
            .map_err(WatcherError::rpc)?
            .ok_or(WatcherError::MissingTransaction(hash))
    }

    async fn poll_receipt<Sl: Sleeper>(
        &self,
        hash: TxHash,
        sleeper: &Sl,
        interval: Duration,
    ) -> Result<TransactionReceipt, WatcherError> {
        loop {
            if let Some(receipt) = self.endpoint.receipt(hash).await.map_err(WatcherError::rpc)? {
                return Ok(receipt);
            }
            trace!(%hash, "waiting for receipt");
            sleeper.sleep(interval).await;
        }
    }

    async fn find_delivery(
        &self,
        id: MessageIdentifier,
        lookback: u64,
    ) -> Result<Option<RemoteDelivery>, WatcherError> {
        let head = self.endpoint.block_number().await.map_err(WatcherError::rpc)?;
        let filter = self.indexer.delivery_filter(id).from_block(head.saturating_sub(lookback));
        let logs = self.endpoint.logs(&filter).await.map_err(WatcherError::rpc)?;

        let mut relayed = Vec::new();
        let mut failed = Vec::new();
        for log in &logs {
            match self.indexer.delivery(log) {
                Some((found, DeliveryOutcome::Relayed)) if found == id => relayed.push(log),
                Some((found, DeliveryOutcome::Failed)) if found == id => failed.push(log),
                _ => {}
            }
        }
        if relayed.len() > 1 {
            return Err(WatcherError::DuplicateDelivery { id, count: relayed.len() });
        }

        // A successful relay supersedes earlier failed attempts.
        let (log, outcome) = match (relayed.first(), failed.last()) {
            (Some(log), _) => (log, DeliveryOutcome::Relayed),
            (None, Some(log)) => (log, DeliveryOutcome::Failed),
            (None, None) => return Ok(None),
        };
        let hash = log.transaction_hash.ok_or(WatcherError::MissingLogTxHash(id))?;

        let Some(receipt) = self.endpoint.receipt(hash).await.map_err(WatcherError::rpc)? else {
            debug!(%hash, "delivery log without receipt");
            return Ok(None);
        };
        Ok(Some(RemoteDelivery { receipt, outcome }))
    }
}

/// Follows cross-domain messages from their source transaction to their
/// delivery on the other chain.
///
/// Holds one [`Layer`] per chain. Waits have no timeout: a message is
/// followed until it is delivered or a read fails.
#[derive(Debug, Clone)]
pub struct Watcher<L1, L2, Sl> {
    l1: Layer<L1>,
    l2: Layer<L2>,
    sleeper: Sl,
    poll_interval: Duration,
    lookback: u64,
}

impl<L1, L2, Sl> Watcher<L1, L2, Sl> {
    /// Create a new watcher.
    pub const fn new(
        l1: Layer<L1>,
        l2: Layer<L2>,
        sleeper: Sl,
        poll_interval: Duration,
        lookback: u64,
    ) -> Self {
        Self { l1, l2, sleeper, poll_interval, lookback }
    }

    /// Create a watcher using the poll interval and lookback from `timings`.
    pub const fn from_timings(
        l1: Layer<L1>,
        l2: Layer<L2>,
        sleeper: Sl,
        timings: &RelayTimings,
    ) -> Self {
        Self::new(l1, l2, sleeper, timings.poll_interval, timings.lookback_blocks)
    }

    /// Get the L1 layer.
    pub const fn l1(&self) -> &Layer<L1> {
        &self.l1
    }

    /// Get the L2 layer.
    pub const fn l2(&self) -> &Layer<L2> {
        &self.l2
    }

    /// Get the number of destination blocks searched for a delivery.
    pub const fn lookback(&self) -> u64 {
        self.lookback
    }

    /// The indexer of the chain messages in `direction` are sent from.
    pub const fn source_indexer(&self, direction: Direction) -> &MessageIndexer {
        match direction {
            Direction::L1ToL2 => &self.l1.indexer,
            Direction::L2ToL1 => &self.l2.indexer,
        }
    }
}

impl<L1, L2, Sl> Watcher<L1, L2, Sl>
where
    L1: ChainEndpoint,
    L2: ChainEndpoint,
    Sl: Sleeper,
{
    /// Search the recent blocks of the destination chain for a delivery of
    /// `id`. `Ok(None)` if there is none yet.
    #[instrument(skip(self))]
    pub async fn find_remote_receipt(
        &self,
        direction: Direction,
        id: MessageIdentifier,
    ) -> Result<Option<RemoteDelivery>, WatcherError> {
        match direction {
            Direction::L1ToL2 => self.l2.find_delivery(id, self.lookback).await,
            Direction::L2ToL1 => self.l1.find_delivery(id, self.lookback).await,
        }
    }

    /// Wait for the receipt of a transaction on the source chain of
    /// `direction`.
    pub async fn source_receipt(
        &self,
        direction: Direction,
        tx_hash: TxHash,
    ) -> Result<TransactionReceipt, WatcherError> {
        match direction {
            Direction::L1ToL2 => {
                self.l1.poll_receipt(tx_hash, &self.sleeper, self.poll_interval).await
            }
            Direction::L2ToL1 => {
                self.l2.poll_receipt(tx_hash, &self.sleeper, self.poll_interval).await
            }
        }
    }

    async fn source_transaction(
        &self,
        direction: Direction,
        tx_hash: TxHash,
    ) -> Result<Transaction, WatcherError> {
        match direction {
            Direction::L1ToL2 => self.l1.transaction(tx_hash).await,
            Direction::L2ToL1 => self.l2.transaction(tx_hash).await,
        }
    }

    async fn remote_transaction(
        &self,
        direction: Direction,
        tx_hash: TxHash,
    ) -> Result<Transaction, WatcherError> {
        match direction {
            Direction::L1ToL2 => self.l2.transaction(tx_hash).await,
            Direction::L2ToL1 => self.l1.transaction(tx_hash).await,
        }
    }

    /// Poll the destination chain until message `id` is delivered.
    pub async fn wait_for_remote_receipt(
        &self,
        direction: Direction,
        id: MessageIdentifier,
    ) -> Result<RemoteDelivery, WatcherError> {
        let mut polls = 0u64;
        loop {
            if let Some(delivery) = self.find_remote_receipt(direction, id).await? {
                return Ok(delivery);
            }
            polls += 1;
            if polls % 12 == 0 {
                info!(%id, %direction, polls, "still waiting for delivery");
            }
            self.sleeper.sleep(self.poll_interval).await;
        }
    }

    /// Wait for message `id`, sent by the transaction with `receipt`, to be
    /// delivered, and join both ends.
    #[instrument(skip_all, fields(%direction, %id, tx_hash = %receipt.transaction_hash))]
    pub async fn wait_for_message(
        &self,
        direction: Direction,
        receipt: TransactionReceipt,
        id: MessageIdentifier,
    ) -> Result<CrossDomainMessagePair, WatcherError> {
        let tx = self.source_transaction(direction, receipt.transaction_hash).await?;
        let RemoteDelivery { receipt: remote_receipt, outcome } =
            self.wait_for_remote_receipt(direction, id).await?;
        let remote_tx = self.remote_transaction(direction, remote_receipt.transaction_hash).await?;

        info!(remote_tx_hash = %remote_receipt.transaction_hash, ?outcome, "message delivered");
        Ok(CrossDomainMessagePair { message_id: id, tx, receipt, remote_tx, remote_receipt, outcome })
    }

    /// Wait for the first message sent by `tx_hash` to be delivered.
    ///
    /// Waits for the source receipt, extracts the message, then polls the
    /// destination chain until the delivery is found. Never returns before
    /// the delivering transaction exists.
    pub async fn wait_for_x_domain_transaction(
        &self,
        tx_hash: TxHash,
        direction: Direction,
    ) -> Result<CrossDomainMessagePair, WatcherError> {
        let receipt = self.source_receipt(direction, tx_hash).await?;
        let ids = self.source_indexer(direction).message_ids(&receipt)?;
        let id = ids.first().copied().ok_or(ExtractError::NoMessageFound { tx_hash })?;
        self.wait_for_message(direction, receipt, id).await
    }
}
