//! Subcommands of the relay CLI.

mod finalize;
pub(crate) use finalize::FinalizeCommand;

mod prepare_deposit;
pub(crate) use prepare_deposit::PrepareDepositCommand;

mod wait_deposit;
pub(crate) use wait_deposit::WaitDepositCommand;

use alloy::providers::DynProvider;
use metis_relay::{resolve_addresses, Layer, ResolvedAddresses, TokioSleeper, Watcher};
use metis_relay_constants::MetisConstants;
use metis_relay_extract::MessageIndexer;
use metis_relay_types::{CrossDomainMessagePair, RelayTimings};
use tracing::{info, warn};

/// Resolve the system contracts through the address manager of `constants`.
async fn resolve(l1: &DynProvider, constants: &MetisConstants) -> eyre::Result<ResolvedAddresses> {
    let addresses = resolve_addresses(l1.clone(), constants.address_manager()).await?;
    if addresses.l1_messenger != constants.l1_messenger() {
        warn!(
            registry = %constants.l1_messenger(),
            resolved = %addresses.l1_messenger,
            "address manager disagrees with the registry, using the resolved messenger"
        );
    }
    info!(
        l1_messenger = %addresses.l1_messenger,
        l2_messenger = %addresses.l2_messenger,
        state_commitment_chain = %addresses.state_commitment_chain,
        "resolved addresses"
    );
    Ok(addresses)
}

/// A watcher over both chains.
fn watcher(
    l1: DynProvider,
    l2: DynProvider,
    constants: &MetisConstants,
    addresses: &ResolvedAddresses,
    timings: &RelayTimings,
) -> Watcher<DynProvider, DynProvider, TokioSleeper> {
    let l1_indexer =
        MessageIndexer::new(addresses.l1_messenger).with_chain_filter(constants.l2_chain_id());
    let l2_indexer = MessageIndexer::new(addresses.l2_messenger);
    Watcher::from_timings(
        Layer::new(l1, l1_indexer),
        Layer::new(l2, l2_indexer),
        TokioSleeper,
        timings,
    )
}

fn report(pairs: &[CrossDomainMessagePair]) {
    for pair in pairs {
        info!(
            message_id = %pair.message_id,
            tx_hash = %pair.receipt.transaction_hash,
            remote_tx_hash = %pair.remote_receipt.transaction_hash,
            outcome = ?pair.outcome,
            "message delivered"
        );
    }
}
