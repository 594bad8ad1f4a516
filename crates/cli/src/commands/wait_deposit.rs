use crate::flags::{GlobalArgs, RpcArgs};
use alloy::primitives::TxHash;
use clap::Args;
use metis_relay::RelayOrchestrator;
use metis_relay_types::RelayTimings;
use tracing::info;

/// Wait for the L2 delivery of the messages of an L1 transaction.
#[derive(Debug, Clone, Args)]
pub(crate) struct WaitDepositCommand {
    #[command(flatten)]
    rpc: RpcArgs,
    /// The L1 transaction that sent the messages.
    #[arg(long, env = "TX_HASH")]
    tx_hash: TxHash,
}

impl WaitDepositCommand {
    pub(crate) async fn run(self, global: &GlobalArgs) -> eyre::Result<()> {
        let constants = global.constants();
        let timings = RelayTimings::from_env()?;
        info!(network = %global.network, tx_hash = %self.tx_hash, "waiting for deposit");

        let l1 = self.rpc.l1();
        let addresses = super::resolve(&l1, &constants).await?;
        let watcher = super::watcher(l1, self.rpc.l2(), &constants, &addresses, &timings);

        let pairs = RelayOrchestrator::deposits(watcher).confirm_deposit(self.tx_hash).await?;
        super::report(&pairs);
        Ok(())
    }
}
