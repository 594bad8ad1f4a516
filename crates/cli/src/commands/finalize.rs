use crate::flags::{signing_provider, GlobalArgs, RpcArgs};
use alloy::{primitives::TxHash, signers::local::PrivateKeySigner};
use clap::Args;
use metis_relay::{
    FraudWindowGate, MessengerSubmitter, ProofBuilder, RelayOrchestrator, Relayer, SccProver,
    StateCommitmentChainWindow, TokioSleeper,
};
use metis_relay_types::RelayTimings;
use tracing::info;

/// Prove and relay the messages of an L2 transaction.
#[derive(Debug, Clone, Args)]
pub(crate) struct FinalizeCommand {
    #[command(flatten)]
    rpc: RpcArgs,
    /// Key of the account paying for the relay on L1.
    #[arg(long, env = "ETH_DEPLOYER_PRIVATE_KEY", hide_env_values = true)]
    private_key: PrivateKeySigner,
    /// The L2 transaction that sent the messages.
    #[arg(long, env = "TX_HASH")]
    tx_hash: TxHash,
}

impl FinalizeCommand {
    pub(crate) async fn run(self, global: &GlobalArgs) -> eyre::Result<()> {
        let constants = global.constants();
        let timings = RelayTimings::from_env()?;
        info!(
            network = %global.network,
            tx_hash = %self.tx_hash,
            relayer = %self.private_key.address(),
            "finalizing withdrawal"
        );

        // Step 1: connect.
        let l1 = self.rpc.l1();
        let l2 = self.rpc.l2();
        let sender = signing_provider(self.rpc.l1_rpc.clone(), self.private_key);

        // Step 2: resolve the system contracts.
        let addresses = super::resolve(&l1, &constants).await?;

        // Step 3: assemble the stages.
        let l2_chain_id = constants.l2_chain_id();
        let prover = SccProver::new(
            l1.clone(),
            l2.clone(),
            addresses.state_commitment_chain,
            l2_chain_id,
            addresses.l2_messenger,
        )
        .with_message_passer(constants.l2().message_passer());
        let window = StateCommitmentChainWindow::new(addresses.state_commitment_chain, l1.clone());
        let submitter = MessengerSubmitter::new(addresses.l1_messenger, sender, l2_chain_id);

        let orchestrator = RelayOrchestrator::new(
            super::watcher(l1, l2, &constants, &addresses, &timings),
            ProofBuilder::from_timings(prover, TokioSleeper, &timings),
            FraudWindowGate::from_timings(window, TokioSleeper, &timings),
            Relayer::from_timings(submitter, TokioSleeper, &timings),
        );

        // Step 4: prove, wait out the fraud proof window and relay.
        let pairs = orchestrator.finalize_withdrawal(self.tx_hash).await?;

        // Step 5: report.
        super::report(&pairs);
        info!(count = pairs.len(), "withdrawal finalized");
        Ok(())
    }
}
