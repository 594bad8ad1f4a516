use crate::flags::{signing_provider, GlobalArgs};
use alloy::{
    primitives::{Address, Bytes},
    providers::Provider,
    rpc::types::TransactionRequest,
    signers::local::PrivateKeySigner,
};
use clap::Args;
use metis_relay::prepare_l2_message;
use tracing::info;
use url::Url;

/// Build, and optionally send, the L1 call that sends a message to L2.
#[derive(Debug, Clone, Args)]
pub(crate) struct PrepareDepositCommand {
    /// The L2 recipient of the message.
    #[arg(long)]
    recipient: Address,
    /// The calldata to execute on the recipient.
    #[arg(long, default_value = "0x")]
    calldata: Bytes,
    /// Gas limit of the L2 execution.
    #[arg(long)]
    gas_limit: Option<u32>,
    /// Send the call through this L1 RPC URL instead of printing it.
    #[arg(long, env = "L1_RPC_URL", requires = "private_key")]
    l1_rpc: Option<Url>,
    /// Key of the sending account.
    #[arg(long, env = "ETH_DEPLOYER_PRIVATE_KEY", hide_env_values = true)]
    private_key: Option<PrivateKeySigner>,
}

impl PrepareDepositCommand {
    pub(crate) async fn run(self, global: &GlobalArgs) -> eyre::Result<()> {
        let constants = global.constants();
        let prepared = prepare_l2_message(&constants, self.recipient, self.calldata, self.gas_limit);

        let (Some(url), Some(signer)) = (self.l1_rpc, self.private_key) else {
            println!("to:       {}", prepared.to);
            println!("value:    {}", prepared.value);
            println!("calldata: {}", prepared.calldata);
            return Ok(());
        };

        let provider = signing_provider(url, signer);
        let request: TransactionRequest = prepared.into();
        let receipt = provider.send_transaction(request).await?.get_receipt().await?;
        info!(
            tx_hash = %receipt.transaction_hash,
            status = receipt.status(),
            "sent message to L2"
        );
        eyre::ensure!(receipt.status(), "deposit transaction {} reverted", receipt.transaction_hash);
        Ok(())
    }
}
