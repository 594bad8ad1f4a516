//! Arguments shared by the subcommands.

use alloy::{
    network::EthereumWallet,
    primitives::Address,
    providers::{DynProvider, Provider, ProviderBuilder},
    signers::local::PrivateKeySigner,
};
use clap::Args;
use metis_relay_constants::{CustomAddresses, KnownNetworks, MetisConstants};
use url::Url;

/// Network selection and address overrides.
#[derive(Debug, Clone, Args)]
pub(crate) struct GlobalArgs {
    /// The Metis network.
    #[arg(long, global = true, env = "NETWORK", default_value = "mainnet")]
    pub(crate) network: KnownNetworks,
    /// Use this L1 messenger instead of the registry entry.
    #[arg(long, global = true, env = "L1_CROSS_DOMAIN_MESSENGER")]
    pub(crate) l1_messenger: Option<Address>,
    /// Use this address manager instead of the registry entry.
    #[arg(long, global = true, env = "ADDRESS_MANAGER")]
    pub(crate) address_manager: Option<Address>,
}

impl GlobalArgs {
    /// The network constants with overrides applied.
    pub(crate) fn constants(&self) -> MetisConstants {
        let mut overrides = CustomAddresses::new();
        if let Some(address) = self.l1_messenger {
            overrides = overrides.with_l1_messenger(address);
        }
        if let Some(address) = self.address_manager {
            overrides = overrides.with_address_manager(address);
        }
        MetisConstants::for_network(self.network).with_overrides(&overrides)
    }
}

/// RPC endpoints of both chains.
#[derive(Debug, Clone, Args)]
pub(crate) struct RpcArgs {
    /// The L1 RPC URL.
    #[arg(long, env = "L1_RPC_URL")]
    pub(crate) l1_rpc: Url,
    /// The L2 RPC URL.
    #[arg(long, env = "L2_RPC_URL")]
    pub(crate) l2_rpc: Url,
}

impl RpcArgs {
    /// A read-only L1 provider.
    pub(crate) fn l1(&self) -> DynProvider {
        ProviderBuilder::new().connect_http(self.l1_rpc.clone()).erased()
    }

    /// A read-only L2 provider.
    pub(crate) fn l2(&self) -> DynProvider {
        ProviderBuilder::new().connect_http(self.l2_rpc.clone()).erased()
    }
}

/// Connect to `url` with a provider signing as `signer`.
pub(crate) fn signing_provider(url: Url, signer: PrivateKeySigner) -> DynProvider {
    ProviderBuilder::new().wallet(EthereumWallet::from(signer)).connect_http(url).erased()
}
