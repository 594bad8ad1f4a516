use alloy::{primitives::Address, providers::Provider};
use metis_relay_bindings::AddressManager;
use metis_relay_constants::keys;
use tracing::{debug, instrument};

/// Errors returned while resolving addresses through the address manager.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    /// The address manager has no entry for the name.
    #[error("address manager has no entry for {0}")]
    Unregistered(&'static str),
    /// Contract call failure.
    #[error(transparent)]
    Contract(#[from] alloy::contract::Error),
}

/// System contract addresses published by an address manager.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ResolvedAddresses {
    /// The L1 cross-domain messenger proxy.
    pub l1_messenger: Address,
    /// The L2 cross-domain messenger.
    pub l2_messenger: Address,
    /// The state commitment chain.
    pub state_commitment_chain: Address,
}

async fn lookup<P: Provider>(
    manager: &AddressManager::AddressManagerInstance<P>,
    name: &'static str,
) -> Result<Address, ResolveError> {
    let address = manager.getAddress(name.to_string()).call().await?;
    if address.is_zero() {
        return Err(ResolveError::Unregistered(name));
    }
    debug!(name, %address, "resolved address");
    Ok(address)
}

/// Resolve the messengers and the state commitment chain through the address
/// manager at `address_manager` on L1.
#[instrument(skip(provider))]
pub async fn resolve_addresses<P: Provider>(
    provider: P,
    address_manager: Address,
) -> Result<ResolvedAddresses, ResolveError> {
    let manager = AddressManager::new(address_manager, provider);
    Ok(ResolvedAddresses {
        l1_messenger: lookup(&manager, keys::L1_CROSS_DOMAIN_MESSENGER).await?,
        l2_messenger: lookup(&manager, keys::L2_CROSS_DOMAIN_MESSENGER).await?,
        state_commitment_chain: lookup(&manager, keys::STATE_COMMITMENT_CHAIN).await?,
    })
}
