//! Constants for the Metis Goerli testnet.

use crate::{L1Constants, L2Constants, MetisConstants};
use alloy::primitives::{address, Address};

/// Chain ID of the L1 chain.
pub const L1_CHAIN_ID: u64 = 5;
/// Chain ID of the Metis L2 chain.
pub const L2_CHAIN_ID: u64 = 599;

/// `Proxy__OVM_L1CrossDomainMessenger` address on L1.
pub const L1_CROSS_DOMAIN_MESSENGER: Address = address!("0x914Aed79Cd083B5043C75A90616CC2A0477bf86c");
/// `CanonicalTransactionChain` address on L1.
pub const CANONICAL_TRANSACTION_CHAIN: Address = address!("0x6Aec60fc997B4e2931b892398517b56F7b3C48Dd");
/// `AddressManager` address on L1.
pub const ADDRESS_MANAGER: Address = address!("0x0C40f1f7A3B348F8e223F25e9d5808eA5FB43349");

/// L1 constants for the Metis Goerli testnet.
pub const L1: L1Constants = L1Constants::new(
    L1_CHAIN_ID,
    L1_CROSS_DOMAIN_MESSENGER,
    CANONICAL_TRANSACTION_CHAIN,
    ADDRESS_MANAGER,
);

/// L2 constants for the Metis Goerli testnet.
pub const L2: L2Constants =
    L2Constants::new(L2_CHAIN_ID, crate::L2_CROSS_DOMAIN_MESSENGER, crate::L2_TO_L1_MESSAGE_PASSER);

/// Metis constants for the Metis Goerli testnet.
pub const GOERLI: MetisConstants = MetisConstants::new(L1, L2);
