//! Constants for the Metis Sepolia testnet.

use crate::{L1Constants, L2Constants, MetisConstants};
use alloy::primitives::{address, Address};

/// Chain ID of the L1 chain.
pub const L1_CHAIN_ID: u64 = 11155111;
/// Chain ID of the Metis L2 chain.
pub const L2_CHAIN_ID: u64 = 59901;

/// `Proxy__OVM_L1CrossDomainMessenger` address on L1.
pub const L1_CROSS_DOMAIN_MESSENGER: Address = address!("0x46fa781883aEC3269C5eff9beD69770404bC68e9");
/// `CanonicalTransactionChain` address on L1.
pub const CANONICAL_TRANSACTION_CHAIN: Address = address!("0x9eA62b728e56d5AefC911B5C019CEFc829968833");
/// `AddressManager` address on L1.
pub const ADDRESS_MANAGER: Address = address!("0x01Af3B22741408d8fEfEFD82ba80472442975fD8");

/// L1 constants for the Metis Sepolia testnet.
pub const L1: L1Constants = L1Constants::new(
    L1_CHAIN_ID,
    L1_CROSS_DOMAIN_MESSENGER,
    CANONICAL_TRANSACTION_CHAIN,
    ADDRESS_MANAGER,
);

/// L2 constants for the Metis Sepolia testnet.
pub const L2: L2Constants =
    L2Constants::new(L2_CHAIN_ID, crate::L2_CROSS_DOMAIN_MESSENGER, crate::L2_TO_L1_MESSAGE_PASSER);

/// Metis constants for the Metis Sepolia testnet.
pub const SEPOLIA: MetisConstants = MetisConstants::new(L1, L2);
