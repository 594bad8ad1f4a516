//! Constants for Andromeda, the Metis mainnet on Ethereum.

use crate::{L1Constants, L2Constants, MetisConstants};
use alloy::primitives::{address, Address};

/// Chain ID of the L1 chain.
pub const L1_CHAIN_ID: u64 = 1;
/// Chain ID of the Metis L2 chain.
pub const L2_CHAIN_ID: u64 = 1088;

/// `Proxy__OVM_L1CrossDomainMessenger` address on L1.
pub const L1_CROSS_DOMAIN_MESSENGER: Address = address!("0x081D1101855bD523bA69A9794e0217F0DB6323ff");
/// `CanonicalTransactionChain` address on L1.
pub const CANONICAL_TRANSACTION_CHAIN: Address = address!("0x56a76bcC92361f6DF8D75476feD8843EdC70e1C9");
/// `AddressManager` address on L1.
pub const ADDRESS_MANAGER: Address = address!("0x918778e825747a892b17C66fe7D24C618262867d");

/// L1 constants for Andromeda, the Metis mainnet on Ethereum.
pub const L1: L1Constants = L1Constants::new(
    L1_CHAIN_ID,
    L1_CROSS_DOMAIN_MESSENGER,
    CANONICAL_TRANSACTION_CHAIN,
    ADDRESS_MANAGER,
);

/// L2 constants for Andromeda, the Metis mainnet on Ethereum.
pub const L2: L2Constants =
    L2Constants::new(L2_CHAIN_ID, crate::L2_CROSS_DOMAIN_MESSENGER, crate::L2_TO_L1_MESSAGE_PASSER);

/// Metis constants for Andromeda, the Metis mainnet on Ethereum.
pub const MAINNET: MetisConstants = MetisConstants::new(L1, L2);
