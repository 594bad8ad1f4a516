//! Constants for local test networks.

use crate::{L1Constants, L2Constants, MetisConstants};
use alloy::primitives::Address;

/// Test chain id for L1.
pub const L1_CHAIN_ID: u64 = 31337;
/// Test chain id for L2.
pub const L2_CHAIN_ID: u64 = 59902;

/// Test address for the L1 messenger.
pub const L1_CROSS_DOMAIN_MESSENGER: Address = Address::repeat_byte(0x11);
/// Test address for the canonical transaction chain.
pub const CANONICAL_TRANSACTION_CHAIN: Address = Address::repeat_byte(0x22);
/// Test address for the address manager.
pub const ADDRESS_MANAGER: Address = Address::repeat_byte(0x33);
/// Test address for the state commitment chain. Not part of the static
/// registry; tests hand it out from a mocked address manager.
pub const STATE_COMMITMENT_CHAIN: Address = Address::repeat_byte(0x44);

/// L1 test constants.
pub const L1: L1Constants = L1Constants::new(
    L1_CHAIN_ID,
    L1_CROSS_DOMAIN_MESSENGER,
    CANONICAL_TRANSACTION_CHAIN,
    ADDRESS_MANAGER,
);

/// L2 test constants.
pub const L2: L2Constants =
    L2Constants::new(L2_CHAIN_ID, crate::L2_CROSS_DOMAIN_MESSENGER, crate::L2_TO_L1_MESSAGE_PASSER);

/// Metis test constants.
pub const TEST: MetisConstants = MetisConstants::new(L1, L2);
