mod chains;
pub use chains::{KnownNetworks, ParseNetworkError};

mod l1;
pub use l1::L1Constants;

mod l2;
pub use l2::L2Constants;

mod overrides;
pub use overrides::CustomAddresses;

use alloy::primitives::{Address, U256};
use std::str::FromStr;

/// Metis bridge constants.
///
/// This struct pairs the L1 and L2 constants of one Metis network. It is the
/// static half of the address registry: the relayer starts from these
/// addresses and resolves the remaining system contracts through the address
/// manager at runtime.
#[derive(Debug, Copy, Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub struct MetisConstants {
    /// L1 constants.
    l1: L1Constants,
    /// L2 constants.
    l2: L2Constants,
}

impl MetisConstants {
    /// Create a new set of constants.
    pub const fn new(l1: L1Constants, l2: L2Constants) -> Self {
        Self { l1, l2 }
    }

    /// Get the hard-coded Andromeda (mainnet) constants.
    pub const fn mainnet() -> Self {
        crate::chains::mainnet::MAINNET
    }

    /// Get the hard-coded Sepolia testnet constants.
    pub const fn sepolia() -> Self {
        crate::chains::sepolia::SEPOLIA
    }

    /// Get the hard-coded Goerli testnet constants.
    pub const fn goerli() -> Self {
        crate::chains::goerli::GOERLI
    }

    /// Get the hard-coded local test constants.
    #[cfg(any(test, feature = "test-utils"))]
    pub const fn test() -> Self {
        crate::chains::test_utils::TEST
    }

    /// Get the constants for a known network.
    pub const fn for_network(network: KnownNetworks) -> Self {
        match network {
            KnownNetworks::Mainnet => Self::mainnet(),
            KnownNetworks::Sepolia => Self::sepolia(),
            KnownNetworks::Goerli => Self::goerli(),
            #[cfg(any(test, feature = "test-utils"))]
            KnownNetworks::Test => Self::test(),
        }
    }

    /// Apply custom address overrides on top of these constants.
    pub const fn with_overrides(self, overrides: &CustomAddresses) -> Self {
        Self { l1: self.l1.with_overrides(overrides), l2: self.l2.with_overrides(overrides) }
    }

    /// Get the L1 constants.
    pub const fn l1(&self) -> L1Constants {
        self.l1
    }

    /// Get the L2 constants.
    pub const fn l2(&self) -> L2Constants {
        self.l2
    }

    /// Get the L1 chain ID.
    pub const fn l1_chain_id(&self) -> u64 {
        self.l1.chain_id()
    }

    /// Get the L2 chain ID.
    pub const fn l2_chain_id(&self) -> u64 {
        self.l2.chain_id()
    }

    /// Get the L2 chain ID as a [`U256`], the form the messenger contracts
    /// take it in.
    pub fn l2_chain_id_u256(&self) -> U256 {
        U256::from(self.l2_chain_id())
    }

    /// Get the L1 cross-domain messenger address.
    pub const fn l1_messenger(&self) -> Address {
        self.l1.messenger()
    }

    /// Get the L2 cross-domain messenger address.
    pub const fn l2_messenger(&self) -> Address {
        self.l2.messenger()
    }

    /// Get the address manager address.
    pub const fn address_manager(&self) -> Address {
        self.l1.address_manager()
    }

    /// Get the canonical transaction chain address.
    pub const fn canonical_transaction_chain(&self) -> Address {
        self.l1.canonical_transaction_chain()
    }

    /// Get the messenger address for the chain with the given id, if it is
    /// one of the two chains of this network.
    pub const fn messenger_for(&self, chain_id: u64) -> Option<Address> {
        if chain_id == self.l1_chain_id() {
            Some(self.l1_messenger())
        } else if chain_id == self.l2_chain_id() {
            Some(self.l2_messenger())
        } else {
            None
        }
    }
}

impl FromStr for MetisConstants {
    type Err = ParseNetworkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<KnownNetworks>().map(Self::for_network)
    }
}
