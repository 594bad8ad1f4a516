use crate::CustomAddresses;
use alloy::primitives::Address;

/// Static contract addresses and chain details on L1.
#[derive(Debug, Copy, Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct L1Constants {
    /// L1 chain ID.
    chain_id: u64,
    /// Proxy address of the L1 cross-domain messenger.
    messenger: Address,
    /// Address of the canonical transaction chain.
    canonical_transaction_chain: Address,
    /// Address of the address manager.
    address_manager: Address,
}

impl core::fmt::Display for L1Constants {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{{ chain_id: {}, messenger: {}, ctc: {}, address_manager: {} }}",
            self.chain_id, self.messenger, self.canonical_transaction_chain, self.address_manager
        )
    }
}

impl L1Constants {
    /// Create a new L1 configuration.
    pub const fn new(
        chain_id: u64,
        messenger: Address,
        canonical_transaction_chain: Address,
        address_manager: Address,
    ) -> Self {
        Self { chain_id, messenger, canonical_transaction_chain, address_manager }
    }

    /// Apply the L1 part of a set of custom address overrides.
    pub const fn with_overrides(self, overrides: &CustomAddresses) -> Self {
        let mut this = self;
        if let Some(messenger) = overrides.l1_messenger() {
            this.messenger = messenger;
        }
        if let Some(ctc) = overrides.canonical_transaction_chain() {
            this.canonical_transaction_chain = ctc;
        }
        if let Some(address_manager) = overrides.address_manager() {
            this.address_manager = address_manager;
        }
        this
    }

    /// Get the L1 chain ID.
    pub const fn chain_id(&self) -> u64 {
        self.chain_id
    }

    /// Get the L1 cross-domain messenger address.
    pub const fn messenger(&self) -> Address {
        self.messenger
    }

    /// Get the canonical transaction chain address.
    pub const fn canonical_transaction_chain(&self) -> Address {
        self.canonical_transaction_chain
    }

    /// Get the address manager address.
    pub const fn address_manager(&self) -> Address {
        self.address_manager
    }

    /// True if the address is one of the static L1 system contracts.
    pub const fn const_is_system_contract(&self, address: Address) -> bool {
        address.const_eq(&self.messenger)
            || address.const_eq(&self.canonical_transaction_chain)
            || address.const_eq(&self.address_manager)
    }
}
