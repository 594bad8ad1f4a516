use alloy::primitives::Address;

/// Partial set of addresses that replace the hard-coded registry entries,
/// e.g. when pointing the relayer at a fork or a fresh deployment.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomAddresses {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    l1_messenger: Option<Address>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    l2_messenger: Option<Address>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    canonical_transaction_chain: Option<Address>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    address_manager: Option<Address>,
}

impl CustomAddresses {
    /// Create an empty set of overrides.
    pub const fn new() -> Self {
        Self {
            l1_messenger: None,
            l2_messenger: None,
            canonical_transaction_chain: None,
            address_manager: None,
        }
    }

    /// Override the L1 cross-domain messenger.
    pub const fn with_l1_messenger(mut self, address: Address) -> Self {
        self.l1_messenger = Some(address);
        self
    }

    /// Override the L2 cross-domain messenger.
    pub const fn with_l2_messenger(mut self, address: Address) -> Self {
        self.l2_messenger = Some(address);
        self
    }

    /// Override the canonical transaction chain.
    pub const fn with_canonical_transaction_chain(mut self, address: Address) -> Self {
        self.canonical_transaction_chain = Some(address);
        self
    }

    /// Override the address manager.
    pub const fn with_address_manager(mut self, address: Address) -> Self {
        self.address_manager = Some(address);
        self
    }

    /// Get the L1 messenger override.
    pub const fn l1_messenger(&self) -> Option<Address> {
        self.l1_messenger
    }

    /// Get the L2 messenger override.
    pub const fn l2_messenger(&self) -> Option<Address> {
        self.l2_messenger
    }

    /// Get the canonical transaction chain override.
    pub const fn canonical_transaction_chain(&self) -> Option<Address> {
        self.canonical_transaction_chain
    }

    /// Get the address manager override.
    pub const fn address_manager(&self) -> Option<Address> {
        self.address_manager
    }
}
