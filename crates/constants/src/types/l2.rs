use crate::CustomAddresses;
use alloy::primitives::Address;

/// Static contract addresses and chain details on L2.
#[derive(Debug, Copy, Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct L2Constants {
    /// L2 chain ID.
    chain_id: u64,
    /// Address of the L2 cross-domain messenger.
    messenger: Address,
    /// Address of the L2 to L1 message passer.
    message_passer: Address,
}

impl L2Constants {
    /// Create a new L2 configuration.
    pub const fn new(chain_id: u64, messenger: Address, message_passer: Address) -> Self {
        Self { chain_id, messenger, message_passer }
    }

    /// Apply the L2 part of a set of custom address overrides.
    pub const fn with_overrides(self, overrides: &CustomAddresses) -> Self {
        match overrides.l2_messenger() {
            Some(messenger) => Self { messenger, ..self },
            None => self,
        }
    }

    /// Get the L2 chain ID.
    pub const fn chain_id(&self) -> u64 {
        self.chain_id
    }

    /// Get the L2 cross-domain messenger address.
    pub const fn messenger(&self) -> Address {
        self.messenger
    }

    /// Get the L2 to L1 message passer address.
    pub const fn message_passer(&self) -> Address {
        self.message_passer
    }
}
