//! Names under which the address manager publishes system contracts.

/// Proxy of the L1 cross-domain messenger.
pub const L1_CROSS_DOMAIN_MESSENGER: &str = "Proxy__OVM_L1CrossDomainMessenger";

/// The L2 cross-domain messenger.
pub const L2_CROSS_DOMAIN_MESSENGER: &str = "L2CrossDomainMessenger";

/// The state commitment chain, which records L2 state-root batches on L1.
pub const STATE_COMMITMENT_CHAIN: &str = "StateCommitmentChain";
