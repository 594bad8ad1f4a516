//! Metis bridge constants.
//!
//! This crate contains the static address registry for the networks the
//! relayer knows about: chain ids, the cross-domain messengers, the canonical
//! transaction chain and the address manager, as well as the names under which
//! the address manager publishes the contracts resolved at runtime.

#![warn(
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unreachable_pub,
    clippy::missing_const_for_fn,
    rustdoc::all
)]
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
#![deny(unused_must_use, rust_2018_idioms)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod chains;
pub use chains::goerli;
pub use chains::mainnet;
pub use chains::sepolia;
#[cfg(any(test, feature = "test-utils"))]
pub use chains::test_utils;

pub mod keys;

mod types;
pub use types::{
    CustomAddresses, KnownNetworks, L1Constants, L2Constants, MetisConstants, ParseNetworkError,
};

/// Address of the L2 cross-domain messenger predeploy. Identical on every
/// Metis network.
pub const L2_CROSS_DOMAIN_MESSENGER: alloy::primitives::Address =
    alloy::primitives::address!("0x4200000000000000000000000000000000000007");

/// Address of the L2 to L1 message passer predeploy. Its storage records every
/// message sent from L2 and is the target of the storage trie witness.
pub const L2_TO_L1_MESSAGE_PASSER: alloy::primitives::Address =
    alloy::primitives::address!("0x4200000000000000000000000000000000000000");
