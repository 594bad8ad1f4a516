//! Contract bindings for the Metis bridge.
//!
//! Covers the cross-domain messengers on both chains, the L1 address manager,
//! the state commitment chain and the standard token bridges, along with the
//! codec structs used by the L2 to L1 inclusion proof.

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
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

mod bindings;
pub use bindings::{
    AddressManager, ChainBatchHeader, ChainInclusionProof, CrossDomainMessenger,
    L1StandardBridge, L2MessageInclusionProof, L2StandardBridge, StateCommitmentChain,
};
