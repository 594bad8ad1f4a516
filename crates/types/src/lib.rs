//! Types shared by the Metis bridge relayer: cross-domain messages and their
//! identifiers, inclusion proofs, the joined record of a delivered message,
//! and the relay timing configuration.

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

pub mod config;
pub use config::{ConfigError, RelayTimings};

mod direction;
pub use direction::Direction;

mod message;
pub use message::{CrossDomainMessage, MessageIdentifier};

mod pair;
pub use pair::{CrossDomainMessagePair, DeliveryOutcome};

mod proof;
pub use proof::InclusionProof;
