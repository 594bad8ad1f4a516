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

//! Contains logic for extracting cross-domain messages and their delivery
//! events from transaction receipts and logs.

mod error;
pub use error::ExtractError;

mod events;
pub use events::MessengerEvent;

mod indexer;
pub use indexer::MessageIndexer;
