//! Metis cross-domain message relay.
//!
//! Observes a transaction on one chain, finds the cross-domain messages it
//! sent, and follows each message to its delivery on the other chain. For
//! withdrawals (L2 to L1) this includes building the inclusion proof, waiting
//! out the fraud proof window and submitting the message to the L1 messenger.
//!
//! Every wait goes through a [`Sleeper`], and every chain is accessed through
//! an injected [`ChainEndpoint`], so whole flows can run against in-memory
//! chains without waiting in real time.

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

mod classify;
pub use classify::{classify_failure, FailureClass, SubmitFailure};

mod deposit;
pub use deposit::{prepare_l2_message, PreparedMessage, DEFAULT_L2_GAS_LIMIT, DEPOSIT_CALL_VALUE};

mod gate;
pub use gate::{FraudWindowGate, StateCommitmentChainWindow};

mod impls;

pub mod merkle;

mod orchestrator;
pub use orchestrator::{OrchestratorError, RelayOrchestrator};

mod proof;
pub use proof::ProofBuilder;

mod prover;
pub use prover::{ProverError, SccProver};

mod relayer;
pub use relayer::{MessengerSubmitter, RelayError, RelayOutcome, Relayer};

mod resolve;
pub use resolve::{resolve_addresses, ResolveError, ResolvedAddresses};

mod sleep;
pub use sleep::{Sleeper, TokioSleeper};

mod traits;
pub use traits::{ChainEndpoint, FraudProofWindow, InclusionProver, RelaySubmitter};

mod watcher;
pub use watcher::{Layer, RemoteDelivery, Watcher, WatcherError};
