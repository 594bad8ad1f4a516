//! `metis-relay`: finalize withdrawals and follow deposits between Ethereum
//! and Metis.
//!
//! ## Usage
//!
//! ```sh
//! metis-relay finalize --network mainnet --l1-rpc $L1_RPC_URL --l2-rpc $L2_RPC_URL \
//!     --private-key $ETH_DEPLOYER_PRIVATE_KEY --tx-hash $TX_HASH
//! metis-relay wait-deposit --network mainnet --tx-hash $TX_HASH
//! metis-relay prepare-deposit --network mainnet --recipient 0x... --calldata 0x...
//! ```
//!
//! Relay timings are read from the environment, see
//! [`metis_relay_types::RelayTimings::from_env`]. Log output is controlled by
//! `RUST_LOG` and defaults to `info`.

#![warn(missing_debug_implementations, missing_docs, rust_2018_idioms)]

mod cli;
mod commands;
mod flags;

use clap::Parser;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[tokio::main]
async fn main() -> eyre::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing();
    cli.run().await
}
