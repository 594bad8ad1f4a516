//! The relay CLI.

use crate::{
    commands::{FinalizeCommand, PrepareDepositCommand, WaitDepositCommand},
    flags::GlobalArgs,
};
use clap::{Parser, Subcommand};

/// Subcommands for the CLI.
#[derive(Debug, Clone, Subcommand)]
pub(crate) enum Commands {
    /// Prove and relay every message of an L2 transaction to L1.
    #[command(alias = "finalize-message")]
    Finalize(FinalizeCommand),
    /// Wait for the messages of an L1 transaction to be delivered on L2.
    #[command(alias = "wait")]
    WaitDeposit(WaitDepositCommand),
    /// Build the L1 call that sends a message to L2.
    PrepareDeposit(PrepareDepositCommand),
}

/// The relay CLI.
#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub(crate) struct Cli {
    /// The subcommand to run.
    #[command(subcommand)]
    pub(crate) subcommand: Commands,
    /// Global arguments for the CLI.
    #[command(flatten)]
    pub(crate) global: GlobalArgs,
}

impl Cli {
    /// Run the subcommand.
    pub(crate) async fn run(self) -> eyre::Result<()> {
        match self.subcommand {
            Commands::Finalize(cmd) => cmd.run(&self.global).await,
            Commands::WaitDeposit(cmd) => cmd.run(&self.global).await,
            Commands::PrepareDeposit(cmd) => cmd.run(&self.global).await,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_finalize() {
        let cli = Cli::try_parse_from([
            "metis-relay",
            "--network",
            "sepolia",
            "finalize",
            "--l1-rpc",
            "http://localhost:8545",
            "--l2-rpc",
            "http://localhost:9545",
            "--private-key",
            "0x0000000000000000000000000000000000000000000000000000000000000001",
            "--tx-hash",
            "0x1111111111111111111111111111111111111111111111111111111111111111",
        ])
        .unwrap();

        assert_eq!(cli.global.network.as_str(), "sepolia");
        assert!(matches!(cli.subcommand, Commands::Finalize(_)));
    }

    #[test]
    fn rejects_unknown_network() {
        let err = Cli::try_parse_from([
            "metis-relay",
            "--network",
            "avalanche",
            "wait-deposit",
            "--l1-rpc",
            "http://localhost:8545",
            "--l2-rpc",
            "http://localhost:9545",
            "--tx-hash",
            "0x1111111111111111111111111111111111111111111111111111111111111111",
        ]);
        assert!(err.is_err());
    }
}
