/// Andromeda (Ethereum mainnet) constants.
pub mod mainnet;

/// Sepolia testnet constants.
pub mod sepolia;

/// Goerli testnet constants.
pub mod goerli;

/// Test utilities for networks.
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
