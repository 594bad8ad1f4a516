use std::str::FromStr;

/// The list of known networks as a string.
const KNOWN_NETWORKS: &str = "mainnet, sepolia, goerli";

/// Error type for parsing struct from a network name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseNetworkError {
    /// The network name is not supported.
    #[error("network name {0} is not parseable. supported networks: {KNOWN_NETWORKS}")]
    NetworkNotSupported(String),
}

/// Known networks for the Metis bridge.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum KnownNetworks {
    /// Ethereum mainnet and Metis Andromeda.
    Mainnet,
    /// Ethereum Sepolia and the Metis Sepolia testnet.
    Sepolia,
    /// Ethereum Goerli and the Metis Goerli testnet.
    Goerli,
    /// Local test network.
    #[cfg(any(test, feature = "test-utils"))]
    Test,
}

impl KnownNetworks {
    /// The canonical lowercase name of the network.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Mainnet => "mainnet",
            Self::Sepolia => "sepolia",
            Self::Goerli => "goerli",
            #[cfg(any(test, feature = "test-utils"))]
            Self::Test => "test",
        }
    }
}

impl core::fmt::Display for KnownNetworks {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for KnownNetworks {
    type Err = ParseNetworkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_lowercase();
        match s.as_str() {
            #[cfg(any(test, feature = "test-utils"))]
            "test" => Ok(Self::Test),
            "mainnet" => Ok(Self::Mainnet),
            "sepolia" => Ok(Self::Sepolia),
            "goerli" => Ok(Self::Goerli),
            _ => Err(ParseNetworkError::NetworkNotSupported(s)),
        }
    }
}
