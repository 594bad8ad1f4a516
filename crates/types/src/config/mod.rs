//! Relay configuration.
//!
//! Timings default to the values the relayer runs with in production and may
//! be overridden from the environment. All waits go through an injected
//! sleeper, so tests can assert on these values without waiting on them.

mod env_utils;
pub use env_utils::{
    load_address, load_address_opt, load_duration_ms_or, load_string, load_string_opt, load_u64,
    load_u64_or, load_url,
};

mod error;
pub use error::ConfigError;

use std::time::Duration;

/// Env var overriding [`RelayTimings::poll_interval`].
pub const POLL_INTERVAL_ENV: &str = "RELAY_POLL_INTERVAL_MS";
/// Env var overriding [`RelayTimings::batch_retry_delay`].
pub const BATCH_RETRY_DELAY_ENV: &str = "BATCH_RETRY_DELAY_MS";
/// Env var overriding [`RelayTimings::fraud_window_delay`].
pub const FRAUD_WINDOW_DELAY_ENV: &str = "FRAUD_WINDOW_DELAY_MS";
/// Env var overriding [`RelayTimings::relay_retry_delay`].
pub const RELAY_RETRY_DELAY_ENV: &str = "RELAY_RETRY_DELAY_MS";
/// Env var overriding [`RelayTimings::lookback_blocks`].
pub const LOOKBACK_BLOCKS_ENV: &str = "LOOKBACK_BLOCKS";

/// Waits and windows used while orchestrating a relay.
#[derive(Debug, Copy, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelayTimings {
    /// Wait between polls of a chain for a receipt or a log.
    pub poll_interval: Duration,
    /// Wait before retrying when no state root batch covers the source
    /// transaction yet.
    pub batch_retry_delay: Duration,
    /// Wait between fraud proof window checks.
    pub fraud_window_delay: Duration,
    /// Wait before retrying a relay submission that failed transiently.
    pub relay_retry_delay: Duration,
    /// How many blocks behind the head to search for a delivery event.
    pub lookback_blocks: u64,
}

impl RelayTimings {
    /// Default [`Self::poll_interval`].
    pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(5);
    /// Default [`Self::batch_retry_delay`].
    pub const DEFAULT_BATCH_RETRY_DELAY: Duration = Duration::from_secs(50);
    /// Default [`Self::fraud_window_delay`].
    pub const DEFAULT_FRAUD_WINDOW_DELAY: Duration = Duration::from_secs(5);
    /// Default [`Self::relay_retry_delay`].
    pub const DEFAULT_RELAY_RETRY_DELAY: Duration = Duration::from_secs(5);
    /// Default [`Self::lookback_blocks`].
    pub const DEFAULT_LOOKBACK_BLOCKS: u64 = 15_000;

    /// Load timings from the environment. Unset variables keep their default.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            poll_interval: load_duration_ms_or(POLL_INTERVAL_ENV, Self::DEFAULT_POLL_INTERVAL)?,
            batch_retry_delay: load_duration_ms_or(
                BATCH_RETRY_DELAY_ENV,
                Self::DEFAULT_BATCH_RETRY_DELAY,
            )?,
            fraud_window_delay: load_duration_ms_or(
                FRAUD_WINDOW_DELAY_ENV,
                Self::DEFAULT_FRAUD_WINDOW_DELAY,
            )?,
            relay_retry_delay: load_duration_ms_or(
                RELAY_RETRY_DELAY_ENV,
                Self::DEFAULT_RELAY_RETRY_DELAY,
            )?,
            lookback_blocks: load_u64_or(LOOKBACK_BLOCKS_ENV, Self::DEFAULT_LOOKBACK_BLOCKS)?,
        })
    }

    /// Set the poll interval.
    pub const fn with_poll_interval(mut self, poll_interval: Duration) -> Self {
        self.poll_interval = poll_interval;
        self
    }

    /// Set the lookback window.
    pub const fn with_lookback_blocks(mut self, lookback_blocks: u64) -> Self {
        self.lookback_blocks = lookback_blocks;
        self
    }
}

impl Default for RelayTimings {
    fn default() -> Self {
        Self {
            poll_interval: Self::DEFAULT_POLL_INTERVAL,
            batch_retry_delay: Self::DEFAULT_BATCH_RETRY_DELAY,
            fraud_window_delay: Self::DEFAULT_FRAUD_WINDOW_DELAY,
            relay_retry_delay: Self::DEFAULT_RELAY_RETRY_DELAY,
            lookback_blocks: Self::DEFAULT_LOOKBACK_BLOCKS,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn defaults() {
        let t = RelayTimings::default();
        assert_eq!(t.batch_retry_delay, Duration::from_secs(50));
        assert_eq!(t.fraud_window_delay, Duration::from_secs(5));
        assert_eq!(t.relay_retry_delay, Duration::from_secs(5));
        assert_eq!(t.lookback_blocks, 15_000);
    }

    // Env vars are process-global, so every env case lives in one test.
    #[test]
    fn from_env_overrides() {
        std::env::remove_var(POLL_INTERVAL_ENV);
        std::env::set_var(BATCH_RETRY_DELAY_ENV, "10");
        std::env::set_var(LOOKBACK_BLOCKS_ENV, "42");

        let t = RelayTimings::from_env().unwrap();
        assert_eq!(t.batch_retry_delay, Duration::from_millis(10));
        assert_eq!(t.lookback_blocks, 42);
        assert_eq!(t.poll_interval, RelayTimings::DEFAULT_POLL_INTERVAL);

        std::env::set_var(LOOKBACK_BLOCKS_ENV, "many");
        assert!(matches!(RelayTimings::from_env(), Err(ConfigError::Parse(_))));

        std::env::remove_var(BATCH_RETRY_DELAY_ENV);
        std::env::remove_var(LOOKBACK_BLOCKS_ENV);
    }
}
