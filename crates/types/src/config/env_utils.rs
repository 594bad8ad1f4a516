use crate::ConfigError;
use alloy::primitives::Address;
use std::{borrow::Cow, env, time::Duration};

/// Load a variable from the environment
pub fn load_string(key: &str) -> Result<String, ConfigError> {
    env::var(key).map_err(|_| ConfigError::missing(key))
}

/// Load a variable from the environment
pub fn load_string_opt(key: &str) -> Option<String> {
    env::var(key).ok()
}

/// Load a variable from the environment
pub fn load_u64(key: &str) -> Result<u64, ConfigError> {
    let val = load_string(key)?;
    val.parse::<u64>().map_err(Into::into)
}

/// Load a variable from the environment, falling back to `default` if it is
/// unset. A set but malformed value is an error.
pub fn load_u64_or(key: &str, default: u64) -> Result<u64, ConfigError> {
    match load_string_opt(key) {
        Some(val) => val.trim().parse::<u64>().map_err(Into::into),
        None => Ok(default),
    }
}

/// Load a millisecond duration from the environment, falling back to
/// `default` if it is unset.
pub fn load_duration_ms_or(key: &str, default: Duration) -> Result<Duration, ConfigError> {
    load_u64_or(key, default.as_millis() as u64).map(Duration::from_millis)
}

/// Load a variable from the environment
pub fn load_url(key: &str) -> Result<Cow<'static, str>, ConfigError> {
    load_string(key).map(Into::into)
}

/// Load a variable from the environment
pub fn load_address(key: &str) -> Result<Address, ConfigError> {
    load_string(key)?.parse().map_err(Into::into)
}

/// Load a variable from the environment
pub fn load_address_opt(key: &str) -> Result<Option<Address>, ConfigError> {
    load_string_opt(key).map(|s| s.parse()).transpose().map_err(Into::into)
}
