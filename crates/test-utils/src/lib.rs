pub mod chain;
pub mod fixtures;
pub mod harness;
pub mod mocks;
pub mod sleeper;

pub use metis_relay_constants::test_utils as test_constants;

/// Install a test subscriber printing relay logs. Safe to call from every
/// test.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
