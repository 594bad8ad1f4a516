use core::future::Future;
use std::{sync::Arc, time::Duration};

/// Suspends the caller for a duration.
///
/// Every wait in the relay goes through a sleeper. Production code uses
/// [`TokioSleeper`]; tests inject sleepers that record the requested delays
/// and return immediately.
pub trait Sleeper {
    /// Sleep for `duration`.
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> + Send;
}

/// A [`Sleeper`] backed by [`tokio::time::sleep`].
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioSleeper;

impl Sleeper for TokioSleeper {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> + Send {
        tokio::time::sleep(duration)
    }
}

impl<T: Sleeper + Sync> Sleeper for &T {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> + Send {
        T::sleep(self, duration)
    }
}

impl<T: Sleeper + Send + Sync> Sleeper for Arc<T> {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> + Send {
        T::sleep(self, duration)
    }
}
