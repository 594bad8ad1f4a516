//! A [`Sleeper`] that records requested delays instead of waiting.

use core::future::Future;
use metis_relay::Sleeper;
use std::{
    sync::{Arc, Mutex},
    time::Duration,
};

type Hook = Box<dyn FnOnce() + Send>;

#[derive(Default)]
struct SleeperState {
    slept: Vec<Duration>,
    hooks: Vec<(usize, Hook)>,
}

/// Records every sleep and returns after yielding to the runtime.
///
/// Hooks registered with [`RecordingSleeper::on_sleep`] run when the given
/// sleep is requested, which lets a test change chain state "while" the
/// relay waits. Clones share the same record.
#[derive(Clone, Default)]
pub struct RecordingSleeper {
    state: Arc<Mutex<SleeperState>>,
}

impl core::fmt::Debug for RecordingSleeper {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let state = self.state.lock().unwrap();
        f.debug_struct("RecordingSleeper")
            .field("slept", &state.slept)
            .field("hooks", &state.hooks.len())
            .finish()
    }
}

impl RecordingSleeper {
    /// Create a new sleeper.
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `hook` when the `nth` sleep (1-based) is requested.
    pub fn on_sleep(&self, nth: usize, hook: impl FnOnce() + Send + 'static) -> &Self {
        self.state.lock().unwrap().hooks.push((nth, Box::new(hook)));
        self
    }

    /// All requested delays, in order.
    pub fn sleeps(&self) -> Vec<Duration> {
        self.state.lock().unwrap().slept.clone()
    }

    /// The number of sleeps requested.
    pub fn count(&self) -> usize {
        self.state.lock().unwrap().slept.len()
    }

    /// The total time slept.
    pub fn total(&self) -> Duration {
        self.state.lock().unwrap().slept.iter().sum()
    }
}

impl Sleeper for RecordingSleeper {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> + Send {
        let due = {
            let mut state = self.state.lock().unwrap();
            state.slept.push(duration);
            let nth = state.slept.len();

            let (due, rest) = std::mem::take(&mut state.hooks).into_iter().partition(|(n, _)| *n == nth);
            state.hooks = rest;
            due
        };
        for (_, hook) in due {
            hook();
        }
        tokio::task::yield_now()
    }
}
