//! Clock implementations
//!
//! `TokioClock` is the production clock; `ManualClock` records requested
//! delays and returns immediately, letting retry tests run every attempt
//! without wall-clock waits.

use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use vca_domain::ports::providers::Clock;

/// Production clock backed by the tokio timer
///
/// Suspends only the calling task; concurrent requests are unaffected by
/// another request's backoff.
pub struct TokioClock;

#[async_trait]
impl Clock for TokioClock {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// Recording clock for tests
///
/// Never sleeps; each requested delay is appended to an inspectable log.
pub struct ManualClock {
    sleeps: Mutex<Vec<Duration>>,
}

impl ManualClock {
    /// Create a manual clock with an empty log
    pub fn new() -> Self {
        Self {
            sleeps: Mutex::new(Vec::new()),
        }
    }

    /// Delays requested so far, in order
    pub fn recorded(&self) -> Vec<Duration> {
        self.sleeps.lock().expect("clock log poisoned").clone()
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Clock for ManualClock {
    async fn sleep(&self, duration: Duration) {
        self.sleeps.lock().expect("clock log poisoned").push(duration);
    }
}
