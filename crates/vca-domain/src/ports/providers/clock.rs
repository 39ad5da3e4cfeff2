use std::time::Duration;

use async_trait::async_trait;

/// Clock Interface
///
/// The only real-time dependency in the system: the generation engine's
/// backoff sleeps go through this port so tests can run all retry attempts
/// without wall-clock delay. A sleep must suspend only the calling task,
/// never the process.
#[async_trait]
pub trait Clock: Send + Sync {
    /// Suspend the current task for the given duration
    async fn sleep(&self, duration: Duration);
}
