//! Injectable time source for paced loops.

use async_trait::async_trait;
use std::time::Duration;

/// Abstraction over sleeping, so poll loops and batch pacing are testable
/// without real waits.
#[async_trait]
pub trait Clock: Send + Sync {
    /// Suspend for the given duration.
    async fn sleep(&self, duration: Duration);
}

/// Production clock backed by the tokio timer.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioClock;

#[async_trait]
impl Clock for TokioClock {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}
