//! Inter-request pacing for the provider's rate limit.

use std::time::Duration;

/// Spaces consecutive provider requests by a fixed delay. The very first
/// request of a run goes out immediately; every later one waits out the
/// delay first. The wait is a cooperative suspension (`tokio::time::sleep`),
/// so unrelated work such as progress rendering keeps running.
#[derive(Debug)]
pub struct Pacer {
    delay: Duration,
    primed: bool,
}

impl Pacer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            primed: false,
        }
    }

    /// Waits out the inter-request delay. Call immediately before each fetch.
    pub async fn pace(&mut self) {
        if self.primed {
            if !self.delay.is_zero() {
                tokio::time::sleep(self.delay).await;
            }
        } else {
            self.primed = true;
        }
    }
}
