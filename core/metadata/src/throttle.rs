//! Client-side spacing of queries to the metadata source

use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

use crate::cancel::or_cancelled;
use crate::ProviderError;

/// Delay applied before each outbound query
#[async_trait]
pub trait RateLimiter: Send + Sync {
    /// Suspend until the next query may be sent.
    ///
    /// Returns [`ProviderError::Cancelled`] if `cancel` fires while waiting.
    async fn throttle(&self, cancel: &CancellationToken) -> Result<(), ProviderError>;
}

/// Flat delay per call. Concurrent callers are not coordinated.
#[derive(Debug, Clone)]
pub struct FixedDelay {
    interval: Duration,
}

impl FixedDelay {
    pub fn new(interval: Duration) -> Self {
        Self { interval }
    }
}

impl Default for FixedDelay {
    fn default() -> Self {
        Self::new(Duration::from_millis(1000))
    }
}

#[async_trait]
impl RateLimiter for FixedDelay {
    async fn throttle(&self, cancel: &CancellationToken) -> Result<(), ProviderError> {
        or_cancelled(cancel, tokio::time::sleep(self.interval)).await
    }
}

/// Minimum spacing between queries across every caller sharing the instance.
///
/// Each call reserves the next free slot, so N concurrent callers are released
/// `interval` apart. A cancelled caller still consumes its slot.
#[derive(Debug)]
pub struct SharedSpacing {
    interval: Duration,
    next_slot: Mutex<Option<Instant>>,
}

impl SharedSpacing {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            next_slot: Mutex::new(None),
        }
    }

    fn reserve_slot(&self) -> Instant {
        let now = Instant::now();
        let mut next_slot = self.next_slot.lock();
        let slot = match *next_slot {
            Some(slot) if slot > now => slot,
            _ => now,
        };
        *next_slot = Some(slot + self.interval);
        slot
    }
}

#[async_trait]
impl RateLimiter for SharedSpacing {
    async fn throttle(&self, cancel: &CancellationToken) -> Result<(), ProviderError> {
        let slot = self.reserve_slot();
        or_cancelled(cancel, tokio::time::sleep_until(slot)).await
    }
}
