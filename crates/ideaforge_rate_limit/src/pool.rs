//! Fixed-window permit pool.
//!
//! The pool is a bounded counter of permits backed by a Tokio [`Semaphore`].
//! A granted permit is consumed (never handed back by the caller); only
//! [`PermitPool::replenish`] restores capacity, once per window. This is a
//! fixed-window limiter: a full window of permits may be spent right before a
//! refill and another full window right after it.

use std::num::NonZeroU32;
use std::sync::{Mutex, PoisonError};
use std::time::Duration;
use tokio::sync::Semaphore;
use tracing::{debug, instrument, trace};

/// Bounded, periodically refilled pool of admission permits.
///
/// Share it as `Arc<PermitPool>` between the gateway (which acquires) and the
/// [`Replenisher`](crate::Replenisher) (which refills).
///
/// # Example
///
/// ```
/// use ideaforge_rate_limit::PermitPool;
/// use std::num::NonZeroU32;
/// use std::time::Duration;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let pool = PermitPool::new(NonZeroU32::new(2).unwrap());
///
/// assert!(pool.try_acquire(Duration::ZERO).await);
/// assert!(pool.try_acquire(Duration::ZERO).await);
/// assert!(!pool.try_acquire(Duration::from_millis(10)).await);
///
/// assert_eq!(pool.replenish(), 2);
/// assert_eq!(pool.available(), 2);
/// # }
/// ```
#[derive(Debug)]
pub struct PermitPool {
    capacity: u32,
    permits: Semaphore,
    // Serializes refills so two refills can never both add the same deficit.
    refill_lock: Mutex<()>,
}

impl PermitPool {
    /// Create a full pool with the given capacity.
    pub fn new(capacity: NonZeroU32) -> Self {
        let capacity = capacity.get();
        debug!(capacity, "Creating permit pool");
        Self {
            capacity,
            permits: Semaphore::new(capacity as usize),
            refill_lock: Mutex::new(()),
        }
    }

    /// Maximum number of permits the pool holds.
    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Permits currently available.
    pub fn available(&self) -> u32 {
        self.permits.available_permits() as u32
    }

    /// Wait up to `timeout` for a permit.
    ///
    /// Returns `true` and consumes one permit if one becomes available in
    /// time, `false` otherwise (pool unchanged). An immediately available
    /// permit is granted even with a zero timeout. Waiters are not guaranteed
    /// any particular order; no waiter is granted a permit while none are
    /// available.
    #[instrument(skip(self), fields(capacity = self.capacity))]
    pub async fn try_acquire(&self, timeout: Duration) -> bool {
        if let Ok(permit) = self.permits.try_acquire() {
            permit.forget();
            trace!(available = self.available(), "Permit granted without waiting");
            return true;
        }

        match tokio::time::timeout(timeout, self.permits.acquire()).await {
            Ok(Ok(permit)) => {
                permit.forget();
                trace!(available = self.available(), "Permit granted after waiting");
                true
            }
            Ok(Err(_closed)) => {
                debug!("Permit pool closed while waiting");
                false
            }
            Err(_elapsed) => {
                debug!(timeout_ms = timeout.as_millis() as u64, "No permit within timeout");
                false
            }
        }
    }

    /// Top the pool back up to capacity.
    ///
    /// Returns the number of permits restored; zero when the pool was already
    /// full. Never raises `available` above `capacity`.
    #[instrument(skip(self), fields(capacity = self.capacity))]
    pub fn replenish(&self) -> u32 {
        let _guard = self.refill_lock.lock().unwrap_or_else(PoisonError::into_inner);

        // Acquirers only ever lower the count, so this read can only
        // overstate `available` and understate the deficit.
        let available = self.available();
        let deficit = self.capacity.saturating_sub(available);
        if deficit > 0 {
            self.permits.add_permits(deficit as usize);
        }

        debug!(available_before = available, restored = deficit, "Replenished permit pool");
        deficit
    }
}
