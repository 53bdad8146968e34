//! Background task that refills the permit pool once per window.

use crate::PermitPool;
use ideaforge_error::ConfigError;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::{debug, info, instrument, warn};

/// Periodic refill task for a [`PermitPool`].
///
/// The task is not started on construction and is not stopped on drop: call
/// [`start`](Self::start) during application startup and
/// [`stop`](Self::stop) during teardown.
///
/// Ticks run on a fixed delay. The first refill happens one full interval
/// after `start`. If the process is suspended across several intervals, a
/// single refill happens on resume.
///
/// # Example
///
/// ```no_run
/// use ideaforge_rate_limit::{PermitPool, Replenisher};
/// use std::num::NonZeroU32;
/// use std::sync::Arc;
/// use std::time::Duration;
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let pool = Arc::new(PermitPool::new(NonZeroU32::new(5).unwrap()));
/// let mut replenisher = Replenisher::new(pool.clone(), Duration::from_secs(60))?;
/// replenisher.start();
/// // ... serve requests ...
/// replenisher.stop();
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct Replenisher {
    pool: Arc<PermitPool>,
    interval: Duration,
    task_handle: Option<JoinHandle<()>>,
}

impl Replenisher {
    /// Create a stopped replenisher for `pool` ticking every `interval`.
    ///
    /// # Errors
    ///
    /// Returns an error if `interval` is zero.
    pub fn new(pool: Arc<PermitPool>, interval: Duration) -> Result<Self, ConfigError> {
        if interval.is_zero() {
            return Err(ConfigError::new("Replenish interval must be greater than zero"));
        }
        Ok(Self {
            pool,
            interval,
            task_handle: None,
        })
    }

    /// Interval between refills.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Whether the background task is currently scheduled.
    pub fn is_running(&self) -> bool {
        self.task_handle
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    /// Spawn the refill task on the current Tokio runtime.
    ///
    /// Calling `start` on a running replenisher does nothing.
    ///
    /// # Panics
    ///
    /// Panics if called outside a Tokio runtime.
    #[instrument(skip(self), fields(interval_secs = self.interval.as_secs_f64()))]
    pub fn start(&mut self) {
        if self.is_running() {
            warn!("Replenisher already running");
            return;
        }

        info!("Starting permit replenisher");
        let pool = self.pool.clone();
        let interval = self.interval;
        let handle = tokio::spawn(async move {
            let mut ticker = time::interval_at(Instant::now() + interval, interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                let restored = pool.replenish();
                debug!(restored, available = pool.available(), "Replenisher tick");
            }
        });
        self.task_handle = Some(handle);
    }

    /// Stop the refill task, cancelling all future ticks.
    ///
    /// Safe to call more than once and on a replenisher that never started.
    #[instrument(skip(self))]
    pub fn stop(&mut self) {
        if let Some(handle) = self.task_handle.take() {
            info!("Stopping permit replenisher");
            handle.abort();
        }
    }
}
