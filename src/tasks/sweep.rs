//! Sweep Task
//!
//! Autonomous eviction of idle groups in bounded mode.

use std::sync::Weak;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::{debug, info};

use crate::cache::CacheState;

/// Spawns the task that periodically sweeps idle groups out of the cache.
///
/// Each tick takes the cache lock for the duration of one full scan, so a
/// tick never interleaves with a lookup or a settings switch. The period is
/// independent of the TTL.
///
/// The task holds only a weak reference: it ends on its own once the cache
/// is dropped. The cache aborts it when leaving bounded mode.
pub(crate) fn spawn_sweep_task(
    state: Weak<Mutex<CacheState>>,
    interval: Duration,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        info!(
            "Starting cache sweep with interval of {} seconds",
            interval.as_secs_f64()
        );

        loop {
            tokio::time::sleep(interval).await;

            let Some(state) = state.upgrade() else {
                debug!("Cache dropped, sweep exiting");
                break;
            };

            let removed = {
                let mut guard = state.lock().await;
                guard.sweep(Instant::now())
            };

            if removed > 0 {
                info!("Cache sweep: removed {} idle groups", removed);
            } else {
                debug!("Cache sweep: no idle groups found");
            }
        }
    })
}
