//! Background Tasks Module
//!
//! Contains background tasks that run periodically while the cache is in
//! bounded mode.
//!
//! # Tasks
//! - Sweep: drops cached groups idle longer than the TTL

mod sweep;

pub(crate) use sweep::spawn_sweep_task;
