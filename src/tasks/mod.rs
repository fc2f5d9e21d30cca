//! Background Tasks Module
//!
//! Contains background tasks that run for the lifetime of the process.
//!
//! # Tasks
//! - TTL Cleanup: Removes expired cache entries once per TTL period

mod cleanup;

pub(crate) use cleanup::spawn_cleanup_task;
