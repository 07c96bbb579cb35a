//! Background Tasks Module
//!
//! Contains background tasks that run periodically during server operation.
//!
//! # Tasks
//! - Expiry sweep: Removes expired cache entries at configured intervals
//! - Flush: Empties the whole cache on a fixed schedule

mod flush;
mod sweep;

pub use flush::spawn_flush_task;
pub use sweep::spawn_sweep_task;
