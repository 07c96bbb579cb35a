//! Cache Module
//!
//! Provides an in-memory TTL cache with FIFO capacity eviction, a
//! read-through wrapper for async producers, and composite key building.

mod clock;
mod entry;
mod key;
mod memo;
mod order;
mod stats;
mod store;


// Re-export public types
pub use clock::{current_timestamp_ms, Clock, ManualClock, SystemClock};
pub use entry::CacheEntry;
pub use key::{composite_key, KeyPart, KEY_DELIMITER};
pub use memo::ResponseCache;
pub use order::InsertionOrder;
pub use stats::CacheStats;
pub use store::TtlCache;
