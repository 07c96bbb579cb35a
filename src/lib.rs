//! msbot-nexon - Cached MapleStory character profile lookups
//!
//! Serves MapleScouter profiles and Nexon Open API character data through an
//! in-memory TTL cache with FIFO capacity eviction, so repeated queries do
//! not hit the upstream APIs.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod nexon;
pub mod scouter;
pub mod tasks;

pub use api::AppState;
pub use cache::{composite_key, ResponseCache, TtlCache};
pub use config::Config;
pub use tasks::{spawn_flush_task, spawn_sweep_task};
