//! Scouter Module
//!
//! Upstream character profile lookups against the MapleScouter API, and the
//! service that memoizes them.

mod client;
mod error;
mod region;
mod service;

pub use client::{ProfileSource, ScouterClient};
pub use error::ScouterError;
pub use region::Region;
pub use service::ProfileService;

pub(crate) use service::normalize_name;
