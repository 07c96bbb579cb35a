//! Nexon Module
//!
//! Character info, equipment and ranking lookups against the Nexon Open
//! API, memoized through the shared response cache.

mod client;
mod error;
mod service;
mod types;

pub use client::{NexonApi, NexonClient};
pub use error::{NexonError, Scope, DATA_NOT_READY, INVALID_PARAMETER, RATE_LIMITED};
pub use service::{ranking_date, CharacterService};
pub use types::{CharacterEquipment, CharacterInfo, CharacterRanking};
