//! Profile Service
//!
//! Memoized character profile lookups: the caller side of the cache.

use std::sync::Arc;

use serde_json::Value;
use tracing::info;

use super::{ProfileSource, Region};
use crate::cache::{ResponseCache, KEY_DELIMITER};
use crate::cache_key;
use crate::error::{AppError, Result};

// == Profile Service ==
/// Looks profiles up through a [`ResponseCache`] keyed by region and name.
#[derive(Clone)]
pub struct ProfileService {
    source: Arc<dyn ProfileSource>,
    cache: ResponseCache<Value>,
    region: Region,
}

impl ProfileService {
    pub fn new(source: Arc<dyn ProfileSource>, cache: ResponseCache<Value>, region: Region) -> Self {
        Self {
            source,
            cache,
            region,
        }
    }

    // == Profile ==
    /// Returns the profile for `name`, hitting the upstream only on a miss.
    ///
    /// Names are trimmed; lookups are case-insensitive.
    pub async fn profile(&self, name: &str) -> Result<Value> {
        let name = normalize_name(name)?;
        let key = self.cache_key(name);

        let profile = self
            .cache
            .wrap(&key, || self.source.fetch_profile(name))
            .await?;
        Ok(profile)
    }

    /// Drops any cached copy and fetches a fresh profile.
    pub async fn refresh(&self, name: &str) -> Result<Value> {
        self.invalidate(name).await?;
        self.profile(name).await
    }

    /// Removes the cached profile for `name`. Returns whether one existed.
    pub async fn invalidate(&self, name: &str) -> Result<bool> {
        let name = normalize_name(name)?;
        Ok(self.cache.delete(&self.cache_key(name)).await)
    }

    /// Empties the whole profile cache.
    pub async fn clear(&self) -> usize {
        let cleared = self.cache.clear().await;
        info!(cleared, "Profile cache cleared");
        cleared
    }

    pub fn cache_key(&self, name: &str) -> String {
        cache_key!(self.region.as_str(), name.trim().to_lowercase())
    }

    pub fn cache(&self) -> &ResponseCache<Value> {
        &self.cache
    }

    pub fn region(&self) -> Region {
        self.region
    }
}

/// Trims a character name and rejects ones that cannot exist in game.
///
/// A name holding the key delimiter could alias another cache entry.
pub(crate) fn normalize_name(name: &str) -> Result<&str> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(AppError::InvalidRequest(
            "Character name cannot be empty".to_string(),
        ));
    }
    if trimmed.contains(KEY_DELIMITER) {
        return Err(AppError::InvalidRequest(format!(
            "Character name cannot contain '{}'",
            KEY_DELIMITER
        )));
    }
    Ok(trimmed)
}
