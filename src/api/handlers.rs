//! API Handlers
//!
//! HTTP request handlers for each profile service endpoint.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde_json::Value;

use crate::cache::ResponseCache;
use crate::config::Config;
use crate::error::{AppError, Result};
use crate::models::{ClearResponse, DeleteResponse, HealthResponse, ProfileQuery, StatsResponse};
use crate::nexon::{CharacterEquipment, CharacterInfo, CharacterRanking, CharacterService, NexonClient};
use crate::scouter::{ProfileService, ScouterClient};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Memoized MapleScouter profile lookups
    pub profiles: Arc<ProfileService>,
    /// Memoized Nexon Open API lookups
    pub characters: Arc<CharacterService>,
}

impl AppState {
    /// Creates a new AppState around both services.
    pub fn new(profiles: ProfileService, characters: CharacterService) -> Self {
        Self {
            profiles: Arc::new(profiles),
            characters: Arc::new(characters),
        }
    }

    /// Creates a new AppState from configuration.
    ///
    /// Builds both upstream clients over one cache, sized and switched on
    /// or off according to the Config, so `/stats` and `DELETE /cache`
    /// cover every cached payload.
    pub fn from_config(config: &Config) -> Result<Self> {
        let cache = ResponseCache::from_config(&config.cache);
        let scouter = ScouterClient::new(&config.scouter, config.region)?;
        let nexon = NexonClient::new(&config.nexon, config.region)?;

        Ok(Self::new(
            ProfileService::new(Arc::new(scouter), cache.clone(), config.region),
            CharacterService::new(Arc::new(nexon), cache, config.region),
        ))
    }
}

/// Handler for GET /profile/:name
///
/// Returns the character profile, from cache when possible.
pub async fn profile_handler(
    State(state): State<AppState>,
    Path(name): Path<String>,
    Query(query): Query<ProfileQuery>,
) -> Result<Json<Value>> {
    let profile = if query.refresh {
        state.profiles.refresh(&name).await?
    } else {
        state.profiles.profile(&name).await?
    };

    Ok(Json(profile))
}

/// Handler for DELETE /profile/:name
///
/// Drops the cached profile of one character.
pub async fn delete_profile_handler(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<DeleteResponse>> {
    if !state.profiles.invalidate(&name).await? {
        return Err(AppError::NotFound(format!(
            "No cached profile for '{}'",
            name.trim()
        )));
    }

    Ok(Json(DeleteResponse::new(name.trim())))
}

/// Handler for DELETE /cache
///
/// Empties the whole profile cache.
pub async fn clear_handler(State(state): State<AppState>) -> Json<ClearResponse> {
    let cleared = state.profiles.clear().await;
    Json(ClearResponse::new(cleared))
}

/// Handler for GET /character/:name
///
/// Returns basic info and the union overview from the Nexon Open API.
pub async fn character_handler(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<CharacterInfo>> {
    Ok(Json(state.characters.character(&name).await?))
}

/// Handler for GET /equipment/:name
pub async fn equipment_handler(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<CharacterEquipment>> {
    Ok(Json(state.characters.equipment(&name).await?))
}

/// Handler for GET /ranking/:name
///
/// Always 200 once the name resolves; `available` tells whether records
/// could be shown.
pub async fn ranking_handler(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<CharacterRanking>> {
    Ok(Json(state.characters.ranking(&name).await?))
}

/// Handler for GET /stats
///
/// Returns current cache statistics.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let stats = state.profiles.cache().stats().await;
    Json(StatsResponse::new(state.profiles.region(), stats))
}

/// Handler for GET /health
///
/// Returns health status of the server.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
