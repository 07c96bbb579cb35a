//! Character Service
//!
//! Nexon Open API lookups routed through the shared [`ResponseCache`]. Names
//! resolve to an ocid once; every per-character payload is then cached
//! under `region::ocid::<kind>`.

use std::sync::Arc;

use chrono::{DateTime, NaiveDate, Utc};
use serde_json::Value;
use tracing::{debug, warn};

use super::{CharacterEquipment, CharacterInfo, CharacterRanking, NexonApi};
use crate::cache::ResponseCache;
use crate::cache_key;
use crate::error::{AppError, Result};
use crate::scouter::{normalize_name, Region};

const RANKING_UNSUPPORTED: &str = "Overall ranking is not offered for this region";
const RANKING_EMPTY: &str = "No ranking record found for the current date";

/// KST offset; ranking data is published per Korean calendar day.
const KST_OFFSET_HOURS: i64 = 9;

// == Character Service ==
#[derive(Clone)]
pub struct CharacterService {
    api: Arc<dyn NexonApi>,
    cache: ResponseCache<Value>,
    region: Region,
}

impl CharacterService {
    pub fn new(api: Arc<dyn NexonApi>, cache: ResponseCache<Value>, region: Region) -> Self {
        Self { api, cache, region }
    }

    // == Character Info ==
    /// Basic info and union overview of `name`.
    ///
    /// A failed union lookup is logged and leaves `union` empty instead of
    /// failing the whole call.
    pub async fn character(&self, name: &str) -> Result<CharacterInfo> {
        let ocid = self.ocid(normalize_name(name)?).await?;

        let basic = self
            .cache
            .wrap(&cache_key!(self.region.as_str(), &ocid, "basic"), || {
                self.api.character_basic(&ocid)
            })
            .await?;

        let union = match self
            .cache
            .wrap(&cache_key!(self.region.as_str(), &ocid, "union"), || {
                self.api.union(&ocid)
            })
            .await
        {
            Ok(union) => Some(union),
            Err(error) if error.is_data_not_ready() => {
                debug!(%ocid, "Union overview not ready yet");
                None
            }
            Err(error) => {
                warn!(%ocid, %error, "Union overview unavailable, serving basics only");
                None
            }
        };

        Ok(CharacterInfo { ocid, basic, union })
    }

    // == Equipment ==
    pub async fn equipment(&self, name: &str) -> Result<CharacterEquipment> {
        let ocid = self.ocid(normalize_name(name)?).await?;

        let equipment = self
            .cache
            .wrap(&cache_key!(self.region.as_str(), &ocid, "equipment"), || {
                self.api.item_equipment(&ocid)
            })
            .await?;

        Ok(CharacterEquipment { ocid, equipment })
    }

    // == Ranking ==
    /// Overall ranking of `name` for the latest published day.
    ///
    /// Only an unresolvable name is an error. An unsupported region, an
    /// empty result or a failed ranking call all come back as
    /// `available: false` with a message.
    pub async fn ranking(&self, name: &str) -> Result<CharacterRanking> {
        let ocid = self.ocid(normalize_name(name)?).await?;

        if !self.region.has_overall_ranking() {
            return Ok(CharacterRanking::unavailable(ocid, RANKING_UNSUPPORTED));
        }

        let date = ranking_date(Utc::now());
        let key = cache_key!(self.region.as_str(), &ocid, "ranking", date.to_string());
        let payload = self
            .cache
            .wrap(&key, || self.api.overall_ranking(&ocid, date))
            .await;

        match payload {
            Ok(payload) => {
                let records = ranking_records(&payload);
                if records.is_empty() {
                    Ok(CharacterRanking::unavailable(ocid, RANKING_EMPTY))
                } else {
                    Ok(CharacterRanking::available(ocid, records))
                }
            }
            Err(error) => {
                warn!(%ocid, %error, "Ranking lookup failed");
                Ok(CharacterRanking::unavailable(ocid, error.to_string()))
            }
        }
    }

    pub fn region(&self) -> Region {
        self.region
    }

    async fn ocid(&self, name: &str) -> Result<String> {
        let key = cache_key!(self.region.as_str(), "ocid", name.to_lowercase());
        let ocid = self
            .cache
            .wrap(&key, || async {
                self.api.ocid(name).await.map(Value::String)
            })
            .await?;

        match ocid {
            Value::String(ocid) => Ok(ocid),
            _ => Err(AppError::NotFound(format!("No character id for '{}'", name))),
        }
    }
}

/// The latest day with published rankings: yesterday in KST.
pub fn ranking_date(now: DateTime<Utc>) -> NaiveDate {
    let today = (now + chrono::Duration::hours(KST_OFFSET_HOURS)).date_naive();
    today.pred_opt().unwrap_or(today)
}

fn ranking_records(payload: &Value) -> Vec<Value> {
    payload
        .get("ranking")
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default()
}
