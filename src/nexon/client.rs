//! Nexon Open API HTTP client.

use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::header::ACCEPT;
use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

use super::{NexonError, Scope};
use crate::config::NexonConfig;
use crate::scouter::Region;

const USER_AGENT: &str = concat!("msbot-nexon/", env!("CARGO_PKG_VERSION"));
const API_KEY_HEADER: &str = "x-nxopen-api-key";

// == Nexon Api ==
/// The Nexon Open API calls the character service depends on.
///
/// Everything but [`ocid`](NexonApi::ocid) takes the character's ocid and
/// returns the raw JSON payload.
#[async_trait]
pub trait NexonApi: Send + Sync {
    /// Resolves a character name to its ocid.
    async fn ocid(&self, name: &str) -> Result<String, NexonError>;

    async fn character_basic(&self, ocid: &str) -> Result<Value, NexonError>;

    async fn union(&self, ocid: &str) -> Result<Value, NexonError>;

    async fn item_equipment(&self, ocid: &str) -> Result<Value, NexonError>;

    /// Overall ranking records of the character on `date`.
    async fn overall_ranking(&self, ocid: &str, date: NaiveDate) -> Result<Value, NexonError>;
}

#[derive(Deserialize)]
struct OcidResponse {
    ocid: String,
}

// == Nexon Client ==
#[derive(Debug, Clone)]
pub struct NexonClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    region: Region,
}

impl NexonClient {
    pub fn new(config: &NexonConfig, region: Region) -> Result<Self, NexonError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .user_agent(USER_AGENT)
            .build()
            .map_err(|source| NexonError::Request {
                scope: Scope::Ocid,
                source,
            })?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            region,
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}/v1/{}", self.base_url, self.region.nexon_game(), path)
    }

    async fn get(&self, scope: Scope, path: &str, query: &[(&str, &str)]) -> Result<Value, NexonError> {
        self.request(scope, path, query).await.inspect_err(|error| {
            warn!(path, region = %self.region, %error, "Nexon Open API call failed");
        })
    }

    async fn request(
        &self,
        scope: Scope,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<Value, NexonError> {
        let transport = |source| NexonError::Request { scope, source };

        let response = self
            .http
            .get(self.endpoint(path))
            .query(query)
            .header(ACCEPT, "application/json")
            .header(API_KEY_HEADER, &self.api_key)
            .send()
            .await
            .map_err(transport)?;

        let status = response.status();
        let body = response.text().await.map_err(transport)?;
        if !status.is_success() {
            return Err(NexonError::from_response(scope, status.as_u16(), &body));
        }

        serde_json::from_str(&body).map_err(|source| NexonError::Decode { scope, source })
    }
}

#[async_trait]
impl NexonApi for NexonClient {
    async fn ocid(&self, name: &str) -> Result<String, NexonError> {
        let payload = self
            .get(Scope::Ocid, "id", &[("character_name", name)])
            .await?;
        let OcidResponse { ocid } = serde_json::from_value(payload).map_err(|source| {
            NexonError::Decode {
                scope: Scope::Ocid,
                source,
            }
        })?;
        Ok(ocid)
    }

    async fn character_basic(&self, ocid: &str) -> Result<Value, NexonError> {
        self.get(Scope::Basic, "character/basic", &[("ocid", ocid)])
            .await
    }

    async fn union(&self, ocid: &str) -> Result<Value, NexonError> {
        self.get(Scope::Union, "user/union", &[("ocid", ocid)]).await
    }

    async fn item_equipment(&self, ocid: &str) -> Result<Value, NexonError> {
        self.get(Scope::Equipment, "character/item-equipment", &[("ocid", ocid)])
            .await
    }

    async fn overall_ranking(&self, ocid: &str, date: NaiveDate) -> Result<Value, NexonError> {
        let date = date.format("%Y-%m-%d").to_string();
        self.get(
            Scope::Ranking,
            "ranking/overall",
            &[("date", date.as_str()), ("ocid", ocid)],
        )
        .await
    }
}
