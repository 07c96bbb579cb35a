//! MapleScouter HTTP client.

use async_trait::async_trait;
use reqwest::header::{ACCEPT, ORIGIN, REFERER};
use serde_json::Value;
use tracing::warn;

use super::{Region, ScouterError};
use crate::config::ScouterConfig;

const USER_AGENT: &str = concat!("msbot-nexon/", env!("CARGO_PKG_VERSION"));
const SITE_ORIGIN: &str = "https://maplescouter.com";
const SITE_REFERER: &str = "https://maplescouter.com/";

// == Profile Source ==
/// Anything that can produce a raw character profile payload.
#[async_trait]
pub trait ProfileSource: Send + Sync {
    async fn fetch_profile(&self, name: &str) -> Result<Value, ScouterError>;
}

// == Scouter Client ==
/// Fetches aggregated character profiles from MapleScouter.
#[derive(Debug, Clone)]
pub struct ScouterClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    preset: String,
    region: Region,
}

impl ScouterClient {
    /// Builds a client with the configured timeout.
    pub fn new(config: &ScouterConfig, region: Region) -> Result<Self, ScouterError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
            preset: config.preset.clone(),
            region,
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/id", self.base_url)
    }

    async fn request_profile(&self, name: &str) -> Result<Value, ScouterError> {
        let response = self
            .http
            .get(self.endpoint())
            .query(&[
                ("name", name),
                ("preset", self.preset.as_str()),
                ("region", self.region.as_str()),
            ])
            .header(ACCEPT, "application/json, text/plain, */*")
            .header(ORIGIN, SITE_ORIGIN)
            .header(REFERER, SITE_REFERER)
            .header("api-key", &self.api_key)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScouterError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl ProfileSource for ScouterClient {
    async fn fetch_profile(&self, name: &str) -> Result<Value, ScouterError> {
        self.request_profile(name).await.inspect_err(|error| {
            warn!(name, region = %self.region, %error, "MapleScouter lookup failed");
        })
    }
}
