//! Errors raised while talking to the MapleScouter API.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScouterError {
    /// Transport failure, including timeouts
    #[error("MapleScouter request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Non-2xx response
    #[error("MapleScouter returned HTTP {status}")]
    Status { status: u16 },

    /// Body was not valid JSON
    #[error("MapleScouter returned invalid JSON: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ScouterError {
    /// Whether the upstream reported that the character does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ScouterError::Status { status: 404 })
    }
}
