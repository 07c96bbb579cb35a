//! Results of the character service, serialized as the endpoint bodies.

use serde::Serialize;
use serde_json::Value;

/// Basic character info plus the union overview when it could be fetched.
#[derive(Debug, Clone, Serialize)]
pub struct CharacterInfo {
    pub ocid: String,
    pub basic: Value,
    /// `None` when the union lookup failed; the basics are still served
    pub union: Option<Value>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CharacterEquipment {
    pub ocid: String,
    pub equipment: Value,
}

/// Overall ranking records, or the reason none are shown.
#[derive(Debug, Clone, Serialize)]
pub struct CharacterRanking {
    pub ocid: String,
    pub records: Vec<Value>,
    pub available: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl CharacterRanking {
    pub fn available(ocid: String, records: Vec<Value>) -> Self {
        Self {
            ocid,
            records,
            available: true,
            message: None,
        }
    }

    pub fn unavailable(ocid: String, message: impl Into<String>) -> Self {
        Self {
            ocid,
            records: Vec::new(),
            available: false,
            message: Some(message.into()),
        }
    }
}
