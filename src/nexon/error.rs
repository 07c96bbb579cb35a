//! Errors raised while talking to the Nexon Open API.
//!
//! Every failure carries the [`Scope`] of the call that produced it, so the
//! message a client sees names the step that broke ("Failed to fetch
//! equipment (OPENAPI00007)") rather than a bare transport error.

use serde::Deserialize;
use thiserror::Error;

/// Error code for a malformed or unknown parameter, which is what the API
/// answers for a character name that does not exist.
pub const INVALID_PARAMETER: &str = "OPENAPI00004";
/// Error code for too many requests.
pub const RATE_LIMITED: &str = "OPENAPI00007";
/// Error code for data the API has not finished preparing yet.
pub const DATA_NOT_READY: &str = "OPENAPI00009";

/// Which lookup a request belonged to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    Ocid,
    Basic,
    Union,
    Equipment,
    Ranking,
}

impl Scope {
    pub fn label(self) -> &'static str {
        match self {
            Scope::Ocid => "Failed to resolve character id",
            Scope::Basic => "Failed to fetch character basics",
            Scope::Union => "Failed to fetch union overview",
            Scope::Equipment => "Failed to fetch equipment",
            Scope::Ranking => "Failed to fetch ranking",
        }
    }
}

#[derive(Error, Debug)]
pub enum NexonError {
    /// Transport failure, including timeouts
    #[error("{}: {source}", .scope.label())]
    Request {
        scope: Scope,
        #[source]
        source: reqwest::Error,
    },

    /// Non-2xx response, with the API's error code when it sent one
    #[error("{} ({code})", .scope.label())]
    Api {
        scope: Scope,
        status: u16,
        code: String,
        message: String,
    },

    /// Body was not valid JSON
    #[error("{}: invalid response body: {source}", .scope.label())]
    Decode {
        scope: Scope,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    name: String,
    #[serde(default)]
    message: String,
}

impl NexonError {
    /// Builds an [`NexonError::Api`] from a failed response.
    ///
    /// Bodies that are not the usual `{"error": {"name", "message"}}`
    /// envelope fall back to `HTTP <status>` as the code.
    pub fn from_response(scope: Scope, status: u16, body: &str) -> Self {
        match serde_json::from_str::<ErrorEnvelope>(body) {
            Ok(ErrorEnvelope { error }) => NexonError::Api {
                scope,
                status,
                code: error.name,
                message: error.message,
            },
            Err(_) => NexonError::Api {
                scope,
                status,
                code: format!("HTTP {}", status),
                message: String::new(),
            },
        }
    }

    pub fn scope(&self) -> Scope {
        match self {
            NexonError::Request { scope, .. }
            | NexonError::Api { scope, .. }
            | NexonError::Decode { scope, .. } => *scope,
        }
    }

    /// The API error code, if the upstream answered with one.
    pub fn code(&self) -> Option<&str> {
        match self {
            NexonError::Api { code, .. } => Some(code),
            _ => None,
        }
    }

    /// Whether the character name could not be resolved.
    pub fn is_not_found(&self) -> bool {
        match self {
            NexonError::Api { status: 404, .. } => true,
            NexonError::Api { scope, code, .. } => {
                *scope == Scope::Ocid && code == INVALID_PARAMETER
            }
            _ => false,
        }
    }

    pub fn is_rate_limited(&self) -> bool {
        matches!(self, NexonError::Api { status: 429, .. }) || self.code() == Some(RATE_LIMITED)
    }

    pub fn is_data_not_ready(&self) -> bool {
        self.code() == Some(DATA_NOT_READY)
    }
}
