//! Request DTOs for the profile API
//!
//! Defines the structure of incoming query strings.

use serde::Deserialize;

/// Query string for `GET /profile/:name`
///
/// # Fields
/// - `refresh`: Skip any cached copy and fetch from upstream
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProfileQuery {
    #[serde(default)]
    pub refresh: bool,
}
