//! Credential types

use serde::Deserialize;
use std::fmt;

/// API key and search-scope identifier for one run
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    /// API key sent as the `key` parameter
    pub api_key: String,
    /// Search scope (`cx`) identifier
    pub scope_id: String,
}

impl Credentials {
    /// Create credentials from a key and scope identifier
    pub fn new(api_key: impl Into<String>, scope_id: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            scope_id: scope_id.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &"****")
            .field("scope_id", &self.scope_id)
            .finish()
    }
}

/// On-disk credentials file
///
/// ```yaml
/// api_key: AIza...
/// cx: 0123456789abcdef
/// ```
#[derive(Clone, Default, Deserialize)]
pub struct CredentialsFile {
    #[serde(default)]
    pub api_key: String,
    #[serde(default, alias = "scope_id")]
    pub cx: String,
}
