//! Shared-access key types.
//!
//! The selector sent when regenerating a key and the key material returned.

use serde::{Deserialize, Serialize};

use crate::core::constants::key_type;

/// Which of the two keys of an authorization rule to act on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeySelector {
    #[serde(rename = "PrimaryKey")]
    Primary,
    #[serde(rename = "SecondaryKey")]
    Secondary,
}

impl KeySelector {
    /// Wire name of the selector.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Primary => key_type::PRIMARY_KEY,
            Self::Secondary => key_type::SECONDARY_KEY,
        }
    }
}

impl std::fmt::Display for KeySelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body of a key regeneration call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyRegenerationRequest {
    key_type: KeySelector,
}

impl KeyRegenerationRequest {
    pub fn new(selector: KeySelector) -> Self {
        Self { key_type: selector }
    }

    pub fn selector(&self) -> KeySelector {
        self.key_type
    }
}

/// Key material of an authorization rule, as returned by the service.
///
/// Forwarded to the caller without interpretation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceKeys {
    #[serde(default)]
    pub primary_key: String,
    #[serde(default)]
    pub secondary_key: String,
    #[serde(default)]
    pub primary_connection_string: String,
    #[serde(default)]
    pub secondary_connection_string: String,
}
