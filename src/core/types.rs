//! Type aliases for domain concepts.
//!
//! Provides semantic type aliases to make function signatures more descriptive.

use std::collections::BTreeMap;

/// Strict tag mapping: non-blank keys, string values.
pub type TagMap = BTreeMap<String, String>;

/// Loose tag mapping as it arrives from the outside: any JSON value, `null`
/// standing for an absent value.
pub type LooseTagMap = serde_json::Map<String, serde_json::Value>;

/// A resource group name.
pub type ResourceGroupName = String;

/// A namespace name, unique within its resource group.
pub type NamespaceName = String;

/// An authorization rule name (e.g. RootManageSharedAccessKey).
pub type RuleName = String;

/// An event hub name, unique within its namespace.
pub type EventHubName = String;
