//! Namespace types.
//!
//! Identifies a namespace and describes the attributes that can be updated.

use serde::{Deserialize, Serialize};

use crate::core::constants::sku;
use crate::core::types::{NamespaceName, ResourceGroupName, TagMap};
use crate::core::validation::require;
use crate::error::Result;

/// A single namespace, addressed by resource group and name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamespaceIdentifier {
    resource_group: ResourceGroupName,
    namespace_name: NamespaceName,
}

impl NamespaceIdentifier {
    /// Create an identifier, rejecting blank parts.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::MissingField` naming `resource-group` or
    /// `namespace-name`.
    pub fn new(resource_group: &str, namespace_name: &str) -> Result<Self> {
        let resource_group = require("resource-group", resource_group)?.to_string();
        let namespace_name = require("namespace-name", namespace_name)?.to_string();
        Ok(Self {
            resource_group,
            namespace_name,
        })
    }

    pub fn resource_group(&self) -> &str {
        &self.resource_group
    }

    pub fn namespace_name(&self) -> &str {
        &self.namespace_name
    }
}

impl std::fmt::Display for NamespaceIdentifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.resource_group, self.namespace_name)
    }
}

/// Namespace pricing tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkuName {
    Basic,
    Standard,
    Premium,
}

impl SkuName {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Basic => sku::BASIC,
            Self::Standard => sku::STANDARD,
            Self::Premium => sku::PREMIUM,
        }
    }
}

/// SKU of a namespace: tier plus throughput units.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sku {
    pub name: SkuName,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tier: Option<SkuName>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity: Option<i64>,
}

impl Sku {
    /// SKU whose tier matches its name, as the service expects.
    pub fn new(name: SkuName, capacity: Option<i64>) -> Self {
        Self {
            name,
            tier: Some(name),
            capacity,
        }
    }
}

/// Namespace as returned by the service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NamespaceAttributes {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sku: Option<Sku>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<TagMap>,
}

/// Partial update of a namespace. `None` leaves the field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NamespaceUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<Sku>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<TagMap>,
}
