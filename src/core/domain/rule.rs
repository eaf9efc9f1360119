//! Authorization rule types.

use serde::{Deserialize, Serialize};

use crate::core::types::RuleName;
use crate::core::validation::require;
use crate::error::{Result, ValidationError};

/// A named shared-access policy within a namespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorizationRuleReference {
    rule_name: RuleName,
}

impl AuthorizationRuleReference {
    /// # Errors
    ///
    /// Returns `ValidationError::MissingField` for a blank name.
    pub fn new(rule_name: &str) -> Result<Self> {
        let rule_name = require("authorization-rule", rule_name)?.to_string();
        Ok(Self { rule_name })
    }

    pub fn rule_name(&self) -> &str {
        &self.rule_name
    }
}

impl std::fmt::Display for AuthorizationRuleReference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.rule_name)
    }
}

/// Permission granted by an authorization rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AccessRight {
    Listen,
    Send,
    Manage,
}

impl AccessRight {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Listen => "Listen",
            Self::Send => "Send",
            Self::Manage => "Manage",
        }
    }
}

/// Authorization rule as read from an input file or returned by the service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorizationRuleAttributes {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub name: RuleName,
    #[serde(default)]
    pub rights: Vec<AccessRight>,
}

impl AuthorizationRuleAttributes {
    /// Sort and de-duplicate rights and check that `Manage` comes with
    /// `Listen` and `Send`.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::MissingField` for an empty rights list, or
    /// `ValidationError::ConflictingRights`.
    pub fn normalize_rights(&mut self) -> Result<()> {
        self.rights.sort();
        self.rights.dedup();

        if self.rights.is_empty() {
            return Err(ValidationError::MissingField { field: "rights" }.into());
        }
        if self.rights.contains(&AccessRight::Manage)
            && !(self.rights.contains(&AccessRight::Listen)
                && self.rights.contains(&AccessRight::Send))
        {
            return Err(ValidationError::ConflictingRights.into());
        }
        Ok(())
    }
}
