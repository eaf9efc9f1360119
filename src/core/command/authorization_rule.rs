//! Create or update a namespace authorization rule.

use tracing::info;

use super::{Command, ParameterSet, Services};
use crate::core::client::ManagementClient;
use crate::core::domain::{AuthorizationRuleAttributes, NamespaceIdentifier};
use crate::core::parse::parse_access_rights;
use crate::core::validation::require;
use crate::error::Result;

/// Where the rule definition comes from.
#[derive(Debug, Clone)]
pub enum RuleSource {
    /// `--name` and `--rights` on the command line.
    SasRule { name: String, rights: Vec<String> },
    /// A JSON `AuthorizationRuleAttributes` document.
    InputFile { path: String },
}

/// Arguments of `new-namespace-authorization-rule`.
#[derive(Debug, Clone)]
pub struct NewAuthorizationRule {
    pub resource_group: String,
    pub namespace_name: String,
    pub source: RuleSource,
}

impl Command for NewAuthorizationRule {
    type Request = (NamespaceIdentifier, AuthorizationRuleAttributes);
    type Output = AuthorizationRuleAttributes;

    const NAME: &'static str = "new-namespace-authorization-rule";

    fn parameter_set(&self) -> Option<ParameterSet> {
        Some(match self.source {
            RuleSource::SasRule { .. } => ParameterSet::SasRule,
            RuleSource::InputFile { .. } => ParameterSet::InputFile,
        })
    }

    fn prepare(&self, services: &Services) -> Result<Self::Request> {
        let namespace = NamespaceIdentifier::new(&self.resource_group, &self.namespace_name)?;

        let mut rule = match &self.source {
            RuleSource::SasRule { name, rights } => AuthorizationRuleAttributes {
                id: None,
                name: require("name", name)?.to_string(),
                rights: parse_access_rights(rights)?,
            },
            RuleSource::InputFile { path } => {
                let rule: AuthorizationRuleAttributes =
                    services.files.load(require("input-file", path)?)?;
                require("name", &rule.name)?;
                rule
            }
        };
        rule.normalize_rights()?;

        Ok((namespace, rule))
    }

    fn send(
        &self,
        (namespace, rule): Self::Request,
        client: &dyn ManagementClient,
    ) -> Result<AuthorizationRuleAttributes> {
        info!(namespace = %namespace, rule = %rule.name, "writing authorization rule");
        client.create_or_update_authorization_rule(&namespace, &rule)
    }
}
