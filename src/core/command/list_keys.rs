//! Read the current keys of a namespace authorization rule.

use super::{Command, Services};
use crate::core::client::ManagementClient;
use crate::core::domain::{AuthorizationRuleReference, NamespaceIdentifier, ResourceKeys};
use crate::error::Result;

/// Arguments of `list-namespace-keys`.
#[derive(Debug, Clone, Default)]
pub struct ListKeys {
    pub resource_group: String,
    pub namespace_name: String,
    pub authorization_rule: String,
}

impl Command for ListKeys {
    type Request = (NamespaceIdentifier, AuthorizationRuleReference);
    type Output = ResourceKeys;

    const NAME: &'static str = "list-namespace-keys";

    fn prepare(&self, _services: &Services) -> Result<Self::Request> {
        Ok((
            NamespaceIdentifier::new(&self.resource_group, &self.namespace_name)?,
            AuthorizationRuleReference::new(&self.authorization_rule)?,
        ))
    }

    fn send(
        &self,
        (namespace, rule): Self::Request,
        client: &dyn ManagementClient,
    ) -> Result<ResourceKeys> {
        client.list_keys(&namespace, &rule)
    }
}
