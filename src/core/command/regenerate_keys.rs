//! Regenerate the primary or secondary key of a namespace authorization rule.

use tracing::info;

use super::{Command, Services};
use crate::core::client::ManagementClient;
use crate::core::domain::{
    AuthorizationRuleReference, KeyRegenerationRequest, NamespaceIdentifier, ResourceKeys,
};
use crate::core::parse::parse_key_selector;
use crate::core::validation::require;
use crate::error::Result;

/// Arguments of `regenerate-namespace-keys`, as bound by the CLI.
#[derive(Debug, Clone, Default)]
pub struct RegenerateKeys {
    pub resource_group: String,
    pub namespace_name: String,
    pub authorization_rule: String,
    /// `PrimaryKey` or `SecondaryKey`, any case.
    pub regenerate_keys: String,
}

/// Validated request: everything the client call needs.
#[derive(Debug)]
pub struct Prepared {
    namespace: NamespaceIdentifier,
    rule: AuthorizationRuleReference,
    request: KeyRegenerationRequest,
}

impl Command for RegenerateKeys {
    type Request = Prepared;
    type Output = ResourceKeys;

    const NAME: &'static str = "regenerate-namespace-keys";

    fn prepare(&self, _services: &Services) -> Result<Prepared> {
        let namespace = NamespaceIdentifier::new(&self.resource_group, &self.namespace_name)?;
        let rule = AuthorizationRuleReference::new(&self.authorization_rule)?;
        let selector = parse_key_selector(require("regenerate-keys", &self.regenerate_keys)?)?;

        Ok(Prepared {
            namespace,
            rule,
            request: KeyRegenerationRequest::new(selector),
        })
    }

    fn send(&self, prepared: Prepared, client: &dyn ManagementClient) -> Result<ResourceKeys> {
        info!(
            namespace = %prepared.namespace,
            rule = %prepared.rule,
            key = %prepared.request.selector(),
            "regenerating key"
        );
        client.regenerate_keys(&prepared.namespace, &prepared.rule, &prepared.request)
    }
}
