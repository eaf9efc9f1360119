//! Recording client for command tests.

use std::cell::RefCell;

use crate::core::client::ManagementClient;
use crate::core::domain::{
    AuthorizationRuleAttributes, AuthorizationRuleReference, ConsumerGroupAttributes,
    EventHubAttributes, KeyRegenerationRequest, KeySelector, NamespaceAttributes,
    NamespaceIdentifier, NamespaceUpdate, ResourceKeys,
};
use crate::core::input::InputFileLoader;
use crate::error::{ClientError, Result};

use super::Services;

/// A call received by [`StubClient`].
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    RegenerateKeys {
        namespace: String,
        rule: String,
        selector: KeySelector,
    },
    ListKeys {
        namespace: String,
        rule: String,
    },
    AuthorizationRule(AuthorizationRuleAttributes),
    EventHub(EventHubAttributes),
    ConsumerGroup {
        event_hub: String,
        group: ConsumerGroupAttributes,
    },
    Namespace(NamespaceUpdate),
}

/// Records calls and answers with canned data, or fails every call.
#[derive(Default)]
pub struct StubClient {
    pub calls: RefCell<Vec<Call>>,
    pub keys: ResourceKeys,
    pub fail: bool,
}

impl StubClient {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    fn record(&self, namespace: &NamespaceIdentifier, call: Call) -> Result<()> {
        self.calls.borrow_mut().push(call);
        if self.fail {
            return Err(ClientError::NotFound(namespace.to_string()).into());
        }
        Ok(())
    }
}

impl ManagementClient for StubClient {
    fn regenerate_keys(
        &self,
        namespace: &NamespaceIdentifier,
        rule: &AuthorizationRuleReference,
        request: &KeyRegenerationRequest,
    ) -> Result<ResourceKeys> {
        self.record(
            namespace,
            Call::RegenerateKeys {
                namespace: namespace.to_string(),
                rule: rule.rule_name().to_string(),
                selector: request.selector(),
            },
        )?;
        Ok(self.keys.clone())
    }

    fn list_keys(
        &self,
        namespace: &NamespaceIdentifier,
        rule: &AuthorizationRuleReference,
    ) -> Result<ResourceKeys> {
        self.record(
            namespace,
            Call::ListKeys {
                namespace: namespace.to_string(),
                rule: rule.rule_name().to_string(),
            },
        )?;
        Ok(self.keys.clone())
    }

    fn create_or_update_authorization_rule(
        &self,
        namespace: &NamespaceIdentifier,
        rule: &AuthorizationRuleAttributes,
    ) -> Result<AuthorizationRuleAttributes> {
        self.record(namespace, Call::AuthorizationRule(rule.clone()))?;
        Ok(AuthorizationRuleAttributes {
            id: Some(format!("{}/authorizationRules/{}", namespace, rule.name)),
            ..rule.clone()
        })
    }

    fn create_or_update_event_hub(
        &self,
        namespace: &NamespaceIdentifier,
        event_hub: &EventHubAttributes,
    ) -> Result<EventHubAttributes> {
        self.record(namespace, Call::EventHub(event_hub.clone()))?;
        Ok(EventHubAttributes {
            id: Some(format!("{}/eventhubs/{}", namespace, event_hub.name)),
            status: Some("Active".to_string()),
            ..event_hub.clone()
        })
    }

    fn create_or_update_consumer_group(
        &self,
        namespace: &NamespaceIdentifier,
        event_hub: &str,
        group: &ConsumerGroupAttributes,
    ) -> Result<ConsumerGroupAttributes> {
        self.record(
            namespace,
            Call::ConsumerGroup {
                event_hub: event_hub.to_string(),
                group: group.clone(),
            },
        )?;
        Ok(ConsumerGroupAttributes {
            event_hub_name: Some(event_hub.to_string()),
            ..group.clone()
        })
    }

    fn update_namespace(
        &self,
        namespace: &NamespaceIdentifier,
        update: &NamespaceUpdate,
    ) -> Result<NamespaceAttributes> {
        self.record(namespace, Call::Namespace(update.clone()))?;
        Ok(NamespaceAttributes {
            id: None,
            name: namespace.namespace_name().to_string(),
            location: Some("westus".to_string()),
            sku: update.sku.clone(),
            tags: update.tags.clone(),
        })
    }
}

/// Services whose loader is rooted at `root`.
pub fn services_at(root: &std::path::Path) -> Services {
    Services::with_loader(InputFileLoader::with_source(
        root,
        crate::core::input::LocalFiles,
    ))
}
