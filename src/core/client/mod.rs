//! Management client.
//!
//! Commands talk to the namespace management plane only through the
//! [`ManagementClient`] trait. The client is built once by the caller and
//! passed in; commands never construct one.
//!
//! ## Adding a New Client
//!
//! 1. Implement the `ManagementClient` trait
//! 2. Add the implementation in a new file next to `rest.rs`
//! 3. Re-export from this module

use crate::core::domain::{
    AuthorizationRuleAttributes, AuthorizationRuleReference, ConsumerGroupAttributes,
    EventHubAttributes, KeyRegenerationRequest, NamespaceAttributes, NamespaceIdentifier,
    NamespaceUpdate, ResourceKeys,
};
use crate::error::Result;

mod rest;

pub use rest::ArmClient;

/// Remote operations on a namespace and its entities.
///
/// Implementations report failures as `ClientError`; callers propagate them
/// unchanged and never retry.
pub trait ManagementClient {
    /// Regenerate the primary or secondary key of a namespace authorization rule.
    ///
    /// # Returns
    ///
    /// The rule's key material after regeneration.
    fn regenerate_keys(
        &self,
        namespace: &NamespaceIdentifier,
        rule: &AuthorizationRuleReference,
        request: &KeyRegenerationRequest,
    ) -> Result<ResourceKeys>;

    /// Read the current key material of a namespace authorization rule.
    fn list_keys(
        &self,
        namespace: &NamespaceIdentifier,
        rule: &AuthorizationRuleReference,
    ) -> Result<ResourceKeys>;

    /// Create or replace a namespace authorization rule.
    fn create_or_update_authorization_rule(
        &self,
        namespace: &NamespaceIdentifier,
        rule: &AuthorizationRuleAttributes,
    ) -> Result<AuthorizationRuleAttributes>;

    /// Create or replace an event hub.
    fn create_or_update_event_hub(
        &self,
        namespace: &NamespaceIdentifier,
        event_hub: &EventHubAttributes,
    ) -> Result<EventHubAttributes>;

    /// Create or replace a consumer group of an event hub.
    fn create_or_update_consumer_group(
        &self,
        namespace: &NamespaceIdentifier,
        event_hub: &str,
        group: &ConsumerGroupAttributes,
    ) -> Result<ConsumerGroupAttributes>;

    /// Apply a partial update (SKU, tags) to a namespace.
    fn update_namespace(
        &self,
        namespace: &NamespaceIdentifier,
        update: &NamespaceUpdate,
    ) -> Result<NamespaceAttributes>;
}
