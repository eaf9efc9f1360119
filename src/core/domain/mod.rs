//! Domain types.

mod event_hub;
mod keys;
mod namespace;
mod rule;

pub use event_hub::{ConsumerGroupAttributes, EventHubAttributes};
pub use keys::{KeyRegenerationRequest, KeySelector, ResourceKeys};
pub use namespace::{NamespaceAttributes, NamespaceIdentifier, NamespaceUpdate, Sku, SkuName};
pub use rule::{AccessRight, AuthorizationRuleAttributes, AuthorizationRuleReference};
