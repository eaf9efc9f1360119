//! Create or update a consumer group of an event hub.

use tracing::info;

use super::{Command, ParameterSet, Services};
use crate::core::client::ManagementClient;
use crate::core::constants::DEFAULT_CONSUMER_GROUP;
use crate::core::domain::{ConsumerGroupAttributes, NamespaceIdentifier};
use crate::core::types::EventHubName;
use crate::core::validation::require;
use crate::error::{Result, ValidationError};

/// Where the consumer group definition comes from.
#[derive(Debug, Clone)]
pub enum ConsumerGroupSource {
    ConsumerGroup {
        name: String,
        user_metadata: Option<String>,
    },
    /// A JSON `ConsumerGroupAttributes` document.
    InputFile { path: String },
}

/// Arguments of `new-consumer-group`.
#[derive(Debug, Clone)]
pub struct NewConsumerGroup {
    pub resource_group: String,
    pub namespace_name: String,
    pub event_hub: String,
    pub source: ConsumerGroupSource,
}

impl Command for NewConsumerGroup {
    type Request = (NamespaceIdentifier, EventHubName, ConsumerGroupAttributes);
    type Output = ConsumerGroupAttributes;

    const NAME: &'static str = "new-consumer-group";

    fn parameter_set(&self) -> Option<ParameterSet> {
        Some(match self.source {
            ConsumerGroupSource::ConsumerGroup { .. } => ParameterSet::ConsumerGroup,
            ConsumerGroupSource::InputFile { .. } => ParameterSet::InputFile,
        })
    }

    fn prepare(&self, services: &Services) -> Result<Self::Request> {
        let namespace = NamespaceIdentifier::new(&self.resource_group, &self.namespace_name)?;
        let event_hub = require("event-hub", &self.event_hub)?.to_string();

        let group = match &self.source {
            ConsumerGroupSource::ConsumerGroup {
                name,
                user_metadata,
            } => ConsumerGroupAttributes {
                name: require("name", name)?.to_string(),
                user_metadata: user_metadata.clone(),
                ..Default::default()
            },
            ConsumerGroupSource::InputFile { path } => {
                let group: ConsumerGroupAttributes =
                    services.files.load(require("input-file", path)?)?;
                require("name", &group.name)?;
                group
            }
        };

        if group.name.eq_ignore_ascii_case(DEFAULT_CONSUMER_GROUP) {
            return Err(ValidationError::ReservedName(group.name).into());
        }

        Ok((namespace, event_hub, group))
    }

    fn send(
        &self,
        (namespace, event_hub, group): Self::Request,
        client: &dyn ManagementClient,
    ) -> Result<ConsumerGroupAttributes> {
        info!(
            namespace = %namespace,
            event_hub = %event_hub,
            consumer_group = %group.name,
            "writing consumer group"
        );
        client.create_or_update_consumer_group(&namespace, &event_hub, &group)
    }
}
