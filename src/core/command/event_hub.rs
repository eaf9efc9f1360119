//! Create or update an event hub.

use tracing::info;

use super::{Command, ParameterSet, Services};
use crate::core::client::ManagementClient;
use crate::core::constants::limits;
use crate::core::domain::{EventHubAttributes, NamespaceIdentifier};
use crate::core::validation::{check_range, require};
use crate::error::Result;

/// Where the event hub definition comes from.
#[derive(Debug, Clone)]
pub enum EventHubSource {
    EventHub {
        name: String,
        partition_count: Option<i64>,
        message_retention_in_days: Option<i64>,
    },
    /// A JSON `EventHubAttributes` document.
    InputFile { path: String },
}

/// Arguments of `new-event-hub`.
#[derive(Debug, Clone)]
pub struct NewEventHub {
    pub resource_group: String,
    pub namespace_name: String,
    pub source: EventHubSource,
}

impl Command for NewEventHub {
    type Request = (NamespaceIdentifier, EventHubAttributes);
    type Output = EventHubAttributes;

    const NAME: &'static str = "new-event-hub";

    fn parameter_set(&self) -> Option<ParameterSet> {
        Some(match self.source {
            EventHubSource::EventHub { .. } => ParameterSet::EventHub,
            EventHubSource::InputFile { .. } => ParameterSet::InputFile,
        })
    }

    fn prepare(&self, services: &Services) -> Result<Self::Request> {
        let namespace = NamespaceIdentifier::new(&self.resource_group, &self.namespace_name)?;

        let hub = match &self.source {
            EventHubSource::EventHub {
                name,
                partition_count,
                message_retention_in_days,
            } => EventHubAttributes {
                name: require("name", name)?.to_string(),
                partition_count: *partition_count,
                message_retention_in_days: *message_retention_in_days,
                ..Default::default()
            },
            EventHubSource::InputFile { path } => {
                let hub: EventHubAttributes = services.files.load(require("input-file", path)?)?;
                require("name", &hub.name)?;
                hub
            }
        };

        check_range("partition-count", hub.partition_count, limits::PARTITION_COUNT)?;
        check_range(
            "message-retention-in-days",
            hub.message_retention_in_days,
            limits::MESSAGE_RETENTION_DAYS,
        )?;

        Ok((namespace, hub))
    }

    fn send(
        &self,
        (namespace, hub): Self::Request,
        client: &dyn ManagementClient,
    ) -> Result<EventHubAttributes> {
        info!(namespace = %namespace, event_hub = %hub.name, "writing event hub");
        client.create_or_update_event_hub(&namespace, &hub)
    }
}
