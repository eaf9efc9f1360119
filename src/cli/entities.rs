//! Event hub and consumer group commands.

use std::path::Path;

use crate::cli::{session, NamespaceArgs};
use crate::core::command::{ConsumerGroupSource, EventHubSource, NewConsumerGroup, NewEventHub};
use crate::error::{Result, ValidationError};

/// Create or update an event hub, inline or from a file.
pub fn event_hub(
    context: Option<&Path>,
    namespace: NamespaceArgs,
    name: Option<String>,
    partition_count: Option<i64>,
    message_retention_in_days: Option<i64>,
    input_file: Option<String>,
) -> Result<()> {
    let source = match (input_file, name) {
        (Some(path), _) => EventHubSource::InputFile { path },
        (None, Some(name)) => EventHubSource::EventHub {
            name,
            partition_count,
            message_retention_in_days,
        },
        (None, None) => return Err(ValidationError::MissingField { field: "name" }.into()),
    };

    let command = NewEventHub {
        resource_group: namespace.resource_group,
        namespace_name: namespace.namespace_name,
        source,
    };
    session::run(context, &command)
}

/// Create or update a consumer group, inline or from a file.
pub fn consumer_group(
    context: Option<&Path>,
    namespace: NamespaceArgs,
    event_hub: String,
    name: Option<String>,
    user_metadata: Option<String>,
    input_file: Option<String>,
) -> Result<()> {
    let source = match (input_file, name) {
        (Some(path), _) => ConsumerGroupSource::InputFile { path },
        (None, Some(name)) => ConsumerGroupSource::ConsumerGroup {
            name,
            user_metadata,
        },
        (None, None) => return Err(ValidationError::MissingField { field: "name" }.into()),
    };

    let command = NewConsumerGroup {
        resource_group: namespace.resource_group,
        namespace_name: namespace.namespace_name,
        event_hub,
        source,
    };
    session::run(context, &command)
}
