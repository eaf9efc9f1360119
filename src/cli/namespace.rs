//! Namespace update command.

use std::path::Path;

use crate::cli::{session, NamespaceArgs};
use crate::core::command::SetNamespace;
use crate::error::Result;

/// Update SKU and/or tags of a namespace.
pub fn set(
    context: Option<&Path>,
    namespace: NamespaceArgs,
    sku: Option<String>,
    capacity: Option<i64>,
    tags: Option<String>,
) -> Result<()> {
    let command = SetNamespace {
        resource_group: namespace.resource_group,
        namespace_name: namespace.namespace_name,
        sku,
        capacity,
        tags,
    };
    session::run(context, &command)
}
