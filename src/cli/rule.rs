//! Authorization rule command.

use std::path::Path;

use crate::cli::{session, NamespaceArgs};
use crate::core::command::{NewAuthorizationRule, RuleSource};
use crate::error::{Result, ValidationError};

/// Create or update a namespace authorization rule, inline or from a file.
pub fn create(
    context: Option<&Path>,
    namespace: NamespaceArgs,
    name: Option<String>,
    rights: Vec<String>,
    input_file: Option<String>,
) -> Result<()> {
    let source = match (input_file, name) {
        (Some(path), _) => RuleSource::InputFile { path },
        (None, Some(name)) => RuleSource::SasRule { name, rights },
        (None, None) => return Err(ValidationError::MissingField { field: "name" }.into()),
    };

    let command = NewAuthorizationRule {
        resource_group: namespace.resource_group,
        namespace_name: namespace.namespace_name,
        source,
    };
    session::run(context, &command)
}
