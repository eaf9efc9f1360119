//! Key commands.
//!
//! Regenerate and list the shared-access keys of a namespace authorization rule.

use std::path::Path;

use crate::cli::{session, RuleArgs};
use crate::core::command::{ListKeys, RegenerateKeys};
use crate::error::Result;

/// Regenerate one key of an authorization rule and print the new key set.
pub fn regenerate(context: Option<&Path>, rule: RuleArgs, regenerate_keys: String) -> Result<()> {
    let command = RegenerateKeys {
        resource_group: rule.namespace.resource_group,
        namespace_name: rule.namespace.namespace_name,
        authorization_rule: rule.authorization_rule,
        regenerate_keys,
    };
    session::run(context, &command)
}

/// Print the current keys of an authorization rule.
pub fn list(context: Option<&Path>, rule: RuleArgs) -> Result<()> {
    let command = ListKeys {
        resource_group: rule.namespace.resource_group,
        namespace_name: rule.namespace.namespace_name,
        authorization_rule: rule.authorization_rule,
    };
    session::run(context, &command)
}
