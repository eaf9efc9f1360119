//! Command-line interface.

pub mod completions;
pub mod entities;
pub mod keys;
pub mod namespace;
pub mod output;
pub mod rule;
pub mod session;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::core::constants::env;

/// Hubkeys - manage shared-access keys and entities on Event Hubs namespaces.
#[derive(Parser)]
#[command(
    name = "hubkeys",
    about = "Manage shared-access keys and entities on Event Hubs namespaces",
    version
)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Execution context file (default: ~/.hubkeys/context.toml)
    #[arg(long, global = true, env = env::CONTEXT, value_name = "PATH")]
    pub context: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Namespace addressing shared by every command.
#[derive(Args, Debug, Clone)]
pub struct NamespaceArgs {
    /// The name of the resource group
    #[arg(long)]
    pub resource_group: String,

    /// Namespace name
    #[arg(long)]
    pub namespace_name: String,
}

/// Namespace plus authorization rule.
#[derive(Args, Debug, Clone)]
pub struct RuleArgs {
    #[command(flatten)]
    pub namespace: NamespaceArgs,

    /// Authorization rule name
    #[arg(long)]
    pub authorization_rule: String,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Regenerate the primary or secondary key of a namespace authorization rule
    RegenerateNamespaceKeys {
        #[command(flatten)]
        rule: RuleArgs,
        /// Key to regenerate: PrimaryKey or SecondaryKey (any case)
        #[arg(long, value_name = "KEY")]
        regenerate_keys: String,
    },

    /// Show the keys and connection strings of a namespace authorization rule
    ListNamespaceKeys {
        #[command(flatten)]
        rule: RuleArgs,
    },

    /// Create or update a namespace authorization rule
    NewNamespaceAuthorizationRule {
        #[command(flatten)]
        namespace: NamespaceArgs,
        /// Rule name
        #[arg(long, required_unless_present = "input_file", conflicts_with = "input_file")]
        name: Option<String>,
        /// Rights to grant: Listen, Send, Manage (comma separated)
        #[arg(long, value_delimiter = ',', conflicts_with = "input_file")]
        rights: Vec<String>,
        /// JSON file describing the rule
        #[arg(long, value_name = "PATH")]
        input_file: Option<String>,
    },

    /// Create or update an event hub
    NewEventHub {
        #[command(flatten)]
        namespace: NamespaceArgs,
        /// Event hub name
        #[arg(long, required_unless_present = "input_file", conflicts_with = "input_file")]
        name: Option<String>,
        /// Number of partitions (1-32)
        #[arg(long, conflicts_with = "input_file")]
        partition_count: Option<i64>,
        /// Days to retain messages (1-7)
        #[arg(long, conflicts_with = "input_file")]
        message_retention_in_days: Option<i64>,
        /// JSON file describing the event hub
        #[arg(long, value_name = "PATH")]
        input_file: Option<String>,
    },

    /// Create or update a consumer group of an event hub
    NewConsumerGroup {
        #[command(flatten)]
        namespace: NamespaceArgs,
        /// Event hub the consumer group belongs to
        #[arg(long)]
        event_hub: String,
        /// Consumer group name
        #[arg(long, required_unless_present = "input_file", conflicts_with = "input_file")]
        name: Option<String>,
        /// Free-form metadata stored with the consumer group
        #[arg(long, conflicts_with = "input_file")]
        user_metadata: Option<String>,
        /// JSON file describing the consumer group
        #[arg(long, value_name = "PATH")]
        input_file: Option<String>,
    },

    /// Update the SKU and tags of a namespace
    SetNamespace {
        #[command(flatten)]
        namespace: NamespaceArgs,
        /// Basic, Standard or Premium
        #[arg(long)]
        sku: Option<String>,
        /// Throughput units (1-20), requires --sku
        #[arg(long)]
        capacity: Option<i64>,
        /// Tags as a JSON object, e.g. '{"env":"prod"}'
        #[arg(long, value_name = "JSON")]
        tags: Option<String>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported shells for completions.
#[derive(clap::ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

/// Execute a command.
pub fn execute(command: Command, context: Option<PathBuf>) -> crate::error::Result<()> {
    use Command::*;

    let context = context.as_deref();
    match command {
        RegenerateNamespaceKeys {
            rule,
            regenerate_keys,
        } => keys::regenerate(context, rule, regenerate_keys),
        ListNamespaceKeys { rule } => keys::list(context, rule),
        NewNamespaceAuthorizationRule {
            namespace,
            name,
            rights,
            input_file,
        } => rule::create(context, namespace, name, rights, input_file),
        NewEventHub {
            namespace,
            name,
            partition_count,
            message_retention_in_days,
            input_file,
        } => entities::event_hub(
            context,
            namespace,
            name,
            partition_count,
            message_retention_in_days,
            input_file,
        ),
        NewConsumerGroup {
            namespace,
            event_hub,
            name,
            user_metadata,
            input_file,
        } => entities::consumer_group(context, namespace, event_hub, name, user_metadata, input_file),
        SetNamespace {
            namespace,
            sku,
            capacity,
            tags,
        } => namespace::set(context, namespace, sku, capacity, tags),
        Completions { shell } => completions::execute(shell),
    }
}
