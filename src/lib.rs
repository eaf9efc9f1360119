//! Hubkeys - manage shared-access keys and entities on Event Hubs namespaces.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── keys          # regenerate-namespace-keys, list-namespace-keys
//! │   ├── rule          # new-namespace-authorization-rule
//! │   ├── entities      # new-event-hub, new-consumer-group
//! │   ├── namespace     # set-namespace
//! │   ├── output        # JSON results, styled errors
//! │   └── completions   # Shell completions
//! └── core/             # Core library components
//!     ├── command/      # Command trait, Executor, parameter sets, commands
//!     ├── client/       # ManagementClient trait
//!     │   └── rest      # Azure Resource Manager implementation
//!     ├── context       # Subscription, credentials, endpoint
//!     ├── domain/       # Namespace, rule, key, event hub types
//!     ├── input         # JSON input file loading
//!     ├── parse         # Key selector, rights, SKU parsing
//!     ├── tags          # Loose <-> strict tag maps
//!     └── validation    # Required-field and range checks
//! ```
//!
//! # Example
//!
//! ```ignore
//! use hubkeys::core::command::{Executor, RegenerateKeys, Services};
//!
//! let client = hubkeys::ArmClient::new(&context)?;
//! let executor = Executor::new(&client, Services::new()?);
//! let keys = executor.run(&RegenerateKeys {
//!     resource_group: "rg1".into(),
//!     namespace_name: "ns1".into(),
//!     authorization_rule: "RootManageSharedAccessKey".into(),
//!     regenerate_keys: "PrimaryKey".into(),
//! })?;
//! ```

pub mod cli;
pub mod core;
pub mod error;

pub use crate::core::client::{ArmClient, ManagementClient};
pub use crate::core::command::{Command, Executor, ParameterSet, Services};
pub use crate::core::context::ExecutionContext;
pub use crate::core::domain::{KeyRegenerationRequest, KeySelector, ResourceKeys};
pub use crate::core::tags::TagCodec;
pub use error::{Error, Result};
