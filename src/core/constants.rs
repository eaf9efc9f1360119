//! Constants used throughout hubkeys.
//!
//! Centralizes wire names, defaults and environment variable names.

use std::time::Duration;

/// Default timeout for long-running management operations.
///
/// Consumed by the management client as its request timeout; the command
/// layer itself never enforces it.
pub const LONG_RUNNING_OPERATION_TIMEOUT: Duration = Duration::from_secs(60);

/// Default Azure Resource Manager endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://management.azure.com";

/// Default `api-version` for the `Microsoft.EventHub` provider.
pub const DEFAULT_API_VERSION: &str = "2017-04-01";

/// Resource provider namespace.
pub const PROVIDER: &str = "Microsoft.EventHub";

/// Context file name inside the hubkeys home directory.
pub const CONTEXT_FILE: &str = "context.toml";

/// Hubkeys home directory relative to HOME (~/.hubkeys).
pub const HOME_DIR: &str = ".hubkeys";

/// Environment variable names.
pub mod env {
    pub const CONTEXT: &str = "HUBKEYS_CONTEXT";
    pub const SUBSCRIPTION_ID: &str = "HUBKEYS_SUBSCRIPTION_ID";
    pub const ACCESS_TOKEN: &str = "HUBKEYS_ACCESS_TOKEN";
    pub const ENDPOINT: &str = "HUBKEYS_ENDPOINT";
    pub const LOG: &str = "HUBKEYS_LOG";
    pub const LOG_FORMAT: &str = "HUBKEYS_LOG_FORMAT";
}

/// Wire names of the two regenerable keys.
pub mod key_type {
    pub const PRIMARY_KEY: &str = "PrimaryKey";
    pub const SECONDARY_KEY: &str = "SecondaryKey";
}

/// Wire names of the namespace SKUs.
pub mod sku {
    pub const BASIC: &str = "Basic";
    pub const STANDARD: &str = "Standard";
    pub const PREMIUM: &str = "Premium";
}

/// Consumer group every event hub is created with.
pub const DEFAULT_CONSUMER_GROUP: &str = "$Default";

/// Bounds enforced locally before a request is sent.
pub mod limits {
    pub const PARTITION_COUNT: (i64, i64) = (1, 32);
    pub const MESSAGE_RETENTION_DAYS: (i64, i64) = (1, 7);
    pub const SKU_CAPACITY: (i64, i64) = (1, 20);
}
