//! Error types.
//!
//! One enum per concern, folded into [`Error`] at the command boundary.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error returned by every hubkeys operation.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Tag(#[from] TagError),

    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Failure reported by the management client, passed through as-is.
    #[error(transparent)]
    Client(#[from] ClientError),

    #[error("failed to serialize output: {0}")]
    Output(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Local argument validation failures. The client is never reached.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("missing required value for --{field}")]
    MissingField { field: &'static str },

    #[error("invalid value '{0}' for --regenerate-keys: expected PrimaryKey or SecondaryKey")]
    InvalidKeySelector(String),

    #[error("invalid access right '{0}': expected Listen, Send or Manage")]
    InvalidAccessRight(String),

    #[error("invalid sku '{0}': expected Basic, Standard or Premium")]
    InvalidSku(String),

    #[error("--{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        min: i64,
        max: i64,
        value: i64,
    },

    #[error("the Manage right requires Listen and Send as well")]
    ConflictingRights,

    #[error("'{0}' is a reserved name")]
    ReservedName(String),

    #[error("nothing to update: pass --sku or --tags")]
    NothingToUpdate,
}

/// Tag map conversion failures.
#[derive(Error, Debug)]
pub enum TagError {
    #[error("invalid tag name '{0}'")]
    InvalidKey(String),

    #[error("tag '{key}' has an invalid value: tag values must be strings")]
    InvalidValue { key: String },

    #[error("tags must be a JSON object: {0}")]
    Malformed(String),
}

/// Input file loading failures.
#[derive(Error, Debug)]
pub enum InputError {
    #[error("input file does not exist: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("failed to read input file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The deserializer's own error, unchanged.
    #[error(transparent)]
    Deserialize(#[from] serde_json::Error),
}

/// Execution context (credentials/subscription) failures.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read context file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse context file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("execution context is missing '{field}'")]
    MissingField { field: &'static str },

    #[error("invalid context value for '{field}': {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

/// Failures of the remote management operation.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("authentication failed: {0}")]
    Unauthorized(String),

    #[error("resource not found: {0}")]
    NotFound(String),

    #[error("conflict: {0}")]
    Conflict(String),

    #[error("service error ({status}) {code}: {message}")]
    Service {
        status: u16,
        code: String,
        message: String,
    },

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected response from service: {0}")]
    Decode(String),
}

pub type Result<T> = std::result::Result<T, Error>;
