//! Execution context.
//!
//! Resolves the subscription, credentials and endpoint the management client
//! is built from. Sources, lowest precedence first:
//!
//! 1. `~/.hubkeys/context.toml` (or the file named by `--context` /
//!    `HUBKEYS_CONTEXT`)
//! 2. `HUBKEYS_SUBSCRIPTION_ID`, `HUBKEYS_ACCESS_TOKEN`, `HUBKEYS_ENDPOINT`
//!
//! ```toml
//! [context]
//! subscription_id = "00000000-0000-0000-0000-000000000000"
//! access_token = "eyJ0eXAi..."
//! endpoint = "https://management.azure.com"
//! api_version = "2017-04-01"
//! timeout_secs = 60
//! ```

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use tracing::debug;
use zeroize::Zeroizing;

use crate::core::constants::{self, env};
use crate::error::{ConfigError, Result};

/// On-disk layout of the context file.
#[derive(Debug, Default, Deserialize)]
struct ContextFile {
    #[serde(default)]
    context: ContextSection,
}

#[derive(Debug, Default, Deserialize)]
struct ContextSection {
    subscription_id: Option<String>,
    access_token: Option<String>,
    endpoint: Option<String>,
    api_version: Option<String>,
    timeout_secs: Option<u64>,
}

/// Everything needed to construct a management client.
pub struct ExecutionContext {
    subscription_id: String,
    access_token: Zeroizing<String>,
    endpoint: String,
    api_version: String,
    timeout: Duration,
}

impl std::fmt::Debug for ExecutionContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExecutionContext")
            .field("subscription_id", &self.subscription_id)
            .field("access_token", &"<redacted>")
            .field("endpoint", &self.endpoint)
            .field("api_version", &self.api_version)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl ExecutionContext {
    /// Build a context directly, with default endpoint, API version and timeout.
    pub fn new(subscription_id: impl Into<String>, access_token: impl Into<String>) -> Self {
        Self {
            subscription_id: subscription_id.into(),
            access_token: Zeroizing::new(access_token.into()),
            endpoint: constants::DEFAULT_ENDPOINT.to_string(),
            api_version: constants::DEFAULT_API_VERSION.to_string(),
            timeout: constants::LONG_RUNNING_OPERATION_TIMEOUT,
        }
    }

    /// Override the management endpoint.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into().trim_end_matches('/').to_string();
        self
    }

    /// Default context file location (`~/.hubkeys/context.toml`).
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(constants::HOME_DIR).join(constants::CONTEXT_FILE))
    }

    /// Load the context from file and environment.
    ///
    /// `path` overrides the default file location. An explicitly named file
    /// must exist; the default one is optional.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read or parsed, or if the
    /// subscription or access token is missing after all sources are applied.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let explicit = path
            .map(Path::to_path_buf)
            .or_else(|| std::env::var_os(env::CONTEXT).map(PathBuf::from));

        let file = match explicit {
            Some(p) => Some(read_file(&p)?),
            None => match Self::default_path() {
                Some(p) if p.exists() => Some(read_file(&p)?),
                _ => None,
            },
        };

        Self::resolve(file.unwrap_or_default().context, |name| {
            std::env::var(name).ok()
        })
    }

    /// Merge file values with environment lookups and validate.
    fn resolve(file: ContextSection, lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let non_empty = |v: Option<String>| v.filter(|s| !s.trim().is_empty());

        let subscription_id = non_empty(lookup(env::SUBSCRIPTION_ID))
            .or(non_empty(file.subscription_id))
            .ok_or(ConfigError::MissingField {
                field: "subscription_id",
            })?;
        let access_token = non_empty(lookup(env::ACCESS_TOKEN))
            .or(non_empty(file.access_token))
            .ok_or(ConfigError::MissingField {
                field: "access_token",
            })?;
        let endpoint = non_empty(lookup(env::ENDPOINT))
            .or(non_empty(file.endpoint))
            .unwrap_or_else(|| constants::DEFAULT_ENDPOINT.to_string());
        let api_version = non_empty(file.api_version)
            .unwrap_or_else(|| constants::DEFAULT_API_VERSION.to_string());

        if !(endpoint.starts_with("https://") || endpoint.starts_with("http://")) {
            return Err(ConfigError::InvalidValue {
                field: "endpoint",
                reason: format!("not an http(s) URL: {}", endpoint),
            }
            .into());
        }

        let timeout = match file.timeout_secs {
            Some(0) => {
                return Err(ConfigError::InvalidValue {
                    field: "timeout_secs",
                    reason: "must be greater than zero".to_string(),
                }
                .into())
            }
            Some(secs) => Duration::from_secs(secs),
            None => constants::LONG_RUNNING_OPERATION_TIMEOUT,
        };

        debug!(
            subscription = %subscription_id,
            endpoint = %endpoint,
            api_version = %api_version,
            "execution context resolved"
        );

        Ok(Self {
            subscription_id,
            access_token: Zeroizing::new(access_token),
            endpoint: endpoint.trim_end_matches('/').to_string(),
            api_version,
            timeout,
        })
    }

    pub fn subscription_id(&self) -> &str {
        &self.subscription_id
    }

    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn api_version(&self) -> &str {
        &self.api_version
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

fn read_file(path: &Path) -> Result<ContextFile> {
    debug!(path = %path.display(), "loading context file");
    let contents = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
    let file: ContextFile = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    Ok(file)
}
