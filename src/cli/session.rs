//! Client construction for CLI commands.

use std::path::Path;

use tracing::debug;

use crate::cli::output;
use crate::core::client::ArmClient;
use crate::core::command::{Command, Executor, Services};
use crate::core::context::ExecutionContext;
use crate::error::Result;

/// One management client for the lifetime of a CLI invocation.
pub struct Session {
    client: ArmClient,
}

impl Session {
    /// Resolve the execution context and build the client.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the context is incomplete or invalid.
    pub fn open(context: Option<&Path>) -> Result<Self> {
        let context = ExecutionContext::load(context)?;
        let client = ArmClient::new(&context)?;
        debug!(client = ?client, "session opened");
        Ok(Self { client })
    }

    /// Executor bound to this session's client.
    pub fn executor(&self, services: Services) -> Executor<'_> {
        Executor::new(&self.client, services)
    }
}

/// Validate a command, then open a session and send it.
///
/// Arguments are checked before the context is resolved, so a bad flag is
/// reported as such even when no credentials are configured.
pub fn run<C: Command>(context: Option<&Path>, command: &C) -> Result<()> {
    let services = Services::new()?;
    let request = Executor::prepare(&services, command)?;

    let session = Session::open(context)?;
    let result = session.executor(services).send(command, request)?;
    output::emit(&result)
}
