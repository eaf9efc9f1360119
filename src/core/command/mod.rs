//! Command execution layer.
//!
//! Every command runs in two steps:
//!
//! 1. [`Command::prepare`] validates the bound arguments and normalizes
//!    auxiliary inputs (tags, input files, key selectors) with the injected
//!    [`Services`]. Nothing here talks to the service.
//! 2. [`Command::send`] issues exactly one management call with the prepared
//!    request and returns the result unchanged.
//!
//! [`Executor`] borrows the client and owns the services for one invocation.
//! Step 1 needs no client at all ([`Executor::prepare`]), so callers can
//! validate before they resolve credentials; step 2 is never reached when
//! step 1 fails.
//!
//! Commands that accept alternative argument sets model them as an enum per
//! command (see [`ParameterSet`] for the names), so each set's fields are
//! fixed at compile time.

mod authorization_rule;
mod consumer_group;
mod event_hub;
mod list_keys;
mod namespace;
mod regenerate_keys;

#[cfg(test)]
mod testing;

pub use authorization_rule::{NewAuthorizationRule, RuleSource};
pub use consumer_group::{ConsumerGroupSource, NewConsumerGroup};
pub use event_hub::{EventHubSource, NewEventHub};
pub use list_keys::ListKeys;
pub use namespace::{NamespaceView, SetNamespace};
pub use regenerate_keys::RegenerateKeys;

use serde::Serialize;
use tracing::{debug, info_span};

use crate::core::client::ManagementClient;
use crate::core::input::InputFileLoader;
use crate::core::tags::TagCodec;
use crate::error::Result;

/// Named argument sets shared across the command family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterSet {
    /// Authorization rule given inline (name + rights).
    SasRule,
    /// Entity read from a JSON input file.
    InputFile,
    /// Event hub given inline.
    EventHub,
    /// Consumer group given inline.
    ConsumerGroup,
}

impl ParameterSet {
    pub fn name(&self) -> &'static str {
        match self {
            Self::SasRule => "SASRuleParameterSet",
            Self::InputFile => "InputFileParameterSet",
            Self::EventHub => "EventHubParameterSet",
            Self::ConsumerGroup => "ConsumerGroupParameterSet",
        }
    }
}

/// Stateless helpers injected into every command.
#[derive(Debug)]
pub struct Services {
    pub tags: TagCodec,
    pub files: InputFileLoader,
}

impl Services {
    /// Services rooted at the current directory.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the current directory cannot be determined.
    pub fn new() -> Result<Self> {
        Ok(Self::with_loader(InputFileLoader::new()?))
    }

    /// Services with a specific input file loader.
    pub fn with_loader(files: InputFileLoader) -> Self {
        Self {
            tags: TagCodec,
            files,
        }
    }
}

/// A single management operation.
pub trait Command {
    /// Validated, fully typed request produced by [`Command::prepare`].
    type Request;

    /// Result emitted to the caller.
    type Output: Serialize;

    /// Command name used in logs (matches the CLI subcommand).
    const NAME: &'static str;

    /// The argument set this invocation uses, if the command has several.
    fn parameter_set(&self) -> Option<ParameterSet> {
        None
    }

    /// Validate arguments and build the request.
    ///
    /// # Errors
    ///
    /// Returns local validation, tag or input file errors. Must not call the
    /// client.
    fn prepare(&self, services: &Services) -> Result<Self::Request>;

    /// Issue the management call.
    ///
    /// # Errors
    ///
    /// Returns the client's error unchanged.
    fn send(&self, request: Self::Request, client: &dyn ManagementClient) -> Result<Self::Output>;
}

/// Runs commands against one client.
pub struct Executor<'c> {
    client: &'c dyn ManagementClient,
    services: Services,
}

impl<'c> Executor<'c> {
    pub fn new(client: &'c dyn ManagementClient, services: Services) -> Self {
        Self { client, services }
    }

    pub fn services(&self) -> &Services {
        &self.services
    }

    /// Validate a command without a client.
    ///
    /// # Errors
    ///
    /// Returns local validation, tag or input file errors.
    pub fn prepare<C: Command>(services: &Services, command: &C) -> Result<C::Request> {
        let span = command_span(command);
        let _entered = span.enter();

        let request = command.prepare(services)?;
        debug!("arguments validated");
        Ok(request)
    }

    /// Issue the management call for an already prepared request.
    ///
    /// # Errors
    ///
    /// Returns the client's error unchanged.
    pub fn send<C: Command>(&self, command: &C, request: C::Request) -> Result<C::Output> {
        let span = command_span(command);
        let _entered = span.enter();

        let output = command.send(request, self.client)?;
        debug!("command completed");
        Ok(output)
    }

    /// Prepare then send. No retries: running a command twice issues two
    /// requests.
    ///
    /// # Errors
    ///
    /// Returns the first error from either step.
    pub fn run<C: Command>(&self, command: &C) -> Result<C::Output> {
        let request = Self::prepare(&self.services, command)?;
        self.send(command, request)
    }
}

fn command_span<C: Command>(command: &C) -> tracing::Span {
    info_span!(
        "command",
        name = C::NAME,
        parameter_set = command.parameter_set().map(|p| p.name()).unwrap_or("default"),
    )
}
