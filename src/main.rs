//! Hubkeys - shared-access key administration for Event Hubs namespaces.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use hubkeys::cli::output;
use hubkeys::cli::{execute, Cli};
use hubkeys::core::constants::env;
use hubkeys::error::{ClientError, ConfigError, Error};

fn main() {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_env(env::LOG).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("hubkeys=debug")
        } else {
            EnvFilter::new("hubkeys=warn")
        }
    });

    // Logs go to stderr; stdout carries command output only.
    let json = std::env::var(env::LOG_FORMAT).is_ok_and(|v| v.eq_ignore_ascii_case("json"));
    let (json_layer, text_layer) = if json {
        (Some(fmt::layer().json().with_writer(std::io::stderr)), None)
    } else {
        let layer = fmt::layer()
            .with_target(false)
            .without_time()
            .with_writer(std::io::stderr);
        (None, Some(layer))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(json_layer)
        .with(text_layer)
        .init();

    if let Err(e) = execute(cli.command, cli.context) {
        let suggestion = match &e {
            Error::Config(ConfigError::MissingField { .. }) => Some(
                "set HUBKEYS_SUBSCRIPTION_ID and HUBKEYS_ACCESS_TOKEN, or write ~/.hubkeys/context.toml",
            ),
            Error::Client(ClientError::Unauthorized(_)) => {
                Some("refresh the access token in HUBKEYS_ACCESS_TOKEN")
            }
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}
