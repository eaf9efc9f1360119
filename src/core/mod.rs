//! Core library components.
//!
//! This module contains the command execution layer and the services it
//! builds on: tag conversion, input file loading, argument parsing, the
//! management client and its execution context.

pub mod client;
pub mod command;
pub mod constants;
pub mod context;
pub mod domain;
pub mod input;
pub mod parse;
pub mod tags;
pub mod types;
pub mod validation;
