//! Tonearm CLI Library
//!
//! Command implementations behind the `tonearm` binary. Every command prints
//! JSON on stdout; logs go to stderr.
//!
//! This library exposes the core components for testing purposes.

pub mod commands;
pub mod config;
pub mod error;
pub mod output;

pub use commands::{execute, Command};
pub use config::{CliConfig, ImportOverrides};
pub use error::{CliError, Result};
