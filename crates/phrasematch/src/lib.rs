//! # Phrasematch CLI
//!
//! Shared infrastructure for the `phrasematch` binary:
//! - **config**: arguments and environment variables
//! - **error**: CLI error type
//! - **run**: the built-in demonstration and line-by-line matching
//! - **tracing**: logging setup

pub mod config;
pub mod error;
pub mod run;
pub mod tracing;

pub use config::CliConfig;
pub use error::{Error, Result};
