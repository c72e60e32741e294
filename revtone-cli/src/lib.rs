//! revtone CLI library
//!
//! This library provides the command-line interface for scoring the
//! sentiment of product reviews with revtone-core.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod progress;
pub mod store;

pub use error::{CliError, CliResult};
