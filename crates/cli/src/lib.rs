//! healthfirst_cli - command-line front end for the healthfirst core.

pub mod cli;
pub mod commands;
pub mod config;
pub mod data;
pub mod error;
pub mod output;

pub use config::Config;
pub use error::{CliError, Result};
