//! CLI layer: argument parsing, dispatch, errors, terminal output

pub mod args;
pub mod commands;
pub mod error;
pub mod output;

pub use error::{CliError, CliResult};
