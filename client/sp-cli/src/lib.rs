//! sp-cli library
//!
//! Exports the command definitions and the session runner for use in tests.

pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;
pub mod profile_commands;
pub mod report;
pub mod session_runner;


pub use error::{CliError, Result as CliResult};
pub use session_runner::{EditOutcome, SessionRunner};
