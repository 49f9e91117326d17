//! Command-line interface definitions and handlers.

use std::io;

use crate::translation::{LanguageError, PromptError};

/// CLI argument parsing with clap.
pub mod args;

/// Subcommand implementations.
pub mod commands;

pub use args::{Args, Command};

/// Maps an error to a process exit status.
///
/// Missing or unknown languages are usage errors; broken templates and config files are
/// configuration errors.
pub fn exit_code(err: &anyhow::Error) -> exitcode::ExitCode {
    for cause in err.chain() {
        if cause.is::<LanguageError>() {
            return exitcode::USAGE;
        }
        if cause.is::<PromptError>() || cause.is::<toml::de::Error>() {
            return exitcode::CONFIG;
        }
        if cause.is::<io::Error>() {
            return exitcode::IOERR;
        }
    }
    exitcode::SOFTWARE
}
