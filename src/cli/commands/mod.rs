//! Subcommand implementations.

/// Config command handler.
pub mod configure;

/// Default command: render the prompt.
pub mod render;

/// Template inspection command handler.
pub mod template;
