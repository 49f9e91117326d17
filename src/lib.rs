//! # langize - Idiomatic Translation Prompts
//!
//! `langize` renders a system prompt that asks a language model to
//! "{language}ize" text: translate it the way a native speaker would say it,
//! not word for word.
//!
//! ## Library
//!
//! ```
//! use langize::translation::TRANSLATION_TEMPLATE;
//!
//! let prompt = TRANSLATION_TEMPLATE.render("French")?;
//! assert!(prompt.starts_with("You are an expert in French"));
//! # Ok::<(), langize::translation::PromptError>(())
//! ```
//!
//! ## CLI
//!
//! ```bash
//! # Print the prompt for French
//! langize --to fr
//!
//! # As a JSON system message
//! langize --to Japanese --json
//!
//! # List supported languages
//! langize languages
//! ```
//!
//! ## Configuration
//!
//! Settings are stored in `~/.config/langize/config.toml`:
//!
//! ```toml
//! [langize]
//! to = "ja"
//! allow_any = false
//!
//! [template]
//! text = "Rewrite the text as a native {language} speaker would."
//! ```

/// Command-line interface definitions and handlers.
pub mod cli;

/// Configuration file management.
pub mod config;

/// File system utilities.
pub mod fs;

/// Global output configuration (quiet mode, colors, stderr/stdout routing).
pub mod output;

/// XDG-style path utilities for configuration.
pub mod paths;

/// The translation prompt template and language catalogue.
pub mod translation;

/// Terminal styling helpers.
pub mod ui;
