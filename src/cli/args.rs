use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "langize")]
#[command(about = "Render idiomatic-translation system prompts for language models")]
#[command(version)]
pub struct Args {
    /// Target language (ISO 639-1 code such as fr, or a name such as French)
    #[arg(short = 't', long = "to")]
    pub to: Option<String>,

    /// Accept any language text instead of the built-in language list
    #[arg(long)]
    pub allow_any: bool,

    /// Print the prompt as a JSON system-role message
    #[arg(long)]
    pub json: bool,

    /// Suppress non-essential output
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List supported languages
    Languages,
    /// Show the active prompt template
    Template {
        /// Print only the SHA-256 fingerprint of the template
        #[arg(long)]
        fingerprint: bool,
    },
    /// Show or create the config file
    Config {
        /// Write a starter config file (requires --to)
        #[arg(long, requires = "to")]
        init: bool,

        /// Default target language stored by --init
        #[arg(short = 't', long = "to", requires = "init")]
        to: Option<String>,

        /// Overwrite an existing config file
        #[arg(long, requires = "init")]
        force: bool,
    },
}
