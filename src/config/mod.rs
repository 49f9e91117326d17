//! Configuration file management.

mod manager;

pub use manager::{
    ConfigFile, ConfigManager, LangizeConfig, ResolveOptions, ResolvedConfig, TemplateConfig,
    resolve_config,
};
