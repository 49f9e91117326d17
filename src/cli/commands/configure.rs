//! Config command handler.

use anyhow::Result;

use crate::config::{ConfigFile, ConfigManager, LangizeConfig};
use crate::status;
use crate::translation::{LanguageError, resolve_language};
use crate::ui::Style;

pub struct ConfigureOptions {
    pub init: bool,
    pub to: Option<String>,
    pub force: bool,
}

pub fn run_configure(options: &ConfigureOptions) -> Result<()> {
    let manager = ConfigManager::new()?;

    if options.init {
        return init_config(&manager, options);
    }

    print_config(&manager)
}

fn init_config(manager: &ConfigManager, options: &ConfigureOptions) -> Result<()> {
    let to = options.to.clone().ok_or(LanguageError::Missing)?;
    resolve_language(&to)?;

    let config = ConfigFile {
        langize: LangizeConfig {
            to: Some(to),
            allow_any: false,
        },
        template: None,
    };

    if options.force {
        manager.save(&config)?;
    } else {
        manager.create(&config)?;
    }

    status!(
        "{} Configuration saved to {}",
        Style::success("✓"),
        Style::secondary(manager.config_path().display())
    );

    Ok(())
}

fn print_config(manager: &ConfigManager) -> Result<()> {
    println!("{}", Style::header("Configuration"));
    println!(
        "  {}      {}",
        Style::label("path"),
        Style::value(manager.config_path().display())
    );

    if !manager.exists() {
        println!(
            "  {}",
            Style::secondary("(no config file; run 'langize config --init --to <lang>')")
        );
        return Ok(());
    }

    let config = manager.load()?;
    println!(
        "  {}        {}",
        Style::label("to"),
        config
            .langize
            .to
            .as_deref()
            .map_or_else(|| Style::secondary("(not set)"), Style::value)
    );
    println!(
        "  {} {}",
        Style::label("allow_any"),
        Style::value(config.langize.allow_any)
    );
    println!(
        "  {}  {}",
        Style::label("template"),
        if config.template.is_some() {
            Style::value("custom")
        } else {
            Style::secondary("built-in")
        }
    );

    Ok(())
}
