use anyhow::{Context, Result};
use serde::Serialize;
use std::io::{self, Write};

use crate::config::{ConfigManager, ResolveOptions, resolve_config};
use crate::info;

pub struct RenderOptions {
    pub to: Option<String>,
    pub allow_any: bool,
    pub json: bool,
}

/// A chat message in the shape OpenAI-compatible endpoints accept.
#[derive(Debug, Serialize)]
struct SystemMessage<'a> {
    role: &'static str,
    content: &'a str,
}

/// Renders the active template and writes it to stdout.
pub fn run_render(options: &RenderOptions) -> Result<()> {
    let manager = ConfigManager::new()?;
    let config_file = manager.load_or_default()?;

    let resolved = resolve_config(
        &ResolveOptions {
            to: options.to.clone(),
            allow_any: options.allow_any,
        },
        &config_file,
    )?;

    if resolved.allow_any {
        info!(
            "Language list skipped; inserting '{}' verbatim",
            resolved.language
        );
    }

    if !resolved.template.is_builtin() {
        info!(
            "Using custom template from {}",
            manager.config_path().display()
        );
    }

    let prompt = resolved
        .template
        .render(&resolved.language)
        .with_context(|| format!("Failed to render prompt for '{}'", resolved.language))?;

    let mut stdout = io::stdout().lock();
    if options.json {
        let message = format_json(&prompt)?;
        writeln!(stdout, "{message}")?;
    } else {
        write!(stdout, "{prompt}")?;
    }
    stdout.flush()?;

    Ok(())
}

fn format_json(prompt: &str) -> Result<String> {
    let message = SystemMessage {
        role: "system",
        content: prompt,
    };
    serde_json::to_string(&message).context("Failed to serialize system message")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::translation::TRANSLATION_TEMPLATE;

    #[test]
    fn test_format_json_system_message() {
        let prompt = TRANSLATION_TEMPLATE.render("Korean").unwrap();
        let json = format_json(&prompt).unwrap();

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["role"], "system");
        assert_eq!(value["content"], prompt.as_str());
    }

    #[test]
    fn test_format_json_is_single_line() {
        let prompt = TRANSLATION_TEMPLATE.render("Korean").unwrap();
        let json = format_json(&prompt).unwrap();
        assert!(!json.contains('\n'));
    }
}
