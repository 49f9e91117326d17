use anyhow::Result;

use crate::config::ConfigManager;
use crate::translation::LANGUAGE_PLACEHOLDER;
use crate::ui::Style;
use crate::warn;

/// Prints the active template, or only its fingerprint.
pub fn print_template(fingerprint_only: bool) -> Result<()> {
    let manager = ConfigManager::new()?;
    let template = manager.load_or_default()?.template();

    if fingerprint_only {
        println!("{}", template.fingerprint());
        return Ok(());
    }

    let source = if template.is_builtin() {
        "built-in".to_string()
    } else {
        manager.config_path().display().to_string()
    };

    println!("{}", Style::header("Template"));
    println!("  {}       {}", Style::label("source"), Style::value(source));
    println!(
        "  {}  {}",
        Style::label("fingerprint"),
        Style::secondary(template.fingerprint())
    );
    println!(
        "  {} {}",
        Style::label("placeholders"),
        Style::value(template.placeholder_count())
    );
    println!();
    print!("{}", template.text());
    if !template.text().ends_with('\n') {
        println!();
    }

    if template.placeholder_count() == 0 {
        warn!(
            "{} template has no {LANGUAGE_PLACEHOLDER} placeholder and cannot be rendered",
            Style::warning("Warning:")
        );
    }

    Ok(())
}
