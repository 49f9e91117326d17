use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::fs::atomic_write;
use crate::paths;
use crate::translation::{LanguageError, PromptTemplate, resolve_language};

/// Default settings in the `[langize]` section of config.toml.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LangizeConfig {
    /// Default target language (ISO 639-1 code or English name).
    pub to: Option<String>,
    /// Accept any language text instead of the built-in catalogue.
    #[serde(default)]
    pub allow_any: bool,
}

/// The `[template]` section, replacing the built-in prompt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateConfig {
    /// Template text containing the `{language}` placeholder.
    pub text: String,
}

/// The complete configuration file structure.
///
/// Corresponds to `~/.config/langize/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConfigFile {
    /// Default settings.
    #[serde(default)]
    pub langize: LangizeConfig,
    /// Optional template override.
    #[serde(default)]
    pub template: Option<TemplateConfig>,
}

impl ConfigFile {
    /// The template in effect: the override if present, else the built-in one.
    pub fn template(&self) -> PromptTemplate {
        self.template
            .as_ref()
            .map_or_else(PromptTemplate::translation, |t| {
                PromptTemplate::custom(t.text.clone())
            })
    }
}

/// Resolved configuration after merging CLI arguments and config file.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// Language text substituted into the template.
    pub language: String,
    /// Whether the catalogue check was skipped.
    pub allow_any: bool,
    /// The template to render.
    pub template: PromptTemplate,
}

/// CLI overrides that take precedence over config file values.
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    /// Target language override.
    pub to: Option<String>,
    /// Skip the language catalogue.
    pub allow_any: bool,
}

/// Resolves configuration by merging CLI options with config file settings.
///
/// CLI options take precedence over config file values. Unless `allow_any`
/// is set on either side, the language must be a known code or name and is
/// replaced by its canonical English name.
pub fn resolve_config(options: &ResolveOptions, config_file: &ConfigFile) -> Result<ResolvedConfig> {
    let to = options
        .to
        .as_ref()
        .or(config_file.langize.to.as_ref())
        .cloned()
        .ok_or(LanguageError::Missing)?;

    let allow_any = options.allow_any || config_file.langize.allow_any;

    let language = if allow_any {
        to
    } else {
        resolve_language(&to)?.to_string()
    };

    Ok(ResolvedConfig {
        language,
        allow_any,
        template: config_file.template(),
    })
}

/// Manages loading and saving configuration files.
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Creates a new config manager.
    ///
    /// Configuration is stored at `$XDG_CONFIG_HOME/langize/config.toml`
    /// or `~/.config/langize/config.toml` if `XDG_CONFIG_HOME` is not set.
    pub fn new() -> Result<Self> {
        Ok(Self {
            config_path: paths::config_dir()?.join("config.toml"),
        })
    }

    /// Creates a manager for an explicit config file path.
    pub fn with_path(config_path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: config_path.into(),
        }
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn exists(&self) -> bool {
        self.config_path.exists()
    }

    pub fn load(&self) -> Result<ConfigFile> {
        let contents = fs::read_to_string(&self.config_path).with_context(|| {
            format!("Failed to read config file: {}", self.config_path.display())
        })?;

        let config_file: ConfigFile = toml::from_str(&contents).with_context(|| {
            format!("Failed to parse config file: {}", self.config_path.display())
        })?;

        Ok(config_file)
    }

    /// Loads the config file, falling back to defaults when it does not exist.
    ///
    /// A file that exists but cannot be read or parsed is still an error.
    pub fn load_or_default(&self) -> Result<ConfigFile> {
        match self.load() {
            Ok(config) => Ok(config),
            Err(e)
                if e.downcast_ref::<io::Error>()
                    .is_some_and(|io| io.kind() == io::ErrorKind::NotFound) =>
            {
                Ok(ConfigFile::default())
            }
            Err(e) => Err(e),
        }
    }

    pub fn save(&self, config: &ConfigFile) -> Result<()> {
        let contents = toml::to_string_pretty(config).context("Failed to serialize config")?;
        atomic_write(&self.config_path, &contents)
    }

    /// Writes `config` only if no config file exists yet.
    pub fn create(&self, config: &ConfigFile) -> Result<()> {
        if self.exists() {
            bail!(
                "Config file already exists: {}\n\n\
                 Use --force to overwrite it.",
                self.config_path.display()
            );
        }
        self.save(config)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::translation::{PromptError, TRANSLATION_TEMPLATE};
    use tempfile::TempDir;

    fn create_test_manager(temp_dir: &TempDir) -> ConfigManager {
        ConfigManager::with_path(temp_dir.path().join("config.toml"))
    }

    fn create_test_config() -> ConfigFile {
        ConfigFile {
            langize: LangizeConfig {
                to: Some("ja".to_string()),
                allow_any: false,
            },
            template: None,
        }
    }

    #[test]
    fn test_save_and_load_config() {
        let temp_dir = TempDir::new().unwrap();
        let manager = create_test_manager(&temp_dir);

        let config = ConfigFile {
            langize: LangizeConfig {
                to: Some("fr".to_string()),
                allow_any: true,
            },
            template: Some(TemplateConfig {
                text: "Write like a native {language} speaker.".to_string(),
            }),
        };

        manager.save(&config).unwrap();
        let loaded = manager.load().unwrap();

        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_nonexistent_config() {
        let temp_dir = TempDir::new().unwrap();
        let manager = create_test_manager(&temp_dir);

        assert!(manager.load().is_err());
        assert_eq!(manager.load_or_default().unwrap(), ConfigFile::default());
    }

    #[test]
    fn test_load_or_default_reports_parse_errors() {
        let temp_dir = TempDir::new().unwrap();
        let manager = create_test_manager(&temp_dir);
        fs::write(manager.config_path(), "[langize\nto = ").unwrap();

        let err = manager.load_or_default().unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn test_load_partial_config() {
        let temp_dir = TempDir::new().unwrap();
        let manager = create_test_manager(&temp_dir);
        fs::write(manager.config_path(), "[langize]\nto = \"de\"\n").unwrap();

        let loaded = manager.load().unwrap();
        assert_eq!(loaded.langize.to.as_deref(), Some("de"));
        assert!(!loaded.langize.allow_any);
        assert!(loaded.template.is_none());
    }

    #[test]
    fn test_create_refuses_to_overwrite() {
        let temp_dir = TempDir::new().unwrap();
        let manager = create_test_manager(&temp_dir);

        manager.create(&create_test_config()).unwrap();
        let err = manager.create(&ConfigFile::default()).unwrap_err();

        assert!(err.to_string().contains("already exists"));
        assert_eq!(manager.load().unwrap(), create_test_config());
    }

    // resolve_config tests

    #[test]
    fn test_resolve_config_from_file() {
        let resolved = resolve_config(&ResolveOptions::default(), &create_test_config()).unwrap();

        assert_eq!(resolved.language, "Japanese");
        assert!(!resolved.allow_any);
        assert_eq!(resolved.template, TRANSLATION_TEMPLATE);
    }

    #[test]
    fn test_resolve_config_cli_overrides_file() {
        let options = ResolveOptions {
            to: Some("French".to_string()),
            allow_any: false,
        };

        let resolved = resolve_config(&options, &create_test_config()).unwrap();

        assert_eq!(resolved.language, "French");
    }

    #[test]
    fn test_resolve_config_missing_target_language() {
        let err = resolve_config(&ResolveOptions::default(), &ConfigFile::default()).unwrap_err();
        assert_eq!(err.downcast_ref::<LanguageError>(), Some(&LanguageError::Missing));
        assert!(err.to_string().contains("'to'"));
    }

    #[test]
    fn test_resolve_config_rejects_unknown_language() {
        let options = ResolveOptions {
            to: Some("Elvish".to_string()),
            allow_any: false,
        };

        let err = resolve_config(&options, &ConfigFile::default()).unwrap_err();

        assert_eq!(
            err.downcast_ref::<LanguageError>(),
            Some(&LanguageError::Unsupported("Elvish".to_string()))
        );
    }

    #[test]
    fn test_resolve_config_allow_any_keeps_text_verbatim() {
        let options = ResolveOptions {
            to: Some("Elvish".to_string()),
            allow_any: true,
        };

        let resolved = resolve_config(&options, &ConfigFile::default()).unwrap();

        assert_eq!(resolved.language, "Elvish");
        assert!(resolved.allow_any);
    }

    #[test]
    fn test_resolve_config_allow_any_from_file() {
        let mut config = create_test_config();
        config.langize.allow_any = true;
        config.langize.to = Some("ja".to_string());

        let resolved = resolve_config(&ResolveOptions::default(), &config).unwrap();

        // Codes are not expanded when the catalogue is skipped
        assert_eq!(resolved.language, "ja");
    }

    #[test]
    fn test_resolve_config_custom_template_fails_on_render() {
        let mut config = create_test_config();
        config.template = Some(TemplateConfig {
            text: "Translate this.".to_string(),
        });

        let resolved = resolve_config(&ResolveOptions::default(), &config).unwrap();

        assert_eq!(
            resolved.template.render(&resolved.language),
            Err(PromptError::MissingPlaceholder)
        );
    }
}
