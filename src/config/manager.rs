use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use crate::fs::atomic_write;
use crate::paths;
use crate::render::{DEFAULT_EXCLUDED, FormatOptions, Layout, RuleWidth, is_known_color};
use crate::tagging::TagMode;
use crate::translation::{
    DEFAULT_DEEPL_ENDPOINT, DEFAULT_GOOGLE_ENDPOINT, TranslatorKind, validate_language,
};

/// Target language used when translation is on but no `to` is given.
pub const DEFAULT_TARGET_LANGUAGE: &str = "ja";

/// Endpoint for a local OpenAI-compatible server (Ollama).
pub const DEFAULT_OPENAI_ENDPOINT: &str = "http://localhost:11434";

const DEFAULT_DEEPL_API_KEY_ENV: &str = "DEEPL_API_KEY";

/// Written by `hinshi config --init`.
pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"[hinshi]
# abbreviation | expansion | japanese
tags = "abbreviation"
list = false
color = true
exclude_colors = ["black", "grey", "dark_grey"]
translate = false
to = "ja"
# google | deepl | openai
translator = "google"
# width = 80

[translators.deepl]
endpoint = "https://api-free.deepl.com"
api_key_env = "DEEPL_API_KEY"

[translators.openai]
endpoint = "http://localhost:11434"
model = "gemma3:12b"
# api_key_env = "OPENAI_API_KEY"
"#;

/// Default settings in the `[hinshi]` section of config.toml.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HinshiConfig {
    pub tags: Option<TagMode>,
    pub list: Option<bool>,
    pub color: Option<bool>,
    pub exclude_colors: Option<Vec<String>>,
    pub translate: Option<bool>,
    /// Default target language (ISO 639-1 code).
    pub to: Option<String>,
    pub translator: Option<TranslatorKind>,
    /// Fixed separator width instead of the terminal width.
    pub width: Option<usize>,
}

/// Settings for one translation backend under `[translators.<name>]`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TranslatorConfig {
    #[serde(default)]
    pub endpoint: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    /// API key stored directly in config (not recommended).
    #[serde(default)]
    pub api_key: Option<String>,
    /// Environment variable name containing the API key.
    #[serde(default)]
    pub api_key_env: Option<String>,
}

impl TranslatorConfig {
    /// Gets the API key, preferring environment variable over config file.
    pub fn get_api_key(&self) -> Option<String> {
        if let Some(env_var) = &self.api_key_env
            && let Ok(key) = std::env::var(env_var)
            && !key.is_empty()
        {
            return Some(key);
        }
        self.api_key.clone()
    }
}

/// The complete configuration file structure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub hinshi: HinshiConfig,
    /// Backend settings keyed by backend name.
    #[serde(default)]
    pub translators: HashMap<String, TranslatorConfig>,
}

/// Command-line overrides; `None` means "not given".
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    pub tags: Option<TagMode>,
    pub list: Option<bool>,
    pub color: Option<bool>,
    /// Replaces the configured exclusions when non-empty.
    pub exclude_colors: Vec<String>,
    pub translate: Option<bool>,
    pub to: Option<String>,
    pub translator: Option<TranslatorKind>,
    pub model: Option<String>,
    pub width: Option<usize>,
    pub no_cache: bool,
}

/// A fully resolved translation backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslatorSettings {
    pub kind: TranslatorKind,
    pub endpoint: String,
    /// Empty for backends without models.
    pub model: String,
    pub api_key: Option<String>,
    pub target_language: String,
    pub use_cache: bool,
}

/// Resolved configuration after merging CLI arguments and config file.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub tag_mode: TagMode,
    pub format: FormatOptions,
    /// `None` when translation is off.
    pub translation: Option<TranslatorSettings>,
}

/// Merges CLI options over config file values over built-in defaults.
///
/// # Errors
///
/// Returns an error for unknown color names, unsupported target languages,
/// a zero width, or a backend that needs an API key it cannot find.
pub fn resolve_config(
    options: &ResolveOptions,
    config_file: &ConfigFile,
) -> Result<ResolvedConfig> {
    let file = &config_file.hinshi;

    let tag_mode = options.tags.or(file.tags).unwrap_or_default();
    let layout = if options.list.or(file.list).unwrap_or(false) {
        Layout::List
    } else {
        Layout::Inline
    };
    let color = options.color.or(file.color).unwrap_or(true);

    let excluded_colors = if options.exclude_colors.is_empty() {
        file.exclude_colors.clone().unwrap_or_else(|| {
            DEFAULT_EXCLUDED.iter().map(ToString::to_string).collect()
        })
    } else {
        options.exclude_colors.clone()
    };
    for name in &excluded_colors {
        if !is_known_color(name) {
            bail!(
                "Unknown color: '{name}'\n\n\
                 Run 'hinshi config' to see the available colors."
            );
        }
    }

    let rule_width = match options.width.or(file.width) {
        Some(0) => bail!("Invalid width: must be at least 1 column"),
        Some(columns) => RuleWidth::Fixed(columns),
        None => RuleWidth::Terminal,
    };

    let translation = if options.translate.or(file.translate).unwrap_or(false) {
        Some(resolve_translator(options, config_file)?)
    } else {
        None
    };

    Ok(ResolvedConfig {
        tag_mode,
        format: FormatOptions {
            layout,
            color,
            excluded_colors,
            rule_width,
        },
        translation,
    })
}

fn resolve_translator(
    options: &ResolveOptions,
    config_file: &ConfigFile,
) -> Result<TranslatorSettings> {
    let kind = options
        .translator
        .or(config_file.hinshi.translator)
        .unwrap_or_default();

    let target_language = options
        .to
        .as_ref()
        .or(config_file.hinshi.to.as_ref())
        .cloned()
        .unwrap_or_else(|| DEFAULT_TARGET_LANGUAGE.to_string());
    validate_language(&target_language, kind)?;

    let section = config_file
        .translators
        .get(kind.as_str())
        .cloned()
        .unwrap_or_default();

    let (endpoint, model, api_key) = match kind {
        TranslatorKind::Google => (
            section
                .endpoint
                .unwrap_or_else(|| DEFAULT_GOOGLE_ENDPOINT.to_string()),
            String::new(),
            None,
        ),
        TranslatorKind::Deepl => {
            let env_var = section
                .api_key_env
                .clone()
                .unwrap_or_else(|| DEFAULT_DEEPL_API_KEY_ENV.to_string());
            let lookup = TranslatorConfig {
                api_key_env: Some(env_var.clone()),
                ..section.clone()
            };
            let Some(api_key) = lookup.get_api_key() else {
                bail!(
                    "Translator 'deepl' requires an API key\n\n\
                     Set the {env_var} environment variable:\n  \
                     export {env_var}=\"your-api-key\"\n\n\
                     Or set api_key under [translators.deepl] in the config file"
                );
            };
            (
                section
                    .endpoint
                    .unwrap_or_else(|| DEFAULT_DEEPL_ENDPOINT.to_string()),
                String::new(),
                Some(api_key),
            )
        }
        TranslatorKind::Openai => {
            let model = options
                .model
                .as_ref()
                .or(section.model.as_ref())
                .cloned()
                .ok_or_else(|| {
                    anyhow::anyhow!(
                        "Missing required configuration: 'model'\n\n\
                         Please provide it via:\n  \
                         - CLI option: hinshi --model <name>\n  \
                         - Config file: model under [translators.openai]"
                    )
                })?;
            let api_key = section.get_api_key();
            if let Some(env_var) = &section.api_key_env
                && api_key.is_none()
            {
                bail!(
                    "Translator 'openai' requires an API key\n\n\
                     Set the {env_var} environment variable:\n  \
                     export {env_var}=\"your-api-key\"\n\n\
                     Or set api_key under [translators.openai] in the config file"
                );
            }
            (
                section
                    .endpoint
                    .unwrap_or_else(|| DEFAULT_OPENAI_ENDPOINT.to_string()),
                model,
                api_key,
            )
        }
    };

    Ok(TranslatorSettings {
        kind,
        endpoint,
        model,
        api_key,
        target_language,
        use_cache: !options.no_cache,
    })
}

/// Manages loading and saving configuration files.
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Configuration lives at `$XDG_CONFIG_HOME/hinshi/config.toml`
    /// or `~/.config/hinshi/config.toml` if `XDG_CONFIG_HOME` is not set.
    pub fn new() -> Result<Self> {
        Ok(Self {
            config_path: paths::config_dir()?.join("config.toml"),
        })
    }

    pub const fn config_path(&self) -> &PathBuf {
        &self.config_path
    }

    pub fn exists(&self) -> bool {
        self.config_path.exists()
    }

    pub fn load(&self) -> Result<ConfigFile> {
        let contents = fs::read_to_string(&self.config_path).with_context(|| {
            format!("Failed to read config file: {}", self.config_path.display())
        })?;

        toml::from_str(&contents).with_context(|| {
            format!(
                "Failed to parse config file: {}",
                self.config_path.display()
            )
        })
    }

    /// Loads the file, or the empty config when there is none.
    ///
    /// A file that exists but does not parse is still an error.
    pub fn load_or_default(&self) -> Result<ConfigFile> {
        if self.exists() {
            self.load()
        } else {
            Ok(ConfigFile::default())
        }
    }

    /// Writes the commented default config. Refuses to overwrite.
    pub fn write_default(&self) -> Result<()> {
        if self.exists() {
            bail!(
                "Config file already exists: {}",
                self.config_path.display()
            );
        }
        atomic_write(&self.config_path, DEFAULT_CONFIG_TEMPLATE)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::TempDir;

    fn create_test_manager(temp_dir: &TempDir) -> ConfigManager {
        ConfigManager {
            config_path: temp_dir.path().join("hinshi").join("config.toml"),
        }
    }

    #[test]
    fn test_load_config_file() {
        let temp_dir = TempDir::new().unwrap();
        let manager = create_test_manager(&temp_dir);

        atomic_write(
            manager.config_path(),
            "[hinshi]\n\
             tags = \"japanese\"\n\
             to = \"ja\"\n\
             translator = \"openai\"\n\
             \n\
             [translators.openai]\n\
             endpoint = \"http://localhost:11434\"\n\
             model = \"gemma3:12b\"\n",
        )
        .unwrap();
        let loaded = manager.load().unwrap();

        assert_eq!(loaded.hinshi.tags, Some(TagMode::Japanese));
        assert_eq!(loaded.hinshi.to, Some("ja".to_string()));
        assert_eq!(loaded.hinshi.translator, Some(TranslatorKind::Openai));
        assert_eq!(
            loaded.translators["openai"].model,
            Some("gemma3:12b".to_string())
        );
    }

    #[test]
    fn test_load_nonexistent_config() {
        let temp_dir = TempDir::new().unwrap();
        let manager = create_test_manager(&temp_dir);

        assert!(manager.load().is_err());
        let config = manager.load_or_default().unwrap();
        assert!(config.hinshi.tags.is_none());
    }

    #[test]
    fn test_load_or_default_reports_parse_errors() {
        let temp_dir = TempDir::new().unwrap();
        let manager = create_test_manager(&temp_dir);
        atomic_write(manager.config_path(), "[hinshi]\ntags = \"loud\"\n").unwrap();

        assert!(manager.load_or_default().is_err());
    }

    #[test]
    fn test_default_template_parses() {
        let config: ConfigFile = toml::from_str(DEFAULT_CONFIG_TEMPLATE).unwrap();

        assert_eq!(config.hinshi.tags, Some(TagMode::Abbreviation));
        assert_eq!(config.hinshi.translator, Some(TranslatorKind::Google));
        assert_eq!(
            config.translators["deepl"].api_key_env,
            Some("DEEPL_API_KEY".to_string())
        );
    }

    #[test]
    fn test_write_default_refuses_overwrite() {
        let temp_dir = TempDir::new().unwrap();
        let manager = create_test_manager(&temp_dir);

        manager.write_default().unwrap();
        assert!(manager.exists());
        assert!(manager.write_default().is_err());
    }

    #[test]
    #[serial]
    fn test_translator_get_api_key_from_env() {
        unsafe { std::env::set_var("HINSHI_TEST_API_KEY", "test-key-value") };

        let section = TranslatorConfig {
            api_key: Some("fallback-key".to_string()),
            api_key_env: Some("HINSHI_TEST_API_KEY".to_string()),
            ..TranslatorConfig::default()
        };
        assert_eq!(section.get_api_key(), Some("test-key-value".to_string()));

        unsafe { std::env::remove_var("HINSHI_TEST_API_KEY") };
        assert_eq!(section.get_api_key(), Some("fallback-key".to_string()));
    }

    // resolve_config tests

    #[test]
    fn test_resolve_defaults() {
        let resolved = resolve_config(&ResolveOptions::default(), &ConfigFile::default()).unwrap();

        assert_eq!(resolved.tag_mode, TagMode::Abbreviation);
        assert_eq!(resolved.format.layout, Layout::Inline);
        assert!(resolved.format.color);
        assert_eq!(
            resolved.format.excluded_colors,
            vec!["black", "grey", "dark_grey"]
        );
        assert_eq!(resolved.format.rule_width, RuleWidth::Terminal);
        assert!(resolved.translation.is_none());
    }

    #[test]
    fn test_resolve_cli_overrides_file() {
        let config = ConfigFile {
            hinshi: HinshiConfig {
                tags: Some(TagMode::Expansion),
                list: Some(true),
                color: Some(true),
                width: Some(100),
                ..HinshiConfig::default()
            },
            ..ConfigFile::default()
        };
        let options = ResolveOptions {
            tags: Some(TagMode::Japanese),
            color: Some(false),
            width: Some(40),
            ..ResolveOptions::default()
        };

        let resolved = resolve_config(&options, &config).unwrap();

        assert_eq!(resolved.tag_mode, TagMode::Japanese);
        assert_eq!(resolved.format.layout, Layout::List);
        assert!(!resolved.format.color);
        assert_eq!(resolved.format.rule_width, RuleWidth::Fixed(40));
    }

    #[test]
    fn test_resolve_exclude_colors() {
        let config = ConfigFile {
            hinshi: HinshiConfig {
                exclude_colors: Some(vec!["red".to_string()]),
                ..HinshiConfig::default()
            },
            ..ConfigFile::default()
        };

        let resolved = resolve_config(&ResolveOptions::default(), &config).unwrap();
        assert_eq!(resolved.format.excluded_colors, vec!["red"]);

        let options = ResolveOptions {
            exclude_colors: vec!["blue".to_string(), "cyan".to_string()],
            ..ResolveOptions::default()
        };
        let resolved = resolve_config(&options, &config).unwrap();
        assert_eq!(resolved.format.excluded_colors, vec!["blue", "cyan"]);
    }

    #[test]
    fn test_resolve_unknown_color() {
        let options = ResolveOptions {
            exclude_colors: vec!["chartreuse".to_string()],
            ..ResolveOptions::default()
        };

        let err = resolve_config(&options, &ConfigFile::default()).unwrap_err();
        assert!(err.to_string().contains("chartreuse"));
    }

    #[test]
    fn test_resolve_zero_width() {
        let options = ResolveOptions {
            width: Some(0),
            ..ResolveOptions::default()
        };
        assert!(resolve_config(&options, &ConfigFile::default()).is_err());
    }

    #[test]
    fn test_resolve_google_translation() {
        let options = ResolveOptions {
            translate: Some(true),
            ..ResolveOptions::default()
        };

        let settings = resolve_config(&options, &ConfigFile::default())
            .unwrap()
            .translation
            .unwrap();

        assert_eq!(settings.kind, TranslatorKind::Google);
        assert_eq!(settings.endpoint, DEFAULT_GOOGLE_ENDPOINT);
        assert_eq!(settings.target_language, "ja");
        assert!(settings.api_key.is_none());
        assert!(settings.use_cache);
    }

    #[test]
    fn test_resolve_translation_from_file_with_cli_target() {
        let config = ConfigFile {
            hinshi: HinshiConfig {
                translate: Some(true),
                to: Some("fr".to_string()),
                ..HinshiConfig::default()
            },
            ..ConfigFile::default()
        };
        let options = ResolveOptions {
            to: Some("de".to_string()),
            no_cache: true,
            ..ResolveOptions::default()
        };

        let settings = resolve_config(&options, &config)
            .unwrap()
            .translation
            .unwrap();

        assert_eq!(settings.target_language, "de");
        assert!(!settings.use_cache);
    }

    #[test]
    fn test_resolve_invalid_target_language() {
        let options = ResolveOptions {
            translate: Some(true),
            to: Some("klingon".to_string()),
            ..ResolveOptions::default()
        };

        let err = resolve_config(&options, &ConfigFile::default()).unwrap_err();
        assert!(err.to_string().contains("Invalid language code"));
    }

    #[test]
    fn test_resolve_deepl_rejects_unsupported_target() {
        let options = ResolveOptions {
            translate: Some(true),
            translator: Some(TranslatorKind::Deepl),
            to: Some("hy".to_string()),
            ..ResolveOptions::default()
        };

        let err = resolve_config(&options, &ConfigFile::default()).unwrap_err();
        assert!(err.to_string().contains("cannot translate into 'hy'"));
    }

    #[test]
    #[serial]
    fn test_resolve_deepl_missing_api_key_names_env_var() {
        unsafe { std::env::remove_var("HINSHI_TEST_DEEPL_KEY") };

        let mut translators = HashMap::new();
        translators.insert(
            "deepl".to_string(),
            TranslatorConfig {
                api_key_env: Some("HINSHI_TEST_DEEPL_KEY".to_string()),
                ..TranslatorConfig::default()
            },
        );
        let config = ConfigFile {
            translators,
            ..ConfigFile::default()
        };
        let options = ResolveOptions {
            translate: Some(true),
            translator: Some(TranslatorKind::Deepl),
            ..ResolveOptions::default()
        };

        let err = resolve_config(&options, &config).unwrap_err();
        assert!(err.to_string().contains("HINSHI_TEST_DEEPL_KEY"));
    }

    #[test]
    #[serial]
    fn test_resolve_deepl_with_env_key() {
        unsafe { std::env::set_var("HINSHI_TEST_DEEPL_KEY", "abc:fx") };

        let mut translators = HashMap::new();
        translators.insert(
            "deepl".to_string(),
            TranslatorConfig {
                api_key_env: Some("HINSHI_TEST_DEEPL_KEY".to_string()),
                ..TranslatorConfig::default()
            },
        );
        let config = ConfigFile {
            translators,
            ..ConfigFile::default()
        };
        let options = ResolveOptions {
            translate: Some(true),
            translator: Some(TranslatorKind::Deepl),
            ..ResolveOptions::default()
        };

        let settings = resolve_config(&options, &config)
            .unwrap()
            .translation
            .unwrap();
        unsafe { std::env::remove_var("HINSHI_TEST_DEEPL_KEY") };

        assert_eq!(settings.endpoint, DEFAULT_DEEPL_ENDPOINT);
        assert_eq!(settings.api_key, Some("abc:fx".to_string()));
    }

    #[test]
    fn test_resolve_openai_requires_model() {
        let options = ResolveOptions {
            translate: Some(true),
            translator: Some(TranslatorKind::Openai),
            ..ResolveOptions::default()
        };

        let err = resolve_config(&options, &ConfigFile::default()).unwrap_err();
        assert!(err.to_string().contains("model"));

        let options = ResolveOptions {
            model: Some("gemma3:12b".to_string()),
            ..options
        };
        let settings = resolve_config(&options, &ConfigFile::default())
            .unwrap()
            .translation
            .unwrap();
        assert_eq!(settings.endpoint, DEFAULT_OPENAI_ENDPOINT);
        assert_eq!(settings.model, "gemma3:12b");
    }
}
