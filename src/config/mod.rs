mod manager;

pub use manager::{
    ConfigFile, ConfigManager, DEFAULT_CONFIG_TEMPLATE, DEFAULT_OPENAI_ENDPOINT,
    DEFAULT_TARGET_LANGUAGE, HinshiConfig, ResolveOptions, ResolvedConfig, TranslatorConfig,
    TranslatorSettings, resolve_config,
};
