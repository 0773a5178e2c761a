use anyhow::{Context, Result};

use crate::cache::CacheManager;
use crate::cli::AnalysisArgs;
use crate::config::{ConfigManager, ResolvedConfig, TranslatorSettings, resolve_config};
use crate::output::{self, OutputConfig};
use crate::render::{Formatter, Translation};
use crate::tagging::Analyzer;
use crate::translation::{
    CachedTranslator, DeepLTranslator, GoogleTranslator, OpenAiTranslator, Translator,
    TranslatorKind, prompt_hash,
};

/// Resolves flags against the config file and sets up global output.
pub fn load_config(args: &AnalysisArgs) -> Result<ResolvedConfig> {
    let manager = ConfigManager::new()?;
    let config_file = manager.load_or_default()?;
    let resolved = resolve_config(&args.resolve_options(output::no_color_env()), &config_file)?;

    output::init(OutputConfig {
        quiet: args.quiet,
        no_color: !resolved.format.color,
    });

    Ok(resolved)
}

/// Builds the analyzer and formatter described by a resolved config.
pub fn build(config: &ResolvedConfig) -> Result<(Analyzer, Formatter)> {
    let analyzer = Analyzer::with_mode(config.tag_mode);
    let mut formatter = Formatter::new(config.format.clone());

    if let Some(settings) = &config.translation {
        let translator = build_translator(settings)?;
        formatter = formatter.with_translation(Translation::new(
            translator,
            Some(settings.target_language.clone()),
        ));
    }

    Ok((analyzer, formatter))
}

fn build_translator(settings: &TranslatorSettings) -> Result<Box<dyn Translator>> {
    let backend: Box<dyn Translator> = match settings.kind {
        TranslatorKind::Google => Box::new(GoogleTranslator::new(settings.endpoint.clone())),
        TranslatorKind::Deepl => Box::new(DeepLTranslator::new(
            settings.endpoint.clone(),
            settings
                .api_key
                .clone()
                .context("Translator 'deepl' requires an API key")?,
        )),
        TranslatorKind::Openai => Box::new(OpenAiTranslator::new(
            settings.endpoint.clone(),
            settings.model.clone(),
            settings.api_key.clone(),
        )),
    };

    if !settings.use_cache {
        return Ok(backend);
    }

    let mut cached = CachedTranslator::new(
        backend,
        CacheManager::new()?,
        settings.kind.as_str().to_string(),
        settings.endpoint.clone(),
        settings.model.clone(),
    );
    if settings.kind == TranslatorKind::Openai {
        cached = cached.with_prompt_hash(prompt_hash());
    }

    Ok(Box::new(cached))
}
