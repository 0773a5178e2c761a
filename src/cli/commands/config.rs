use anyhow::Result;

use crate::config::{
    ConfigFile, ConfigManager, DEFAULT_OPENAI_ENDPOINT, DEFAULT_TARGET_LANGUAGE, ResolveOptions,
    resolve_config,
};
use crate::output;
use crate::render::{Layout, PALETTE, RuleWidth};
use crate::{info, status};
use crate::translation::{DEFAULT_DEEPL_ENDPOINT, DEFAULT_GOOGLE_ENDPOINT, TranslatorKind};
use crate::ui::Style;

/// Shows the effective configuration, or writes the default file with `init`.
pub fn run_config(init: bool) -> Result<()> {
    let manager = ConfigManager::new()?;

    if init {
        manager.write_default()?;
        status!(
            "{} Wrote {}",
            Style::success("✓"),
            manager.config_path().display()
        );
        info!("Command-line flags still override the values in this file.");
        return Ok(());
    }

    let config_file = manager.load_or_default()?;
    let source = if manager.exists() {
        manager.config_path().display().to_string()
    } else {
        format!("{} (not found, using defaults)", manager.config_path().display())
    };
    print_config(&config_file, &source)
}

fn print_config(config_file: &ConfigFile, source: &str) -> Result<()> {
    // Translator checks (API keys) are skipped so the display never fails on them.
    let options = ResolveOptions {
        color: output::no_color_env().then_some(false),
        translate: Some(false),
        ..ResolveOptions::default()
    };
    let resolved = resolve_config(&options, config_file)?;
    let file = &config_file.hinshi;

    let kind = file.translator.unwrap_or_default();
    let section = config_file.translators.get(kind.as_str());
    let endpoint = section
        .and_then(|s| s.endpoint.clone())
        .unwrap_or_else(|| default_endpoint(kind).to_string());
    let width = match resolved.format.rule_width {
        RuleWidth::Fixed(columns) => columns.to_string(),
        RuleWidth::Terminal => "terminal".to_string(),
    };

    let rows = [
        ("tags", resolved.tag_mode.as_str().to_string()),
        (
            "list",
            (resolved.format.layout == Layout::List).to_string(),
        ),
        ("color", resolved.format.color.to_string()),
        ("exclude", resolved.format.excluded_colors.join(", ")),
        ("width", width),
        ("translate", file.translate.unwrap_or(false).to_string()),
        ("translator", kind.to_string()),
        ("endpoint", endpoint),
        (
            "to",
            file.to
                .clone()
                .unwrap_or_else(|| DEFAULT_TARGET_LANGUAGE.to_string()),
        ),
    ];

    println!("{}", Style::header("Configuration"));
    println!("  {}", Style::secondary(source));
    for (label, value) in rows {
        println!("  {} {}", Style::label(format!("{label:10}")), Style::value(value));
    }

    println!();
    println!("{}", Style::header("Colors"));
    let names: Vec<&str> = PALETTE.iter().map(|(name, _)| *name).collect();
    println!("  {}", names.join(" "));

    Ok(())
}

const fn default_endpoint(kind: TranslatorKind) -> &'static str {
    match kind {
        TranslatorKind::Google => DEFAULT_GOOGLE_ENDPOINT,
        TranslatorKind::Deepl => DEFAULT_DEEPL_ENDPOINT,
        TranslatorKind::Openai => DEFAULT_OPENAI_ENDPOINT,
    }
}
