use anyhow::Result;

use super::pipeline;
use crate::cli::AnalysisArgs;
use crate::input::InputSource;
use crate::ui::Spinner;

pub struct AnalyzeOptions {
    pub text: Vec<String>,
    pub file: Option<String>,
    pub analysis: AnalysisArgs,
}

/// Analyzes the given text once and prints the formatted blocks to stdout.
pub async fn run_analyze(options: AnalyzeOptions) -> Result<()> {
    let config = pipeline::load_config(&options.analysis)?;
    let (analyzer, formatter) = pipeline::build(&config)?;

    let text = InputSource::select(options.text, options.file).read()?;
    let sentences = analyzer.analyze(&text)?;
    if sentences.is_empty() {
        return Ok(());
    }

    let formatted = {
        let _spinner = formatter
            .translates()
            .then(|| Spinner::new("Translating..."));
        formatter.format(&sentences).await?
    };

    println!("{formatted}");
    Ok(())
}
