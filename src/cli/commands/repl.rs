use anyhow::Result;
use std::io::{self, IsTerminal};

use super::pipeline;
use crate::cli::AnalysisArgs;
use crate::repl::{LineSource, PromptLines, ReaderLines, ReplSession};

/// Runs interactive mode. Piped stdin is read line by line without a prompt.
pub async fn run_repl(args: &AnalysisArgs) -> Result<()> {
    let config = pipeline::load_config(args)?;
    let (analyzer, formatter) = pipeline::build(&config)?;

    let interactive = io::stdin().is_terminal();
    let mut session = ReplSession::new(analyzer, formatter)
        .clear_on_start(interactive && io::stdout().is_terminal());

    let mut source: Box<dyn LineSource> = if interactive {
        Box::new(PromptLines::default())
    } else {
        Box::new(ReaderLines::new(io::stdin().lock()))
    };

    session.run(source.as_mut(), &mut io::stdout()).await
}
