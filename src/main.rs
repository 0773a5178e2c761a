use anyhow::Result;
use clap::Parser;

use hinshi_cli::cli::commands::{analyze, config, repl, tags};
use hinshi_cli::cli::{Args, Command};
use hinshi_cli::translation::print_languages;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    match args.command {
        Some(Command::Repl { analysis }) => {
            repl::run_repl(&analysis).await?;
        }
        Some(Command::Tags) => {
            tags::print_tags();
        }
        Some(Command::Languages) => {
            print_languages();
        }
        Some(Command::Config { init }) => {
            config::run_config(init)?;
        }
        None => {
            let options = analyze::AnalyzeOptions {
                text: args.text,
                file: args.file,
                analysis: args.analysis,
            };
            analyze::run_analyze(options).await?;
        }
    }

    Ok(())
}
