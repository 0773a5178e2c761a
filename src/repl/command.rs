/// One line of REPL input, resolved by exact match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    Quit,
    Clear,
    Help,
    /// Anything else is English text to analyze.
    Analyze(String),
}

/// Command words and their help text, in display order.
pub const COMMANDS: &[(&str, &str)] = &[
    ("q", "Quit interactive mode"),
    ("c", "Clear the screen"),
    ("help", "Show this message"),
];

/// Resolves a line to a command; blank lines yield `None`.
///
/// Only the exact words `q`, `c`, and `help` are commands. Surrounding
/// whitespace is ignored, case is not.
pub fn parse_command(line: &str) -> Option<ReplCommand> {
    let line = line.trim();
    match line {
        "" => None,
        "q" => Some(ReplCommand::Quit),
        "c" => Some(ReplCommand::Clear),
        "help" => Some(ReplCommand::Help),
        text => Some(ReplCommand::Analyze(text.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_blank_input() {
        assert_eq!(parse_command(""), None);
        assert_eq!(parse_command("   \t"), None);
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(parse_command("q"), Some(ReplCommand::Quit));
        assert_eq!(parse_command("c"), Some(ReplCommand::Clear));
        assert_eq!(parse_command("help"), Some(ReplCommand::Help));
        assert_eq!(parse_command(" q \n"), Some(ReplCommand::Quit));
    }

    #[test]
    fn test_parse_is_exact_match() {
        assert_eq!(
            parse_command("Q"),
            Some(ReplCommand::Analyze("Q".to_string()))
        );
        assert_eq!(
            parse_command("quit"),
            Some(ReplCommand::Analyze("quit".to_string()))
        );
        assert_eq!(
            parse_command("help me"),
            Some(ReplCommand::Analyze("help me".to_string()))
        );
    }

    #[test]
    fn test_parse_text() {
        assert_eq!(
            parse_command("The fox jumps."),
            Some(ReplCommand::Analyze("The fox jumps.".to_string()))
        );
    }

    #[test]
    fn test_commands_cover_every_word() {
        for (word, _) in COMMANDS {
            assert!(!matches!(
                parse_command(word),
                Some(ReplCommand::Analyze(_)) | None
            ));
        }
    }
}
