use sha2::{Digest, Sha256};

pub const SYSTEM_PROMPT_TEMPLATE: &str = "You are a translator. \
     Translate the English sentence you are given into {target_language}. \
     Reply with the translated sentence only, on a single line, without quotes or explanations.";

#[allow(clippy::literal_string_with_formatting_args)]
pub fn build_system_prompt(target_language: &str) -> String {
    // {target_language} is a placeholder for string replacement, not a format argument
    SYSTEM_PROMPT_TEMPLATE.replace("{target_language}", target_language)
}

/// Hash of the system prompt template, so cached LLM translations are
/// invalidated when the prompt changes.
pub fn prompt_hash() -> String {
    let mut hasher = Sha256::new();
    hasher.update(SYSTEM_PROMPT_TEMPLATE.as_bytes());
    hex::encode(hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_system_prompt() {
        let prompt = build_system_prompt("Japanese");
        assert!(prompt.contains("into Japanese"));
        assert!(!prompt.contains("{target_language}"));
    }

    #[test]
    fn test_prompt_hash_is_stable_hex() {
        assert_eq!(prompt_hash().len(), 64);
        assert_eq!(prompt_hash(), prompt_hash());
    }

    #[test]
    fn test_system_prompt_asks_for_single_line() {
        assert!(SYSTEM_PROMPT_TEMPLATE.contains("single line"));
    }
}
