//! Target language codes accepted for translation.

use anyhow::{Result, bail};

use super::TranslatorKind;
use crate::ui::Style;

/// Supported language codes (ISO 639-1) and their names.
pub const SUPPORTED_LANGUAGES: &[(&str, &str)] = &[
    ("af", "Afrikaans"),
    ("am", "Amharic"),
    ("ar", "Arabic"),
    ("az", "Azerbaijani"),
    ("be", "Belarusian"),
    ("bg", "Bulgarian"),
    ("bn", "Bengali"),
    ("bs", "Bosnian"),
    ("ca", "Catalan"),
    ("cs", "Czech"),
    ("cy", "Welsh"),
    ("da", "Danish"),
    ("de", "German"),
    ("el", "Greek"),
    ("en", "English"),
    ("es", "Spanish"),
    ("et", "Estonian"),
    ("eu", "Basque"),
    ("fa", "Persian"),
    ("fi", "Finnish"),
    ("fil", "Filipino"),
    ("fr", "French"),
    ("ga", "Irish"),
    ("gl", "Galician"),
    ("gu", "Gujarati"),
    ("he", "Hebrew"),
    ("hi", "Hindi"),
    ("hr", "Croatian"),
    ("hu", "Hungarian"),
    ("hy", "Armenian"),
    ("id", "Indonesian"),
    ("is", "Icelandic"),
    ("it", "Italian"),
    ("ja", "Japanese"),
    ("ka", "Georgian"),
    ("kk", "Kazakh"),
    ("km", "Khmer"),
    ("kn", "Kannada"),
    ("ko", "Korean"),
    ("la", "Latin"),
    ("lo", "Lao"),
    ("lt", "Lithuanian"),
    ("lv", "Latvian"),
    ("mk", "Macedonian"),
    ("ml", "Malayalam"),
    ("mn", "Mongolian"),
    ("mr", "Marathi"),
    ("ms", "Malay"),
    ("mt", "Maltese"),
    ("my", "Myanmar (Burmese)"),
    ("ne", "Nepali"),
    ("nl", "Dutch"),
    ("no", "Norwegian"),
    ("pa", "Punjabi"),
    ("pl", "Polish"),
    ("ps", "Pashto"),
    ("pt", "Portuguese"),
    ("ro", "Romanian"),
    ("ru", "Russian"),
    ("si", "Sinhala"),
    ("sk", "Slovak"),
    ("sl", "Slovenian"),
    ("sq", "Albanian"),
    ("sr", "Serbian"),
    ("sv", "Swedish"),
    ("sw", "Swahili"),
    ("ta", "Tamil"),
    ("te", "Telugu"),
    ("th", "Thai"),
    ("tl", "Tagalog"),
    ("tr", "Turkish"),
    ("uk", "Ukrainian"),
    ("ur", "Urdu"),
    ("uz", "Uzbek"),
    ("vi", "Vietnamese"),
    ("zh", "Chinese (Simplified)"),
    ("zh-TW", "Chinese (Traditional)"),
];

/// The subset of codes DeepL accepts as a target.
pub const DEEPL_LANGUAGES: &[&str] = &[
    "ar", "bg", "cs", "da", "de", "el", "en", "es", "et", "fi", "fr", "he", "hu", "id", "it", "ja",
    "ko", "lt", "lv", "nl", "no", "pl", "pt", "ro", "ru", "sk", "sl", "sv", "th", "tr", "uk", "vi",
    "zh", "zh-TW",
];

/// Whether `kind` can translate into `code`.
pub fn supports_language(kind: TranslatorKind, code: &str) -> bool {
    match kind {
        TranslatorKind::Deepl => DEEPL_LANGUAGES.contains(&code),
        TranslatorKind::Google | TranslatorKind::Openai => language_name(code).is_some(),
    }
}

/// Prints all supported language codes to stdout.
pub fn print_languages() {
    println!("{}", Style::header("Supported target languages (ISO 639-1)"));
    for (code, name) in SUPPORTED_LANGUAGES {
        let marker = if supports_language(TranslatorKind::Deepl, code) {
            " "
        } else {
            "*"
        };
        println!(
            "  {} {marker} {}",
            Style::code(format!("{code:5}")),
            Style::secondary(name)
        );
    }
    println!();
    println!("{}", Style::secondary("* not available with the deepl translator"));
}

/// Returns the English name for a supported code.
pub fn language_name(code: &str) -> Option<&'static str> {
    SUPPORTED_LANGUAGES
        .iter()
        .find(|(known, _)| *known == code)
        .map(|(_, name)| *name)
}

/// Validates that the given language code is supported by `kind`.
///
/// # Errors
///
/// Returns an error if the language code is not in the supported list, or if
/// the translator cannot target it.
pub fn validate_language(lang: &str, kind: TranslatorKind) -> Result<()> {
    if language_name(lang).is_none() {
        bail!(
            "Invalid language code: '{lang}'\n\n\
             Valid language codes (ISO 639-1): ja, en, zh, ko, fr, de, es, ...\n\
             Run 'hinshi languages' to see all supported codes."
        );
    }

    if !supports_language(kind, lang) {
        bail!(
            "Translator '{kind}' cannot translate into '{lang}'\n\n\
             Run 'hinshi languages' to see which codes it supports, \
             or pick another translator with --translator."
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_language_valid() {
        let kinds = [
            TranslatorKind::Google,
            TranslatorKind::Deepl,
            TranslatorKind::Openai,
        ];
        for kind in kinds {
            assert!(validate_language("ja", kind).is_ok());
            assert!(validate_language("en", kind).is_ok());
            assert!(validate_language("zh-TW", kind).is_ok());
        }
    }

    #[test]
    fn test_validate_language_invalid() {
        let google = TranslatorKind::Google;
        assert!(validate_language("invalid", google).is_err());
        assert!(validate_language("", google).is_err());
        assert!(validate_language("JP", google).is_err()); // Case sensitive
    }

    #[test]
    fn test_deepl_rejects_codes_it_cannot_target() {
        for code in ["af", "hy", "sw"] {
            assert!(validate_language(code, TranslatorKind::Google).is_ok());
            let err = validate_language(code, TranslatorKind::Deepl).unwrap_err();
            assert!(err.to_string().contains("cannot translate"), "code {code}");
        }
    }

    #[test]
    fn test_deepl_codes_are_known_languages() {
        for code in DEEPL_LANGUAGES {
            assert!(language_name(code).is_some(), "code {code}");
        }
    }

    #[test]
    fn test_language_name() {
        assert_eq!(language_name("ja"), Some("Japanese"));
        assert_eq!(language_name("zh-TW"), Some("Chinese (Traditional)"));
        assert_eq!(language_name("xx"), None);
    }
}
