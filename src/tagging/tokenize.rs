//! Sentence splitting and Treebank-style word tokenization.

/// Abbreviations whose trailing period never ends a sentence.
const ABBREVIATIONS: &[&str] = &[
    "mr", "mrs", "ms", "dr", "prof", "sr", "jr", "st", "mt", "vs", "etc", "e.g", "i.e", "inc",
    "ltd", "co", "corp", "dept", "fig", "jan", "feb", "mar", "apr", "jun", "jul", "aug",
    "sep", "sept", "oct", "nov", "dec", "approx",
];

const SENTENCE_TERMINATORS: &[char] = &['.', '?', '!'];

// Characters split off the front of a word.
const LEADING_PUNCTUATION: &[char] = &['"', '\'', '(', '[', '{', '“', '‘', '«', '¿', '¡'];

// Characters split off the end of a word. Periods are handled separately.
const TRAILING_PUNCTUATION: &[char] = &[
    '"', '\'', ')', ']', '}', '”', '’', '»', ',', ';', ':', '!', '?',
];

/// Clitics split off the end of a word, longest first.
const CLITICS: &[&str] = &["n't", "'ll", "'re", "'ve", "'s", "'m", "'d"];

/// Splits running text into sentences.
///
/// A sentence ends at a word ending in `.`, `?` or `!` (optionally followed by
/// closing quotes or brackets) when the next word starts a new sentence and
/// the period does not belong to a known abbreviation. Whitespace inside a
/// sentence is collapsed to single spaces.
pub fn sentences(text: &str) -> Vec<String> {
    let words: Vec<&str> = text.split_whitespace().collect();
    let mut result = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for (i, word) in words.iter().enumerate() {
        current.push(word);
        let next = words.get(i + 1).copied();
        if ends_sentence(word, next) {
            result.push(current.join(" "));
            current.clear();
        }
    }

    if !current.is_empty() {
        result.push(current.join(" "));
    }

    result
}

fn ends_sentence(word: &str, next: Option<&str>) -> bool {
    let core = word.trim_end_matches(|c: char| ")]}\"'”’»".contains(c));
    let Some(last) = core.chars().last() else {
        return false;
    };
    if !SENTENCE_TERMINATORS.contains(&last) {
        return false;
    }

    if last == '.' && is_abbreviation(core) {
        return false;
    }

    next.is_none_or(starts_sentence)
}

fn starts_sentence(word: &str) -> bool {
    word.chars()
        .find(|c| !LEADING_PUNCTUATION.contains(c))
        .is_some_and(|c| c.is_uppercase() || c.is_ascii_digit())
}

/// Returns `true` for words like `Mr.`, `e.g.` or `U.S.`.
fn is_abbreviation(word: &str) -> bool {
    let trimmed = word
        .trim_start_matches(LEADING_PUNCTUATION)
        .trim_end_matches('.');
    if trimmed.is_empty() {
        return false;
    }

    let lower = trimmed.to_lowercase();
    if ABBREVIATIONS.contains(&lower.as_str()) {
        return true;
    }

    // Initialisms: single letters separated by periods
    trimmed.contains('.')
        && trimmed
            .split('.')
            .all(|part| part.chars().count() == 1 && part.chars().all(char::is_alphabetic))
}

/// Splits a sentence into word and punctuation tokens.
///
/// Leading and trailing punctuation become separate tokens, clitics such as
/// `n't` and `'s` are split off, and the final period of the sentence is its
/// own token. Periods inside the sentence stay attached (`Mr.`, `3.14`).
pub fn words(sentence: &str) -> Vec<String> {
    let chunks: Vec<&str> = sentence.split_whitespace().collect();
    let mut tokens = Vec::new();

    for (i, chunk) in chunks.iter().enumerate() {
        let is_last = i + 1 == chunks.len();
        split_chunk(chunk, is_last, &mut tokens);
    }

    tokens
}

fn split_chunk(chunk: &str, is_last: bool, tokens: &mut Vec<String>) {
    let mut rest = chunk;

    while let Some(c) = rest.chars().next() {
        if rest.len() == c.len_utf8() || !LEADING_PUNCTUATION.contains(&c) {
            break;
        }
        tokens.push(c.to_string());
        rest = &rest[c.len_utf8()..];
    }

    let mut trailing = Vec::new();
    while rest.chars().count() > 1 && rest != "..." {
        if let Some(stripped) = rest.strip_suffix("...")
            && !stripped.is_empty()
        {
            trailing.push("...".to_string());
            rest = stripped;
            continue;
        }
        let Some(c) = rest.chars().last() else {
            break;
        };
        let splits = if c == '.' {
            is_last && !is_abbreviation(rest)
        } else {
            TRAILING_PUNCTUATION.contains(&c)
        };
        if !splits {
            break;
        }
        trailing.push(c.to_string());
        rest = &rest[..rest.len() - c.len_utf8()];
    }

    if !rest.is_empty() {
        split_clitic(rest, tokens);
    }
    tokens.extend(trailing.into_iter().rev());
}

// can't -> ca n't and won't -> wo n't fall out of the plain suffix split.
// Curly apostrophes match like straight ones but are kept in the tokens.
fn split_clitic(word: &str, tokens: &mut Vec<String>) {
    let lower = word.replace('’', "'").to_lowercase();

    for clitic in CLITICS {
        if lower.len() > clitic.len() && lower.ends_with(clitic) {
            let tail_chars = clitic.chars().count();
            let split = word
                .char_indices()
                .rev()
                .nth(tail_chars - 1)
                .map_or(0, |(i, _)| i);
            let (stem, tail) = word.split_at(split);
            tokens.push(stem.to_string());
            tokens.push(tail.to_string());
            return;
        }
    }

    tokens.push(word.to_string());
}
