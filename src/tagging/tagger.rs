//! Part-of-speech tagging.
//!
//! [`HeuristicTagger`] is a small rule-based tagger: a closed-class lexicon,
//! then number/capitalization/suffix guesses for unknown words, then a
//! contextual pass that repairs the most common verb/noun confusions. It only
//! emits codes present in the Penn Treebank table.

use std::collections::HashMap;

/// Assigns a tag code to every token of one sentence.
pub trait Tagger: Send + Sync {
    fn tag(&self, tokens: &[String]) -> Vec<(String, String)>;
}

const LEXICON: &[(&str, &[&str])] = &[
    (
        "DT",
        &[
            "the", "a", "an", "this", "that", "these", "those", "every", "each", "no", "some",
            "any", "another", "either", "neither", "all", "both",
        ],
    ),
    ("CC", &["and", "or", "but", "nor", "plus", "&"]),
    (
        "IN",
        &[
            "of", "in", "on", "at", "by", "for", "with", "from", "into", "onto", "over", "under",
            "about", "above", "below", "after", "before", "between", "through", "during",
            "without", "within", "against", "among", "across", "behind", "beyond", "near",
            "since", "until", "upon", "toward", "towards", "like", "than", "because", "if",
            "although", "though", "while", "whether", "unless", "as", "per", "via", "despite",
            "along", "around", "up", "down", "out", "off",
        ],
    ),
    ("TO", &["to"]),
    (
        "PRP",
        &[
            "i", "you", "he", "she", "it", "we", "they", "me", "him", "us", "them", "myself",
            "yourself", "himself", "herself", "itself", "ourselves", "themselves",
        ],
    ),
    ("PRP$", &["my", "your", "his", "her", "its", "our", "their"]),
    ("WDT", &["which", "whichever", "whatever"]),
    ("WP", &["who", "whom", "what", "whoever"]),
    ("WP$", &["whose"]),
    ("WRB", &["when", "where", "why", "how", "whenever", "wherever"]),
    ("EX", &["there"]),
    (
        "MD",
        &[
            "can", "could", "will", "would", "shall", "should", "may", "might", "must", "'ll",
            "'d", "ca", "wo",
        ],
    ),
    (
        "RB",
        &[
            "not", "n't", "very", "also", "just", "now", "then", "too", "so", "only", "well",
            "still", "even", "never", "always", "often", "here", "again", "already", "quite",
            "really", "almost", "soon", "perhaps", "together", "away", "back", "ever", "rather",
            "sometimes", "usually", "yet", "however", "today", "tomorrow", "yesterday",
        ],
    ),
    ("RBR", &["more", "less"]),
    ("RBS", &["most", "least"]),
    (
        "JJ",
        &[
            "quick", "lazy", "brown", "red", "blue", "green", "black", "white", "yellow", "good",
            "new", "first", "last", "long", "great", "little", "own", "other", "old", "right",
            "big", "high", "different", "small", "large", "next", "early", "young", "important",
            "few", "public", "bad", "same", "able", "happy", "sad", "nice", "hot", "cold", "many",
            "much", "fine", "sure", "true", "real", "full", "free", "easy", "hard", "late",
            "possible", "whole", "clear", "strong", "short", "fast", "slow", "dark", "beautiful",
        ],
    ),
    ("JJR", &["better", "worse", "bigger", "smaller", "larger", "older", "faster"]),
    ("JJS", &["best", "worst", "biggest", "smallest", "largest", "oldest", "fastest"]),
    (
        "UH",
        &[
            "oh", "wow", "hello", "hi", "yes", "hey", "ah", "oops", "ouch", "okay", "ok", "bye",
            "please", "thanks",
        ],
    ),
    (
        "CD",
        &[
            "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
            "eleven", "twelve", "twenty", "thirty", "hundred", "thousand", "million", "billion",
        ],
    ),
    ("VB", &["be"]),
    ("VBZ", &["is", "has", "does", "'s"]),
    ("VBP", &["are", "am", "have", "do", "'re", "'m", "'ve"]),
    (
        "VBD",
        &[
            "was", "were", "had", "did", "went", "saw", "said", "made", "took", "came", "got",
            "gave", "knew", "thought", "told", "found", "felt", "left", "ran", "began", "wrote",
            "ate", "bought", "brought", "held", "kept", "met", "sat", "stood", "became", "sang",
        ],
    ),
    (
        "VBN",
        &[
            "been", "gone", "seen", "taken", "given", "known", "written", "eaten", "done",
            "become", "begun", "sung",
        ],
    ),
    ("VBG", &["being", "having", "doing", "going"]),
    (
        "VB",
        &[
            "go", "get", "make", "know", "think", "take", "see", "come", "want", "look", "use",
            "find", "give", "tell", "work", "call", "try", "ask", "need", "feel", "leave", "put",
            "mean", "keep", "let", "begin", "seem", "help", "talk", "turn", "start", "show",
            "hear", "play", "run", "move", "live", "believe", "eat", "write", "read", "learn",
            "say", "love", "sing",
        ],
    ),
    (
        "NN",
        &[
            "time", "year", "people", "way", "day", "man", "thing", "woman", "life", "child",
            "world", "school", "family", "news", "bus", "class", "glass", "process", "business",
        ],
    ),
];

const BE_AND_HAVE: &[&str] = &[
    "be", "is", "are", "am", "was", "were", "been", "being", "'s", "'re", "'m", "has", "have",
    "had", "'ve", "get", "got",
];

// Tokens after which a capitalized word is not taken as a proper noun.
const START_MARKERS: &[&str] = &[".", "?", "!", ":", "\"", "“", "(", "'"];

const PARTICLES: &[&str] = &["up", "down", "out", "off"];

const PREDETERMINERS: &[&str] = &["all", "both", "half"];

const ADJECTIVE_SUFFIXES: &[&str] = &[
    "ous", "ful", "able", "ible", "ive", "less", "ic", "ical", "ish",
];

const NOUN_SUFFIXES: &[&str] = &[
    "tion", "sion", "ment", "ness", "ity", "ism", "ist", "ance", "ence", "ship", "hood",
];

/// Rule-based tagger backed by a closed-class lexicon.
#[derive(Debug, Clone)]
pub struct HeuristicTagger {
    lexicon: HashMap<&'static str, &'static str>,
}

impl Default for HeuristicTagger {
    fn default() -> Self {
        Self::new()
    }
}

impl HeuristicTagger {
    pub fn new() -> Self {
        let mut lexicon = HashMap::new();
        for (tag, words) in LEXICON {
            for word in *words {
                // First entry wins
                lexicon.entry(*word).or_insert(*tag);
            }
        }
        Self { lexicon }
    }

    fn lookup(&self, token: &str) -> Option<&'static str> {
        let lower = token.to_lowercase().replace('’', "'");
        self.lexicon.get(lower.as_str()).copied()
    }

    fn initial_tag(&self, token: &str, at_start: bool) -> &'static str {
        if let Some(tag) = punctuation_tag(token) {
            return tag;
        }
        if is_number(token) {
            return "CD";
        }

        let capitalized = token.chars().next().is_some_and(char::is_uppercase);

        // Lowercase lexicon hits win for sentence-initial words and "I"
        if (at_start || !capitalized || token == "I")
            && let Some(tag) = self.lookup(token)
        {
            return tag;
        }

        if capitalized && !at_start {
            return "NNP";
        }

        guess_by_suffix(&token.to_lowercase())
    }
}

impl Tagger for HeuristicTagger {
    fn tag(&self, tokens: &[String]) -> Vec<(String, String)> {
        let mut tags: Vec<&'static str> = tokens
            .iter()
            .enumerate()
            .map(|(i, token)| {
                let at_start = i == 0 || START_MARKERS.contains(&tokens[i - 1].as_str());
                self.initial_tag(token, at_start)
            })
            .collect();

        apply_context(tokens, &mut tags);

        tokens
            .iter()
            .cloned()
            .zip(tags.into_iter().map(str::to_string))
            .collect()
    }
}

fn punctuation_tag(token: &str) -> Option<&'static str> {
    if token.chars().any(char::is_alphanumeric) {
        return None;
    }
    Some(match token {
        "," => ",",
        "." | "?" | "!" => ".",
        _ => "SYM",
    })
}

fn is_number(token: &str) -> bool {
    token.chars().any(|c| c.is_ascii_digit())
        && token
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, ',' | '.' | '-' | '/' | '%'))
}

fn guess_by_suffix(lower: &str) -> &'static str {
    if lower.contains('-') {
        return "JJ";
    }
    if lower.len() <= 3 {
        return "NN";
    }

    if lower.ends_with("ing") {
        "VBG"
    } else if lower.ends_with("ed") {
        "VBD"
    } else if lower.ends_with("ly") {
        "RB"
    } else if ADJECTIVE_SUFFIXES.iter().any(|s| lower.ends_with(s)) {
        "JJ"
    } else if NOUN_SUFFIXES.iter().any(|s| lower.ends_with(s)) {
        "NN"
    } else if lower.ends_with('s') && !["ss", "us", "is"].iter().any(|s| lower.ends_with(s)) {
        "NNS"
    } else {
        "NN"
    }
}

fn apply_context(tokens: &[String], tags: &mut [&'static str]) {
    for i in 0..tags.len() {
        let lower = tokens[i].to_lowercase().replace('’', "'");
        let prev_tag = i.checked_sub(1).map(|p| tags[p]);
        let prev_word = i.checked_sub(1).map(|p| tokens[p].to_lowercase());
        let next_tag = tags.get(i + 1).copied();
        let next_word = tokens.get(i + 1).map(|t| t.to_lowercase());

        tags[i] = match (tags[i], lower.as_str()) {
            // John 's -> possessive
            ("VBZ", "'s") if matches!(prev_tag, Some("NN" | "NNS" | "NNP" | "NNPS")) => "POS",
            ("EX", _) if !next_word.as_deref().is_some_and(|w| BE_AND_HAVE.contains(&w)) => "RB",
            ("DT", word)
                if PREDETERMINERS.contains(&word) && next_tag.is_some_and(|t| t == "DT") =>
            {
                "PDT"
            }
            ("IN", word)
                if PARTICLES.contains(&word) && prev_tag.is_some_and(|t| t.starts_with("VB")) =>
            {
                "RP"
            }
            // fox jumps over -> VBZ
            ("NNS", _)
                if matches!(prev_tag, Some("NN" | "NNP"))
                    || (prev_tag == Some("PRP")
                        && matches!(prev_word.as_deref(), Some("he" | "she" | "it"))) =>
            {
                if next_tag.is_none_or(|t| {
                    matches!(t, "IN" | "DT" | "RB" | "TO" | "PRP$" | "JJ" | "." | "," | "RP")
                }) {
                    "VBZ"
                } else {
                    "NNS"
                }
            }
            ("NN" | "VB" | "VBP", _) if matches!(prev_tag, Some("TO" | "MD")) => "VB",
            ("VB", _) if matches!(prev_tag, Some("DT" | "JJ" | "PRP$")) => "NN",
            ("VB", _)
                if prev_tag == Some("NNS")
                    || (prev_tag == Some("PRP")
                        && matches!(prev_word.as_deref(), Some("i" | "you" | "we" | "they"))) =>
            {
                "VBP"
            }
            ("VBD", _)
                if prev_word
                    .as_deref()
                    .is_some_and(|w| BE_AND_HAVE.contains(&w)) =>
            {
                "VBN"
            }
            (tag, _) => tag,
        };
    }
}
