use crate::action_patterns::ActionPattern;

/// Connector words dropped from either end of an extracted title, so that
/// "create a ticket about login" yields "Login" rather than "A About Login".
const FILLER_WORDS: &[&str] = &[
    "a", "an", "the", "about", "for", "on", "regarding", "re", "to", "with", "of", "called",
    "named", "titled", "please", "me", "my", "some",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectedIntent<'a> {
    pub pattern: &'a ActionPattern,
    pub title: String,
}

/// Returns the first pattern (in table order) with at least one verb and one
/// noun present as whole words in `query`, plus the leftover words as a
/// title-cased title.
pub fn detect<'a>(patterns: &'a [ActionPattern], query: &str) -> Option<DetectedIntent<'a>> {
    let lowered = query.to_lowercase();
    let tokens: Vec<&str> = lowered.split_whitespace().collect();
    if tokens.is_empty() {
        return None;
    }

    let words: Vec<&str> = tokens.iter().map(|token| word_of(token)).collect();
    let pattern = patterns.iter().find(|pattern| {
        words.iter().any(|word| pattern.is_verb(word))
            && words.iter().any(|word| pattern.is_noun(word))
    })?;

    let residual: Vec<&str> = tokens
        .iter()
        .zip(&words)
        .filter(|(_, word)| !pattern.is_verb(word) && !pattern.is_noun(word))
        .map(|(token, _)| *token)
        .collect();

    Some(DetectedIntent {
        pattern,
        title: title_case(trim_filler(&residual)),
    })
}

/// Token with surrounding punctuation removed, used for word comparison.
fn word_of(token: &str) -> &str {
    token.trim_matches(|c: char| !c.is_alphanumeric())
}

fn is_filler(token: &str) -> bool {
    let word = word_of(token);
    word.is_empty() || FILLER_WORDS.contains(&word)
}

fn trim_filler<'t>(tokens: &'t [&'t str]) -> &'t [&'t str] {
    let start = tokens
        .iter()
        .position(|token| !is_filler(token))
        .unwrap_or(tokens.len());
    let end = tokens
        .iter()
        .rposition(|token| !is_filler(token))
        .map_or(start, |last| last + 1);
    &tokens[start..end]
}

fn title_case(tokens: &[&str]) -> String {
    tokens
        .iter()
        .map(|token| capitalize(token))
        .collect::<Vec<_>>()
        .join(" ")
        .trim()
        .to_string()
}

fn capitalize(token: &str) -> String {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
