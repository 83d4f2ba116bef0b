//! Shared word tokenizer and term frequency vectors.
//!
//! Both the frequency scorer and the lexical topic extractor run on the
//! same token stream, so the rules live in one place: lowercase the text,
//! strip punctuation, split on whitespace and drop short tokens. Stripping
//! deletes punctuation rather than replacing it with spaces, so `"don't"`
//! becomes `dont` and `"end.Start"` becomes `endstart`.

use ahash::AHashMap;

/// Tokens at or below this length carry little signal and are discarded.
pub const MIN_TOKEN_CHARS: usize = 4;

/// Term -> occurrence count for one document.
pub type FrequencyVector = AHashMap<String, u32>;

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Splits `text` into lowercase tokens, dropping punctuation and any token
/// shorter than [`MIN_TOKEN_CHARS`].
#[must_use]
pub fn tokenize(text: &str) -> Vec<String> {
    let cleaned: String = text
        .to_lowercase()
        .chars()
        .filter(|&c| is_word_char(c) || c.is_whitespace())
        .collect();

    cleaned
        .split_whitespace()
        .filter(|token| token.chars().count() >= MIN_TOKEN_CHARS)
        .map(str::to_string)
        .collect()
}

/// Builds the term frequency vector for one document.
///
/// Documents with no qualifying token (short words only, punctuation only,
/// empty input) produce an empty vector.
#[must_use]
pub fn frequency_vector(text: &str) -> FrequencyVector {
    let mut freq = FrequencyVector::new();
    for token in tokenize(text) {
        *freq.entry(token).or_insert(0) += 1;
    }
    freq
}
