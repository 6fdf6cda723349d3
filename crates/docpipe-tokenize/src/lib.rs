//! # docpipe-tokenize
//!
//! **Tier 1 (Text Utilities)**
//!
//! Word tokenization and sentence splitting. Every docpipe statistic is
//! defined in terms of these functions, so the processing stage and the
//! corpus aggregator agree on what a "word" is.
//!
//! A token is a maximal run of Unicode word characters (letters, digits,
//! underscore) or hyphens that starts and ends on a word boundary, so
//! leading and trailing hyphens are never part of a token. Case is preserved;
//! callers lower-case for frequency and set operations.
//!
//! ## What does NOT belong here
//! * Markup removal (use docpipe-markup)
//! * Corpus aggregation (use docpipe-corpus)

use std::sync::LazyLock;

use docpipe_math::mean_usize;
use regex::Regex;

static WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[\w-]+\b").expect("valid regex literal"));

static SENTENCE_END: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]+").expect("valid regex literal"));

/// Split `text` into word tokens, in order of appearance, case preserved.
pub fn tokenize(text: &str) -> Vec<&str> {
    WORD.find_iter(text).map(|m| m.as_str()).collect()
}

/// Tokenize and lower-case every token.
pub fn tokenize_lower(text: &str) -> Vec<String> {
    WORD.find_iter(text)
        .map(|m| m.as_str().to_lowercase())
        .collect()
}

/// Split `text` on runs of `.`, `!` or `?`, dropping blank fragments.
///
/// Fragments are trimmed.
pub fn split_sentences(text: &str) -> Vec<&str> {
    SENTENCE_END
        .split(text)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Token count of every sentence fragment of `text`.
pub fn sentence_lengths(text: &str) -> Vec<usize> {
    split_sentences(text)
        .into_iter()
        .map(|s| WORD.find_iter(s).count())
        .collect()
}

/// Length of a token in Unicode scalar values.
#[inline]
pub fn token_chars(token: &str) -> usize {
    token.chars().count()
}

/// Mean token length in characters; 0.0 when there are no tokens.
pub fn avg_token_chars(tokens: &[&str]) -> f64 {
    let lengths: Vec<usize> = tokens.iter().map(|t| token_chars(t)).collect();
    mean_usize(&lengths)
}
