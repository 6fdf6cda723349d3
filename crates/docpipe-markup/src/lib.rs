//! # docpipe-markup
//!
//! **Tier 2 (Processing)**
//!
//! Turns a raw HTML page into the plain-text [`ProcessedRecord`] consumed by
//! the analysis stage. Pattern based; no DOM is built.
//!
//! ## What belongs here
//! * Script/style removal and tag stripping
//! * `href`/`src` extraction
//! * Per-page statistics
//!
//! ## What does NOT belong here
//! * Reading or writing files (see `docpipe-io`)
//! * Corpus-wide aggregation (see `docpipe-corpus`)

use std::path::Path;
use std::sync::LazyLock;

use docpipe_math::round_f64;
use docpipe_tokenize::{avg_token_chars, split_sentences, tokenize};
use docpipe_types::{AVERAGE_DECIMALS, DocumentStatistics, ProcessedRecord};
use regex::Regex;

static LINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)href=['"]?([^'" >]+)"#).expect("valid regex literal")
});
static IMAGE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)src=['"]?([^'" >]+)"#).expect("valid regex literal")
});
static SCRIPT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<script[^>]*>.*?</script>").expect("valid regex literal")
});
static STYLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<style[^>]*>.*?</style>").expect("valid regex literal")
});
static TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]+>").expect("valid regex literal"));
static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid regex literal"));
static PARAGRAPH_CLOSE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)</p\s*>").expect("valid regex literal"));
static BLANK_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n\s*\n").expect("valid regex literal"));

/// Link targets from `href=` attributes, in order of appearance.
pub fn extract_links(html: &str) -> Vec<String> {
    capture_all(&LINK, html)
}

/// Sources from `src=` attributes (images, but also scripts and frames).
pub fn extract_images(html: &str) -> Vec<String> {
    capture_all(&IMAGE, html)
}

fn capture_all(re: &Regex, html: &str) -> Vec<String> {
    re.captures_iter(html)
        .filter_map(|c| c.get(1))
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Visible text of a page: no script/style bodies, no tags, single spaces.
pub fn strip_html(html: &str) -> String {
    let without_scripts = SCRIPT.replace_all(html, "");
    let without_styles = STYLE.replace_all(&without_scripts, "");
    let spaced = TAG.replace_all(&without_styles, " ");
    WHITESPACE.replace_all(&spaced, " ").trim().to_string()
}

/// Number of `</p>` tags, or blank-line separated blocks when there are none.
///
/// Never less than 1.
pub fn paragraph_count(html: &str) -> usize {
    let closing = PARAGRAPH_CLOSE.find_iter(html).count();
    if closing > 0 {
        return closing;
    }
    BLANK_LINE
        .split(html)
        .filter(|block| !block.trim().is_empty())
        .count()
        .max(1)
}

/// Statistics of an already stripped text, plus the raw page for paragraphs.
pub fn page_statistics(text: &str, html: &str) -> DocumentStatistics {
    let tokens = tokenize(text);
    DocumentStatistics {
        word_count: tokens.len(),
        sentence_count: split_sentences(text).len(),
        paragraph_count: paragraph_count(html),
        avg_word_length: round_f64(avg_token_chars(&tokens), AVERAGE_DECIMALS),
    }
}

/// Convert one raw page into its processed record.
pub fn process_html(source_file: &str, html: &str, processed_at: &str) -> ProcessedRecord {
    let text = strip_html(html);
    let statistics = page_statistics(&text, html);
    ProcessedRecord {
        source_file: source_file.to_string(),
        statistics,
        links: extract_links(html),
        images: extract_images(html),
        text,
        processed_at: processed_at.to_string(),
    }
}

/// Decode raw page bytes as UTF-8, dropping invalid sequences.
///
/// Nothing is substituted, so bytes inside a word do not split it.
pub fn decode_page(bytes: &[u8]) -> String {
    bytes.utf8_chunks().map(|chunk| chunk.valid()).collect()
}

/// `page_1.html` -> `page_1.json`.
pub fn record_file_name(source_file: &str) -> String {
    let stem = Path::new(source_file)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(source_file);
    format!("{stem}.json")
}
