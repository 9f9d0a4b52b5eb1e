// src/core/script.rs
use regex::Regex;
use std::sync::OnceLock;

const DANDA: char = '\u{0964}';
const DOUBLE_DANDA: char = '\u{0965}';

/// Maximal runs of Devanagari-block characters, excluding the dandas.
pub fn devanagari_run() -> &'static Regex {
    static RUN: OnceLock<Regex> = OnceLock::new();
    RUN.get_or_init(|| {
        Regex::new(r"[\x{0900}-\x{0963}\x{0966}-\x{097F}]+").expect("static pattern")
    })
}

/// Splits input text into word tokens. Anything outside the Devanagari block
/// is a separator; separators never produce empty tokens.
pub fn segment(text: &str) -> Vec<String> {
    devanagari_run()
        .find_iter(text)
        .map(|m| m.as_str())
        .map(|token| token.trim_matches(is_punctuation))
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

/// Strips surrounding whitespace and punctuation from one table form.
pub fn clean_form(raw: &str) -> &str {
    raw.trim_matches(|c: char| c.is_whitespace() || is_punctuation(c))
}

fn is_punctuation(c: char) -> bool {
    c.is_ascii_punctuation() || c == DANDA || c == DOUBLE_DANDA
}
