//! The patterns for multi-char tokens. Compiled once and shared by every lexer.

use regex::Regex;
use std::sync::LazyLock;

/// At least one digit, with an optional fractional part. Accepts `.5`, never a trailing `.`
static NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]*(\.[0-9]*)?[0-9]").expect("number pattern is valid"));
static IDENTIFIER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z_]+").expect("identifier pattern is valid"));

/// Matches a number literal at the very start of `src`
pub fn match_number(src: &str) -> Option<&str> {
    NUMBER.find(src).map(|m| m.as_str())
}

/// Matches an identifier or keyword at the very start of `src`
pub fn match_identifier(src: &str) -> Option<&str> {
    IDENTIFIER.find(src).map(|m| m.as_str())
}
