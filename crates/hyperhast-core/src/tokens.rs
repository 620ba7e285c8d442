//! Space- and comma-separated token lists.

use crate::node::Token;

/// Split a space-separated value into its tokens
pub fn parse_spaces(value: &str) -> Vec<String> {
    value.split_whitespace().map(str::to_string).collect()
}

/// Join tokens with single spaces
pub fn stringify_spaces(values: &[Token]) -> String {
    values
        .iter()
        .map(Token::to_string)
        .collect::<Vec<_>>()
        .join(" ")
        .trim()
        .to_string()
}

/// Split a comma-separated value into trimmed tokens.
///
/// Empty tokens are kept, except a single trailing one.
pub fn parse_commas(value: &str) -> Vec<String> {
    let mut tokens: Vec<String> = value.split(',').map(|t| t.trim().to_string()).collect();
    if tokens.last().is_some_and(String::is_empty) {
        tokens.pop();
    }
    tokens
}

/// Join tokens with `", "`
pub fn stringify_commas(values: &[Token]) -> String {
    let mut parts: Vec<String> = values.iter().map(Token::to_string).collect();
    if parts.last().is_some_and(String::is_empty) {
        parts.push(String::new());
    }
    parts.join(", ").trim().to_string()
}
