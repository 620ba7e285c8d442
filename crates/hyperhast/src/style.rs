//! Inline style declarations to style objects.
//!
//! `"color: red; background-color: blue"` becomes
//! `{color: "red", backgroundColor: "blue"}`. Semicolons and colons inside
//! parentheses or quoted strings are content, not delimiters. Comments are
//! skipped outside parentheses, and an unnested `}` ends the list. Malformed
//! input is always an error.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::builder::Style;

static DASH_LETTER: Lazy<Regex> = Lazy::new(|| Regex::new(r"-([a-z])").unwrap());

/// Why a declaration list could not be parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum StyleErrorKind {
    #[error("End of comment missing")]
    UnterminatedComment,
    #[error("property missing ':'")]
    MissingColon,
    #[error("property missing name")]
    MissingName,
    #[error("End of string missing")]
    UnterminatedString,
    #[error("missing ')'")]
    UnclosedParenthesis,
}

/// A parse failure with its 1-based position.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{line}:{column}: {kind}")]
pub struct StyleError {
    pub line: usize,
    pub column: usize,
    pub kind: StyleErrorKind,
}

/// A single declaration: `color: red`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub name: String,
    pub value: String,
}

/// Parse a style string into a style object with camelCased names
pub fn parse_style(input: &str) -> Result<Style, StyleError> {
    Ok(parse_declarations(input)?
        .into_iter()
        .map(|declaration| (camel_case(&declaration.name), declaration.value))
        .collect())
}

/// `background-color` to `backgroundColor`; `-ms-` loses its leading dash,
/// other vendor prefixes keep a leading capital (`-moz-x` to `MozX`).
pub fn camel_case(name: &str) -> String {
    let name = match name.strip_prefix("-ms-") {
        Some(rest) => format!("ms-{}", rest),
        None => name.to_string(),
    };
    DASH_LETTER
        .replace_all(&name, |caps: &regex::Captures| caps[1].to_uppercase())
        .into_owned()
}

/// Split a declaration list into trimmed name/value pairs
pub fn parse_declarations(input: &str) -> Result<Vec<Declaration>, StyleError> {
    let scanner = Scanner {
        chars: input.chars().collect(),
    };
    let mut declarations = Vec::new();
    let mut index = 0;

    loop {
        index = scanner.skip_trivia(index)?;
        if matches!(scanner.at(index), None | Some('}')) {
            break;
        }

        let (name, after_name) = scanner.name(index)?;
        let (value, after_value) = scanner.value(after_name + 1)?;
        declarations.push(Declaration { name, value });
        index = after_value;
    }

    Ok(declarations)
}

struct Scanner {
    chars: Vec<char>,
}

impl Scanner {
    fn at(&self, index: usize) -> Option<char> {
        self.chars.get(index).copied()
    }

    fn starts_comment(&self, index: usize) -> bool {
        self.at(index) == Some('/') && self.at(index + 1) == Some('*')
    }

    fn error(&self, index: usize, kind: StyleErrorKind) -> StyleError {
        let before = &self.chars[..index.min(self.chars.len())];
        let line = before.iter().filter(|c| **c == '\n').count() + 1;
        let column = match before.iter().rposition(|c| *c == '\n') {
            Some(newline) => before.len() - newline,
            None => before.len() + 1,
        };
        StyleError { line, column, kind }
    }

    /// Index just past the comment starting at `index`
    fn skip_comment(&self, index: usize) -> Result<usize, StyleError> {
        let mut cursor = index + 2;
        while cursor + 1 < self.chars.len() {
            if self.chars[cursor] == '*' && self.chars[cursor + 1] == '/' {
                return Ok(cursor + 2);
            }
            cursor += 1;
        }
        Err(self.error(index, StyleErrorKind::UnterminatedComment))
    }

    /// Skip whitespace, stray semicolons and comments
    fn skip_trivia(&self, mut index: usize) -> Result<usize, StyleError> {
        while let Some(c) = self.at(index) {
            if c.is_whitespace() || c == ';' {
                index += 1;
            } else if self.starts_comment(index) {
                index = self.skip_comment(index)?;
            } else {
                break;
            }
        }
        Ok(index)
    }

    /// Property name up to the colon; returns the colon's index
    fn name(&self, start: usize) -> Result<(String, usize), StyleError> {
        let mut name = String::new();
        let mut index = start;

        loop {
            match self.at(index) {
                Some(':') => break,
                None | Some(';') => {
                    return Err(self.error(index, StyleErrorKind::MissingColon));
                }
                Some(_) if self.starts_comment(index) => {
                    index = self.skip_comment(index)?;
                }
                Some(c) => {
                    name.push(c);
                    index += 1;
                }
            }
        }

        let name = name.trim();
        if name.is_empty() {
            return Err(self.error(start, StyleErrorKind::MissingName));
        }
        Ok((name.to_string(), index))
    }

    /// Value up to an unnested, unquoted `;` or `}`, or the end of input.
    ///
    /// Comments are only recognized outside parentheses: `url(a/*.png)` is content.
    fn value(&self, start: usize) -> Result<(String, usize), StyleError> {
        let mut value = String::new();
        let mut index = start;
        let mut quote: Option<(char, usize)> = None;
        let mut parens: Vec<usize> = Vec::new();

        while let Some(c) = self.at(index) {
            if let Some((open, _)) = quote {
                value.push(c);
                if c == '\\' {
                    if let Some(escaped) = self.at(index + 1) {
                        value.push(escaped);
                        index += 2;
                        continue;
                    }
                } else if c == open {
                    quote = None;
                }
                index += 1;
                continue;
            }

            match c {
                ';' | '}' if parens.is_empty() => break,
                '/' if parens.is_empty() && self.starts_comment(index) => {
                    index = self.skip_comment(index)?;
                    continue;
                }
                '"' | '\'' => quote = Some((c, index)),
                '(' => parens.push(index),
                ')' => {
                    parens.pop();
                }
                _ => {}
            }
            value.push(c);
            index += 1;
        }

        if let Some((_, open)) = quote {
            return Err(self.error(open, StyleErrorKind::UnterminatedString));
        }
        if let Some(&open) = parens.first() {
            return Err(self.error(open, StyleErrorKind::UnclosedParenthesis));
        }
        Ok((value.trim().to_string(), index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_declaration() {
        let style = parse_style("color: red").unwrap();
        assert_eq!(style.get("color").map(String::as_str), Some("red"));
        assert_eq!(style.len(), 1);
    }

    #[test]
    fn test_camel_cases_names() {
        let style = parse_style(
            "color: red; background-color: blue; -moz-transition: initial; -ms-transition: unset",
        )
        .unwrap();
        let names: Vec<&str> = style.keys().map(String::as_str).collect();
        assert_eq!(
            names,
            vec!["color", "backgroundColor", "MozTransition", "msTransition"]
        );
        assert_eq!(style["msTransition"], "unset");
        assert_eq!(style["MozTransition"], "initial");
    }

    #[test]
    fn test_nested_delimiters_are_content() {
        let style = parse_style(
            "background: url(\"a;b.png\"); font-family: 'x:y; z', serif; width: calc(1px + (2px; 3px))",
        )
        .unwrap();
        assert_eq!(style["background"], "url(\"a;b.png\")");
        assert_eq!(style["fontFamily"], "'x:y; z', serif");
        assert_eq!(style["width"], "calc(1px + (2px; 3px))");
    }

    #[test]
    fn test_url_with_colon() {
        let style = parse_style("background-image: url(http://a.b/c.png)").unwrap();
        assert_eq!(style["backgroundImage"], "url(http://a.b/c.png)");
    }

    #[test]
    fn test_comment_opener_inside_url() {
        let style = parse_style("background-image: url(http://a.b/*.png); color: red").unwrap();
        assert_eq!(style["backgroundImage"], "url(http://a.b/*.png)");
        assert_eq!(style["color"], "red");
    }

    #[test]
    fn test_closing_brace_ends_declarations() {
        let style = parse_style("color: red}").unwrap();
        assert_eq!(style["color"], "red");
        assert_eq!(style.len(), 1);

        let style = parse_style("color: red } margin: 0").unwrap();
        assert_eq!(style.len(), 1);
    }

    #[test]
    fn test_comments_and_stray_semicolons() {
        let declarations =
            parse_declarations(";; /* lead */ color /* x */: red /* y */;; margin:0;").unwrap();
        assert_eq!(
            declarations,
            vec![
                Declaration {
                    name: "color".to_string(),
                    value: "red".to_string()
                },
                Declaration {
                    name: "margin".to_string(),
                    value: "0".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_empty_value_is_kept() {
        let style = parse_style("color:").unwrap();
        assert_eq!(style["color"], "");
        assert!(parse_style("").unwrap().is_empty());
        assert!(parse_style("  ;  ").unwrap().is_empty());
    }

    #[test]
    fn test_unterminated_comment() {
        let error = parse_style("color:red; /*").unwrap_err();
        assert_eq!(error.kind, StyleErrorKind::UnterminatedComment);
        assert_eq!(error.to_string(), "1:12: End of comment missing");
    }

    #[test]
    fn test_dangling_property() {
        let error = parse_style("color: red; margin").unwrap_err();
        assert_eq!(error.kind, StyleErrorKind::MissingColon);
        assert_eq!((error.line, error.column), (1, 19));

        let error = parse_style("color; margin: 0").unwrap_err();
        assert_eq!(error.kind, StyleErrorKind::MissingColon);
    }

    #[test]
    fn test_missing_name() {
        let error = parse_style(": red").unwrap_err();
        assert_eq!(error.kind, StyleErrorKind::MissingName);
    }

    #[test]
    fn test_unterminated_string() {
        let error = parse_style("content: \"abc; color: red").unwrap_err();
        assert_eq!(error.kind, StyleErrorKind::UnterminatedString);
        assert_eq!(error.column, 10);
    }

    #[test]
    fn test_unclosed_parenthesis() {
        let error = parse_style("width: calc(1px + 2px; color: red").unwrap_err();
        assert_eq!(error.kind, StyleErrorKind::UnclosedParenthesis);
        assert_eq!(error.column, 12);
    }

    #[test]
    fn test_position_on_later_line() {
        let error = parse_style("color: red;\n  /* open").unwrap_err();
        assert_eq!((error.line, error.column), (2, 3));
    }
}
