//! Recursive-descent parser for literal-encoded string lists
//!
//! The trial table stores disease names and ICD-10 codes as printed
//! sequence literals, e.g. `['Breast Cancer', "Lymphoma"]` or
//! `["['C50.1', 'C50.2']", "['D05']"]`. Lists, tuples and quoted strings
//! are parsed into values; numbers, `None`, `True` and `False` are accepted
//! as opaque scalars so a stray one does not sink the enclosing list.

use std::fmt;

/// A parsed literal value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Literal {
    /// Quoted string with escapes resolved
    Str(String),
    /// List `[...]` or tuple `(...)`
    Seq(Vec<Literal>),
    /// Number, `None`, `True` or `False`
    Scalar,
}

impl Literal {
    /// Consume a sequence of strings into owned strings.
    ///
    /// Returns `None` if this is not a sequence or any element is not a string.
    #[must_use]
    pub fn into_strings(self) -> Option<Vec<String>> {
        match self {
            Self::Seq(items) => items
                .into_iter()
                .map(|item| match item {
                    Self::Str(s) => Some(s),
                    Self::Seq(_) | Self::Scalar => None,
                })
                .collect(),
            Self::Str(_) | Self::Scalar => None,
        }
    }
}

/// Reason a literal failed to parse
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind} at offset {offset}")]
pub struct LiteralError {
    pub offset: usize,
    pub kind: LiteralErrorKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiteralErrorKind {
    UnexpectedEnd,
    UnexpectedChar(char),
    UnterminatedString,
    InvalidEscape,
    TrailingInput,
}

impl fmt::Display for LiteralErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedEnd => write!(f, "unexpected end of input"),
            Self::UnexpectedChar(c) => write!(f, "unexpected character {c:?}"),
            Self::UnterminatedString => write!(f, "unterminated string"),
            Self::InvalidEscape => write!(f, "invalid escape sequence"),
            Self::TrailingInput => write!(f, "trailing input"),
        }
    }
}

/// Parse a complete literal; surrounding whitespace is allowed, anything
/// else after the value is an error.
pub fn parse_literal(input: &str) -> Result<Literal, LiteralError> {
    let mut parser = Parser { input, pos: 0 };
    let value = parser.value()?;
    parser.skip_ws();
    if parser.pos < input.len() {
        return Err(parser.error(LiteralErrorKind::TrailingInput));
    }
    Ok(value)
}

struct Parser<'a> {
    input: &'a str,
    pos: usize,
}

impl Parser<'_> {
    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn skip_ws(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.bump();
        }
    }

    fn error(&self, kind: LiteralErrorKind) -> LiteralError {
        LiteralError {
            offset: self.pos,
            kind,
        }
    }

    fn unexpected(&self) -> LiteralError {
        match self.peek() {
            Some(c) => self.error(LiteralErrorKind::UnexpectedChar(c)),
            None => self.error(LiteralErrorKind::UnexpectedEnd),
        }
    }

    fn value(&mut self) -> Result<Literal, LiteralError> {
        self.skip_ws();
        match self.peek() {
            Some('[') => {
                self.bump();
                let (items, _) = self.elements(']')?;
                Ok(Literal::Seq(items))
            }
            Some('(') => {
                self.bump();
                let (mut items, trailing_comma) = self.elements(')')?;
                // `('a')` is a parenthesized string, `('a',)` is a tuple
                if items.len() == 1 && !trailing_comma {
                    Ok(items.remove(0))
                } else {
                    Ok(Literal::Seq(items))
                }
            }
            Some(quote @ ('\'' | '"')) => {
                self.bump();
                self.string(quote).map(Literal::Str)
            }
            Some(_) => self.scalar(),
            None => Err(self.unexpected()),
        }
    }

    /// Bare token: a decimal number or one of `None`, `True`, `False`
    fn scalar(&mut self) -> Result<Literal, LiteralError> {
        let start = self.pos;
        let token_len = self.input[start..]
            .find(|c: char| !(c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.' | '_')))
            .unwrap_or(self.input.len() - start);
        let token = &self.input[start..start + token_len];

        let is_number = token
            .starts_with(|c: char| c.is_ascii_digit() || matches!(c, '+' | '-' | '.'))
            && token.contains(|c: char| c.is_ascii_digit())
            && token.replace('_', "").parse::<f64>().is_ok();
        if !(is_number || matches!(token, "None" | "True" | "False")) {
            return Err(self.unexpected());
        }

        self.pos += token_len;
        Ok(Literal::Scalar)
    }

    /// Parse comma-separated values up to `close`, which is consumed.
    /// Also reports whether the last element was followed by a comma.
    fn elements(&mut self, close: char) -> Result<(Vec<Literal>, bool), LiteralError> {
        let mut items = Vec::new();
        loop {
            self.skip_ws();
            if self.peek() == Some(close) {
                self.bump();
                let trailing_comma = !items.is_empty();
                return Ok((items, trailing_comma));
            }
            items.push(self.value()?);
            self.skip_ws();
            match self.peek() {
                Some(',') => {
                    self.bump();
                }
                Some(c) if c == close => {
                    self.bump();
                    return Ok((items, false));
                }
                _ => return Err(self.unexpected()),
            }
        }
    }

    fn string(&mut self, quote: char) -> Result<String, LiteralError> {
        let mut out = String::new();
        loop {
            let Some(c) = self.bump() else {
                return Err(self.error(LiteralErrorKind::UnterminatedString));
            };
            match c {
                c if c == quote => return Ok(out),
                '\n' => return Err(self.error(LiteralErrorKind::UnterminatedString)),
                '\\' => {
                    let Some(escaped) = self.bump() else {
                        return Err(self.error(LiteralErrorKind::UnterminatedString));
                    };
                    match escaped {
                        '\\' | '\'' | '"' => out.push(escaped),
                        'n' => out.push('\n'),
                        't' => out.push('\t'),
                        'r' => out.push('\r'),
                        'a' => out.push('\u{07}'),
                        'b' => out.push('\u{08}'),
                        'f' => out.push('\u{0c}'),
                        'v' => out.push('\u{0b}'),
                        'x' => out.push(self.hex_escape(2)?),
                        'u' => out.push(self.hex_escape(4)?),
                        'U' => out.push(self.hex_escape(8)?),
                        '0'..='7' => out.push(self.octal_escape(escaped)),
                        '\n' => {}
                        // Unknown escapes keep their backslash
                        other => {
                            out.push('\\');
                            out.push(other);
                        }
                    }
                }
                c => out.push(c),
            }
        }
    }

    /// Exactly `digits` hex digits naming a code point (`\xf6`, `\u00f6`)
    fn hex_escape(&mut self, digits: usize) -> Result<char, LiteralError> {
        let hex = self
            .input
            .get(self.pos..self.pos + digits)
            .filter(|hex| hex.chars().all(|c| c.is_ascii_hexdigit()))
            .ok_or_else(|| self.error(LiteralErrorKind::InvalidEscape))?;
        let decoded = u32::from_str_radix(hex, 16)
            .ok()
            .and_then(char::from_u32)
            .ok_or_else(|| self.error(LiteralErrorKind::InvalidEscape))?;
        self.pos += digits;
        Ok(decoded)
    }

    /// Up to three octal digits, the first already consumed (`\0`, `\101`)
    fn octal_escape(&mut self, first: char) -> char {
        let mut value = first.to_digit(8).unwrap_or(0);
        for _ in 0..2 {
            match self.peek().and_then(|c| c.to_digit(8)) {
                Some(digit) => {
                    value = value * 8 + digit;
                    self.bump();
                }
                None => break,
            }
        }
        char::from_u32(value).unwrap_or(char::REPLACEMENT_CHARACTER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strs(items: &[&str]) -> Literal {
        Literal::Seq(items.iter().map(|s| Literal::Str((*s).to_string())).collect())
    }

    #[test]
    fn test_list_of_strings() {
        let parsed = parse_literal(r#"['Breast Cancer', "Lymphoma"]"#).unwrap();
        assert_eq!(parsed, strs(&["Breast Cancer", "Lymphoma"]));
    }

    #[test]
    fn test_empty_list_and_trailing_comma() {
        assert_eq!(parse_literal("[]").unwrap(), Literal::Seq(vec![]));
        assert_eq!(parse_literal("  [ 'a' , ]  ").unwrap(), strs(&["a"]));
    }

    #[test]
    fn test_nested_lists() {
        let parsed = parse_literal("[['C50.1', 'C50.2'], ['D05']]").unwrap();
        assert_eq!(
            parsed,
            Literal::Seq(vec![strs(&["C50.1", "C50.2"]), strs(&["D05"])])
        );
    }

    #[test]
    fn test_tuples_and_parenthesized_string() {
        assert_eq!(parse_literal("('a', 'b')").unwrap(), strs(&["a", "b"]));
        assert_eq!(parse_literal("('a',)").unwrap(), strs(&["a"]));
        assert_eq!(
            parse_literal("('a')").unwrap(),
            Literal::Str("a".to_string())
        );
        assert_eq!(parse_literal("()").unwrap(), Literal::Seq(vec![]));
    }

    #[test]
    fn test_escapes() {
        let parsed = parse_literal(r#"['Hodgkin\'s lymphoma', "say \"hi\"", 'a\\b', 'x\d']"#)
            .unwrap();
        assert_eq!(
            parsed,
            strs(&["Hodgkin's lymphoma", "say \"hi\"", "a\\b", "x\\d"])
        );
    }

    #[test]
    fn test_other_quote_inside_string() {
        let parsed = parse_literal(r#"["['C50.1']", "Crohn's"]"#).unwrap();
        assert_eq!(parsed, strs(&["['C50.1']", "Crohn's"]));
    }

    #[test]
    fn test_rejects_malformed_input() {
        assert!(parse_literal("").is_err());
        assert!(parse_literal("not a list").is_err());
        assert!(parse_literal("['a'").is_err());
        assert!(parse_literal("['a' 'b']").is_err());
        assert!(parse_literal("['unterminated]").is_err());
        assert!(parse_literal("[nan, inf]").is_err());
        assert!(parse_literal("[{'a': 1}]").is_err());
        assert!(parse_literal(r"['\x4']").is_err());
        assert!(parse_literal(r"['\uZZZZ']").is_err());
        assert!(parse_literal("['a'] junk").is_err());
        assert!(parse_literal("[,]").is_err());
    }

    #[test]
    fn test_error_reports_offset() {
        let err = parse_literal("['a', x]").unwrap_err();
        assert_eq!(err.offset, 6);
        assert_eq!(err.kind, LiteralErrorKind::UnexpectedChar('x'));
    }

    #[test]
    fn test_scalars_parse_inside_lists() {
        assert_eq!(
            parse_literal("['a', 5, None, True, False, -1.5e3, 1_000]").unwrap(),
            Literal::Seq(vec![
                Literal::Str("a".to_string()),
                Literal::Scalar,
                Literal::Scalar,
                Literal::Scalar,
                Literal::Scalar,
                Literal::Scalar,
                Literal::Scalar,
            ])
        );
        assert_eq!(parse_literal("None").unwrap(), Literal::Scalar);
        assert_eq!(Literal::Scalar.into_strings(), None);
        assert_eq!(
            Literal::Seq(vec![Literal::Scalar]).into_strings(),
            None
        );
    }

    #[test]
    fn test_numeric_escapes_are_decoded() {
        let parsed = parse_literal(r"['Sj\xf6gren', 'caf\u00e9', '\U0001F600', '\101\0']").unwrap();
        assert_eq!(
            parsed,
            strs(&["Sj\u{f6}gren", "caf\u{e9}", "\u{1F600}", "A\u{0}"])
        );
    }

    #[test]
    fn test_into_strings_shape() {
        assert_eq!(
            strs(&["a", "b"]).into_strings(),
            Some(vec!["a".to_string(), "b".to_string()])
        );
        assert_eq!(Literal::Str("a".to_string()).into_strings(), None);
        assert_eq!(
            Literal::Seq(vec![strs(&["a"])]).into_strings(),
            None
        );
    }
}
