//! Classified lexemes produced by the scanner.

use std::fmt;

/// A classified lexeme with the position of its first character.
///
/// `label == None` marks the end of input; callers stop pulling tokens when
/// they receive it. The end token carries no value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    /// 1-based line of the first character of the lexeme.
    pub line: u32,
    /// Column of the first character of the lexeme.
    pub column: u32,
    /// The matched rule's label, or `None` at end of input.
    pub label: Option<String>,
    /// The raw matched substring, or `None` at end of input.
    pub value: Option<String>,
}

impl Token {
    /// A lexeme token.
    pub(crate) fn lexeme(line: u32, column: u32, label: &str, value: String) -> Self {
        Self {
            line,
            column,
            label: Some(label.to_owned()),
            value: Some(value),
        }
    }

    /// The end-of-input token at the cursor's final position.
    pub(crate) fn end(line: u32, column: u32) -> Self {
        Self {
            line,
            column,
            label: None,
            value: None,
        }
    }

    /// Returns `true` for the end-of-input token.
    pub fn is_end(&self) -> bool {
        self.label.is_none()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.label, &self.value) {
            (Some(label), Some(value)) => write!(
                f,
                "{label} at {}, {} with value {value}",
                self.line, self.column
            ),
            _ => write!(f, "<end of input> at {}, {}", self.line, self.column),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_label_position_and_value() {
        let token = Token::lexeme(2, 5, "Number", "42".to_owned());
        assert_eq!(token.to_string(), "Number at 2, 5 with value 42");
        assert!(!token.is_end());
    }

    #[test]
    fn end_token_has_no_label_or_value() {
        let token = Token::end(1, 0);
        assert!(token.is_end());
        assert_eq!(token.label, None);
        assert_eq!(token.value, None);
        assert_eq!(token.to_string(), "<end of input> at 1, 0");
    }
}
