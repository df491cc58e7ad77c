//! Scanner error taxonomy.
//!
//! Every error is fatal to its scan. Ambiguity and unexpected characters
//! indicate a defect in the rule configuration or the input; the scanner
//! never guesses its way past either.

use thiserror::Error;

/// Errors raised during rule configuration or scanning.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ScanError {
    /// A keyword rule was defined with an empty literal.
    #[error("empty keyword literal is illegal")]
    EmptyKeyword,

    /// `next_token` was called before any input was bound.
    #[error("no input bound; call `input` before `next_token`")]
    NoInput,

    /// No rule's trigger set contains the current character.
    #[error("unexpected character {character:?} in line {line} column {column}")]
    UnexpectedCharacter {
        /// The offending character.
        character: char,
        /// 1-based line of the character.
        line: u32,
        /// Column of the character.
        column: u32,
    },

    /// More than one rule tied for the longest match and keyword precedence
    /// could not break the tie. Signals overlapping rule definitions.
    #[error("non-determinism detected: input {value:?} ends in states {}", .labels.join(", "))]
    NonDeterminism {
        /// The matched text.
        value: String,
        /// Labels of every tied rule, in declaration order.
        labels: Vec<String>,
    },

    /// The lexeme is a proper prefix of every viable keyword literal and no
    /// ordinary rule matched it.
    #[error("incomplete keyword {value:?} in line {line} column {column}")]
    IncompleteKeyword {
        /// The partial lexeme.
        value: String,
        /// 1-based line of the first character of the lexeme.
        line: u32,
        /// Column of the first character of the lexeme.
        column: u32,
    },
}
