//! Table-free, rule-driven lexical scanner automaton.
//!
//! Instead of generated tables or hard-coded dispatch, the scanner is
//! configured at runtime from character-class rules: each rule names the
//! characters that may *start* a match (its trigger set), the characters
//! that may *extend* one (its reflection set), and the label emitted on
//! success. Keyword rules specialize this to a single exact literal with
//! precedence over generic rules on exact ties.
//!
//! Scanning is greedy longest-match: a token is only emitted once no rule
//! can extend it further. Ties at the maximal length are broken by keyword
//! precedence; a remaining tie is a fatal configuration error, not a
//! recoverable condition.
//!
//! ```
//! use rulelex::ScannerAutomaton;
//!
//! let mut scanner = ScannerAutomaton::new(" \t");
//! scanner.define_letters("Word");
//! scanner.define_keyword("let", "Let")?;
//! scanner.input("let x");
//!
//! let token = scanner.next_token()?;
//! assert_eq!(token.label.as_deref(), Some("Let"));
//! let token = scanner.next_token()?;
//! assert_eq!(token.value.as_deref(), Some("x"));
//! assert!(scanner.next_token()?.is_end());
//! # Ok::<(), rulelex::ScanError>(())
//! ```

mod automaton;
mod char_set;
mod cursor;
mod error;
mod rule;
mod token;

pub use automaton::ScannerAutomaton;
pub use char_set::CharSet;
pub use error::ScanError;
pub use token::Token;
