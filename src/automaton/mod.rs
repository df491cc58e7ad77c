//! The scanner automaton: rule configuration and the greedy scan loop.
//!
//! Scanning is one nondeterministic-automaton step per [`next_token`] call.
//! A "state" is the set of live candidate rules, tracked as indices into the
//! rule list; multiple rules may be active at once, and the winner is only
//! determined at emission time. Two candidate sets exist during a match:
//!
//! - `active` -- rules whose continuation set accepts the *current*
//!   character, filtered after every consumed character;
//! - `last_viable` -- the candidate set as it stood *before* that filter,
//!   lagging `active` by one character.
//!
//! The token is awarded from `last_viable`, the most recently fully
//! confirmed set. The lag matters: a rule that goes inactive exactly at the
//! final character of a match is still eligible for the emitted token, which
//! governs tie-breaking when reflection sets differ in length from the
//! input run.
//!
//! [`next_token`]: ScannerAutomaton::next_token

use smallvec::SmallVec;

use crate::char_set::CharSet;
use crate::cursor::Cursor;
use crate::error::ScanError;
use crate::rule::Rule;
use crate::token::Token;

/// Candidate rule indices. Eight inline slots cover typical rule counts
/// without a heap allocation per token.
type Candidates = SmallVec<[usize; 8]>;

/// Table-free, rule-driven scanner.
///
/// Configure rules, bind an input, then pull tokens until the end token
/// (`label == None`) comes back:
///
/// ```
/// use rulelex::ScannerAutomaton;
///
/// let mut scanner = ScannerAutomaton::new(",");
/// scanner.define_numbers("Number");
/// scanner.define_letters("Word");
/// scanner.input("11,abc");
///
/// let first = scanner.next_token()?;
/// assert_eq!(first.label.as_deref(), Some("Number"));
/// assert_eq!(first.value.as_deref(), Some("11"));
/// # Ok::<(), rulelex::ScanError>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct ScannerAutomaton {
    /// Rules in declaration order. Order matters only for the labels listed
    /// in a [`NonDeterminism`](ScanError::NonDeterminism) error, never for
    /// candidate selection.
    rules: Vec<Rule>,
    /// Characters skipped between tokens.
    ignores: CharSet,
    /// The bound cursor; exactly one at a time, replaced by [`input`].
    ///
    /// [`input`]: ScannerAutomaton::input
    cursor: Option<Cursor>,
}

impl ScannerAutomaton {
    /// Create a scanner that skips the characters in `ignores` between
    /// tokens (e.g. whitespace).
    pub fn new(ignores: impl Into<CharSet>) -> Self {
        Self {
            rules: Vec::new(),
            ignores: ignores.into(),
            cursor: None,
        }
    }

    /// Append an ordinary rule: enter on any character in `trigger`, extend
    /// on any character in `reflection` (or `trigger` again when `None`),
    /// and emit `label` on success.
    pub fn define_rule(
        &mut self,
        trigger: impl Into<CharSet>,
        label: impl Into<String>,
        reflection: Option<CharSet>,
    ) {
        self.rules.push(Rule::ordinary(trigger.into(), label, reflection));
    }

    /// Append a keyword rule matching exactly `literal`, with precedence
    /// over an ordinary rule that ties at the same length.
    ///
    /// # Errors
    ///
    /// [`ScanError::EmptyKeyword`] if `literal` is empty.
    pub fn define_keyword(
        &mut self,
        literal: impl Into<String>,
        label: impl Into<String>,
    ) -> Result<(), ScanError> {
        let literal = literal.into();
        if literal.is_empty() {
            return Err(ScanError::EmptyKeyword);
        }
        self.rules.push(Rule::keyword(literal, label));
        Ok(())
    }

    /// Append a rule matching runs of decimal digits.
    pub fn define_numbers(&mut self, label: impl Into<String>) {
        self.rules.push(Rule::ordinary(CharSet::digits(), label, None));
    }

    /// Append a rule matching runs of ASCII letters.
    pub fn define_letters(&mut self, label: impl Into<String>) {
        self.rules.push(Rule::ordinary(CharSet::letters(), label, None));
    }

    /// Bind a fresh cursor over `text`, primed to its first character.
    /// Any previously bound cursor is discarded.
    pub fn input(&mut self, text: impl Into<String>) {
        self.cursor = Some(Cursor::new(text));
    }

    /// Scan and return the next token.
    ///
    /// At end of input this returns the end token (`label == None`); the
    /// cursor is sticky there, so repeated calls keep returning it.
    ///
    /// # Errors
    ///
    /// - [`ScanError::NoInput`] if [`input`](Self::input) was never called.
    /// - [`ScanError::UnexpectedCharacter`] if no rule can start on the
    ///   current character.
    /// - [`ScanError::NonDeterminism`] if more than one rule ties for the
    ///   longest match and keyword precedence cannot break the tie.
    /// - [`ScanError::IncompleteKeyword`] if the lexeme is a proper prefix
    ///   of every viable keyword literal.
    ///
    /// All errors are fatal to the scan. The cursor does not move past the
    /// point of failure, so calling again reproduces the same error.
    pub fn next_token(&mut self) -> Result<Token, ScanError> {
        let Self { rules, ignores, cursor } = self;
        let cursor = cursor.as_mut().ok_or(ScanError::NoInput)?;

        while cursor.current().is_some_and(|c| ignores.contains(c)) {
            cursor.advance();
        }

        let Some(start_char) = cursor.current() else {
            return Ok(Token::end(cursor.line(), cursor.column()));
        };
        let (line, column) = (cursor.line(), cursor.column());

        let mut active: Candidates = rules
            .iter()
            .enumerate()
            .filter(|(_, rule)| rule.entry_active(start_char))
            .map(|(idx, _)| idx)
            .collect();
        if active.is_empty() {
            return Err(ScanError::UnexpectedCharacter {
                character: start_char,
                line,
                column,
            });
        }

        let start = cursor.pos();
        cursor.advance();
        let mut last_viable = active.clone();

        // Greedy extension: consume while any candidate can continue.
        loop {
            let Some(c) = cursor.current() else { break };
            if !active.iter().any(|&idx| rules[idx].continue_active(c)) {
                break;
            }
            cursor.advance();
            last_viable.clone_from(&active);

            // Confirm the full accumulated lexeme with every candidate, then
            // reset each keyword that cannot take the upcoming character --
            // its next attempt must start clean.
            let lexeme = cursor.slice(start, cursor.pos());
            let upcoming = cursor.current();
            for &idx in &active {
                rules[idx].confirm(lexeme);
                if !upcoming.is_some_and(|u| rules[idx].continue_active(u)) {
                    rules[idx].reset();
                }
            }
            active.retain(|&mut idx| upcoming.is_some_and(|u| rules[idx].continue_active(u)));
        }

        let value = cursor.slice(start, cursor.pos()).to_owned();

        // A keyword only finally matches if the whole literal was consumed,
        // not merely a valid prefix of it.
        last_viable.retain(|&mut idx| match &rules[idx] {
            Rule::Keyword { literal, .. } => *literal == value,
            Rule::Ordinary { .. } => true,
        });

        if last_viable.len() > 1 {
            let keywords: Candidates = last_viable
                .iter()
                .copied()
                .filter(|&idx| rules[idx].is_keyword())
                .collect();
            if keywords.len() == 1 {
                last_viable = keywords;
            } else {
                return Err(ScanError::NonDeterminism {
                    value,
                    labels: last_viable
                        .iter()
                        .map(|&idx| rules[idx].label().to_owned())
                        .collect(),
                });
            }
        }

        match last_viable.first() {
            Some(&winner) => Ok(Token::lexeme(line, column, rules[winner].label(), value)),
            None => Err(ScanError::IncompleteKeyword { value, line, column }),
        }
    }
}
