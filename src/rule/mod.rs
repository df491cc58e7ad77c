//! Scanner rules: the states of the automaton.
//!
//! A rule pairs an entry condition (which characters may *start* a match)
//! with a continuation condition (which characters may *extend* one) and the
//! label emitted on success. Keyword rules specialize this to a single exact
//! literal path: they track how much of the literal has been confirmed and
//! only continue along that path.
//!
//! Rules are a closed variant rather than trait objects; the scan loop in
//! [`ScannerAutomaton`](crate::ScannerAutomaton) owns all mutation of keyword
//! progress, by rule index.

use crate::char_set::CharSet;

/// A single automaton state definition.
#[derive(Clone, Debug)]
pub enum Rule {
    /// Plain character-class rule: enter on any trigger character, extend on
    /// any reflection character.
    Ordinary {
        /// Characters that may start a match.
        trigger: CharSet,
        /// Characters that may extend a match (defaults to `trigger`).
        reflection: CharSet,
        /// Token label emitted on success.
        label: String,
    },
    /// Exact-literal rule. Matches only the full `literal`, with precedence
    /// over an ordinary rule that ties at the same length.
    Keyword {
        /// The full literal sequence. Never empty.
        literal: String,
        /// Byte length of the accumulated lexeme, while that lexeme is a
        /// prefix of `literal`. At rest this is the width of the first
        /// character (the trigger character counts as confirmed); `None`
        /// means the accumulated lexeme is not a literal prefix and the
        /// rule cannot continue until reset.
        progress: Option<usize>,
        /// Token label emitted on success.
        label: String,
    },
}

impl Rule {
    /// Create an ordinary rule. A `None` reflection set defaults to the
    /// trigger set.
    pub fn ordinary(trigger: CharSet, label: impl Into<String>, reflection: Option<CharSet>) -> Self {
        let reflection = reflection.unwrap_or_else(|| trigger.clone());
        Rule::Ordinary {
            trigger,
            reflection,
            label: label.into(),
        }
    }

    /// Create a keyword rule for a non-empty `literal`.
    ///
    /// Callers validate non-emptiness first
    /// ([`define_keyword`](crate::ScannerAutomaton::define_keyword) reports
    /// it as a configuration error); an empty literal here yields a rule
    /// that can never enter.
    pub fn keyword(literal: impl Into<String>, label: impl Into<String>) -> Self {
        let literal = literal.into();
        let progress = literal.chars().next().map(char::len_utf8);
        Rule::Keyword {
            literal,
            progress,
            label: label.into(),
        }
    }

    /// The token label emitted when this rule wins a match.
    pub fn label(&self) -> &str {
        match self {
            Rule::Ordinary { label, .. } | Rule::Keyword { label, .. } => label,
        }
    }

    /// Returns `true` for keyword rules.
    pub fn is_keyword(&self) -> bool {
        matches!(self, Rule::Keyword { .. })
    }

    /// May a match for this rule start on `c`?
    pub fn entry_active(&self, c: char) -> bool {
        match self {
            Rule::Ordinary { trigger, .. } => trigger.contains(c),
            Rule::Keyword { literal, .. } => literal.chars().next() == Some(c),
        }
    }

    /// May an in-progress match for this rule extend with `c`?
    ///
    /// For keyword rules this holds iff `c` is the next unconsumed literal
    /// character -- one check covering both the exact-prefix and the
    /// maximum-length conditions. A fully consumed or diverged keyword
    /// continues with nothing.
    pub fn continue_active(&self, c: char) -> bool {
        match self {
            Rule::Ordinary { reflection, .. } => reflection.contains(c),
            Rule::Keyword { literal, progress, .. } => match *progress {
                Some(p) => literal[p..].chars().next() == Some(c),
                None => false,
            },
        }
    }

    /// Reflective transition: record the full lexeme accumulated while this
    /// rule was an active candidate. Keyword progress is rewritten from the
    /// whole lexeme every time, never extended from where it last stood --
    /// a keyword that was reset mid-token and re-admitted to the candidate
    /// set must re-diverge unless the entire lexeme is a literal prefix.
    /// No-op for ordinary rules.
    pub fn confirm(&mut self, value: &str) {
        if let Rule::Keyword { literal, progress, .. } = self {
            *progress = literal.starts_with(value).then_some(value.len());
        }
    }

    /// Reset keyword progress to the first character, so the next scan
    /// attempt starts clean. No-op for ordinary rules.
    pub fn reset(&mut self) {
        if let Rule::Keyword { literal, progress, .. } = self {
            *progress = literal.chars().next().map(char::len_utf8);
        }
    }
}
