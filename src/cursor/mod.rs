//! Cursor over an immutable input buffer with line/column tracking.
//!
//! The cursor advances character by character. The current character is
//! `Some(char)` until the input is exhausted, then `None` -- the EOF
//! sentinel, distinct from every real character. EOF is sticky: once
//! reached, further `advance` calls are no-ops and the position freezes.
//!
//! # Column arithmetic
//!
//! Loading a character first increments `column`, then a `'\n'` resets
//! `column` to 0 and increments `line`. The first character of every line
//! therefore sits at column 1, and the newline itself reports column 0 on
//! the line it opened.

/// Cursor over an owned input buffer.
///
/// Created by [`ScannerAutomaton::input`](crate::ScannerAutomaton::input);
/// the automaton holds exactly one live cursor and replaces it wholesale on
/// re-binding.
#[derive(Clone, Debug)]
pub struct Cursor {
    /// The input text. Owned so the automaton carries no borrowed lifetime.
    text: String,
    /// Byte offset of the current character (== `text.len()` at EOF).
    pos: usize,
    /// Current character, or `None` once the input is exhausted.
    cur: Option<char>,
    /// 1-based line number.
    line: u32,
    /// Column of the current character; 0 only for a freshly opened line.
    column: u32,
}

impl Cursor {
    /// Create a cursor primed to the first character of `text`
    /// (or directly at EOF for empty input).
    pub fn new(text: impl Into<String>) -> Self {
        let mut cursor = Self {
            text: text.into(),
            pos: 0,
            cur: None,
            line: 1,
            column: 0,
        };
        cursor.load();
        cursor
    }

    /// Load the character at `pos` and apply the column arithmetic, or mark
    /// EOF when `pos` has run past the buffer.
    fn load(&mut self) {
        match self.text[self.pos..].chars().next() {
            Some(c) => {
                self.cur = Some(c);
                self.column += 1;
                if c == '\n' {
                    self.column = 0;
                    self.line += 1;
                }
            }
            None => self.cur = None,
        }
    }

    /// The current character, or `None` at EOF.
    #[inline]
    pub fn current(&self) -> Option<char> {
        self.cur
    }

    /// Returns `true` once the input is exhausted.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.cur.is_none()
    }

    /// Advance to the next character. No-op at EOF.
    pub fn advance(&mut self) {
        if let Some(c) = self.cur {
            self.pos += c.len_utf8();
            self.load();
        }
    }

    /// Byte offset of the current character (0-based).
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// 1-based line of the current character.
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Column of the current character.
    #[inline]
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Extract the input substring in `start..end` (byte offsets).
    ///
    /// Offsets must lie on character boundaries; the scan loop only ever
    /// passes offsets it obtained from [`pos`](Self::pos).
    pub fn slice(&self, start: usize, end: usize) -> &str {
        &self.text[start..end]
    }

    /// Extract the input substring from `start` to the current position.
    pub fn slice_from(&self, start: usize) -> &str {
        self.slice(start, self.pos)
    }
}
