//! Character-class sets for rule triggers, reflections, and the ignore set.
//!
//! Membership for ASCII characters is a single bit test against a `u128`
//! mask (one bit per code point below 128). Non-ASCII members are legal but
//! rare -- they go into a small overflow list and cost a linear scan. The
//! scanner's classes are ASCII-oriented (digits, letters, punctuation), so
//! the overflow list is empty in practice.

use smallvec::SmallVec;

/// Builds a `u128` mask with one bit set per byte value in `lo..=hi`.
const fn range_mask(lo: u8, hi: u8) -> u128 {
    let mut mask = 0u128;
    let mut b = lo;
    while b <= hi {
        mask |= 1 << b;
        b += 1;
    }
    mask
}

/// Mask for the decimal digits `0-9`.
const DIGITS: u128 = range_mask(b'0', b'9');

/// Mask for the ASCII letters `a-z` and `A-Z`.
const LETTERS: u128 = range_mask(b'a', b'z') | range_mask(b'A', b'Z');

/// A set of characters, used for rule trigger/reflection classes and the
/// scanner's ignore set.
///
/// Construct from any source of characters:
///
/// ```
/// use rulelex::CharSet;
///
/// let punct = CharSet::from("+-*/");
/// assert!(punct.contains('*'));
/// assert!(!punct.contains('x'));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CharSet {
    /// Bit `i` set means the ASCII character with code point `i` is a member.
    ascii: u128,
    /// Non-ASCII members, unordered, deduplicated on insert.
    extra: SmallVec<[char; 4]>,
}

impl CharSet {
    /// The empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// The decimal digits `0-9`.
    pub fn digits() -> Self {
        Self {
            ascii: DIGITS,
            extra: SmallVec::new(),
        }
    }

    /// The ASCII letters `a-z` and `A-Z`.
    pub fn letters() -> Self {
        Self {
            ascii: LETTERS,
            extra: SmallVec::new(),
        }
    }

    /// Add `c` to the set. Inserting an existing member is a no-op.
    pub fn insert(&mut self, c: char) {
        if c.is_ascii() {
            self.ascii |= 1 << (c as u32);
        } else if !self.extra.contains(&c) {
            self.extra.push(c);
        }
    }

    /// Membership test.
    #[inline]
    pub fn contains(&self, c: char) -> bool {
        if c.is_ascii() {
            self.ascii & (1 << (c as u32)) != 0
        } else {
            self.extra.contains(&c)
        }
    }

    /// Returns `true` if the set has no members.
    pub fn is_empty(&self) -> bool {
        self.ascii == 0 && self.extra.is_empty()
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.ascii.count_ones() as usize + self.extra.len()
    }
}

impl From<&str> for CharSet {
    fn from(chars: &str) -> Self {
        chars.chars().collect()
    }
}

impl FromIterator<char> for CharSet {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        let mut set = Self::new();
        for c in iter {
            set.insert(c);
        }
        set
    }
}

impl Extend<char> for CharSet {
    fn extend<I: IntoIterator<Item = char>>(&mut self, iter: I) {
        for c in iter {
            self.insert(c);
        }
    }
}
