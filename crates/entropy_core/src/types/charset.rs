//! Character sets for random string generation.

use super::error::CharSetError;

const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const DIGITS: &str = "0123456789";

/// A validated, non-empty collection of characters to draw from.
///
/// Construction guarantees at least one character, so drawing from a set
/// never fails.
///
/// # Examples
/// ```
/// use entropy_core::types::CharSet;
///
/// let set = CharSet::alphanumeric(true);
/// assert_eq!(set.len(), 62);
///
/// let hex = CharSet::custom("0123456789abcdef").unwrap();
/// assert_eq!(hex.len(), 16);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CharSet {
    chars: Vec<char>,
}

impl CharSet {
    /// Builds a set from an arbitrary string of characters.
    ///
    /// Duplicates are kept as given; a character listed twice is twice as
    /// likely to be drawn.
    pub fn custom(chars: &str) -> Result<Self, CharSetError> {
        if chars.is_empty() {
            return Err(CharSetError::Empty);
        }
        Ok(Self {
            chars: chars.chars().collect(),
        })
    }

    /// Uppercase letters and digits, plus lowercase letters when
    /// `include_lowercase` is set.
    pub fn alphanumeric(include_lowercase: bool) -> Self {
        let mut chars: Vec<char> = UPPERCASE.chars().chain(DIGITS.chars()).collect();
        if include_lowercase {
            chars.extend(LOWERCASE.chars());
        }
        Self { chars }
    }

    /// Uppercase letters, plus lowercase letters when `include_lowercase`
    /// is set.
    pub fn alphabetic(include_lowercase: bool) -> Self {
        let mut chars: Vec<char> = UPPERCASE.chars().collect();
        if include_lowercase {
            chars.extend(LOWERCASE.chars());
        }
        Self { chars }
    }

    /// Decimal digits only.
    pub fn numeric() -> Self {
        Self {
            chars: DIGITS.chars().collect(),
        }
    }

    /// Number of characters in the set. Always at least one.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Always `false`; an empty set cannot be constructed.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// The character at `index`.
    ///
    /// # Panics
    /// Panics if `index >= self.len()`; callers derive indices from
    /// bounded draws over `len()`.
    pub fn char_at(&self, index: usize) -> char {
        self.chars[index]
    }

    /// The characters as a slice.
    pub fn as_slice(&self) -> &[char] {
        &self.chars
    }
}

impl Default for CharSet {
    fn default() -> Self {
        Self::alphanumeric(true)
    }
}
