//! Letter signatures
//!
//! A signature is the characters of a word sorted by code point. Two words are
//! anagrams of each other exactly when their signatures are equal.

use std::borrow::Borrow;
use std::fmt;

/// Sorted-letter anagram key for a word
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct LetterSignature(String);

impl LetterSignature {
    /// Compute the signature of a word
    ///
    /// # Examples
    /// ```
    /// use anagrams::core::LetterSignature;
    ///
    /// assert_eq!(LetterSignature::of("tea").as_str(), "aet");
    /// assert_eq!(LetterSignature::of("eat"), LetterSignature::of("ate"));
    /// ```
    #[must_use]
    pub fn of(word: &str) -> Self {
        let mut chars: Vec<char> = word.chars().collect();
        chars.sort_unstable();
        Self(chars.into_iter().collect())
    }

    /// Get the signature as a string slice
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of characters in the signature
    #[inline]
    #[must_use]
    pub fn char_len(&self) -> usize {
        self.0.chars().count()
    }

    /// Check whether `other` appears as a contiguous run inside this signature
    #[inline]
    #[must_use]
    pub fn contains(&self, other: &Self) -> bool {
        self.0.contains(other.as_str())
    }

    /// Check whether this signature is `other` plus exactly one extra letter
    ///
    /// Both signatures are sorted, so a single merge walk decides multiset
    /// containment.
    #[must_use]
    pub fn extends_by_one(&self, other: &Self) -> bool {
        let mut base = other.0.chars().peekable();
        let mut extra = 0;

        for c in self.0.chars() {
            if base.peek() == Some(&c) {
                base.next();
            } else {
                extra += 1;
                if extra > 1 {
                    return false;
                }
            }
        }

        extra == 1 && base.peek().is_none()
    }
}

impl fmt::Display for LetterSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for LetterSignature {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for LetterSignature {
    fn borrow(&self) -> &str {
        &self.0
    }
}
