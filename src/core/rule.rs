//! Extension rules
//!
//! An extension rule decides whether a dictionary signature counts as a
//! "one more letter" anagram of a base signature.

use super::signature::LetterSignature;

/// Matching rule for one-more-letter anagram lookup
pub trait ExtensionRule {
    /// Check whether `candidate` extends `base` under this rule
    fn extends(&self, candidate: &LetterSignature, base: &LetterSignature) -> bool;
}

/// Substring rule
///
/// A candidate qualifies when the base signature appears as a contiguous run
/// inside the candidate signature. This is not restricted to a single extra
/// letter: any longer signature containing the run qualifies, as does the base
/// signature itself. It also misses supersets where the extra letter splits the
/// run (`aest` does not contain `aet`).
#[derive(Debug, Clone, Copy, Default)]
pub struct SubstringRule;

impl ExtensionRule for SubstringRule {
    #[inline]
    fn extends(&self, candidate: &LetterSignature, base: &LetterSignature) -> bool {
        candidate.contains(base)
    }
}

/// Strict rule: the candidate holds every letter of the base plus exactly one more
#[derive(Debug, Clone, Copy, Default)]
pub struct OneLetterRule;

impl ExtensionRule for OneLetterRule {
    #[inline]
    fn extends(&self, candidate: &LetterSignature, base: &LetterSignature) -> bool {
        candidate.extends_by_one(base)
    }
}
