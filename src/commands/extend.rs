//! One-more-letter lookup command
//!
//! Lists dictionary words reachable from a base word by adding letters, and
//! which of them are valid moves.

use crate::core::{OneLetterRule, SubstringRule};
use crate::dictionary::AnagramIndex;
use std::fmt;

/// Which extension rule to apply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchRule {
    /// Sorted signature of the base is a substring of the candidate's
    #[default]
    Substring,
    /// Candidate has the base letters plus exactly one more
    OneLetter,
}

impl fmt::Display for MatchRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Substring => write!(f, "substring"),
            Self::OneLetter => write!(f, "one letter"),
        }
    }
}

/// Result of extending a word
pub struct ExtendResult {
    pub word: String,
    pub rule: MatchRule,
    pub matches: Vec<String>,
    /// Matches accepted by `is_good_word` against the base word
    pub moves: Vec<String>,
}

/// Find the one-more-letter anagrams of `word` under `rule`
#[must_use]
pub fn extend_word(index: &AnagramIndex, word: &str, rule: MatchRule) -> ExtendResult {
    let matches: Vec<String> = match rule {
        MatchRule::Substring => index.extensions_with(word, &SubstringRule),
        MatchRule::OneLetter => index.extensions_with(word, &OneLetterRule),
    }
    .into_iter()
    .map(str::to_string)
    .collect();

    let moves = matches
        .iter()
        .filter(|candidate| index.is_good_word(candidate, word))
        .cloned()
        .collect();

    ExtendResult {
        word: word.to_string(),
        rule,
        matches,
        moves,
    }
}
