//! Anagram lookup command
//!
//! Finds the exact anagrams of a word and, given a base word, which of them
//! would be accepted as a move.

use crate::core::LetterSignature;
use crate::dictionary::AnagramIndex;

/// Result of looking up a word
pub struct LookupResult {
    pub word: String,
    pub signature: LetterSignature,
    pub in_dictionary: bool,
    pub anagrams: Vec<String>,
    pub base: Option<String>,
    /// Anagrams accepted by `is_good_word` against `base`
    pub accepted: Vec<String>,
}

/// Look up the anagrams of `word`, optionally checking them against `base`
#[must_use]
pub fn lookup_word(index: &AnagramIndex, word: &str, base: Option<&str>) -> LookupResult {
    let anagrams: Vec<String> = index
        .get_anagrams(word)
        .into_iter()
        .map(str::to_string)
        .collect();

    let accepted = base.map_or_else(Vec::new, |base| {
        anagrams
            .iter()
            .filter(|candidate| index.is_good_word(candidate, base))
            .cloned()
            .collect()
    });

    LookupResult {
        word: word.to_string(),
        signature: LetterSignature::of(word),
        in_dictionary: index.contains(word),
        anagrams,
        base: base.map(str::to_string),
        accepted,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn index() -> AnagramIndex {
        AnagramIndex::from_words(["stop", "pots", "tops", "spot", "post", "posts"])
    }

    #[test]
    fn lookup_known_word() {
        let result = lookup_word(&index(), "stop", None);

        assert!(result.in_dictionary);
        assert_eq!(result.signature.as_str(), "opst");
        assert_eq!(result.anagrams, vec!["stop", "pots", "tops", "spot", "post"]);
        assert!(result.base.is_none());
        assert!(result.accepted.is_empty());
    }

    #[test]
    fn lookup_with_base_filters_accepted() {
        let result = lookup_word(&index(), "opts", Some("pot"));

        assert!(!result.in_dictionary);
        assert_eq!(result.anagrams.len(), 5);
        // "pots" and "spot" contain "pot"
        assert_eq!(result.accepted, vec!["stop", "tops", "post"]);
    }

    #[test]
    fn lookup_unknown_letters() {
        let result = lookup_word(&index(), "xyz", Some("x"));
        assert!(result.anagrams.is_empty());
        assert!(result.accepted.is_empty());
    }
}
