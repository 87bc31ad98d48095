//! Read-only anagram index
//!
//! Built once from a word list, then only queried. Words keep the case and
//! order of the source; duplicates are kept in every sequence and bucket.

use crate::core::{ExtensionRule, LetterSignature, OneLetterRule, SubstringRule};
use rayon::prelude::*;
use rustc_hash::{FxHashMap, FxHashSet};
use std::collections::BTreeMap;
use std::collections::hash_map::Entry;

/// Words sharing one letter signature, in insertion order
#[derive(Debug, Clone)]
struct SignatureBucket {
    signature: LetterSignature,
    words: Vec<String>,
}

/// Summary counts for a loaded dictionary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictionaryStats {
    pub total_words: usize,
    pub distinct_words: usize,
    pub signatures: usize,
    pub words_by_length: BTreeMap<usize, usize>,
}

/// Immutable word index keyed by letter signature and by length
#[derive(Debug, Clone, Default)]
pub struct AnagramIndex {
    words: Vec<String>,
    word_set: FxHashSet<String>,
    /// Signature to position in `buckets`
    signatures: FxHashMap<LetterSignature, usize>,
    /// Buckets in order of first appearance of their signature
    buckets: Vec<SignatureBucket>,
    by_length: FxHashMap<usize, Vec<String>>,
}

impl AnagramIndex {
    /// Build an index from already-trimmed words
    ///
    /// # Examples
    /// ```
    /// use anagrams::dictionary::AnagramIndex;
    ///
    /// let index = AnagramIndex::from_words(["eat", "tea", "bat"]);
    /// assert_eq!(index.get_anagrams("ate"), vec!["eat", "tea"]);
    /// ```
    #[must_use]
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut index = Self::default();
        for word in words {
            index.insert(word.into());
        }
        index
    }

    /// Add one word to every structure
    pub(crate) fn insert(&mut self, word: String) {
        let signature = LetterSignature::of(&word);

        let slot = match self.signatures.entry(signature) {
            Entry::Occupied(entry) => *entry.get(),
            Entry::Vacant(entry) => {
                let slot = self.buckets.len();
                self.buckets.push(SignatureBucket {
                    signature: entry.key().clone(),
                    words: Vec::new(),
                });
                entry.insert(slot);
                slot
            }
        };
        self.buckets[slot].words.push(word.clone());

        self.by_length
            .entry(word.chars().count())
            .or_default()
            .push(word.clone());

        self.word_set.insert(word.clone());
        self.words.push(word);
    }

    /// Check that `word` is a dictionary word that does not contain `base`
    ///
    /// # Examples
    /// ```
    /// use anagrams::dictionary::AnagramIndex;
    ///
    /// let index = AnagramIndex::from_words(["tea", "teas", "ate"]);
    /// assert!(index.is_good_word("ate", "tea"));
    /// assert!(!index.is_good_word("teas", "tea"));
    /// assert!(!index.is_good_word("eta", "tea"));
    /// ```
    #[must_use]
    pub fn is_good_word(&self, word: &str, base: &str) -> bool {
        self.word_set.contains(word) && !word.contains(base)
    }

    /// Check dictionary membership
    #[inline]
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.word_set.contains(word)
    }

    /// All words with the same letters as `target`, in insertion order
    ///
    /// `target` itself is included when it is in the dictionary.
    #[must_use]
    pub fn get_anagrams(&self, target: &str) -> Vec<&str> {
        let signature = LetterSignature::of(target);
        self.signatures
            .get(signature.as_str())
            .map(|&slot| {
                self.buckets[slot]
                    .words
                    .iter()
                    .map(String::as_str)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Words whose signature contains the signature of `word` as a substring
    ///
    /// Buckets are visited in order of first appearance, each bucket in
    /// insertion order.
    ///
    /// # Examples
    /// ```
    /// use anagrams::dictionary::AnagramIndex;
    ///
    /// let index = AnagramIndex::from_words(["sea", "teas", "eats"]);
    /// // "aes" is a contiguous run of "aest"
    /// assert_eq!(
    ///     index.get_anagrams_with_one_more_letter("sea"),
    ///     vec!["sea", "teas", "eats"]
    /// );
    /// ```
    #[must_use]
    pub fn get_anagrams_with_one_more_letter(&self, word: &str) -> Vec<&str> {
        self.extensions_with(word, &SubstringRule)
    }

    /// Words holding every letter of `word` plus exactly one more
    #[must_use]
    pub fn get_anagrams_with_exactly_one_more_letter(&self, word: &str) -> Vec<&str> {
        self.extensions_with(word, &OneLetterRule)
    }

    /// Collect the words of every bucket whose signature extends `word` under `rule`
    #[must_use]
    pub fn extensions_with<R: ExtensionRule>(&self, word: &str, rule: &R) -> Vec<&str> {
        let base = LetterSignature::of(word);
        self.buckets
            .iter()
            .filter(|bucket| rule.extends(&bucket.signature, &base))
            .flat_map(|bucket| bucket.words.iter().map(String::as_str))
            .collect()
    }

    /// Count what `extensions_with` would return without collecting it
    #[must_use]
    pub fn count_extensions_with<R: ExtensionRule>(&self, word: &str, rule: &R) -> usize {
        let base = LetterSignature::of(word);
        self.buckets
            .iter()
            .filter(|bucket| rule.extends(&bucket.signature, &base))
            .map(|bucket| bucket.words.len())
            .sum()
    }

    /// Words of a given length (in characters), in insertion order
    #[must_use]
    pub fn words_of_length(&self, length: usize) -> &[String] {
        self.by_length.get(&length).map_or(&[], Vec::as_slice)
    }

    /// Words of `length` with at least `min_num_anagrams` one-more-letter anagrams
    ///
    /// Scans the length bucket in parallel; order follows the bucket.
    #[must_use]
    pub fn qualifying_starters(&self, length: usize, min_num_anagrams: usize) -> Vec<&str> {
        self.words_of_length(length)
            .par_iter()
            .filter(|word| self.count_extensions_with(word, &SubstringRule) >= min_num_anagrams)
            .map(String::as_str)
            .collect()
    }

    /// All words in source order, duplicates included
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub fn stats(&self) -> DictionaryStats {
        DictionaryStats {
            total_words: self.words.len(),
            distinct_words: self.word_set.len(),
            signatures: self.buckets.len(),
            words_by_length: self
                .by_length
                .iter()
                .map(|(&length, words)| (length, words.len()))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario() -> AnagramIndex {
        AnagramIndex::from_words(["eat", "tea", "ate", "bat", "tab", "teas"])
    }

    #[test]
    fn get_anagrams_in_insertion_order() {
        let index = scenario();
        assert_eq!(index.get_anagrams("eat"), vec!["eat", "tea", "ate"]);
        assert_eq!(index.get_anagrams("bat"), vec!["bat", "tab"]);
    }

    #[test]
    fn get_anagrams_includes_target() {
        let index = scenario();
        for word in index.words() {
            assert!(index.get_anagrams(word).contains(&word.as_str()));
        }
    }

    #[test]
    fn anagrams_are_symmetric() {
        let index = scenario();
        for a in index.words() {
            for b in index.words() {
                if LetterSignature::of(a) == LetterSignature::of(b) {
                    assert!(index.get_anagrams(a).contains(&b.as_str()));
                    assert!(index.get_anagrams(b).contains(&a.as_str()));
                }
            }
        }
    }

    #[test]
    fn get_anagrams_of_unknown_letters_is_empty() {
        let index = scenario();
        assert!(index.get_anagrams("xyz").is_empty());
        assert!(index.get_anagrams("").is_empty());
    }

    #[test]
    fn get_anagrams_works_for_words_outside_dictionary() {
        let index = scenario();
        // "eta" is not a word here but shares letters with three that are
        assert_eq!(index.get_anagrams("eta"), vec!["eat", "tea", "ate"]);
    }

    #[test]
    fn is_good_word_requires_membership() {
        let index = scenario();
        assert!(!index.is_good_word("zzz", "eat"));
        assert!(!index.is_good_word("eta", "bat"));
    }

    #[test]
    fn is_good_word_rejects_words_containing_base() {
        let index = scenario();
        assert!(index.is_good_word("ate", "eat"));
        assert!(!index.is_good_word("teas", "tea"));
        assert!(!index.is_good_word("eat", "eat"));
    }

    #[test]
    fn one_more_letter_uses_literal_substring_rule() {
        let index = scenario();
        // "aest" does not contain "aet", so "teas" is absent
        assert_eq!(
            index.get_anagrams_with_one_more_letter("eat"),
            vec!["eat", "tea", "ate"]
        );
        assert_eq!(
            index.get_anagrams_with_one_more_letter("tab"),
            vec!["bat", "tab"]
        );
    }

    #[test]
    fn one_more_letter_accepts_longer_buckets() {
        let index = AnagramIndex::from_words(["sea", "teas", "seats", "easts"]);
        // aes is inside aest and aesst
        assert_eq!(
            index.get_anagrams_with_one_more_letter("sea"),
            vec!["sea", "teas", "seats", "easts"]
        );
    }

    #[test]
    fn one_more_letter_is_permutation_invariant() {
        let index = AnagramIndex::from_words(["sea", "teas", "seats", "ate", "tea"]);
        let expected = index.get_anagrams_with_one_more_letter("sea");
        for permutation in ["sae", "ase", "aes", "esa", "eas"] {
            assert_eq!(index.get_anagrams_with_one_more_letter(permutation), expected);
        }
    }

    #[test]
    fn exactly_one_more_letter_uses_multiset_rule() {
        let index = scenario();
        assert_eq!(
            index.get_anagrams_with_exactly_one_more_letter("eat"),
            vec!["teas"]
        );
        assert!(
            index
                .get_anagrams_with_exactly_one_more_letter("bat")
                .is_empty()
        );
    }

    #[test]
    fn count_matches_collected_length() {
        let index = AnagramIndex::from_words(["sea", "teas", "seats", "easts", "sea"]);
        for word in ["sea", "teas", "x", ""] {
            assert_eq!(
                index.count_extensions_with(word, &SubstringRule),
                index.get_anagrams_with_one_more_letter(word).len()
            );
        }
    }

    #[test]
    fn queries_are_idempotent() {
        let index = scenario();
        assert_eq!(index.get_anagrams("tea"), index.get_anagrams("tea"));
        assert_eq!(
            index.get_anagrams_with_one_more_letter("ab"),
            index.get_anagrams_with_one_more_letter("ab")
        );
        assert_eq!(
            index.is_good_word("tab", "bat"),
            index.is_good_word("tab", "bat")
        );
    }

    #[test]
    fn duplicates_are_kept_in_sequences() {
        let index = AnagramIndex::from_words(["tea", "tea", "eat"]);
        assert_eq!(index.len(), 3);
        assert_eq!(index.get_anagrams("tea"), vec!["tea", "tea", "eat"]);
        assert_eq!(index.words_of_length(3).len(), 3);

        let stats = index.stats();
        assert_eq!(stats.total_words, 3);
        assert_eq!(stats.distinct_words, 2);
        assert_eq!(stats.signatures, 1);
    }

    #[test]
    fn empty_word_is_indexed() {
        let index = AnagramIndex::from_words(["tea", "", "at"]);
        assert!(index.contains(""));
        assert_eq!(index.words_of_length(0), ["".to_string()]);
        assert_eq!(index.get_anagrams(""), vec![""]);
        // The empty signature is a substring of every signature
        assert_eq!(index.get_anagrams_with_one_more_letter("").len(), 3);
    }

    #[test]
    fn case_is_preserved() {
        let index = AnagramIndex::from_words(["Tea", "eat"]);
        assert!(index.contains("Tea"));
        assert!(!index.contains("tea"));
        assert_eq!(index.get_anagrams("Tea"), vec!["Tea"]);
    }

    #[test]
    fn length_index_counts_chars() {
        let index = AnagramIndex::from_words(["café", "cafe", "tea"]);
        assert_eq!(index.words_of_length(4).len(), 2);
        assert_eq!(index.words_of_length(3), ["tea".to_string()]);
        assert!(index.words_of_length(9).is_empty());
    }

    #[test]
    fn every_word_is_in_its_buckets() {
        let index = scenario();
        for word in index.words() {
            let length = word.chars().count();
            assert!(index.words_of_length(length).contains(word));
            assert!(index.get_anagrams(word).contains(&word.as_str()));
        }
    }

    #[test]
    fn stats_group_by_length() {
        let stats = scenario().stats();
        assert_eq!(stats.total_words, 6);
        assert_eq!(stats.distinct_words, 6);
        assert_eq!(stats.signatures, 3);
        assert_eq!(stats.words_by_length.get(&3), Some(&5));
        assert_eq!(stats.words_by_length.get(&4), Some(&1));
    }

    #[test]
    fn qualifying_starters_filters_by_threshold() {
        let index = AnagramIndex::from_words(["sea", "teas", "seats", "eats", "bat"]);
        assert_eq!(index.qualifying_starters(3, 4), vec!["sea"]);
        assert_eq!(index.qualifying_starters(3, 1), vec!["sea", "bat"]);
        assert!(index.qualifying_starters(3, 5).is_empty());
        assert!(index.qualifying_starters(8, 0).is_empty());
    }
}
