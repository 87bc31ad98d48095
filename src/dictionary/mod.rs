//! Anagram dictionary
//!
//! [`AnagramIndex`] holds the read-only structures built from a word list.
//! [`AnagramDictionary`] pairs an index with the starter word selector, the
//! only state that changes after loading.

mod config;
mod index;
mod selector;

pub use config::{
    DEFAULT_MAX_ATTEMPTS, DEFAULT_WORD_LENGTH, DictionaryConfig, MAX_WORD_LENGTH,
    MIN_NUM_ANAGRAMS,
};
pub use index::{AnagramIndex, DictionaryStats};
pub use selector::StarterSelector;

use crate::core::Result;
use log::{Level, debug, log_enabled};
use std::io::{self, BufRead};

/// Trim the way word lists expect: every char up to and including space
pub(crate) fn trim_word(line: &str) -> &str {
    line.trim_matches(|c: char| c <= ' ')
}

/// Split one `\n`-terminated chunk into lines, ending lines at `\r\n` or a lone `\r`
fn chunk_lines(mut chunk: Vec<u8>) -> io::Result<Vec<String>> {
    if chunk.last() == Some(&b'\r') {
        chunk.pop();
    }

    let text =
        String::from_utf8(chunk).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    Ok(text.split('\r').map(str::to_string).collect())
}

/// Word list index plus starter word selection
#[derive(Debug, Clone)]
pub struct AnagramDictionary {
    index: AnagramIndex,
    selector: StarterSelector,
}

impl AnagramDictionary {
    /// Build a dictionary from a line source, one word per line
    ///
    /// Lines end at `\n`, `\r\n` or a lone `\r`. Each line is trimmed of
    /// every character up to and including space, control characters
    /// included. Blank lines become the empty word. The reader is consumed to
    /// the end.
    ///
    /// # Errors
    ///
    /// Returns `AnagramError::Io` if reading a line fails; no partial
    /// dictionary is returned.
    ///
    /// # Examples
    /// ```
    /// use anagrams::dictionary::{AnagramDictionary, DictionaryConfig};
    /// use std::io::Cursor;
    ///
    /// let source = Cursor::new("eat\ntea\n  ate \nbat\n");
    /// let dictionary =
    ///     AnagramDictionary::from_reader(source, DictionaryConfig::default()).unwrap();
    /// assert_eq!(dictionary.get_anagrams("eat"), vec!["eat", "tea", "ate"]);
    /// ```
    pub fn from_reader<R: BufRead>(reader: R, config: DictionaryConfig) -> Result<Self> {
        let mut index = AnagramIndex::default();
        for chunk in reader.split(b'\n') {
            for line in chunk_lines(chunk?)? {
                index.insert(trim_word(&line).to_string());
            }
        }
        Ok(Self::from_index(index, config))
    }

    /// Build a dictionary from words already in memory
    #[must_use]
    pub fn from_words<I, S>(words: I, config: DictionaryConfig) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::from_index(AnagramIndex::from_words(words), config)
    }

    /// Wrap a built index with a fresh starter selector
    #[must_use]
    pub fn from_index(index: AnagramIndex, config: DictionaryConfig) -> Self {
        if log_enabled!(Level::Debug) {
            let stats = index.stats();
            debug!(
                "Loaded {} words ({} distinct, {} signatures)",
                stats.total_words, stats.distinct_words, stats.signatures
            );
        }

        Self {
            index,
            selector: StarterSelector::new(&config),
        }
    }

    /// Read-only view of the index, shareable across threads
    #[inline]
    #[must_use]
    pub const fn index(&self) -> &AnagramIndex {
        &self.index
    }

    /// See [`AnagramIndex::is_good_word`]
    #[must_use]
    pub fn is_good_word(&self, word: &str, base: &str) -> bool {
        self.index.is_good_word(word, base)
    }

    /// See [`AnagramIndex::get_anagrams`]
    #[must_use]
    pub fn get_anagrams(&self, target: &str) -> Vec<&str> {
        self.index.get_anagrams(target)
    }

    /// See [`AnagramIndex::get_anagrams_with_one_more_letter`]
    #[must_use]
    pub fn get_anagrams_with_one_more_letter(&self, word: &str) -> Vec<&str> {
        self.index.get_anagrams_with_one_more_letter(word)
    }

    /// See [`AnagramIndex::get_anagrams_with_exactly_one_more_letter`]
    #[must_use]
    pub fn get_anagrams_with_exactly_one_more_letter(&self, word: &str) -> Vec<&str> {
        self.index.get_anagrams_with_exactly_one_more_letter(word)
    }

    /// Pick a starter word and advance the target length
    ///
    /// # Errors
    ///
    /// See [`StarterSelector::pick`].
    pub fn pick_good_starter_word(&mut self) -> Result<String> {
        self.selector.pick(&self.index)
    }

    /// Length the next starter word will have
    #[inline]
    #[must_use]
    pub const fn current_word_length(&self) -> usize {
        self.selector.word_length()
    }
}
