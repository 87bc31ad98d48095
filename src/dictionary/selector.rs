//! Starter word selection
//!
//! Picks a random word of the current target length that has enough
//! one-more-letter anagrams, then moves the target length on by one, wrapping
//! from the maximum back to the minimum.

use super::config::DictionaryConfig;
use super::index::AnagramIndex;
use crate::core::{AnagramError, Result, SubstringRule};
use log::{debug, trace, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Selector state: the current target length plus an owned RNG
#[derive(Debug, Clone)]
pub struct StarterSelector {
    word_length: usize,
    min_word_length: usize,
    max_word_length: usize,
    min_num_anagrams: usize,
    max_attempts: Option<usize>,
    rng: StdRng,
}

impl StarterSelector {
    #[must_use]
    pub fn new(config: &DictionaryConfig) -> Self {
        let rng = config
            .seed
            .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);

        Self {
            word_length: config.min_word_length,
            min_word_length: config.min_word_length,
            max_word_length: config.max_word_length,
            min_num_anagrams: config.min_num_anagrams,
            max_attempts: config.max_attempts,
            rng,
        }
    }

    /// Length the next pick will draw from
    #[inline]
    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_length
    }

    /// Pick a starter word from `index` and advance the target length
    ///
    /// Candidates are drawn uniformly (with replacement) from the length
    /// bucket until one has at least `min_num_anagrams` one-more-letter
    /// anagrams. The target length only advances on success.
    ///
    /// # Errors
    ///
    /// Returns `EmptyLengthBucket` if the index has no words of the current
    /// length, or `NoQualifyingWord` if the attempt budget runs out.
    pub fn pick(&mut self, index: &AnagramIndex) -> Result<String> {
        let length = self.word_length;
        let bucket = index.words_of_length(length);

        if bucket.is_empty() {
            return Err(AnagramError::EmptyLengthBucket { length });
        }

        let mut attempts = 0;
        loop {
            if let Some(max) = self.max_attempts
                && attempts >= max
            {
                warn!("No starter word of length {length} after {attempts} attempts");
                return Err(AnagramError::NoQualifyingWord { length, attempts });
            }
            attempts += 1;

            let candidate = &bucket[self.rng.random_range(0..bucket.len())];
            let count = index.count_extensions_with(candidate, &SubstringRule);

            if count >= self.min_num_anagrams {
                debug!("Picked starter '{candidate}' ({count} anagrams, {attempts} attempts)");
                self.advance();
                return Ok(candidate.clone());
            }

            trace!("Rejected '{candidate}': {count} < {}", self.min_num_anagrams);
        }
    }

    fn advance(&mut self) {
        if self.word_length < self.max_word_length {
            self.word_length += 1;
        } else {
            self.word_length = self.min_word_length;
        }
    }
}
