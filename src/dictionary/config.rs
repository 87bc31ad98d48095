//! Dictionary configuration

/// Shortest starter word length, and the length the selector wraps back to
pub const DEFAULT_WORD_LENGTH: usize = 3;

/// Longest starter word length
pub const MAX_WORD_LENGTH: usize = 7;

/// Minimum number of one-more-letter anagrams a starter word needs
pub const MIN_NUM_ANAGRAMS: usize = 5;

/// Default sampling budget for a single starter pick
pub const DEFAULT_MAX_ATTEMPTS: usize = 10_000;

/// Configuration for starter word selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictionaryConfig {
    pub min_word_length: usize,
    pub max_word_length: usize,
    pub min_num_anagrams: usize,
    /// Sampling budget per pick; `None` retries until a word qualifies
    pub max_attempts: Option<usize>,
    /// RNG seed; `None` seeds from the operating system
    pub seed: Option<u64>,
}

impl DictionaryConfig {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            min_word_length: DEFAULT_WORD_LENGTH,
            max_word_length: MAX_WORD_LENGTH,
            min_num_anagrams: MIN_NUM_ANAGRAMS,
            max_attempts: Some(DEFAULT_MAX_ATTEMPTS),
            seed: None,
        }
    }

    /// Set the starter length range (inclusive)
    #[must_use]
    pub const fn with_word_lengths(mut self, min: usize, max: usize) -> Self {
        self.min_word_length = min;
        self.max_word_length = max;
        self
    }

    #[must_use]
    pub const fn with_min_num_anagrams(mut self, min_num_anagrams: usize) -> Self {
        self.min_num_anagrams = min_num_anagrams;
        self
    }

    #[must_use]
    pub const fn with_max_attempts(mut self, max_attempts: Option<usize>) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self::new()
    }
}
