//! Error types for the anagram dictionary

use std::io;
use thiserror::Error;

/// Errors raised while building the dictionary or picking starter words
///
/// Lookup queries never fail; only loading and starter selection do.
#[derive(Debug, Error)]
pub enum AnagramError {
    /// Reading the word list failed.
    #[error("failed to read word list: {0}")]
    Io(#[from] io::Error),

    /// The dictionary holds no words of the requested length.
    #[error("no words of length {length} in the dictionary")]
    EmptyLengthBucket { length: usize },

    /// Every sampled candidate fell below the anagram threshold.
    #[error("no starter word of length {length} found after {attempts} attempts")]
    NoQualifyingWord { length: usize, attempts: usize },
}

/// Result alias for dictionary operations
pub type Result<T> = std::result::Result<T, AnagramError>;
