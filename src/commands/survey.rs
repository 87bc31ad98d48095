//! Playability survey
//!
//! Counts, for every starter length, how many words clear the anagram
//! threshold. A length with no qualifying word would stall starter selection.

use crate::dictionary::{AnagramIndex, DictionaryConfig};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::{Duration, Instant};

/// Survey figures for one word length
#[derive(Debug, Clone)]
pub struct SurveyRow {
    pub length: usize,
    pub words: usize,
    pub qualifying: usize,
    /// First few qualifying words
    pub sample: Vec<String>,
}

/// Result of surveying a dictionary
#[derive(Debug)]
pub struct SurveyResult {
    pub rows: Vec<SurveyRow>,
    pub min_num_anagrams: usize,
    pub duration: Duration,
}

impl SurveyResult {
    /// Every starter length has at least one qualifying word
    #[must_use]
    pub fn is_playable(&self) -> bool {
        self.rows.iter().all(|row| row.qualifying > 0)
    }
}

/// Survey the starter lengths configured in `config`
///
/// # Panics
///
/// Panics if the progress bar template is invalid (it is a constant).
#[must_use]
pub fn run_survey(
    index: &AnagramIndex,
    config: &DictionaryConfig,
    sample_size: usize,
) -> SurveyResult {
    let lengths: Vec<usize> = (config.min_word_length..=config.max_word_length).collect();
    let start = Instant::now();

    let pb = ProgressBar::new(lengths.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} lengths | {msg}")
            .unwrap()
            .progress_chars("█▓▒░"),
    );

    let mut rows = Vec::with_capacity(lengths.len());
    for length in lengths {
        pb.set_message(format!("length {length}"));

        let qualifying = index.qualifying_starters(length, config.min_num_anagrams);
        rows.push(SurveyRow {
            length,
            words: index.words_of_length(length).len(),
            qualifying: qualifying.len(),
            sample: qualifying
                .iter()
                .take(sample_size)
                .map(|word| (*word).to_string())
                .collect(),
        });

        pb.inc(1);
    }

    pb.finish_and_clear();

    SurveyResult {
        rows,
        min_num_anagrams: config.min_num_anagrams,
        duration: start.elapsed(),
    }
}
