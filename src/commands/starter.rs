//! Starter word command
//!
//! Draws a run of starter words, recording the length cycle as it goes.

use crate::core::Result;
use crate::dictionary::AnagramDictionary;

/// One starter word drawn by the selector
pub struct StarterPick {
    pub length: usize,
    pub word: String,
    pub anagram_count: usize,
}

/// Pick `count` starter words in a row
///
/// # Errors
///
/// Returns the selector error of the first pick that fails.
pub fn pick_starters(
    dictionary: &mut AnagramDictionary,
    count: usize,
) -> Result<Vec<StarterPick>> {
    let mut picks = Vec::with_capacity(count);

    for _ in 0..count {
        let length = dictionary.current_word_length();
        let word = dictionary.pick_good_starter_word()?;
        let anagram_count = dictionary.get_anagrams_with_one_more_letter(&word).len();

        picks.push(StarterPick {
            length,
            word,
            anagram_count,
        });
    }

    Ok(picks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::AnagramError;
    use crate::dictionary::DictionaryConfig;

    fn dictionary(words: &[&str]) -> AnagramDictionary {
        let config = DictionaryConfig::new()
            .with_word_lengths(3, 4)
            .with_min_num_anagrams(2)
            .with_max_attempts(Some(100))
            .with_seed(99);
        AnagramDictionary::from_words(words.iter().copied(), config)
    }

    #[test]
    fn picks_follow_length_cycle() {
        let mut dictionary = dictionary(&["eat", "tea", "teas", "seat"]);
        let picks = pick_starters(&mut dictionary, 4).unwrap();

        let lengths: Vec<usize> = picks.iter().map(|p| p.length).collect();
        assert_eq!(lengths, vec![3, 4, 3, 4]);

        for pick in &picks {
            assert_eq!(pick.word.chars().count(), pick.length);
            assert!(pick.anagram_count >= 2);
        }
    }

    #[test]
    fn zero_picks() {
        let mut dictionary = dictionary(&["eat"]);
        assert!(pick_starters(&mut dictionary, 0).unwrap().is_empty());
    }

    #[test]
    fn failure_stops_the_run() {
        let mut dictionary = dictionary(&["eat", "tea", "dogs"]);
        let result = pick_starters(&mut dictionary, 2);

        assert!(matches!(
            result,
            Err(AnagramError::NoQualifyingWord { length: 4, .. })
        ));
    }
}
