//! Word list loading utilities
//!
//! Provides functions to load a dictionary from a file, standard input or an
//! in-memory slice.

use crate::core::Result;
use crate::dictionary::{AnagramDictionary, DictionaryConfig, trim_word};
use std::fs::File;
use std::io::{self, BufReader};
use std::path::Path;

/// Load a dictionary from a file with one word per line
///
/// # Errors
///
/// Returns an I/O error if the file cannot be opened or read.
///
/// # Examples
/// ```no_run
/// use anagrams::dictionary::DictionaryConfig;
/// use anagrams::wordlists::loader::load_from_file;
///
/// let dictionary = load_from_file("words.txt", DictionaryConfig::default()).unwrap();
/// println!("Loaded {} words", dictionary.index().len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(
    path: P,
    config: DictionaryConfig,
) -> Result<AnagramDictionary> {
    let file = File::open(path)?;
    AnagramDictionary::from_reader(BufReader::new(file), config)
}

/// Load a dictionary from standard input
///
/// # Errors
///
/// Returns an I/O error if reading standard input fails.
pub fn load_from_stdin(config: DictionaryConfig) -> Result<AnagramDictionary> {
    AnagramDictionary::from_reader(io::stdin().lock(), config)
}

/// Build a dictionary from a string slice, trimming each entry like a file line
///
/// # Examples
/// ```
/// use anagrams::dictionary::DictionaryConfig;
/// use anagrams::wordlists::loader::dictionary_from_slice;
///
/// let dictionary = dictionary_from_slice(&["stop", " pots", "tops"], DictionaryConfig::default());
/// assert_eq!(dictionary.get_anagrams("spot"), vec!["stop", "pots", "tops"]);
/// ```
#[must_use]
pub fn dictionary_from_slice(slice: &[&str], config: DictionaryConfig) -> AnagramDictionary {
    AnagramDictionary::from_words(slice.iter().map(|word| trim_word(word)), config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::AnagramError;
    use std::io::Write;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("anagrams-{}-{name}", std::process::id()))
    }

    #[test]
    fn dictionary_from_slice_trims_words() {
        let dictionary =
            dictionary_from_slice(&["post ", "\tspot", "stop\u{0}"], DictionaryConfig::default());

        assert_eq!(dictionary.index().words(), ["post", "spot", "stop"]);
    }

    #[test]
    fn dictionary_from_slice_empty() {
        let dictionary = dictionary_from_slice(&[], DictionaryConfig::default());
        assert!(dictionary.index().is_empty());
    }

    #[test]
    fn load_from_file_reads_every_line() {
        let path = temp_path("words.txt");
        {
            let mut file = File::create(&path).unwrap();
            writeln!(file, "listen").unwrap();
            writeln!(file, "silent").unwrap();
            writeln!(file, "enlist  ").unwrap();
        }

        let dictionary = load_from_file(&path, DictionaryConfig::default()).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(
            dictionary.get_anagrams("tinsel"),
            vec!["listen", "silent", "enlist"]
        );
    }

    #[test]
    fn load_from_missing_file_fails() {
        let result = load_from_file(temp_path("missing.txt"), DictionaryConfig::default());
        assert!(matches!(result, Err(AnagramError::Io(_))));
    }
}
