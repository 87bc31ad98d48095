//! Anagrams
//!
//! A word-anagram index for word games: exact anagram lookup, one-more-letter
//! anagram lookup, and selection of starter words with enough extensions to
//! make a round playable.
//!
//! # Quick Start
//!
//! ```rust
//! use anagrams::dictionary::{AnagramDictionary, DictionaryConfig};
//!
//! let words = ["eat", "tea", "ate", "bat", "tab", "teas"];
//! let dictionary = AnagramDictionary::from_words(words, DictionaryConfig::default());
//!
//! assert_eq!(dictionary.get_anagrams("eat"), vec!["eat", "tea", "ate"]);
//! assert!(dictionary.is_good_word("ate", "eat"));
//! assert!(!dictionary.is_good_word("teas", "tea"));
//! ```

// Core domain types
pub mod core;

// Anagram index and starter selection
pub mod dictionary;

// Word list loading
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
