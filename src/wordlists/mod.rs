//! Word list sources
//!
//! Loading helpers that turn files, readers or in-memory slices into an
//! [`AnagramDictionary`](crate::dictionary::AnagramDictionary).

pub mod loader;

pub use loader::{dictionary_from_slice, load_from_file, load_from_stdin};
