//! Core domain types for anagram lookup
//!
//! Letter signatures, extension rules and the crate error type. Everything here
//! is pure and free of I/O.

mod error;
mod rule;
mod signature;

pub use error::{AnagramError, Result};
pub use rule::{ExtensionRule, OneLetterRule, SubstringRule};
pub use signature::LetterSignature;
