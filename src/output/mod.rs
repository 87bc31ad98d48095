//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_extend_result, print_lookup_result, print_starter_picks, print_stats,
    print_survey_result,
};
