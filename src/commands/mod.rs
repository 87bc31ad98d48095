//! Command implementations

pub mod extend;
pub mod lookup;
pub mod starter;
pub mod survey;

pub use extend::{ExtendResult, MatchRule, extend_word};
pub use lookup::{LookupResult, lookup_word};
pub use starter::{StarterPick, pick_starters};
pub use survey::{SurveyResult, SurveyRow, run_survey};
