//! Command implementations

pub mod check;
pub mod play;
pub mod solutions;
pub mod survey;

pub use check::{CheckResult, check_word};
pub use play::{play, run_play};
pub use solutions::{SolutionList, find_solutions, list_solutions};
pub use survey::{RootSummary, SurveyResult, run_survey};
