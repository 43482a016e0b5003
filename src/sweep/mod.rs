//! Seeded random sweep measuring how far rounded menus drift from their
//! calorie targets.

pub mod evaluation;
pub mod output;
pub mod runner;
pub mod sampling;

pub use evaluation::{DriftRecord, SweepSummary, evaluate_profile, summarize};
pub use output::{print_summary, print_worst, write_csv, write_summary_json};
pub use runner::{SweepConfig, SweepResults, run_sweep};
pub use sampling::{ProfileRanges, random_profile};
