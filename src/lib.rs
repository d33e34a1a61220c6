//! Average and diff Lighthouse score strings.
//!
//! A score string packs the five Lighthouse categories into one line:
//! `"perf / a11y / bp / seo / (fnr, ins, po)"`. The PWA group is either
//! shorthand pass counts out of 3, 3 and 7 checks, or explicit fractions.
//!
//! ```
//! let reports = lh_avg::average(&["14 / 100 / 98 / 100 / (1, 0, 6)"], true, false).unwrap();
//! assert_eq!(reports[0].column_strings()[7], "61.58%");
//! ```

pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod scoring;

pub use error::{ScoreError, ScoreResult};
pub use scoring::{average, compute_one, split_score, ScoreReport};
