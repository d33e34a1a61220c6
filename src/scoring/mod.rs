pub mod engine;
pub mod split;
pub mod types;
pub mod validation;

pub use engine::{average, compute_metrics, compute_one, diff_against_first, eval_fraction, parse_metrics};
pub use split::{split_score, ScoreForm, SplitScore};
pub use types::{format_percentage, Metrics, Percent, PwaScores, ScoreReport, ScoreValue, Scores};
pub use validation::validate_scores;
