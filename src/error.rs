use thiserror::Error;

/// Errors raised while turning a score string into metrics.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScoreError {
    /// The input does not match the score grammar.
    #[error("Invalid score string '{input}': {reason}")]
    Parse { input: String, reason: String },

    /// A fraction token cannot be evaluated to a finite value.
    #[error("Cannot evaluate '{token}': {reason}")]
    Arithmetic { token: String, reason: String },
}

impl ScoreError {
    pub(crate) fn parse(input: &str, reason: impl Into<String>) -> Self {
        ScoreError::Parse {
            input: input.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn arithmetic(token: &str, reason: impl Into<String>) -> Self {
        ScoreError::Arithmetic {
            token: token.to_string(),
            reason: reason.into(),
        }
    }
}

pub type ScoreResult<T> = Result<T, ScoreError>;
