use std::error::Error as StdError;

use thiserror::Error;

use super::{BracketError, ConfigError, EvalError};

/// Errors that stop a root finder before it can report a [`Status`].
///
/// Numerical outcomes such as non-convergence, non-finite residuals, or a
/// bracket without a sign change are not errors; they are reported through
/// [`Solution::status`].
///
/// [`Status`]: super::Status
/// [`Solution::status`]: super::Solution::status
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid config: {0}")]
    InvalidConfig(#[from] ConfigError),

    #[error("invalid bracket: {0}")]
    InvalidBracket(#[from] BracketError),

    #[error("initial guess must be finite, got {value}")]
    NonFiniteGuess { value: f64 },

    #[error("no successful evaluations")]
    NoSuccessfulEvaluation,

    #[error("model call failed")]
    Model(#[source] Box<dyn StdError + Send + Sync>),

    #[error("problem error")]
    Problem(#[source] Box<dyn StdError + Send + Sync>),
}

impl Error {
    pub(crate) fn problem<E: StdError + Send + Sync + 'static>(err: E) -> Self {
        Self::Problem(Box::new(err))
    }
}

impl<ME, PE> From<EvalError<ME, PE>> for Error
where
    ME: StdError + Send + Sync + 'static,
    PE: StdError + Send + Sync + 'static,
{
    fn from(err: EvalError<ME, PE>) -> Self {
        match err {
            EvalError::Model(e) => Self::Model(Box::new(e)),
            EvalError::Problem(e) => Self::Problem(Box::new(e)),
        }
    }
}
