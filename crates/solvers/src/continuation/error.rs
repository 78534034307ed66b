use thiserror::Error;

use crate::equation;

/// Errors that abort a continuation sweep.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid solver config: {0}")]
    InvalidConfig(#[from] equation::ConfigError),

    #[error("max_jump must be positive, got {value}")]
    InvalidMaxJump { value: f64 },

    #[error("solve {index} at parameter {param} failed")]
    Solve {
        index: usize,
        param: f64,
        #[source]
        source: equation::Error,
    },
}
