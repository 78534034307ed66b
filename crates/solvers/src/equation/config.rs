use thiserror::Error;

/// Stopping criteria shared by the scalar root finders.
///
/// A solve converges when `|residual| <= residual_tol`, or when the last
/// step (the bracket half-width for Brent) is no larger than
/// `x_abs_tol + x_rel_tol * |x|`. It gives up after `max_iters` iterations
/// or `max_evals` calls to the model, whichever comes first.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Config {
    pub residual_tol: f64,
    pub x_abs_tol: f64,
    pub x_rel_tol: f64,
    pub max_iters: usize,
    pub max_evals: usize,
}

/// Reasons a [`Config`] is rejected.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("residual_tol must be finite and non-negative")]
    ResidualTol,

    #[error("x_abs_tol must be finite and non-negative")]
    XAbs,

    #[error("x_rel_tol must be finite and non-negative")]
    XRel,

    #[error("max_iters must be at least 1")]
    MaxIters,

    #[error("max_evals must be at least 1")]
    MaxEvals,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            residual_tol: 1e-10,
            x_abs_tol: 1e-12,
            x_rel_tol: 1e-12,
            max_iters: 100,
            max_evals: 500,
        }
    }
}

impl Config {
    /// Checks that tolerances are finite and non-negative and caps are non-zero.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let valid_tol = |tol: f64| tol.is_finite() && tol >= 0.0;

        if !valid_tol(self.residual_tol) {
            return Err(ConfigError::ResidualTol);
        }
        if !valid_tol(self.x_abs_tol) {
            return Err(ConfigError::XAbs);
        }
        if !valid_tol(self.x_rel_tol) {
            return Err(ConfigError::XRel);
        }
        if self.max_iters == 0 {
            return Err(ConfigError::MaxIters);
        }
        if self.max_evals == 0 {
            return Err(ConfigError::MaxEvals);
        }
        Ok(())
    }

    /// Returns true if `residual` is within the residual tolerance.
    #[must_use]
    pub fn is_residual_converged(&self, residual: f64) -> bool {
        residual.abs() <= self.residual_tol
    }

    /// Returns true if a step of size `step` ending at `x` is small enough.
    #[must_use]
    pub fn is_step_converged(&self, step: f64, x: f64) -> bool {
        step.abs() <= self.x_tol(x)
    }

    /// Returns the combined step tolerance at `x`.
    #[must_use]
    pub fn x_tol(&self, x: f64) -> f64 {
        self.x_abs_tol + self.x_rel_tol * x.abs()
    }
}
