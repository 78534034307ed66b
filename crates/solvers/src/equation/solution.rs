use pivot_core::Snapshot;

use super::Evaluation;

/// How a root finder terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Status {
    /// Met the residual or step tolerance.
    Converged,

    /// Reached the iteration limit without converging.
    MaxIters,

    /// Reached the evaluation limit without converging.
    MaxEvals,

    /// The residual became NaN or infinite, or the step tolerance was met
    /// at a point whose residual exceeds every starting residual (a pole).
    NonFinite,

    /// The bracket endpoints have residuals of the same sign.
    NoSignChange,

    /// The iteration could not take another step: the secant denominator or
    /// the derivative vanished, or the step overflowed.
    Stalled,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a root-finding solve.
#[derive(Debug, Clone)]
pub struct Solution<I, O> {
    /// Final solver status.
    pub status: Status,

    /// Estimate of the root.
    pub x: f64,

    /// Residual at `x`.
    pub residual: f64,

    /// Snapshot at `x`.
    pub snapshot: Snapshot<I, O>,

    /// Solver iterations performed.
    pub iters: usize,

    /// Model evaluations performed, including starting points.
    pub evals: usize,
}

impl<I, O> Solution<I, O> {
    pub(super) fn from_eval(
        eval: Evaluation<I, O, 1>,
        status: Status,
        iters: usize,
        evals: usize,
    ) -> Self {
        Self {
            status,
            x: eval.x[0],
            residual: eval.residuals[0],
            snapshot: eval.snapshot,
            iters,
            evals,
        }
    }

    /// Returns true if the solve converged.
    #[must_use]
    pub fn is_converged(&self) -> bool {
        self.status == Status::Converged
    }
}
