use pivot_core::{EquationProblem, Model};

use super::EvaluateResult;

/// How a root finder chose the point it just evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// A starting point: the initial guess, its perturbed partner, or a
    /// bracket endpoint.
    Initial,
    /// A trial point of the outward search for a sign change.
    Search,
    /// Midpoint of the current bracket.
    Bisection,
    /// Secant (linear interpolation) through the two latest points.
    Secant,
    /// Inverse quadratic interpolation through three points.
    InverseQuadratic,
    /// Newton step using the residual derivative.
    Newton,
}

/// Event emitted by a root finder after every evaluation.
///
/// `iter` is zero while starting points and search trials are evaluated and
/// counts solver iterations from one afterwards.
pub struct Event<'a, M, P>
where
    M: Model,
    P: EquationProblem<1, Input = M::Input, Output = M::Output>,
{
    /// Iteration counter.
    pub iter: usize,
    /// The evaluated point.
    pub x: f64,
    /// How `x` was chosen.
    pub step: Step,
    /// The bracket the step was taken in, for bracketing methods.
    pub bracket: Option<[f64; 2]>,
    /// The evaluation result.
    pub result: &'a EvaluateResult<M, P, 1>,
}

impl<M, P> Event<'_, M, P>
where
    M: Model,
    P: EquationProblem<1, Input = M::Input, Output = M::Output>,
{
    /// Returns the residual at `x`, or `NaN` if the evaluation failed.
    #[must_use]
    pub fn residual(&self) -> f64 {
        match self.result {
            Ok(eval) => eval.residual(),
            Err(_) => f64::NAN,
        }
    }

    /// Returns true if the evaluation succeeded with a finite residual.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.residual().is_finite()
    }
}
