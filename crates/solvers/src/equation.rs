//! Scalar root finding for equation problems.
//!
//! An [`EquationProblem<1>`] maps the solver variable `x` to a model input,
//! calls the model, and computes a residual. Solvers in this module drive
//! that residual toward zero.
//!
//! # Solvers
//!
//! - [`find_root`]: picks a method from a [`Start`]. A bracket goes to
//!   Brent's method; a guess is first bracketed by an outward search.
//! - [`brent`]: guaranteed convergence on a bracket with a sign change.
//! - [`secant`]: derivative-free iteration from a single guess.
//! - [`newton`]: uses the derivative from [`EquationDerivative`].
//!
//! Every solver shares [`Config`], reports a [`Solution`] with a [`Status`],
//! and emits an [`Event`] per evaluation to its observer.
//!
//! [`EquationProblem<1>`]: pivot_core::EquationProblem
//! [`EquationDerivative`]: pivot_core::EquationDerivative

mod action;
mod bracket;
mod config;
mod context;
mod error;
mod evaluate;
mod event;
mod function;
mod search;
mod solution;

pub mod brent;
pub mod newton;
pub mod secant;


pub use action::Action;
pub use bracket::{BracketError, Sign};
pub use config::{Config, ConfigError};
pub use error::Error;
pub use evaluate::{EvalError, EvaluateResult, Evaluation, evaluate};
pub use event::{Event, Step};
pub use function::FnEquation;
pub use solution::{Solution, Status};

use pivot_core::{EquationProblem, Model, Observer};

/// Where a root finder begins.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Start {
    /// A single starting estimate.
    Guess(f64),
    /// Two points expected to have residuals of opposite sign, in any order.
    Bracket([f64; 2]),
}

/// Finds a root of the equation from `start`.
///
/// A [`Start::Bracket`] is solved with [`brent::solve`]. A [`Start::Guess`]
/// is evaluated first; if it is not already a root, points around it are
/// tried at growing distances until one changes sign, and Brent's method
/// refines the bracket formed by the guess and that point. When no sign
/// change is found the solve continues with the secant method from the
/// guess.
///
/// # Errors
///
/// Returns an error if the config or bracket is invalid, the guess is not
/// finite, or the model or problem fails during evaluation.
pub fn find_root<M, P, Obs>(
    model: &M,
    problem: &P,
    start: Start,
    config: &Config,
    observer: Obs,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    M::Input: Clone,
    M::Output: Clone,
    P: EquationProblem<1, Input = M::Input, Output = M::Output>,
    Obs: for<'a> Observer<Event<'a, M, P>, Action>,
{
    match start {
        Start::Guess(x0) => search::solve(model, problem, x0, config, observer),
        Start::Bracket(bracket) => brent::solve(model, problem, bracket, config, observer),
    }
}

/// Finds a root without observation.
///
/// # Errors
///
/// Returns an error if the config or bracket is invalid, the guess is not
/// finite, or the model or problem fails during evaluation.
pub fn find_root_unobserved<M, P>(
    model: &M,
    problem: &P,
    start: Start,
    config: &Config,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    M::Input: Clone,
    M::Output: Clone,
    P: EquationProblem<1, Input = M::Input, Output = M::Output>,
{
    find_root(model, problem, start, config, ())
}

/// Finds a root of a plain function.
///
/// The solution's snapshot holds `x` as input and `f(x)` as output.
///
/// # Errors
///
/// Returns an error if the config or bracket is invalid or the guess is not
/// finite.
pub fn find_root_fn<F>(f: F, start: Start, config: &Config) -> Result<Solution<f64, f64>, Error>
where
    F: Fn(f64) -> f64,
{
    let equation = FnEquation(f);
    find_root_unobserved(&equation, &equation, start, config)
}
