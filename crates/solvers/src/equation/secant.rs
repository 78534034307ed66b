//! The secant method from a single starting guess.
//!
//! Needs no bracket and no derivative, but gives no guarantee of
//! convergence: the iterate can wander to a distant root or stall when two
//! consecutive residuals coincide.

use std::mem;

use pivot_core::{EquationProblem, Model, Observer};

use super::{
    Action, Config, Error, Evaluation, Event, Solution, Status, Step,
    context::{EvalContext, Flow},
};

/// Relative offset of the second starting point from the guess.
const PERTURBATION: f64 = 1e-4;

/// Finds a root of the equation with the secant method, starting at `x0`.
///
/// The second starting point is `x0 + 1e-4 * max(1, |x0|)`.
///
/// # Errors
///
/// Returns an error if the config is invalid, `x0` is not finite, or the
/// model or problem fails during evaluation.
pub fn solve<M, P, Obs>(
    model: &M,
    problem: &P,
    x0: f64,
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
    config.validate()?;
    let mut ctx = EvalContext::new(model, problem, config, observer);

    match ctx.guess(x0)? {
        Flow::Continue(first) => iterate(&mut ctx, first),
        Flow::Done(solution) => Ok(solution),
    }
}

/// Runs the secant method without observation.
///
/// # Errors
///
/// Returns an error if the config is invalid, `x0` is not finite, or the
/// model or problem fails during evaluation.
pub fn solve_unobserved<M, P>(
    model: &M,
    problem: &P,
    x0: f64,
    config: &Config,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    M::Input: Clone,
    M::Output: Clone,
    P: EquationProblem<1, Input = M::Input, Output = M::Output>,
{
    solve(model, problem, x0, config, ())
}

/// Iterates from an already evaluated, unconverged starting point.
pub(super) fn iterate<M, P, Obs>(
    ctx: &mut EvalContext<'_, M, P, Obs>,
    first: Evaluation<M::Input, M::Output, 1>,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    M::Input: Clone,
    M::Output: Clone,
    P: EquationProblem<1, Input = M::Input, Output = M::Output>,
    Obs: for<'a> Observer<Event<'a, M, P>, Action>,
{
    let config = ctx.config();

    let x1 = first.point() + PERTURBATION * first.point().abs().max(1.0);
    let mut prev = first;
    let mut curr = match ctx.step(x1, 0, Step::Initial, None)? {
        Flow::Continue(eval) => eval,
        Flow::Done(solution) => return Ok(solution),
    };
    if config.is_residual_converged(curr.residual()) {
        return Ok(ctx.finish_with(curr, Status::Converged, 0));
    }
    let reference = prev.residual().abs().max(curr.residual().abs());

    for iter in 1..=config.max_iters {
        let denom = curr.residual() - prev.residual();
        let x = curr.point() - curr.residual() * (curr.point() - prev.point()) / denom;

        #[allow(clippy::float_cmp)]
        if denom == 0.0 || !x.is_finite() {
            return ctx.finish_best(Status::Stalled, iter - 1);
        }

        let next = match ctx.step(x, iter, Step::Secant, None)? {
            Flow::Continue(eval) => eval,
            Flow::Done(solution) => return Ok(solution),
        };

        if config.is_residual_converged(next.residual()) {
            return Ok(ctx.finish_with(next, Status::Converged, iter));
        }
        if config.is_step_converged(next.point() - curr.point(), next.point()) {
            return Ok(ctx.finish_settled(next, reference, iter));
        }

        prev = mem::replace(&mut curr, next);
    }

    ctx.finish_best(Status::MaxIters, config.max_iters)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::equation::FnEquation;

    type Fx = FnEquation<fn(f64) -> f64>;

    fn solve_fn(f: fn(f64) -> f64, x0: f64, config: &Config) -> Solution<f64, f64> {
        let eq = FnEquation(f);
        solve_unobserved(&eq, &eq, x0, config).expect("valid inputs")
    }

    #[test]
    fn linear_function_takes_one_step() {
        let solution = solve_fn(|x| x, 5.0, &Config::default());

        assert_eq!(solution.status, Status::Converged);
        assert!(solution.x.abs() <= 1e-10);
        assert_eq!(solution.iters, 1);
        assert_eq!(solution.evals, 3);
    }

    #[test]
    fn finds_fixed_point_of_cosine() {
        let solution = solve_fn(|x| x.cos() - x, 1.0, &Config::default());

        assert_eq!(solution.status, Status::Converged);
        assert_relative_eq!(solution.x, 0.739_085_133_215_160_6, epsilon = 1e-10);
        assert!(solution.iters <= 8);
    }

    #[test]
    fn converged_guess_needs_one_evaluation() {
        let solution = solve_fn(|x| x * x - 4.0, 2.0, &Config::default());

        assert_eq!(solution.status, Status::Converged);
        assert_eq!(solution.iters, 0);
        assert_eq!(solution.evals, 1);
    }

    #[test]
    fn flat_residual_stalls() {
        let solution = solve_fn(|_| 1.0, 0.0, &Config::default());

        assert_eq!(solution.status, Status::Stalled);
        assert_eq!(solution.iters, 0);
        assert_eq!(solution.evals, 2);
    }

    #[test]
    fn pole_at_guess_is_non_finite() {
        let solution = solve_fn(|x| 1.0 / x, 0.0, &Config::default());

        assert_eq!(solution.status, Status::NonFinite);
        assert_eq!(solution.evals, 1);
    }

    #[test]
    fn iteration_cap_reports_best_point() {
        let config = Config {
            max_iters: 2,
            ..Config::default()
        };
        let solution = solve_fn(|x| x.cos() - x, 1.0, &config);

        assert_eq!(solution.status, Status::MaxIters);
        assert_eq!(solution.iters, 2);
        assert_eq!(solution.evals, 4);
        assert!(solution.residual.abs() < (1f64.cos() - 1.0).abs());
    }

    #[test]
    fn observer_sees_secant_steps() {
        let eq: Fx = FnEquation(|x| x * x - 2.0);
        let mut steps = Vec::new();
        let observer = |event: &Event<'_, Fx, Fx>| {
            steps.push(event.step);
            None
        };

        let solution = solve(&eq, &eq, 1.0, &Config::default(), observer).expect("valid inputs");

        assert_eq!(solution.status, Status::Converged);
        assert_eq!(steps.len(), solution.evals);
        assert_eq!(&steps[..2], &[Step::Initial, Step::Initial]);
        assert!(steps[2..].iter().all(|step| *step == Step::Secant));
    }

    #[test]
    fn rejects_non_finite_guess() {
        let eq = FnEquation(|x: f64| x);
        assert!(matches!(
            solve_unobserved(&eq, &eq, f64::INFINITY, &Config::default()),
            Err(Error::NonFiniteGuess { .. })
        ));
    }
}
