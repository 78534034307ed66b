//! Newton's method for problems that supply the residual derivative.

use pivot_core::{EquationDerivative, Model, Observer};

use super::{
    Action, Config, Error, Event, Solution, Status, Step,
    context::{EvalContext, Flow},
};

/// Finds a root of the equation with Newton's method, starting at `x0`.
///
/// Each step divides the residual by [`EquationDerivative::derivative`]
/// at the current point. A zero or non-finite slope ends the solve with
/// [`Status::Stalled`].
///
/// # Errors
///
/// Returns an error if the config is invalid, `x0` is not finite, or the
/// model or problem (including its derivative) fails.
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
    P: EquationDerivative<Input = M::Input, Output = M::Output>,
    Obs: for<'a> Observer<Event<'a, M, P>, Action>,
{
    config.validate()?;
    let mut ctx = EvalContext::new(model, problem, config, observer);

    let mut curr = match ctx.guess(x0)? {
        Flow::Continue(eval) => eval,
        Flow::Done(solution) => return Ok(solution),
    };

    let reference = curr.residual().abs();

    for iter in 1..=config.max_iters {
        let slope = ctx
            .problem()
            .derivative(&curr.snapshot.input, &curr.snapshot.output)
            .map_err(Error::problem)?;

        #[allow(clippy::float_cmp)]
        if slope == 0.0 || !slope.is_finite() {
            return ctx.finish_best(Status::Stalled, iter - 1);
        }

        let x = curr.point() - curr.residual() / slope;
        if !x.is_finite() {
            return ctx.finish_best(Status::Stalled, iter - 1);
        }

        let next = match ctx.step(x, iter, Step::Newton, None)? {
            Flow::Continue(eval) => eval,
            Flow::Done(solution) => return Ok(solution),
        };

        if config.is_residual_converged(next.residual()) {
            return Ok(ctx.finish_with(next, Status::Converged, iter));
        }
        if config.is_step_converged(next.point() - curr.point(), next.point()) {
            return Ok(ctx.finish_settled(next, reference, iter));
        }

        curr = next;
    }

    ctx.finish_best(Status::MaxIters, config.max_iters)
}

/// Runs Newton's method without observation.
///
/// # Errors
///
/// Returns an error if the config is invalid, `x0` is not finite, or the
/// model or problem (including its derivative) fails.
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
    P: EquationDerivative<Input = M::Input, Output = M::Output>,
{
    solve(model, problem, x0, config, ())
}
