//! Brent's method for a bracketed scalar root.
//!
//! Combines bisection with secant and inverse quadratic interpolation. The
//! interpolated step is taken only while it stays inside the bracket and
//! shrinks fast enough; otherwise the method bisects, so convergence is
//! never slower than bisection.

use std::mem;

use pivot_core::{EquationProblem, Model, Observer};

use super::{
    Action, Config, Error, Evaluation, Event, Sign, Solution, Status, Step,
    bracket::{Bounds, ordered},
    context::{EvalContext, Flow},
};

/// Finds a root of the equation inside `bracket`.
///
/// The endpoints may be given in either order. Observers see every
/// evaluation, including the two endpoints.
///
/// # Errors
///
/// Returns an error if the config or bracket is invalid, or if the model or
/// problem fails during evaluation.
pub fn solve<M, P, Obs>(
    model: &M,
    problem: &P,
    bracket: [f64; 2],
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
    let bounds = Bounds::new(bracket)?;
    let span = Some([bounds.left(), bounds.right()]);

    let mut ctx = EvalContext::new(model, problem, config, observer);

    let left = match ctx.step(bounds.left(), 0, Step::Initial, span)? {
        Flow::Continue(eval) => eval,
        Flow::Done(solution) => return Ok(solution),
    };
    if config.is_residual_converged(left.residual()) {
        return Ok(ctx.finish_with(left, Status::Converged, 0));
    }

    let right = match ctx.step(bounds.right(), 0, Step::Initial, span)? {
        Flow::Continue(eval) => eval,
        Flow::Done(solution) => return Ok(solution),
    };
    if config.is_residual_converged(right.residual()) {
        return Ok(ctx.finish_with(right, Status::Converged, 0));
    }

    if Sign::of(left.residual()) == Sign::of(right.residual()) {
        return ctx.finish_best(Status::NoSignChange, 0);
    }

    refine(&mut ctx, left, right)
}

/// Runs Brent's method without observation.
///
/// # Errors
///
/// Returns an error if the config or bracket is invalid, or if the model or
/// problem fails during evaluation.
pub fn solve_unobserved<M, P>(
    model: &M,
    problem: &P,
    bracket: [f64; 2],
    config: &Config,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    M::Input: Clone,
    M::Output: Clone,
    P: EquationProblem<1, Input = M::Input, Output = M::Output>,
{
    solve(model, problem, bracket, config, ())
}

/// Iterates from two evaluations whose residuals have opposite signs.
///
/// Both evaluations must already be counted by `ctx`.
pub(super) fn refine<M, P, Obs>(
    ctx: &mut EvalContext<'_, M, P, Obs>,
    left: Evaluation<M::Input, M::Output, 1>,
    right: Evaluation<M::Input, M::Output, 1>,
) -> Result<Solution<M::Input, M::Output>, Error>
where
    M: Model,
    M::Input: Clone,
    M::Output: Clone,
    P: EquationProblem<1, Input = M::Input, Output = M::Output>,
    Obs: for<'a> Observer<Event<'a, M, P>, Action>,
{
    let config = ctx.config();
    let reference = left.residual().abs().max(right.residual().abs());

    // `b` is the best estimate, `c` the opposite end of the bracket and `a`
    // the previous value of `b`.
    let mut c = left.clone();
    let mut a = left;
    let mut b = right;
    let mut d = b.point() - a.point();
    let mut e = d;

    for iter in 1..=config.max_iters {
        if b.residual().abs() > c.residual().abs() {
            a = b;
            b = c;
            c = a.clone();
        }

        let (xb, fb) = (b.point(), b.residual());
        let tol = 2.0 * f64::EPSILON * xb.abs() + 0.5 * config.x_tol(xb);
        let half = 0.5 * (c.point() - xb);

        if half.abs() <= tol {
            return Ok(ctx.finish_settled(b, reference, iter - 1));
        }

        let mut kind = Step::Bisection;
        if e.abs() >= tol && a.residual().abs() > fb.abs() {
            let (p, q, interpolated) = interpolate(&a, &b, &c, half);
            let (p, q) = if p > 0.0 { (p, -q) } else { (-p, q) };

            let bound = f64::min(3.0 * half * q - (tol * q).abs(), (e * q).abs());
            if 2.0 * p < bound {
                e = d;
                d = p / q;
                kind = interpolated;
            }
        }
        if kind == Step::Bisection {
            d = half;
            e = d;
        }

        let x = if d.abs() > tol {
            xb + d
        } else {
            xb + tol.copysign(half)
        };

        let eval = match ctx.step(x, iter, kind, Some(ordered(xb, c.point())))? {
            Flow::Continue(eval) => eval,
            Flow::Done(solution) => return Ok(solution),
        };

        a = mem::replace(&mut b, eval);
        if config.is_residual_converged(b.residual()) {
            return Ok(ctx.finish_with(b, Status::Converged, iter));
        }

        if Sign::of(b.residual()) == Sign::of(c.residual()) {
            c = a.clone();
            d = b.point() - a.point();
            e = d;
        }
    }

    ctx.finish_best(Status::MaxIters, config.max_iters)
}

/// Returns `(p, q, step)` such that `p / q` is the interpolated step from `b`.
///
/// Uses the secant through `b` and `c` when `a` and `c` coincide, and
/// inverse quadratic interpolation through all three points otherwise.
fn interpolate<I, O>(
    a: &Evaluation<I, O, 1>,
    b: &Evaluation<I, O, 1>,
    c: &Evaluation<I, O, 1>,
    half: f64,
) -> (f64, f64, Step) {
    let (fa, fb, fc) = (a.residual(), b.residual(), c.residual());
    let s = fb / fa;

    #[allow(clippy::float_cmp)]
    if a.point() == c.point() {
        return (2.0 * half * s, 1.0 - s, Step::Secant);
    }

    let q = fa / fc;
    let r = fb / fc;
    let p = s * (2.0 * half * q * (q - r) - (b.point() - a.point()) * (r - 1.0));
    let q = (q - 1.0) * (r - 1.0) * (s - 1.0);
    (p, q, Step::InverseQuadratic)
}
