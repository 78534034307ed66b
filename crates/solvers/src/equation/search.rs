use pivot_core::{EquationProblem, Model, Observer};

use super::{
    Action, Config, Error, Evaluation, Event, Sign, Solution, Status, Step, brent,
    context::{EvalContext, Flow, Outcome},
    secant,
};

/// Multiples of the guess scale tried, in order, when looking for a sign
/// change around a guess.
///
/// The offsets alternate sides and grow roughly geometrically, so nearby
/// roots are bracketed before distant ones.
const OFFSETS: [f64; 14] = [
    -0.01, 0.025, -0.05, 0.1, -0.25, 0.5, -1.0, 2.5, -5.0, 10.0, -50.0, 100.0, -500.0, 1000.0,
];

/// Result of the sign change search around a guess.
enum Scan<I, O> {
    /// A trial whose residual sign differs from the guess.
    Found(Evaluation<I, O, 1>),
    /// Every trial shared the sign of the guess or was not finite.
    NotFound,
    /// The search itself ended the solve.
    Done(Solution<I, O>),
}

/// Solves from a single guess.
///
/// Brackets the root by searching outward from `x0` and refines it with
/// Brent's method. Falls back to the secant method when no trial changes
/// sign.
pub(super) fn solve<M, P, Obs>(
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

    let first = match ctx.guess(x0)? {
        Flow::Continue(eval) => eval,
        Flow::Done(solution) => return Ok(solution),
    };

    match scan(&mut ctx, &first)? {
        Scan::Found(trial) if trial.point() < first.point() => {
            brent::refine(&mut ctx, trial, first)
        }
        Scan::Found(trial) => brent::refine(&mut ctx, first, trial),
        Scan::NotFound => secant::iterate(&mut ctx, first),
        Scan::Done(solution) => Ok(solution),
    }
}

/// Evaluates trial points around `first` until one changes sign.
///
/// Trials that overflow the float range are not evaluated, and trials with a
/// non-finite residual are skipped; neither says where the root is.
fn scan<M, P, Obs>(
    ctx: &mut EvalContext<'_, M, P, Obs>,
    first: &Evaluation<M::Input, M::Output, 1>,
) -> Result<Scan<M::Input, M::Output>, Error>
where
    M: Model,
    M::Input: Clone,
    M::Output: Clone,
    P: EquationProblem<1, Input = M::Input, Output = M::Output>,
    Obs: for<'a> Observer<Event<'a, M, P>, Action>,
{
    let config = ctx.config();
    let x0 = first.point();
    let scale = x0.abs().max(1.0);
    let sign = Sign::of(first.residual());

    for offset in OFFSETS {
        let x = x0 + offset * scale;
        if !x.is_finite() {
            continue;
        }
        match ctx.eval(x, 0, Step::Search, None)? {
            Outcome::Finite(trial) => {
                if config.is_residual_converged(trial.residual()) {
                    return Ok(Scan::Done(ctx.finish_with(trial, Status::Converged, 0)));
                }
                if Sign::of(trial.residual()) != sign {
                    return Ok(Scan::Found(trial));
                }
            }
            Outcome::NonFinite => {}
            Outcome::Stopped => {
                return ctx
                    .finish_best(Status::StoppedByObserver, 0)
                    .map(Scan::Done);
            }
            Outcome::Exhausted => return ctx.finish_best(Status::MaxEvals, 0).map(Scan::Done),
        }
    }

    Ok(Scan::NotFound)
}
