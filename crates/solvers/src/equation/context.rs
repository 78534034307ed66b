use pivot_core::{EquationProblem, Model, Observer};

use super::{Action, Config, Error, Evaluation, Event, Solution, Status, Step, evaluate};

/// What happened when the context was asked to evaluate a point.
pub(super) enum Outcome<I, O> {
    /// The residual is finite.
    Finite(Evaluation<I, O, 1>),
    /// The residual is NaN or infinite.
    NonFinite,
    /// The evaluation budget was already spent; the model was not called.
    Exhausted,
    /// The observer asked to stop.
    Stopped,
}

/// Either a finite evaluation to keep iterating with, or the final solution.
pub(super) enum Flow<I, O> {
    Continue(Evaluation<I, O, 1>),
    Done(Solution<I, O>),
}

/// Shared evaluation bookkeeping for the scalar root finders.
///
/// The context counts evaluations against `max_evals`, emits an [`Event`]
/// for every evaluation, and remembers the best and the latest finite
/// evaluations so any termination path can report a solution.
pub(super) struct EvalContext<'ctx, M, P, Obs>
where
    M: Model,
{
    model: &'ctx M,
    problem: &'ctx P,
    config: &'ctx Config,
    observer: Obs,
    evals: usize,
    best: Option<Evaluation<M::Input, M::Output, 1>>,
    last: Option<Evaluation<M::Input, M::Output, 1>>,
    rejected: Option<Evaluation<M::Input, M::Output, 1>>,
}

impl<'ctx, M, P, Obs> EvalContext<'ctx, M, P, Obs>
where
    M: Model,
    M::Input: Clone,
    M::Output: Clone,
    P: EquationProblem<1, Input = M::Input, Output = M::Output>,
    Obs: for<'evt> Observer<Event<'evt, M, P>, Action>,
{
    pub(super) fn new(model: &'ctx M, problem: &'ctx P, config: &'ctx Config, observer: Obs) -> Self {
        Self {
            model,
            problem,
            config,
            observer,
            evals: 0,
            best: None,
            last: None,
            rejected: None,
        }
    }

    pub(super) fn config(&self) -> &'ctx Config {
        self.config
    }

    pub(super) fn problem(&self) -> &'ctx P {
        self.problem
    }

    /// Evaluates `x` and notifies the observer.
    ///
    /// # Errors
    ///
    /// Returns an error if the model or problem fails and the observer does
    /// not stop the solver.
    pub(super) fn eval(
        &mut self,
        x: f64,
        iter: usize,
        step: Step,
        bracket: Option<[f64; 2]>,
    ) -> Result<Outcome<M::Input, M::Output>, Error> {
        if self.evals >= self.config.max_evals {
            return Ok(Outcome::Exhausted);
        }
        self.evals += 1;

        let result = evaluate(self.model, self.problem, [x]);
        let action = {
            let event = Event {
                iter,
                x,
                step,
                bracket,
                result: &result,
            };
            self.observer.observe(&event)
        };
        let stop = matches!(action, Some(Action::StopEarly));

        let eval = match result {
            Ok(eval) => eval,
            Err(_) if stop => return Ok(Outcome::Stopped),
            Err(error) => return Err(error.into()),
        };

        if !eval.residual().is_finite() {
            self.rejected = Some(eval);
            return Ok(if stop {
                Outcome::Stopped
            } else {
                Outcome::NonFinite
            });
        }

        self.track(&eval);
        if stop {
            return Ok(Outcome::Stopped);
        }
        Ok(Outcome::Finite(eval))
    }

    /// Evaluates `x`, converting every outcome except a finite residual into
    /// the terminal solution.
    ///
    /// `iter` is the iteration the evaluation belongs to. Running out of
    /// evaluations means that iteration never happened.
    pub(super) fn step(
        &mut self,
        x: f64,
        iter: usize,
        step: Step,
        bracket: Option<[f64; 2]>,
    ) -> Result<Flow<M::Input, M::Output>, Error> {
        match self.eval(x, iter, step, bracket)? {
            Outcome::Finite(eval) => Ok(Flow::Continue(eval)),
            Outcome::NonFinite => self.finish_last(Status::NonFinite, iter).map(Flow::Done),
            Outcome::Stopped => self
                .finish_best(Status::StoppedByObserver, iter)
                .map(Flow::Done),
            Outcome::Exhausted => self
                .finish_best(Status::MaxEvals, iter.saturating_sub(1))
                .map(Flow::Done),
        }
    }

    /// Evaluates the initial guess, finishing at once if it is already a root.
    ///
    /// # Errors
    ///
    /// Returns `Error::NonFiniteGuess` for a NaN or infinite guess, or the
    /// evaluation error.
    pub(super) fn guess(&mut self, x0: f64) -> Result<Flow<M::Input, M::Output>, Error> {
        if !x0.is_finite() {
            return Err(Error::NonFiniteGuess { value: x0 });
        }

        match self.step(x0, 0, Step::Initial, None)? {
            Flow::Continue(eval) if self.config.is_residual_converged(eval.residual()) => Ok(
                Flow::Done(self.finish_with(eval, Status::Converged, 0)),
            ),
            flow => Ok(flow),
        }
    }

    /// Finishes with a specific evaluation.
    pub(super) fn finish_with(
        &self,
        eval: Evaluation<M::Input, M::Output, 1>,
        status: Status,
        iters: usize,
    ) -> Solution<M::Input, M::Output> {
        Solution::from_eval(eval, status, iters, self.evals)
    }

    /// Finishes a solve whose step or bracket tolerance was met.
    ///
    /// A step can collapse onto a pole as well as a root. When the residual
    /// at `eval` is larger than `reference`, the largest starting residual,
    /// the solve ends with [`Status::NonFinite`] instead of converging.
    pub(super) fn finish_settled(
        &self,
        eval: Evaluation<M::Input, M::Output, 1>,
        reference: f64,
        iters: usize,
    ) -> Solution<M::Input, M::Output> {
        let status = if eval.residual().abs() > reference {
            Status::NonFinite
        } else {
            Status::Converged
        };
        self.finish_with(eval, status, iters)
    }

    /// Finishes with the evaluation of smallest residual magnitude.
    ///
    /// Falls back to the latest non-finite evaluation if nothing finite was seen.
    ///
    /// # Errors
    ///
    /// Returns `Error::NoSuccessfulEvaluation` if no evaluation succeeded.
    pub(super) fn finish_best(
        &mut self,
        status: Status,
        iters: usize,
    ) -> Result<Solution<M::Input, M::Output>, Error> {
        let eval = self
            .best
            .take()
            .or_else(|| self.rejected.take())
            .ok_or(Error::NoSuccessfulEvaluation)?;
        Ok(self.finish_with(eval, status, iters))
    }

    /// Finishes with the most recent finite evaluation.
    ///
    /// # Errors
    ///
    /// Returns `Error::NoSuccessfulEvaluation` if no evaluation succeeded.
    pub(super) fn finish_last(
        &mut self,
        status: Status,
        iters: usize,
    ) -> Result<Solution<M::Input, M::Output>, Error> {
        let eval = self
            .last
            .take()
            .or_else(|| self.rejected.take())
            .ok_or(Error::NoSuccessfulEvaluation)?;
        Ok(self.finish_with(eval, status, iters))
    }

    fn track(&mut self, eval: &Evaluation<M::Input, M::Output, 1>) {
        let improves = self
            .best
            .as_ref()
            .is_none_or(|best| eval.residual().abs() < best.residual().abs());
        if improves {
            self.best = Some(eval.clone());
        }
        self.last = Some(eval.clone());
    }
}
