//! Continuation sweeps along a solution branch.
//!
//! A sweep solves a family of equation problems, one per parameter value,
//! seeding each solve with the root of the previous one. When the parameter
//! steps are small the seed is close to the next root, so the sweep follows
//! a single branch instead of hopping between roots.
//!
//! ```ignore
//! use pivot_solvers::continuation::{self, SweepConfig};
//!
//! let sweep = continuation::sweep_unobserved(&model, &betas, seed, &SweepConfig::default(), |beta| {
//!     SolveForAlpha::new(beta)
//! })?;
//!
//! for (beta, alpha) in sweep.params().iter().zip(sweep.xs()) {
//!     println!("{beta} -> {alpha}");
//! }
//! ```

mod action;
mod config;
mod error;
mod event;
mod solution;

pub use action::Action;
pub use config::SweepConfig;
pub use error::Error;
pub use event::Event;
pub use solution::{Point, Status, Sweep};

use pivot_core::{EquationProblem, Model, Observer};

use crate::equation::{self, Start};

/// Solves `make_problem(p)` for each `p` in `params`, in order.
///
/// The first solve starts from `seed`; every later one starts from the
/// previous root. The sweep ends early with [`Status::Diverged`] when a
/// solve does not converge and with [`Status::Jumped`] when a root moves
/// further than [`SweepConfig::max_jump`]. The offending point is kept.
///
/// The observer receives an [`Event`] after each point and may return
/// [`Action::StopEarly`] to end the sweep there.
///
/// # Errors
///
/// Returns an error if the config is invalid or a solve fails with an
/// [`equation::Error`].
pub fn sweep<M, P, F, Obs>(
    model: &M,
    params: &[f64],
    seed: f64,
    config: &SweepConfig,
    mut make_problem: F,
    mut observer: Obs,
) -> Result<Sweep<M::Input, M::Output>, Error>
where
    M: Model,
    M::Input: Clone,
    M::Output: Clone,
    P: EquationProblem<1, Input = M::Input, Output = M::Output>,
    F: FnMut(f64) -> P,
    Obs: for<'a> Observer<Event<'a, M::Input, M::Output>, Action>,
{
    config.validate()?;

    let mut points = Vec::with_capacity(params.len());
    let mut guess = seed;

    for (index, &param) in params.iter().enumerate() {
        let problem = make_problem(param);
        let solution =
            equation::find_root_unobserved(model, &problem, Start::Guess(guess), &config.solver)
                .map_err(|source| Error::Solve {
                    index,
                    param,
                    source,
                })?;

        let converged = solution.is_converged();
        let jumped = index > 0
            && config
                .max_jump
                .is_some_and(|max_jump| (solution.x - guess).abs() > max_jump);
        guess = solution.x;

        let point = Point { param, solution };
        let action = observer.observe(&Event {
            index,
            point: &point,
        });
        points.push(point);

        let status = if !converged {
            Some(Status::Diverged { index })
        } else if jumped {
            Some(Status::Jumped { index })
        } else if let Some(Action::StopEarly) = action {
            Some(Status::StoppedByObserver)
        } else {
            None
        };

        if let Some(status) = status {
            return Ok(Sweep { status, points });
        }
    }

    Ok(Sweep {
        status: Status::Complete,
        points,
    })
}

/// Runs a sweep without observation.
///
/// # Errors
///
/// Returns an error if the config is invalid or a solve fails with an
/// [`equation::Error`].
pub fn sweep_unobserved<M, P, F>(
    model: &M,
    params: &[f64],
    seed: f64,
    config: &SweepConfig,
    make_problem: F,
) -> Result<Sweep<M::Input, M::Output>, Error>
where
    M: Model,
    M::Input: Clone,
    M::Output: Clone,
    P: EquationProblem<1, Input = M::Input, Output = M::Output>,
    F: FnMut(f64) -> P,
{
    sweep(model, params, seed, config, make_problem, ())
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::convert::Infallible;

    use approx::assert_relative_eq;

    struct Identity;

    impl Model for Identity {
        type Input = f64;
        type Output = f64;
        type Error = Infallible;

        fn call(&self, input: &f64) -> Result<f64, Infallible> {
            Ok(*input)
        }
    }

    /// Residual `shape(x, p)` for a fixed parameter `p`.
    struct Family {
        param: f64,
        shape: fn(f64, f64) -> f64,
    }

    impl EquationProblem<1> for Family {
        type Input = f64;
        type Output = f64;
        type Error = Infallible;

        fn input(&self, x: &[f64; 1]) -> Result<f64, Infallible> {
            Ok(x[0])
        }

        fn residuals(&self, _input: &f64, output: &f64) -> Result<[f64; 1], Infallible> {
            Ok([(self.shape)(*output, self.param)])
        }
    }

    fn family(shape: fn(f64, f64) -> f64) -> impl FnMut(f64) -> Family {
        move |param| Family { param, shape }
    }

    #[allow(clippy::cast_precision_loss)]
    fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
        let step = (end - start) / (n - 1) as f64;
        (0..n).map(|i| start + step * i as f64).collect()
    }

    #[test]
    fn follows_a_moving_root() {
        let params = linspace(0.0, 5.0, 11);
        let sweep = sweep_unobserved(
            &Identity,
            &params,
            0.0,
            &SweepConfig::default(),
            family(|x, p| x - p),
        )
        .expect("valid sweep");

        assert!(sweep.is_complete());
        assert_eq!(sweep.params(), params);
        for (x, p) in sweep.xs().iter().zip(&params) {
            assert_relative_eq!(*x, *p, epsilon = 1e-10);
        }
    }

    #[test]
    fn stays_on_the_seeded_branch() {
        // x² + p² = 1 has roots ±sqrt(1 - p²); seeding below zero keeps the
        // negative branch.
        let params = linspace(0.0, 0.9, 19);
        let config = SweepConfig {
            max_jump: Some(0.2),
            ..SweepConfig::default()
        };

        let sweep = sweep_unobserved(
            &Identity,
            &params,
            -1.0,
            &config,
            family(|x, p| x * x + p * p - 1.0),
        )
        .expect("valid sweep");

        assert!(sweep.is_complete());
        for point in &sweep.points {
            let expected = -(1.0 - point.param * point.param).sqrt();
            assert_relative_eq!(point.solution.x, expected, epsilon = 1e-9);
        }
    }

    #[test]
    fn detects_a_jump_between_branches() {
        let params = [0.0, 0.25, 0.5, 0.75];
        let config = SweepConfig {
            max_jump: Some(1.0),
            ..SweepConfig::default()
        };

        let sweep = sweep_unobserved(
            &Identity,
            &params,
            0.0,
            &config,
            family(|x, p| if p < 0.5 { x } else { x - 10.0 }),
        )
        .expect("valid sweep");

        assert_eq!(sweep.status, Status::Jumped { index: 2 });
        assert_eq!(sweep.points.len(), 3);
        assert_relative_eq!(sweep.xs()[2], 10.0, epsilon = 1e-9);
    }

    #[test]
    fn stops_on_a_failed_solve() {
        let params = [0.0, 1.0, 2.0, 3.0];
        let sweep = sweep_unobserved(
            &Identity,
            &params,
            0.0,
            &SweepConfig::default(),
            family(|x, p| if p > 1.5 { f64::NAN } else { x - p }),
        )
        .expect("valid sweep");

        assert_eq!(sweep.status, Status::Diverged { index: 2 });
        assert_eq!(sweep.points.len(), 3);
        assert_eq!(sweep.points[2].solution.status, equation::Status::NonFinite);
    }

    #[test]
    fn observer_can_stop_the_sweep() {
        let params = linspace(0.0, 1.0, 6);
        let mut seen = Vec::new();
        let observer = |event: &Event<'_, f64, f64>| {
            seen.push(event.index);
            (event.index == 2).then_some(Action::StopEarly)
        };

        let sweep = sweep(
            &Identity,
            &params,
            0.0,
            &SweepConfig::default(),
            family(|x, p| x - p),
            observer,
        )
        .expect("valid sweep");

        assert_eq!(sweep.status, Status::StoppedByObserver);
        assert_eq!(sweep.points.len(), 3);
        assert_eq!(seen, vec![0, 1, 2]);
    }

    #[test]
    fn empty_sweep_is_complete() {
        let sweep = sweep_unobserved(
            &Identity,
            &[],
            0.0,
            &SweepConfig::default(),
            family(|x, p| x - p),
        )
        .expect("valid sweep");

        assert!(sweep.is_complete());
        assert!(sweep.points.is_empty());
    }

    #[test]
    fn solver_errors_carry_the_index() {
        let config = SweepConfig {
            solver: equation::Config::default(),
            max_jump: None,
        };

        let result = sweep_unobserved(&Identity, &[1.0, 2.0], f64::NAN, &config, family(|x, p| x - p));

        assert!(matches!(
            result,
            Err(Error::Solve {
                index: 0,
                source: equation::Error::NonFiniteGuess { .. },
                ..
            })
        ));
    }
}
