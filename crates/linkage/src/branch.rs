use pivot_core::Observer;
use pivot_solvers::continuation::{self, Action, Event, Status, SweepConfig};
use tracing::debug;

use crate::{Angles, Freudenstein, LinkLengths, LoopClosure, SolveForAlpha};

/// One assembly branch of a four-bar linkage: output angle as a function
/// of input angle.
///
/// `betas` and `alphas` have equal length and are in sweep order, ready to
/// be plotted against each other.
#[derive(Debug, Clone, PartialEq)]
pub struct Branch {
    /// How the underlying sweep terminated.
    pub status: Status,
    /// Input angles that were solved.
    pub betas: Vec<f64>,
    /// Output angle at each input angle.
    pub alphas: Vec<f64>,
}

impl Branch {
    /// Follows the branch through `seed` as `beta` steps through `betas`.
    ///
    /// The first solve starts at `alpha = seed`; each later one starts from
    /// the previous `alpha`.
    ///
    /// # Errors
    ///
    /// Returns an error if the config is invalid or a solve fails.
    pub fn trace(
        links: &LinkLengths,
        betas: &[f64],
        seed: f64,
        config: &SweepConfig,
    ) -> Result<Self, continuation::Error> {
        Self::trace_observed(links, betas, seed, config, ())
    }

    /// Like [`Branch::trace`], with an observer for each solved point.
    ///
    /// # Errors
    ///
    /// Returns an error if the config is invalid or a solve fails.
    pub fn trace_observed<Obs>(
        links: &LinkLengths,
        betas: &[f64],
        seed: f64,
        config: &SweepConfig,
        observer: Obs,
    ) -> Result<Self, continuation::Error>
    where
        Obs: for<'a> Observer<Event<'a, Angles, LoopClosure>, Action>,
    {
        let model = Freudenstein::new(*links);
        let sweep = continuation::sweep(&model, betas, seed, config, SolveForAlpha::new, observer)?;
        debug!(seed, points = sweep.points.len(), status = ?sweep.status, "traced branch");

        Ok(Self {
            status: sweep.status,
            betas: sweep.params(),
            alphas: sweep.xs(),
        })
    }

    /// Traces one branch per seed over the same input angles.
    ///
    /// # Errors
    ///
    /// Returns the first error from either branch.
    pub fn pair(
        links: &LinkLengths,
        betas: &[f64],
        seeds: [f64; 2],
        config: &SweepConfig,
    ) -> Result<[Self; 2], continuation::Error> {
        let [first, second] = seeds;
        Ok([
            Self::trace(links, betas, first, config)?,
            Self::trace(links, betas, second, config)?,
        ])
    }

    /// Returns true if every input angle was solved.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.status == Status::Complete
    }

    /// Returns the largest change in `alpha` between neighbouring points.
    #[must_use]
    pub fn max_step(&self) -> f64 {
        self.alphas
            .windows(2)
            .map(|pair| (pair[1] - pair[0]).abs())
            .fold(0.0, f64::max)
    }
}

/// Returns `n` evenly spaced values from `start` to `end` inclusive.
///
/// Returns `[start]` when `n == 1` and nothing when `n == 0`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            (0..n).map(|i| start + step * i as f64).collect()
        }
    }
}
