use crate::equation::Solution;

/// How a sweep terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Status {
    /// Every parameter was solved.
    Complete,

    /// The solve at `index` did not converge.
    Diverged { index: usize },

    /// The root at `index` moved further than `max_jump` from its predecessor.
    Jumped { index: usize },

    /// Stopped early due to an observer action.
    StoppedByObserver,
}

/// One solved parameter of a sweep.
#[derive(Debug, Clone)]
pub struct Point<I, O> {
    /// The swept parameter.
    pub param: f64,

    /// The root finder result at `param`.
    pub solution: Solution<I, O>,
}

/// The result of a continuation sweep.
///
/// `points` holds every parameter attempted, in sweep order. When the sweep
/// stops on a diverged or jumped solve, that point is the last one.
#[derive(Debug, Clone)]
pub struct Sweep<I, O> {
    /// How the sweep terminated.
    pub status: Status,

    /// Solved points in sweep order.
    pub points: Vec<Point<I, O>>,
}

impl<I, O> Sweep<I, O> {
    /// Returns true if every parameter was solved.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.status == Status::Complete
    }

    /// Returns the swept parameters.
    #[must_use]
    pub fn params(&self) -> Vec<f64> {
        self.points.iter().map(|point| point.param).collect()
    }

    /// Returns the roots, one per parameter.
    #[must_use]
    pub fn xs(&self) -> Vec<f64> {
        self.points.iter().map(|point| point.solution.x).collect()
    }
}
