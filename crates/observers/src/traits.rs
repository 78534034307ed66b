//! Capability traits for cross-solver observers.
//!
//! These traits abstract over solver-specific event and action types, so one
//! observer works with every root finder and with continuation sweeps.
//!
//! # Event traits
//!
//! - [`HasResidual`]: events that carry a residual value
//! - [`HasIterate`]: events that carry the solver variable
//! - [`HasIteration`]: events that know which iteration or sweep index
//!   produced them
//!
//! # Action traits
//!
//! - [`CanStopEarly`]: actions that can signal early termination
//!
//! # Example
//!
//! ```rust
//! use pivot_core::Observer;
//! use pivot_observers::traits::{CanStopEarly, HasResidual};
//!
//! struct GoodEnough {
//!     tolerance: f64,
//!     min_events: usize,
//!     seen: usize,
//! }
//!
//! impl<E: HasResidual, A: CanStopEarly> Observer<E, A> for GoodEnough {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         self.seen += 1;
//!         if self.seen >= self.min_events && event.residual().abs() < self.tolerance {
//!             return Some(A::stop_early());
//!         }
//!         None
//!     }
//! }
//! ```

use pivot_core::{EquationProblem, Model};

use pivot_solvers::{continuation, equation};

/// An event that carries a residual value.
pub trait HasResidual {
    /// Returns the residual for this event.
    ///
    /// Returns `f64::NAN` when the event represents an error and no residual
    /// is available.
    fn residual(&self) -> f64;
}

/// An event that carries the value of the solver variable.
pub trait HasIterate {
    /// Returns the solver variable for this event.
    fn iterate(&self) -> f64;
}

/// An event tagged with the iteration (or sweep index) that produced it.
pub trait HasIteration {
    /// Returns the iteration counter for this event.
    fn iteration(&self) -> usize;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

// --- equation::Event ---

impl<M, P> HasResidual for equation::Event<'_, M, P>
where
    M: Model,
    P: EquationProblem<1, Input = M::Input, Output = M::Output>,
{
    fn residual(&self) -> f64 {
        equation::Event::residual(self)
    }
}

impl<M, P> HasIterate for equation::Event<'_, M, P>
where
    M: Model,
    P: EquationProblem<1, Input = M::Input, Output = M::Output>,
{
    fn iterate(&self) -> f64 {
        self.x
    }
}

impl<M, P> HasIteration for equation::Event<'_, M, P>
where
    M: Model,
    P: EquationProblem<1, Input = M::Input, Output = M::Output>,
{
    fn iteration(&self) -> usize {
        self.iter
    }
}

// --- continuation::Event ---

impl<I, O> HasResidual for continuation::Event<'_, I, O> {
    fn residual(&self) -> f64 {
        self.point.solution.residual
    }
}

impl<I, O> HasIterate for continuation::Event<'_, I, O> {
    fn iterate(&self) -> f64 {
        self.point.solution.x
    }
}

impl<I, O> HasIteration for continuation::Event<'_, I, O> {
    fn iteration(&self) -> usize {
        self.index
    }
}

// --- CanStopEarly impls ---

impl CanStopEarly for equation::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

impl CanStopEarly for continuation::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}
