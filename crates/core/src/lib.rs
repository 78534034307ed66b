//! Core traits and types for Pivot.
//!
//! Root finders in `pivot-solvers` never see a bare function. They see a
//! pair of collaborators:
//!
//! - [`Model`] computes a typed output from a typed input (the equation with
//!   all of its arguments).
//! - [`EquationProblem`] binds everything except the solver variables, maps
//!   `x` into a model input, and reads residuals back out of the output.
//!
//! Splitting the two is how a multi-argument equation is curried into a
//! single-variable one: the problem owns the fixed parameters, the model
//! stays reusable across problems.
//!
//! [`Observer`] lets callers watch or steer a solver while it runs.

mod model;
mod observer;
mod problems;

pub use model::{Model, Snapshot};
pub use observer::Observer;
pub use problems::{EquationDerivative, EquationProblem};
