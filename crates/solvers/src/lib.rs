//! Scalar root finders for Pivot.
//!
//! - [`equation`]: Brent, secant and Newton solvers for
//!   [`EquationProblem<1>`], plus [`equation::find_root`], which picks a
//!   method from the starting information it is given
//! - [`continuation`]: parameter sweeps that seed each solve from the
//!   previous root to follow one solution branch
//!
//! [`EquationProblem<1>`]: pivot_core::EquationProblem

pub mod continuation;
pub mod equation;
