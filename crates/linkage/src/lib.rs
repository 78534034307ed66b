//! Four-bar linkage kinematics on top of Pivot.
//!
//! The Freudenstein equation relates the input angle `beta` and output angle
//! `alpha` of a planar four-bar linkage with fixed link lengths. This crate
//! models it as:
//!
//! - [`Freudenstein`]: a [`Model`] from [`Angles`] to the loop-closure
//!   residual
//! - [`SolveForAlpha`]: an [`EquationProblem`] that binds `beta` and leaves
//!   `alpha` free, turning the two-angle equation into a scalar root problem
//! - [`Branch`]: a continuation sweep over `beta` that follows one assembly
//!   branch
//!
//! ```ignore
//! use pivot_linkage::{Freudenstein, LinkLengths, SolveForAlpha};
//! use pivot_solvers::equation::{self, Config, Start};
//!
//! let model = Freudenstein::new(LinkLengths::new(10.0, 13.0, 8.0, 10.0)?);
//! let solution = equation::find_root_unobserved(
//!     &model,
//!     &SolveForAlpha::new(0.1),
//!     Start::Guess(std::f64::consts::PI),
//!     &Config::default(),
//! )?;
//! ```
//!
//! [`Model`]: pivot_core::Model
//! [`EquationProblem`]: pivot_core::EquationProblem

mod branch;
mod freudenstein;
mod links;

pub use branch::{Branch, linspace};
pub use freudenstein::{Angles, Freudenstein, LoopClosure, SolveForAlpha};
pub use links::{LinkLengths, LinkageError};
