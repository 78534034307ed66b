pub mod equation;

pub use equation::{EquationDerivative, EquationProblem};
