use std::convert::Infallible;

use pivot_core::{EquationProblem, Model};

/// Adapts a plain `Fn(f64) -> f64` into both the model and the problem of a
/// scalar equation, so closures can be handed straight to a root finder.
///
/// The closure's return value is the residual.
#[derive(Debug, Clone, Copy)]
pub struct FnEquation<F>(pub F);

impl<F: Fn(f64) -> f64> Model for FnEquation<F> {
    type Input = f64;
    type Output = f64;
    type Error = Infallible;

    fn call(&self, input: &f64) -> Result<f64, Infallible> {
        Ok((self.0)(*input))
    }
}

impl<F: Fn(f64) -> f64> EquationProblem<1> for FnEquation<F> {
    type Input = f64;
    type Output = f64;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<f64, Infallible> {
        Ok(x[0])
    }

    fn residuals(&self, _input: &f64, output: &f64) -> Result<[f64; 1], Infallible> {
        Ok([*output])
    }
}
