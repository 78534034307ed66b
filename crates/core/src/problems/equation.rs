/// Defines an equation to be driven to zero.
///
/// An equation problem owns every parameter that stays fixed while solving.
/// It maps the solver variables into a model input and computes residuals
/// from the model input and output. A root is an `x` where every residual
/// is zero.
///
/// The const generic `N` is the number of solver variables and residuals.
/// Scalar root finders work with `N = 1`.
pub trait EquationProblem<const N: usize> {
    type Input;
    type Output;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Builds the model input for solver variables `x`.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if no valid input corresponds to `x`.
    fn input(&self, x: &[f64; N]) -> Result<Self::Input, Self::Error>;

    /// Computes residuals from a model input and the output it produced.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the residuals cannot be computed.
    fn residuals(
        &self,
        input: &Self::Input,
        output: &Self::Output,
    ) -> Result<[f64; N], Self::Error>;
}

/// A scalar equation problem that also knows the slope of its residual.
///
/// Derivative-based solvers such as Newton's method require this trait.
pub trait EquationDerivative: EquationProblem<1> {
    /// Returns `d(residual)/dx` at the evaluated point.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the derivative cannot be computed.
    fn derivative(&self, input: &Self::Input, output: &Self::Output) -> Result<f64, Self::Error>;
}
