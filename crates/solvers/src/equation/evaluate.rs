use thiserror::Error;

use pivot_core::{EquationProblem, Model, Snapshot};

/// A point the root finders have paid a model call for.
///
/// Scalar solvers use `N = 1` and read it through [`Evaluation::point`] and
/// [`Evaluation::residual`]. The snapshot is kept so the final
/// [`Solution`](super::Solution) can hand back the model input and output
/// at the root without calling the model again.
#[derive(Debug, Clone)]
pub struct Evaluation<I, O, const N: usize> {
    pub x: [f64; N],
    pub residuals: [f64; N],
    pub snapshot: Snapshot<I, O>,
}

impl<I, O> Evaluation<I, O, 1> {
    /// Returns the scalar solver variable.
    #[must_use]
    pub fn point(&self) -> f64 {
        self.x[0]
    }

    /// Returns the scalar residual.
    #[must_use]
    pub fn residual(&self) -> f64 {
        self.residuals[0]
    }
}

/// Why a point could not be evaluated.
///
/// The solvers box both variants into [`Error`](super::Error).
#[derive(Debug, Error)]
pub enum EvalError<ME, PE> {
    /// The model rejected the input.
    #[error("model call failed")]
    Model(#[source] ME),

    /// `x` had no model input, or the output gave no residual.
    #[error("problem error")]
    Problem(#[source] PE),
}

/// What [`evaluate`] returns for model `M` and problem `P`.
pub type EvaluateResult<M, P, const N: usize> = Result<
    Evaluation<<M as Model>::Input, <M as Model>::Output, N>,
    EvalError<<M as Model>::Error, <P as EquationProblem<N>>::Error>,
>;

/// Runs `problem` and `model` once at `x`.
///
/// This is the only place the root finders call the model. A NaN or
/// infinite residual is still an `Ok` evaluation; the calling solver
/// decides what it means.
///
/// # Errors
///
/// Returns [`EvalError::Problem`] or [`EvalError::Model`] from whichever
/// side failed first.
pub fn evaluate<M, P, const N: usize>(
    model: &M,
    problem: &P,
    x: [f64; N],
) -> EvaluateResult<M, P, N>
where
    M: Model,
    P: EquationProblem<N, Input = M::Input, Output = M::Output>,
{
    let input = problem.input(&x).map_err(EvalError::Problem)?;
    let output = model.call(&input).map_err(EvalError::Model)?;
    let residuals = problem
        .residuals(&input, &output)
        .map_err(EvalError::Problem)?;

    Ok(Evaluation {
        x,
        residuals,
        snapshot: Snapshot::new(input, output),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::convert::Infallible;

    use approx::assert_relative_eq;
    use thiserror::Error;

    struct Square;

    impl Model for Square {
        type Input = f64;
        type Output = f64;
        type Error = Infallible;

        fn call(&self, input: &f64) -> Result<f64, Infallible> {
            Ok(input * input)
        }
    }

    #[derive(Debug, Error)]
    #[error("negative input {0}")]
    struct NegativeInput(f64);

    /// Residual `x² - target`, rejecting negative `x`.
    struct SquareEquals {
        target: f64,
    }

    impl EquationProblem<1> for SquareEquals {
        type Input = f64;
        type Output = f64;
        type Error = NegativeInput;

        fn input(&self, x: &[f64; 1]) -> Result<f64, NegativeInput> {
            if x[0] < 0.0 {
                Err(NegativeInput(x[0]))
            } else {
                Ok(x[0])
            }
        }

        fn residuals(&self, _input: &f64, output: &f64) -> Result<[f64; 1], NegativeInput> {
            Ok([output - self.target])
        }
    }

    #[test]
    fn evaluation_captures_snapshot_and_residual() {
        let eval = evaluate(&Square, &SquareEquals { target: 2.0 }, [3.0]).expect("valid input");

        assert_relative_eq!(eval.point(), 3.0);
        assert_relative_eq!(eval.residual(), 7.0);
        assert_relative_eq!(eval.snapshot.input, 3.0);
        assert_relative_eq!(eval.snapshot.output, 9.0);
    }

    #[test]
    fn problem_errors_are_reported() {
        let result = evaluate(&Square, &SquareEquals { target: 2.0 }, [-1.0]);
        assert!(matches!(result, Err(EvalError::Problem(NegativeInput(_)))));
    }
}
