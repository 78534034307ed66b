//! The Freudenstein equation of a planar four-bar linkage.
//!
//! For link lengths `a1..a4`, input angle `beta` and output angle `alpha`,
//!
//! ```text
//! f(alpha, beta) = K1 cos(beta) - K2 cos(alpha) - cos(beta - alpha) + K3
//!
//! K1 = a1 / a2
//! K2 = a1 / a4
//! K3 = (a1² - a2² + a3² + a4²) / (2 a2 a4)
//! ```
//!
//! The linkage closes wherever `f = 0`. [`Freudenstein`] evaluates `f` for
//! any pair of angles; [`SolveForAlpha`] fixes `beta` and exposes `alpha` as
//! the single solver variable.

use std::convert::Infallible;

use pivot_core::{EquationDerivative, EquationProblem, Model};

use crate::LinkLengths;

/// Input and output link angles, in radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Angles {
    pub alpha: f64,
    pub beta: f64,
}

/// The Freudenstein residual and its slope in `alpha`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoopClosure {
    /// `f(alpha, beta)`; zero when the loop closes.
    pub residual: f64,
    /// `∂f/∂alpha = K2 sin(alpha) - sin(beta - alpha)`.
    pub d_alpha: f64,
}

/// Model evaluating the Freudenstein equation for fixed link lengths.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Freudenstein {
    links: LinkLengths,
    k1: f64,
    k2: f64,
    k3: f64,
}

impl Freudenstein {
    /// Precomputes the Freudenstein coefficients for `links`.
    #[must_use]
    pub fn new(links: LinkLengths) -> Self {
        let [a1, a2, a3, a4] = links.to_array();
        Self {
            links,
            k1: a1 / a2,
            k2: a1 / a4,
            k3: (a1 * a1 - a2 * a2 + a3 * a3 + a4 * a4) / (2.0 * a2 * a4),
        }
    }

    #[must_use]
    pub fn links(&self) -> &LinkLengths {
        &self.links
    }

    /// Returns `[K1, K2, K3]`.
    #[must_use]
    pub fn coefficients(&self) -> [f64; 3] {
        [self.k1, self.k2, self.k3]
    }

    /// Evaluates `f(alpha, beta)`.
    #[must_use]
    pub fn residual(&self, angles: Angles) -> f64 {
        let Angles { alpha, beta } = angles;
        self.k1 * beta.cos() - self.k2 * alpha.cos() - (beta - alpha).cos() + self.k3
    }

    /// Evaluates `∂f/∂alpha`.
    #[must_use]
    pub fn d_alpha(&self, angles: Angles) -> f64 {
        let Angles { alpha, beta } = angles;
        self.k2 * alpha.sin() - (beta - alpha).sin()
    }
}

impl Model for Freudenstein {
    type Input = Angles;
    type Output = LoopClosure;
    type Error = Infallible;

    fn call(&self, input: &Angles) -> Result<LoopClosure, Infallible> {
        Ok(LoopClosure {
            residual: self.residual(*input),
            d_alpha: self.d_alpha(*input),
        })
    }
}

/// Curries the Freudenstein equation into a function of `alpha` alone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolveForAlpha {
    pub beta: f64,
}

impl SolveForAlpha {
    #[must_use]
    pub fn new(beta: f64) -> Self {
        Self { beta }
    }
}

impl EquationProblem<1> for SolveForAlpha {
    type Input = Angles;
    type Output = LoopClosure;
    type Error = Infallible;

    fn input(&self, x: &[f64; 1]) -> Result<Angles, Infallible> {
        Ok(Angles {
            alpha: x[0],
            beta: self.beta,
        })
    }

    fn residuals(&self, _input: &Angles, output: &LoopClosure) -> Result<[f64; 1], Infallible> {
        Ok([output.residual])
    }
}

impl EquationDerivative for SolveForAlpha {
    fn derivative(&self, _input: &Angles, output: &LoopClosure) -> Result<f64, Infallible> {
        Ok(output.d_alpha)
    }
}
