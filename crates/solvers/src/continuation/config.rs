use crate::equation;

use super::Error;

/// Settings for a continuation sweep.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SweepConfig {
    /// Root finder settings used for every parameter.
    pub solver: equation::Config,

    /// Largest accepted change in the root between consecutive parameters.
    ///
    /// A larger change usually means the solver hopped to another branch.
    /// `None` accepts any change.
    pub max_jump: Option<f64>,
}

impl SweepConfig {
    /// Checks the solver config and the jump limit.
    ///
    /// # Errors
    ///
    /// Returns an error if the solver config is invalid or `max_jump` is not
    /// positive.
    pub fn validate(&self) -> Result<(), Error> {
        self.solver.validate()?;

        if let Some(value) = self.max_jump
            && (value.is_nan() || value <= 0.0)
        {
            return Err(Error::InvalidMaxJump { value });
        }

        Ok(())
    }
}
