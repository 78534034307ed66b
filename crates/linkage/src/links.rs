use thiserror::Error;

/// Reasons a set of link lengths is rejected.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum LinkageError {
    /// A length is zero, negative, or not finite.
    #[error("link a{index} must be positive and finite, got {value}")]
    InvalidLength { index: usize, value: f64 },
}

/// Link lengths of a planar four-bar linkage.
///
/// + Ground link `a1`, between the two fixed pivots
/// + Input link `a2`, whose angle is `beta`
/// + Coupler link `a3`
/// + Output link `a4`, whose angle is `alpha`
///
/// Angles are measured from the ground link.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "[f64; 4]", into = "[f64; 4]"))]
pub struct LinkLengths {
    a1: f64,
    a2: f64,
    a3: f64,
    a4: f64,
}

impl LinkLengths {
    /// Creates validated link lengths.
    ///
    /// # Errors
    ///
    /// Returns [`LinkageError::InvalidLength`] for the first length that is
    /// not positive and finite.
    pub fn new(a1: f64, a2: f64, a3: f64, a4: f64) -> Result<Self, LinkageError> {
        for (index, value) in [a1, a2, a3, a4].into_iter().enumerate() {
            if !value.is_finite() || value <= 0.0 {
                return Err(LinkageError::InvalidLength {
                    index: index + 1,
                    value,
                });
            }
        }
        Ok(Self { a1, a2, a3, a4 })
    }

    #[must_use]
    pub fn a1(&self) -> f64 {
        self.a1
    }

    #[must_use]
    pub fn a2(&self) -> f64 {
        self.a2
    }

    #[must_use]
    pub fn a3(&self) -> f64 {
        self.a3
    }

    #[must_use]
    pub fn a4(&self) -> f64 {
        self.a4
    }

    /// Returns the lengths as `[a1, a2, a3, a4]`.
    #[must_use]
    pub fn to_array(&self) -> [f64; 4] {
        [self.a1, self.a2, self.a3, self.a4]
    }

    /// Returns true if the links can close a loop: the longest link is no
    /// longer than the other three together.
    #[must_use]
    pub fn can_assemble(&self) -> bool {
        let [s, p, q, l] = self.sorted();
        l <= s + p + q
    }

    /// Returns true if the shortest link can rotate fully relative to its
    /// neighbours (Grashof's condition `s + l <= p + q`).
    #[must_use]
    pub fn is_grashof(&self) -> bool {
        let [s, p, q, l] = self.sorted();
        s + l <= p + q
    }

    fn sorted(&self) -> [f64; 4] {
        let mut lengths = self.to_array();
        lengths.sort_unstable_by(f64::total_cmp);
        lengths
    }
}

impl TryFrom<[f64; 4]> for LinkLengths {
    type Error = LinkageError;

    fn try_from([a1, a2, a3, a4]: [f64; 4]) -> Result<Self, LinkageError> {
        Self::new(a1, a2, a3, a4)
    }
}

impl From<LinkLengths> for [f64; 4] {
    fn from(links: LinkLengths) -> Self {
        links.to_array()
    }
}
