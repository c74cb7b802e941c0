//! Validated Bernoulli probability.

use rand::Rng;

use crate::{Result, error::GraphError};

/// Probability in `[0, 1]` used for random edge creation and rewiring.
///
/// # Examples
/// ```
/// use smallworld_core::{EdgeProbability, GraphError};
///
/// let p = EdgeProbability::new(0.25).expect("0.25 is a probability");
/// assert_eq!(p.get(), 0.25);
/// assert!(matches!(
///     EdgeProbability::new(1.5),
///     Err(GraphError::InvalidProbability { .. })
/// ));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct EdgeProbability(f64);

impl EdgeProbability {
    /// Never draws.
    pub const NEVER: Self = Self(0.0);
    /// Always draws.
    pub const ALWAYS: Self = Self(1.0);

    /// Validates `value`.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidProbability`] when `value` is NaN or lies
    /// outside `[0, 1]`.
    pub fn new(value: f64) -> Result<Self> {
        if (0.0..=1.0).contains(&value) {
            Ok(Self(value))
        } else {
            Err(GraphError::InvalidProbability { value })
        }
    }

    /// Returns the raw probability.
    #[must_use]
    pub const fn get(self) -> f64 {
        self.0
    }

    /// Draws one Bernoulli sample. `0` never succeeds and `1` always does.
    pub(crate) fn sample<R: Rng + ?Sized>(self, rng: &mut R) -> bool {
        rng.gen_bool(self.0)
    }
}

impl TryFrom<f64> for EdgeProbability {
    type Error = GraphError;

    fn try_from(value: f64) -> Result<Self> {
        Self::new(value)
    }
}
