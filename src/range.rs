//! Sampling ranges and range validation.
//!
//! [`validate_range`] is a validate-or-raise contract: a successful return
//! hands back the parsed [`Range`], which is the caller's proof of validity.
//! The bound-mapping math downstream subtracts the bounds without further
//! checks, so a soft `false` is never an acceptable outcome.

use crate::error::{Error, Result};
use crate::param::ParamValue;

/// A closed numeric interval `[low, high]` describing a parameter to sample.
///
/// `low <= high` is enforced at construction. A degenerate range with
/// `low == high` is structurally valid; both strategies collapse it to a
/// constant column.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Range {
    /// Lower bound (inclusive).
    pub low: f64,
    /// Upper bound (inclusive).
    pub high: f64,
}

impl Range {
    /// Creates a range after checking the bound order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidBounds`] if `low > high`.
    pub fn new(low: f64, high: f64) -> Result<Self> {
        if low > high {
            return Err(Error::InvalidBounds { low, high });
        }
        Ok(Self { low, high })
    }

    /// Maps a unit-interval point into this range: `t * (high - low) + low`.
    ///
    /// `t == 0.0` yields exactly `low`; `t == 1.0` yields exactly `high`.
    #[must_use]
    pub fn lerp(&self, t: f64) -> f64 {
        t * (self.high - self.low) + self.low
    }

    /// Returns `true` if `value` lies within `[low, high]`.
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        (self.low..=self.high).contains(&value)
    }
}

/// Checks that a candidate value is a two-element numeric interval and
/// returns it as a [`Range`].
///
/// # Errors
///
/// - [`Error::NotARange`] if the candidate is not a list of exactly two
///   elements.
/// - [`Error::NonNumericBound`] if either element is non-numeric.
/// - [`Error::InvalidBounds`] if the bounds are reversed.
pub fn validate_range(candidate: &ParamValue) -> Result<Range> {
    let ParamValue::List(items) = candidate else {
        return Err(Error::NotARange);
    };
    if items.len() != 2 {
        return Err(Error::NotARange);
    }
    let low = items[0].as_number().ok_or(Error::NonNumericBound(0))?;
    let high = items[1].as_number().ok_or(Error::NonNumericBound(1))?;
    Range::new(low, high)
}
