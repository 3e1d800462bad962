//! Quasi-random sampling using Sobol low-discrepancy sequences.
//!
//! [`SobolSampler`] fills the unit hypercube more uniformly than
//! pseudo-random sampling: where random draws may cluster by chance, a
//! Sobol sequence (scrambled via the Burley 2020 algorithm) is constructed
//! to spread points evenly across all dimensions. Each sample row maps to a
//! sequence index and each rangeable parameter to a sequence dimension, so
//! the raw sequence depends only on `(count, dimension, seed)` — never on
//! the actual bounds. The bounds enter in a second step that stretches each
//! unit-interval column onto its parameter's `[low, high]` interval.
//!
//! The backing sequence supports at most [`MAX_SAMPLE_COUNT`] samples and
//! [`MAX_DIMENSION`] dimensions; requests beyond either limit are rejected
//! up front rather than handed to the sequence generator, whose guarantees
//! stop there. Sobol uniformity is strongest up to roughly 20 dimensions;
//! beyond that the advantage over random sampling diminishes.

use indexmap::IndexMap;
use sobol_burley::sample;

use crate::error::{Error, Result};
use crate::range::Range;
use crate::sampler::SampleMatrix;

/// The largest supported sample count: the backing Sobol sequence is
/// defined for indices below 2^16.
pub const MAX_SAMPLE_COUNT: usize = 1 << 16;

/// The largest supported dimension: the backing Sobol sequence carries
/// direction numbers for 256 dimensions.
pub const MAX_DIMENSION: usize = 256;

/// Quasi-random sampler backed by an Owen-scrambled Sobol sequence.
///
/// Fully deterministic: the same `(count, dimension, seed)` triple always
/// yields the same raw sequence, and therefore the same mapped matrix for
/// the same bounds. Different seeds produce statistically independent
/// sequences.
#[derive(Clone, Copy, Debug, Default)]
pub struct SobolSampler {
    seed: u32,
}

impl SobolSampler {
    /// Creates a Sobol sampler with the default seed of 0.
    #[must_use]
    pub fn new() -> Self {
        Self::with_seed(0)
    }

    /// Creates a Sobol sampler with the given seed.
    #[must_use]
    pub fn with_seed(seed: u32) -> Self {
        Self { seed }
    }

    /// Generates the raw pre-mapping sequence: values in `[0, 1)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SampleCountTooLarge`] or
    /// [`Error::DimensionTooLarge`] when the request exceeds
    /// [`MAX_SAMPLE_COUNT`] or [`MAX_DIMENSION`].
    #[allow(clippy::cast_possible_truncation)]
    pub fn unit_matrix(&self, count: usize, dimension: usize) -> Result<SampleMatrix> {
        check_sequence_domain(count, dimension)?;
        Ok(SampleMatrix::from_fn(count, dimension, |row, col| {
            f64::from(sample(row as u32, col as u32, self.seed))
        }))
    }

    /// Computes `count` samples, one column per range in iteration order.
    ///
    /// Column `i` is the `i`-th sequence dimension remapped onto
    /// `[low_i, high_i]` via `raw * (high - low) + low`; a raw value of 0
    /// lands exactly on `low`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SampleCountTooLarge`] or
    /// [`Error::DimensionTooLarge`] when the request exceeds
    /// [`MAX_SAMPLE_COUNT`] or [`MAX_DIMENSION`].
    #[allow(clippy::cast_possible_truncation)]
    pub fn compute(&self, count: usize, ranges: &IndexMap<String, Range>) -> Result<SampleMatrix> {
        check_sequence_domain(count, ranges.len())?;
        let bounds: Vec<Range> = ranges.values().copied().collect();
        Ok(SampleMatrix::from_fn(count, bounds.len(), |row, col| {
            let raw = f64::from(sample(row as u32, col as u32, self.seed));
            bounds[col].lerp(raw)
        }))
    }
}

/// Rejects requests outside the backing sequence's defined domain.
fn check_sequence_domain(count: usize, dimension: usize) -> Result<()> {
    if count > MAX_SAMPLE_COUNT {
        return Err(Error::SampleCountTooLarge {
            count,
            max: MAX_SAMPLE_COUNT,
        });
    }
    if dimension > MAX_DIMENSION {
        return Err(Error::DimensionTooLarge {
            dimension,
            max: MAX_DIMENSION,
        });
    }
    Ok(())
}
