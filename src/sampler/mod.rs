//! Sampling strategies for rangeable parameters.
//!
//! A strategy turns a sample count and an ordered set of ranges into a
//! [`SampleMatrix`] with one row per sample and one column per range.
//! The two strategies cover the two common experiment-design needs:
//! space-filling coverage ([`SobolSampler`]) and per-dimension linear
//! sweeps ([`LinearGridSampler`]).

pub mod grid;
pub mod sobol;

pub use grid::LinearGridSampler;
pub use sobol::SobolSampler;

use indexmap::IndexMap;
use nalgebra::DMatrix;

use crate::error::{Error, Result};
use crate::range::Range;

/// A dense sample matrix: `count` rows by `dimension` columns.
///
/// Column `i` corresponds to the `i`-th rangeable parameter in iteration
/// order, and every value in column `i` lies within that parameter's bounds.
pub type SampleMatrix = DMatrix<f64>;

/// Controls how sampled values are approximated.
///
/// Only [`SamplingMode::Float`] is implemented. Integer-rounded sampling is
/// surfaced as a variant so callers can request it, but it has no defined
/// semantics yet and always fails with [`Error::UnsupportedMode`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
pub enum SamplingMode {
    /// Sample continuous floating-point values.
    Float,
    /// Round samples to integers. Not implemented.
    Int,
}

/// Closed set of sampling strategies.
///
/// Dispatches to the concrete strategy structs; there is no open plugin
/// model, so an enum keeps the set of strategies explicit and matchable.
///
/// # Examples
///
/// ```
/// use doe_sampler::sampler::{SamplingMode, SamplingStrategy};
/// use doe_sampler::Range;
/// use indexmap::IndexMap;
///
/// let mut ranges = IndexMap::new();
/// ranges.insert("x".to_owned(), Range::new(0.0, 10.0).unwrap());
///
/// let matrix = SamplingStrategy::linear_grid()
///     .compute(5, &ranges, SamplingMode::Float)
///     .unwrap();
/// assert_eq!((matrix.nrows(), matrix.ncols()), (5, 1));
/// ```
#[derive(Clone, Debug)]
pub enum SamplingStrategy {
    /// Quasi-random Sobol sequence, bounds-mapped.
    Sobol(SobolSampler),
    /// Evenly spaced values per dimension, bounds inclusive.
    LinearGrid(LinearGridSampler),
}

impl SamplingStrategy {
    /// Creates the Sobol strategy with the default seed.
    #[must_use]
    pub fn sobol() -> Self {
        Self::Sobol(SobolSampler::new())
    }

    /// Creates the linear-grid strategy.
    #[must_use]
    pub fn linear_grid() -> Self {
        Self::LinearGrid(LinearGridSampler)
    }

    /// Computes `count` samples over the given ranges.
    ///
    /// Pure function of its inputs: the ranges are not mutated and repeated
    /// calls with identical inputs yield bit-identical matrices. An empty
    /// range set produces a `count` by zero matrix.
    ///
    /// # Errors
    ///
    /// - [`Error::EmptySampleCount`] if `count` is zero.
    /// - [`Error::UnsupportedMode`] for any mode other than
    ///   [`SamplingMode::Float`].
    /// - [`Error::SampleCountTooLarge`] / [`Error::DimensionTooLarge`] if
    ///   the Sobol strategy's sequence limits are exceeded (see
    ///   [`sobol::MAX_SAMPLE_COUNT`] and [`sobol::MAX_DIMENSION`]).
    pub fn compute(
        &self,
        count: usize,
        ranges: &IndexMap<String, Range>,
        mode: SamplingMode,
    ) -> Result<SampleMatrix> {
        if count == 0 {
            return Err(Error::EmptySampleCount);
        }
        match mode {
            SamplingMode::Float => {}
            other => return Err(Error::UnsupportedMode(other)),
        }

        trace_debug!(
            count,
            dimension = ranges.len(),
            strategy = ?self,
            "computing sample matrix"
        );

        match self {
            Self::Sobol(sampler) => sampler.compute(count, ranges),
            Self::LinearGrid(sampler) => Ok(sampler.compute(count, ranges)),
        }
    }
}
