use crate::sampler::SamplingMode;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Returned when a candidate range is not a two-element list.
    #[error("not a valid range: expected a [min, max] list with exactly two entries")]
    NotARange,

    /// Returned when a range bound is not a numeric value.
    #[error("invalid range: bound at position {0} is not numeric")]
    NonNumericBound(usize),

    /// Returned when the lower bound is greater than the upper bound.
    #[error("invalid bounds: low ({low}) must be less than or equal to high ({high})")]
    InvalidBounds {
        /// The lower bound value.
        low: f64,
        /// The upper bound value.
        high: f64,
    },

    /// Returned when the column-name count disagrees with the matrix width.
    #[error("dimension mismatch: {names} column names for {columns} matrix columns")]
    DimensionMismatch {
        /// The number of column names supplied.
        names: usize,
        /// The number of columns in the sample matrix.
        columns: usize,
    },

    /// Returned when a sampling mode other than float is requested.
    #[error("sampling mode {0:?} is not implemented; only float sampling is supported")]
    UnsupportedMode(SamplingMode),

    /// Returned when a sample count of zero is requested.
    #[error("sample count must be a positive integer")]
    EmptySampleCount,

    /// Returned when the sample count exceeds the Sobol sequence length.
    #[error("sample count {count} exceeds the Sobol sequence limit of {max}")]
    SampleCountTooLarge {
        /// The requested sample count.
        count: usize,
        /// The largest supported sample count.
        max: usize,
    },

    /// Returned when the dimension exceeds the Sobol sequence support.
    #[error("dimension {dimension} exceeds the Sobol sequence limit of {max}")]
    DimensionTooLarge {
        /// The requested sampling dimension.
        dimension: usize,
        /// The largest supported dimension.
        max: usize,
    },
}

pub type Result<T> = core::result::Result<T, Error>;
