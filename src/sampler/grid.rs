//! Linear-grid sampling: evenly spaced values per dimension.

use indexmap::IndexMap;

use crate::range::Range;
use crate::sampler::SampleMatrix;

/// Deterministic sampler producing an evenly spaced sweep per dimension.
///
/// Column `i` holds `count` values from `low_i` to `high_i` inclusive, with
/// uniform spacing `(high - low) / (count - 1)`; a count of 1 yields exactly
/// `low_i`. Each column is linear in its own bounds independently; rows are
/// aligned by index only. This is deliberately not a full factorial grid —
/// there is no cross-dimension combinatorial expansion.
#[derive(Clone, Copy, Debug, Default)]
pub struct LinearGridSampler;

impl LinearGridSampler {
    /// Computes `count` evenly spaced samples, one column per range in
    /// iteration order.
    #[must_use]
    pub fn compute(&self, count: usize, ranges: &IndexMap<String, Range>) -> SampleMatrix {
        let bounds: Vec<Range> = ranges.values().copied().collect();
        SampleMatrix::from_fn(count, bounds.len(), |row, col| {
            grid_point(bounds[col], row, count)
        })
    }
}

/// Returns the `row`-th of `count` evenly spaced points in `range`.
///
/// The endpoints are returned exactly rather than accumulated, so the first
/// point is `range.low` and the last is `range.high` with no float drift.
#[allow(clippy::cast_precision_loss)]
fn grid_point(range: Range, row: usize, count: usize) -> f64 {
    if row == 0 || count == 1 {
        return range.low;
    }
    if row == count - 1 {
        return range.high;
    }
    let step = (range.high - range.low) / (count - 1) as f64;
    range.low + row as f64 * step
}
