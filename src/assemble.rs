//! Assembly of sample matrices into name-keyed results.

use indexmap::IndexMap;

use crate::error::{Error, Result};
use crate::sampler::SampleMatrix;

/// The assembled sampling output: parameter name to its ordered column of
/// sampled values. Row `j` across all entries forms one experiment instance.
pub type SampleResult = IndexMap<String, Vec<f64>>;

/// Zips matrix columns with parameter names into a [`SampleResult`].
///
/// The `i`-th name maps to column `i` as an ordered sequence. Names are
/// expected to be unique (the classifier guarantees it); if a name repeats,
/// the later column overwrites the earlier one — specified behavior, but
/// not one callers should rely on.
///
/// # Errors
///
/// Returns [`Error::DimensionMismatch`] if the number of names differs from
/// the number of matrix columns.
pub fn samples_to_map<'a, I>(samples: &SampleMatrix, names: I) -> Result<SampleResult>
where
    I: IntoIterator<Item = &'a str>,
{
    let names: Vec<&str> = names.into_iter().collect();
    if names.len() != samples.ncols() {
        return Err(Error::DimensionMismatch {
            names: names.len(),
            columns: samples.ncols(),
        });
    }

    let mut result = SampleResult::with_capacity(names.len());
    for (i, name) in names.into_iter().enumerate() {
        let column: Vec<f64> = samples.column(i).iter().copied().collect();
        result.insert(name.to_owned(), column);
    }
    Ok(result)
}
