//! Parameter classification and the sampling plan.
//!
//! [`classify`] splits a [`ParameterSet`] into the rangeable subset (valid
//! two-element numeric intervals, sampled) and the fixed subset (everything
//! else, held constant). [`SamplingPlan`] bundles the classification result
//! with a strategy so the split happens exactly once, up front.

use indexmap::IndexMap;

use crate::assemble::{samples_to_map, SampleResult};
use crate::error::Result;
use crate::param::{ParamValue, ParameterSet};
use crate::range::{validate_range, Range};
use crate::sampler::{SampleMatrix, SamplingMode, SamplingStrategy};

/// Splits a parameter set into (rangeable, fixed) sub-mappings.
///
/// The two key sets partition the input exactly, each preserving the
/// original relative order. An entry is rangeable iff it is a list of
/// exactly two elements that [`validate_range`] accepts. Lists of any other
/// length are treated as fixed values, not as malformed ranges. Only
/// top-level entries are inspected.
///
/// # Errors
///
/// Propagates the [`validate_range`] error for the first two-element list
/// with a non-numeric element or reversed bounds; processing stops there.
///
/// # Examples
///
/// ```
/// use doe_sampler::{classify, ParamValue, ParameterSet};
///
/// let mut params = ParameterSet::new();
/// params.insert("radius".to_owned(), ParamValue::from([0.1, 2.0]));
/// params.insert("material".to_owned(), ParamValue::from("steel"));
///
/// let (rangeable, fixed) = classify(&params).unwrap();
/// assert!(rangeable.contains_key("radius"));
/// assert!(fixed.contains_key("material"));
/// ```
pub fn classify(values: &ParameterSet) -> Result<(IndexMap<String, Range>, ParameterSet)> {
    let mut rangeable = IndexMap::new();
    let mut fixed = ParameterSet::new();

    for (name, value) in values {
        match value {
            ParamValue::List(items) if items.len() == 2 => {
                let range = validate_range(value)?;
                rangeable.insert(name.clone(), range);
            }
            other => {
                fixed.insert(name.clone(), other.clone());
            }
        }
    }

    trace_debug!(
        rangeable = rangeable.len(),
        fixed = fixed.len(),
        "classified parameter set"
    );
    Ok((rangeable, fixed))
}

/// An immutable sampling context: classified parameters plus a strategy.
///
/// Construction classifies the parameter set eagerly; the plan itself never
/// mutates afterwards, so a plan may be shared across threads freely. Each
/// compute call produces a fresh matrix or result owned by the caller.
///
/// # Examples
///
/// ```
/// use doe_sampler::sampler::{SamplingMode, SamplingStrategy};
/// use doe_sampler::{ParamValue, ParameterSet, SamplingPlan};
///
/// let mut params = ParameterSet::new();
/// params.insert("x".to_owned(), ParamValue::from([0.0, 10.0]));
/// params.insert("mat".to_owned(), ParamValue::from("steel"));
///
/// let plan = SamplingPlan::new(&params, SamplingStrategy::linear_grid()).unwrap();
/// assert_eq!(plan.dimension(), 1);
///
/// let result = plan.compute_sampling(4, SamplingMode::Float).unwrap();
/// assert_eq!(result["x"], vec![0.0, 10.0 / 3.0, 20.0 / 3.0, 10.0]);
/// ```
#[derive(Clone, Debug)]
pub struct SamplingPlan {
    strategy: SamplingStrategy,
    rangeable: IndexMap<String, Range>,
    fixed: ParameterSet,
}

impl SamplingPlan {
    /// Classifies the parameter set and builds a plan for the strategy.
    ///
    /// # Errors
    ///
    /// Propagates the first classification error; see [`classify`].
    pub fn new(values: &ParameterSet, strategy: SamplingStrategy) -> Result<Self> {
        let (rangeable, fixed) = classify(values)?;
        trace_info!(
            dimension = rangeable.len(),
            fixed = fixed.len(),
            "sampling plan created"
        );
        Ok(Self {
            strategy,
            rangeable,
            fixed,
        })
    }

    /// The number of rangeable parameters being jointly sampled.
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.rangeable.len()
    }

    /// The ordered rangeable subset; iteration order is column order.
    #[must_use]
    pub fn rangeable(&self) -> &IndexMap<String, Range> {
        &self.rangeable
    }

    /// The fixed parameters, unsampled and available for substitution.
    #[must_use]
    pub fn fixed(&self) -> &ParameterSet {
        &self.fixed
    }

    /// Computes the raw sample matrix: `count` rows, [`dimension`] columns.
    ///
    /// # Errors
    ///
    /// See [`SamplingStrategy::compute`].
    ///
    /// [`dimension`]: SamplingPlan::dimension
    pub fn compute_matrix(&self, count: usize, mode: SamplingMode) -> Result<SampleMatrix> {
        self.strategy.compute(count, &self.rangeable, mode)
    }

    /// Computes samples and assembles them into a name-keyed result.
    ///
    /// Each rangeable parameter maps to its sampled column as an ordered
    /// sequence of `count` values; row `j` across all entries forms one
    /// experiment instance.
    ///
    /// # Errors
    ///
    /// See [`SamplingStrategy::compute`].
    pub fn compute_sampling(&self, count: usize, mode: SamplingMode) -> Result<SampleResult> {
        let matrix = self.compute_matrix(count, mode)?;
        samples_to_map(&matrix, self.rangeable.keys().map(String::as_str))
    }
}
