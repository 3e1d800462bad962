#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![deny(unreachable_pub)]
#![deny(clippy::correctness)]
#![deny(clippy::suspicious)]
#![deny(clippy::style)]
#![deny(clippy::complexity)]
#![deny(clippy::perf)]
#![deny(clippy::pedantic)]
#![deny(clippy::std_instead_of_core)]

//! Design-of-experiments parameter sampling.
//!
//! Takes a mixed set of named parameters — each either a fixed value or a
//! `[min, max]` range — and produces a table of sampled combinations usable
//! as simulation inputs. Ranged parameters are sampled jointly by a
//! pluggable strategy; fixed parameters pass through untouched.
//!
//! # Getting started
//!
//! ```
//! use doe_sampler::prelude::*;
//!
//! let mut params = ParameterSet::new();
//! params.insert("radius".to_owned(), ParamValue::from([0.1, 2.0]));
//! params.insert("length".to_owned(), ParamValue::from([5.0, 50.0]));
//! params.insert("material".to_owned(), ParamValue::from("steel"));
//!
//! let plan = SamplingPlan::new(&params, SamplingStrategy::sobol()).unwrap();
//! let result = plan.compute_sampling(16, SamplingMode::Float).unwrap();
//!
//! assert_eq!(result.len(), 2); // radius and length; material stays fixed
//! assert_eq!(result["radius"].len(), 16);
//! assert!(plan.fixed().contains_key("material"));
//! ```
//!
//! # Core concepts
//!
//! | Type | Role |
//! |------|------|
//! | [`ParameterSet`] | Ordered input mapping from name to value or range. |
//! | [`classify`] | Split a set into rangeable and fixed sub-mappings. |
//! | [`SamplingStrategy`](sampler::SamplingStrategy) | Turn a count and the rangeable subset into a sample matrix — [`SobolSampler`](sampler::SobolSampler) (quasi-random, space-filling) or [`LinearGridSampler`](sampler::LinearGridSampler) (per-dimension sweep). |
//! | [`SamplingPlan`] | Classification cached at construction plus a strategy; the usual entry point. |
//! | [`samples_to_map`] | Zip matrix columns with parameter names into a [`SampleResult`]. |
//!
//! Row `j` across all result entries forms one experiment instance, so the
//! result slots directly into a batch of per-experiment configuration
//! mappings for a downstream solver.
//!
//! # Feature flags
//!
//! | Flag | What it enables | Default |
//! |------|----------------|---------|
//! | `serde` | `Serialize`/`Deserialize` on the public data types | off |
//! | `tracing` | Structured log events at classification and sampling | off |

/// Emit a `tracing::info!` event when the `tracing` feature is enabled.
/// No-op otherwise.
#[cfg(feature = "tracing")]
macro_rules! trace_info {
    ($($arg:tt)*) => { tracing::info!($($arg)*) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_info {
    ($($arg:tt)*) => {};
}

/// Emit a `tracing::debug!` event when the `tracing` feature is enabled.
/// No-op otherwise.
#[cfg(feature = "tracing")]
macro_rules! trace_debug {
    ($($arg:tt)*) => { tracing::debug!($($arg)*) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_debug {
    ($($arg:tt)*) => {};
}

mod assemble;
mod design;
mod error;
mod param;
mod range;
pub mod sampler;

pub use assemble::{samples_to_map, SampleResult};
pub use design::{classify, SamplingPlan};
pub use error::{Error, Result};
pub use param::{ParamValue, ParameterSet};
pub use range::{validate_range, Range};

/// Convenient wildcard import for the most common types.
///
/// ```
/// use doe_sampler::prelude::*;
/// ```
pub mod prelude {
    pub use crate::assemble::{samples_to_map, SampleResult};
    pub use crate::design::{classify, SamplingPlan};
    pub use crate::error::{Error, Result};
    pub use crate::param::{ParamValue, ParameterSet};
    pub use crate::range::{validate_range, Range};
    pub use crate::sampler::{
        LinearGridSampler, SampleMatrix, SamplingMode, SamplingStrategy, SobolSampler,
    };
}
