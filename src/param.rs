//! Parameter value storage types.

use indexmap::IndexMap;

/// An ordered mapping from parameter name to its value or range.
///
/// Iteration order is insertion order, which fixes the column order of the
/// sample matrix and the entry order of the sampling result.
pub type ParameterSet = IndexMap<String, ParamValue>;

/// Represents a single parameter entry in a [`ParameterSet`].
///
/// A `List` of exactly two numeric elements is interpreted as a sampling
/// range by [`classify`](crate::classify); every other value, including
/// lists of any other length, is a fixed value held constant across all
/// samples.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ParamValue {
    /// A floating-point value.
    Float(f64),
    /// An integer value.
    Int(i64),
    /// A boolean flag.
    Bool(bool),
    /// A textual value, e.g. a material or solver name.
    Text(String),
    /// A list of values. Two numeric elements form a candidate range.
    List(Vec<ParamValue>),
}

impl ParamValue {
    /// Returns the value as a float if it is numeric (`Float` or `Int`).
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Float(v) => Some(*v),
            Self::Int(v) => Some(*v as f64),
            _ => None,
        }
    }

    /// Returns `true` if the value is a `List`.
    #[must_use]
    pub fn is_list(&self) -> bool {
        matches!(self, Self::List(_))
    }
}

impl From<f64> for ParamValue {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<i64> for ParamValue {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<bool> for ParamValue {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<&str> for ParamValue {
    fn from(v: &str) -> Self {
        Self::Text(v.to_owned())
    }
}

impl From<String> for ParamValue {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<[f64; 2]> for ParamValue {
    fn from(bounds: [f64; 2]) -> Self {
        Self::List(bounds.iter().map(|&v| Self::Float(v)).collect())
    }
}

impl From<Vec<f64>> for ParamValue {
    fn from(values: Vec<f64>) -> Self {
        Self::List(values.into_iter().map(Self::Float).collect())
    }
}
