//! Chart input model.
//!
//! [`ChartData`] is the explicit form of the input shapes a renderer
//! accepts. Dynamic JSON values are classified structurally, in order:
//!
//! 1. an array whose elements are all numbers becomes a bar series
//!    (the empty array included). Booleans count as numbers, `true` as 1
//!    and `false` as 0;
//! 2. an object holding both `x` and `y` becomes a paired series;
//! 3. anything else is [`ChartData::Unrecognized`] and renders as an empty
//!    chart rather than failing.

use crate::error::{Axis, Error, Result};
use serde_json::Value;

/// Data to be charted.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ChartData {
    /// One bar per value, positioned at the value's index.
    NumericSeries(Vec<f64>),
    /// One scatter point per index pairing `x[i]` with `y[i]`.
    PairedSeries {
        /// Horizontal coordinates.
        x: Vec<f64>,
        /// Vertical coordinates.
        y: Vec<f64>,
    },
    /// Input of no supported shape; renders blank axes.
    #[default]
    Unrecognized,
}

/// Which chart a [`ChartData`] value produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    /// Bars indexed by position.
    Bar,
    /// Points at `(x, y)`.
    Scatter,
    /// Nothing drawn.
    Blank,
}

impl ChartData {
    /// A bar series.
    #[must_use]
    pub fn numeric(values: impl Into<Vec<f64>>) -> Self {
        Self::NumericSeries(values.into())
    }

    /// A paired series; both axes must have the same length.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DataLengthMismatch`] when the lengths differ.
    pub fn paired(x: impl Into<Vec<f64>>, y: impl Into<Vec<f64>>) -> Result<Self> {
        let (x, y) = (x.into(), y.into());
        if x.len() != y.len() {
            return Err(Error::DataLengthMismatch {
                x_len: x.len(),
                y_len: y.len(),
            });
        }
        Ok(Self::PairedSeries { x, y })
    }

    /// Classify a JSON value by shape.
    ///
    /// # Errors
    ///
    /// Only objects that *are* paired series can fail: when `x` or `y` is not
    /// an array of numbers, or the two lengths differ. Every other shape
    /// classifies successfully, falling back to [`ChartData::Unrecognized`].
    pub fn from_json(value: &Value) -> Result<Self> {
        match value {
            Value::Array(items) => Ok(numeric_array(items).map_or(Self::Unrecognized, Self::NumericSeries)),
            Value::Object(map) => match (map.get("x"), map.get("y")) {
                (Some(x), Some(y)) => Self::paired(axis_values(x, Axis::X)?, axis_values(y, Axis::Y)?),
                _ => Ok(Self::Unrecognized),
            },
            _ => Ok(Self::Unrecognized),
        }
    }

    /// Parse JSON text and classify it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Json`] for malformed text, otherwise as
    /// [`ChartData::from_json`].
    pub fn from_json_str(text: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(text)?;
        Self::from_json(&value)
    }

    /// The chart this data renders as.
    #[must_use]
    pub const fn kind(&self) -> ChartKind {
        match self {
            Self::NumericSeries(_) => ChartKind::Bar,
            Self::PairedSeries { .. } => ChartKind::Scatter,
            Self::Unrecognized => ChartKind::Blank,
        }
    }

    /// Number of marks (bars or points) the data describes.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::NumericSeries(values) => values.len(),
            Self::PairedSeries { x, .. } => x.len(),
            Self::Unrecognized => 0,
        }
    }

    /// True when no marks would be drawn.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<Vec<f64>> for ChartData {
    fn from(values: Vec<f64>) -> Self {
        Self::NumericSeries(values)
    }
}

impl From<&[f64]> for ChartData {
    fn from(values: &[f64]) -> Self {
        Self::NumericSeries(values.to_vec())
    }
}

impl TryFrom<&Value> for ChartData {
    type Error = Error;

    fn try_from(value: &Value) -> Result<Self> {
        Self::from_json(value)
    }
}

fn as_number(value: &Value) -> Option<f64> {
    match value {
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        other => other.as_f64(),
    }
}

fn numeric_array(items: &[Value]) -> Option<Vec<f64>> {
    items.iter().map(as_number).collect()
}

fn axis_values(value: &Value, axis: Axis) -> Result<Vec<f64>> {
    let Value::Array(items) = value else {
        return Err(Error::NonNumeric { axis, index: None });
    };
    items
        .iter()
        .enumerate()
        .map(|(i, v)| as_number(v).ok_or(Error::NonNumeric { axis, index: Some(i) }))
        .collect()
}
