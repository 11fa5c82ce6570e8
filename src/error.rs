//! Error types for chart-uri operations.

use std::io;
use thiserror::Error;

/// Result type alias using [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Which side of a paired series an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Horizontal (`x`) values.
    X,
    /// Vertical (`y`) values.
    Y,
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::X => f.write_str("x"),
            Self::Y => f.write_str("y"),
        }
    }
}

/// Errors that can occur while rendering a chart.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error (configuration files).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// PNG encoding error.
    #[error("PNG encoding error: {0}")]
    PngEncoding(#[from] png::EncodingError),

    /// Configuration could not be parsed.
    #[error("Invalid configuration: {0}")]
    Config(#[from] serde_yaml_ng::Error),

    /// Input text is not valid JSON.
    #[error("Invalid JSON input: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid dimensions for the canvas.
    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions {
        /// Width value.
        width: u32,
        /// Height value.
        height: u32,
    },

    /// Data length mismatch between x and y arrays.
    #[error("Data length mismatch: x has {x_len} elements, y has {y_len} elements")]
    DataLengthMismatch {
        /// Length of x data.
        x_len: usize,
        /// Length of y data.
        y_len: usize,
    },

    /// Scale domain error (e.g., an empty or degenerate extent).
    #[error("Scale domain error: {0}")]
    ScaleDomain(String),

    /// A paired-series axis holds something other than an array of numbers.
    #[error("{}", non_numeric_message(.axis, .index))]
    NonNumeric {
        /// Offending axis.
        axis: Axis,
        /// Element index, or `None` when the axis value itself is not an array.
        index: Option<usize>,
    },

    /// Color parsing error.
    #[error("Invalid color: {0}")]
    InvalidColor(String),

    /// String is not a PNG data URI.
    #[error("Invalid data URI: {0}")]
    InvalidDataUri(String),

    /// Base64 payload could not be decoded.
    #[error("Base64 decoding error: {0}")]
    Base64(#[from] base64::DecodeError),
}

fn non_numeric_message(axis: &Axis, index: &Option<usize>) -> String {
    match index {
        Some(i) => format!("Non-numeric value in '{axis}' at index {i}"),
        None => format!("'{axis}' must be an array of numbers"),
    }
}
