//! # chart-uri
//!
//! Render a data series as a bar chart or scatter plot and return the image
//! as an embeddable `data:image/png;base64,...` string.
//!
//! Rendering is pure Rust: a small raster core (framebuffer, primitives,
//! bitmap text) built on [trueno](https://crates.io/crates/trueno) vectors,
//! encoded with the `png` crate. No plotting backend, fonts, or browser are
//! involved.
//!
//! ## Input shapes
//!
//! - A sequence of numbers draws one bar per value at its index.
//! - An `{"x": [...], "y": [...]}` mapping draws one point per pair.
//! - Anything else draws an empty set of axes.
//!
//! ## Quick Start
//!
//! ```rust
//! use chart_uri::prelude::*;
//! use serde_json::json;
//!
//! let uri = chart_uri::render_json(&json!([5, 10, 15, 20, 25]))?;
//! assert!(uri.starts_with("data:image/png;base64,"));
//!
//! let renderer = Renderer::new(RenderConfig::new().dpi(50));
//! let figure = renderer.render_figure(&ChartData::paired(vec![1.0, 2.0], vec![3.0, 4.0])?)?;
//! assert_eq!(figure.stats().points, 2);
//! # Ok::<(), chart_uri::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `wasm`: WebAssembly bindings via `wasm-bindgen`

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
#![cfg_attr(test, allow(clippy::unwrap_used))]
// Allow common patterns in graphics/visualization code
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::similar_names)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Core Modules
// ============================================================================

/// Color types and hex parsing.
pub mod color;

/// Core framebuffer for pixel rendering.
pub mod framebuffer;

/// Geometric primitives (points, rectangles).
pub mod geometry;

/// Scale functions, axis limits and ticks.
pub mod scale;

// ============================================================================
// Charting Modules
// ============================================================================

/// Chart input model and JSON classification.
pub mod data;

/// Render configuration.
pub mod config;

/// Mark layers (bars, scatter points).
pub mod plots;

/// Single-axes figure.
pub mod figure;

/// The data-to-URI renderer.
pub mod renderer;

// ============================================================================
// Rendering Modules
// ============================================================================

/// Rasterization of primitives and text.
pub mod render;

/// Output encoders (PNG, data URI).
pub mod output;

/// WebAssembly bindings for browser usage.
#[cfg(feature = "wasm")]
#[cfg_attr(docsrs, doc(cfg(feature = "wasm")))]
pub mod wasm;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for chart-uri operations.
pub mod error;

pub use data::{ChartData, ChartKind};
pub use error::{Error, Result};
pub use renderer::{render, render_json, Renderer};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and traits for convenient imports.
///
/// ```rust
/// use chart_uri::prelude::*;
/// ```
pub mod prelude {
    pub use crate::color::Rgba;
    pub use crate::config::RenderConfig;
    pub use crate::data::{ChartData, ChartKind};
    pub use crate::error::{Error, Result};
    pub use crate::figure::Figure;
    pub use crate::framebuffer::Framebuffer;
    pub use crate::geometry::{Point, Rect};
    pub use crate::output::{DataUri, PngEncoder};
    pub use crate::plots::{BarChart, DrawStats, Mark, ScatterPlot};
    pub use crate::renderer::Renderer;
    pub use crate::scale::{LinearScale, Scale};
}

// ============================================================================
// Re-exports
// ============================================================================

/// Re-export trueno for direct access to SIMD operations.
pub use trueno;
