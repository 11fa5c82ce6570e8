//! Data to data URI rendering.
//!
//! ```rust
//! use chart_uri::{render, ChartData};
//!
//! let uri = render(&ChartData::numeric(vec![5.0, 10.0, 15.0, 20.0, 25.0]))?;
//! assert!(uri.starts_with("data:image/png;base64,"));
//! # Ok::<(), chart_uri::Error>(())
//! ```

use crate::config::RenderConfig;
use crate::data::ChartData;
use crate::error::Result;
use crate::figure::Figure;
use crate::output::DataUri;
use serde_json::Value;

/// Renders chart data as PNG images.
///
/// Every call draws into its own [`Figure`], so a renderer can be shared
/// across threads freely.
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    config: RenderConfig,
}

impl Renderer {
    /// Create a renderer with the given configuration.
    #[must_use]
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    /// The configuration used for every render.
    #[must_use]
    pub const fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Render `data` to a `data:image/png;base64,` URI.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration does not describe a valid
    /// canvas, a paired series has unequal lengths, or PNG encoding fails.
    pub fn render(&self, data: &ChartData) -> Result<String> {
        let png = self.render_png(data)?;
        let uri = DataUri::encode_png(&png);
        tracing::debug!(png_bytes = png.len(), uri_len = uri.len(), "encoded data uri");
        Ok(uri)
    }

    /// Classify a JSON value and render it.
    ///
    /// # Errors
    ///
    /// As [`Renderer::render`], plus the paired-series validation errors of
    /// [`ChartData::from_json`].
    pub fn render_json(&self, value: &Value) -> Result<String> {
        let data = ChartData::from_json(value)?;
        self.render(&data)
    }

    /// Render `data` to PNG bytes.
    ///
    /// # Errors
    ///
    /// As [`Renderer::render`].
    pub fn render_png(&self, data: &ChartData) -> Result<Vec<u8>> {
        self.render_figure(data)?.into_png()
    }

    /// Draw `data` into a new figure without encoding it.
    ///
    /// # Errors
    ///
    /// As [`Renderer::render`], minus encoding.
    pub fn render_figure(&self, data: &ChartData) -> Result<Figure> {
        let mut figure = Figure::new(&self.config)?;
        let (width, height) = figure.size();
        tracing::debug!(
            kind = ?data.kind(),
            len = data.len(),
            width,
            height,
            "rendering chart"
        );

        match data {
            ChartData::NumericSeries(values) => {
                figure.bar(values);
                figure.set_xlabel("Index");
                figure.set_ylabel("Value");
                figure.set_title("Data Visualization");
            }
            ChartData::PairedSeries { x, y } => {
                figure.scatter(x, y)?;
                figure.set_xlabel("X");
                figure.set_ylabel("Y");
                figure.set_title("Scatter Plot");
            }
            ChartData::Unrecognized => {}
        }

        Ok(figure)
    }
}

/// Render `data` with the default configuration.
///
/// # Errors
///
/// See [`Renderer::render`].
pub fn render(data: &ChartData) -> Result<String> {
    Renderer::default().render(data)
}

/// Classify and render a JSON value with the default configuration.
///
/// # Errors
///
/// See [`Renderer::render_json`].
pub fn render_json(value: &Value) -> Result<String> {
    Renderer::default().render_json(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgba;
    use crate::error::Error;
    use crate::output::{PNG_DATA_URI_PREFIX, PNG_SIGNATURE};
    use serde_json::json;

    fn small() -> Renderer {
        Renderer::new(RenderConfig::new().figsize(4.0, 3.0).dpi(50))
    }

    #[test]
    fn test_render_bar_uri() {
        let uri = render(&ChartData::numeric(vec![5.0, 10.0, 15.0, 20.0, 25.0])).unwrap();
        assert!(uri.starts_with(PNG_DATA_URI_PREFIX));

        let png = DataUri::decode(&uri).unwrap();
        assert_eq!(&png[..8], &PNG_SIGNATURE);
    }

    #[test]
    fn test_bar_figure_labels_and_stats() {
        let figure = small().render_figure(&ChartData::numeric(vec![1.0, 2.0, 3.0])).unwrap();
        assert_eq!(figure.stats().bars, 3);
        assert_eq!(figure.stats().points, 0);
        assert_eq!(figure.title(), Some("Data Visualization"));
    }

    #[test]
    fn test_scatter_figure() {
        let data = ChartData::paired(vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]).unwrap();
        let figure = small().render_figure(&data).unwrap();
        assert_eq!(figure.stats().points, 3);
        assert_eq!(figure.title(), Some("Scatter Plot"));
    }

    #[test]
    fn test_unrecognized_is_blank_axes() {
        let mut figure = small().render_figure(&ChartData::Unrecognized).unwrap();
        assert_eq!(figure.stats().total(), 0);
        assert_eq!(figure.title(), None);
        assert_eq!(figure.limits(), ((0.0, 1.0), (0.0, 1.0)));
        assert_eq!(figure.framebuffer().count_color(Rgba::SERIES_BLUE), 0);
    }

    #[test]
    fn test_render_json_shapes() {
        let renderer = small();
        for value in [json!([1, 2, 3]), json!([]), json!({"x": [1], "y": [2]}), json!("hello"), json!(42)] {
            let uri = renderer.render_json(&value).unwrap();
            assert!(uri.starts_with(PNG_DATA_URI_PREFIX), "{value}");
        }
    }

    #[test]
    fn test_render_json_mismatch_errors() {
        let err = small().render_json(&json!({"x": [1, 2], "y": [1]})).unwrap_err();
        assert!(matches!(err, Error::DataLengthMismatch { x_len: 2, y_len: 1 }));
    }

    #[test]
    fn test_invalid_config_errors() {
        let renderer = Renderer::new(RenderConfig::new().dpi(0));
        assert!(matches!(
            renderer.render(&ChartData::numeric(vec![1.0])),
            Err(Error::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn test_render_is_deterministic() {
        let data = ChartData::numeric(vec![3.0, 1.0, 4.0, 1.0, 5.0]);
        assert_eq!(small().render(&data).unwrap(), small().render(&data).unwrap());
    }

    #[test]
    fn test_renderer_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Renderer>();
    }
}
