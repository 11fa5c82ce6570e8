//! Scatter plot example.
//!
//! Run with: `cargo run --example scatter_plot`

use chart_uri::prelude::*;

fn main() -> Result<()> {
    let x: Vec<f64> = (0..50).map(|i| f64::from(i) * 0.2).collect();
    let y: Vec<f64> = x.iter().map(|v| v.sin() * 10.0 + v).collect();

    let renderer = Renderer::new(RenderConfig::new().series_color(Rgba::rgb(0xd6, 0x27, 0x28)));
    let mut figure = renderer.render_figure(&ChartData::paired(x, y)?)?;
    println!("Drew {} points", figure.stats().points);

    let path = std::env::temp_dir().join("chart_uri_scatter.png");
    PngEncoder::write_to_file(figure.framebuffer(), &path)?;
    println!("Saved {}", path.display());

    let uri = DataUri::encode_png(&figure.into_png()?);
    println!("{}...", &uri[..50.min(uri.len())]);

    Ok(())
}
