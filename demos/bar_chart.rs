//! Bar chart example.
//!
//! Run with: `cargo run --example bar_chart`

use chart_uri::prelude::*;
use serde_json::json;

fn main() -> Result<()> {
    let uri = chart_uri::render_json(&json!([5, 10, 15, 20, 25]))?;

    let preview: String = uri.chars().take(50).collect();
    println!("{preview}...");
    println!("({} characters)", uri.len());

    // Write the decoded image next to the build output for a quick look.
    let png = DataUri::decode(&uri)?;
    let path = std::env::temp_dir().join("chart_uri_bar.png");
    std::fs::write(&path, png)?;
    println!("Saved {}", path.display());

    Ok(())
}
