//! WebAssembly bindings.
//!
//! # Usage (JavaScript)
//!
//! ```javascript
//! import init, { visualize_data } from 'chart-uri';
//!
//! await init();
//!
//! document.getElementById('chart').src = visualize_data('[5, 10, 15, 20, 25]');
//! ```

use wasm_bindgen::prelude::*;

use crate::config::RenderConfig;
use crate::data::ChartData;
use crate::renderer::Renderer;

fn to_js(e: crate::Error) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn renderer(config_yaml: Option<String>) -> Result<Renderer, JsValue> {
    let config = match config_yaml {
        Some(yaml) => RenderConfig::parse(&yaml).map_err(to_js)?,
        None => RenderConfig::default(),
    };
    Ok(Renderer::new(config))
}

/// Render JSON chart data to a `data:image/png;base64,` URI.
///
/// `config_yaml` optionally overrides the render configuration.
#[wasm_bindgen]
pub fn visualize_data(json: &str, config_yaml: Option<String>) -> Result<String, JsValue> {
    let data = ChartData::from_json_str(json).map_err(to_js)?;
    renderer(config_yaml)?.render(&data).map_err(to_js)
}

/// Render JSON chart data to raw PNG bytes (a `Uint8Array` in JavaScript).
#[wasm_bindgen]
pub fn visualize_png(json: &str, config_yaml: Option<String>) -> Result<Vec<u8>, JsValue> {
    let data = ChartData::from_json_str(json).map_err(to_js)?;
    renderer(config_yaml)?.render_png(&data).map_err(to_js)
}

/// Get the library version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
