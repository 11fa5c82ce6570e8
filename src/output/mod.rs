//! Output encoders (PNG bytes and data URIs).

mod data_uri;
mod png_encoder;

pub use data_uri::{DataUri, PNG_DATA_URI_PREFIX};
pub use png_encoder::{PngEncoder, PNG_SIGNATURE};
