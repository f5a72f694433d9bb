//! BMP writing module
//!
//! This module writes decoded PMT images as uncompressed 4-bit paletted BMP files.

pub mod headers;
mod writer;
mod standard_bmp_writer;
pub mod types;

pub use headers::{BmpFileHeader, BmpInfoHeader};
pub use writer::BmpWriter;
pub use standard_bmp_writer::StandardBmpWriter;
pub use types::{ConversionConfig, ConversionConfigBuilder, ImageSizeField};
