//! Converter for the legacy PMT handheld-scanner raster format into
//! uncompressed 4-bit BMP files.

pub mod image_pipeline;
pub mod logger;
