//! Image processing pipeline module
//!
//! This module provides a structured approach to the PMT to BMP conversion,
//! with separate modules for PMT decoding, BMP writing, and conversion orchestration.

pub mod pmt;
pub mod bmp;
pub mod conversions;
pub mod common;

pub use common::{
    ConversionError,
    InputSection,
    Result,
};

pub use pmt::{
    PmtImage,
    PmtImageReader,
    StandardPmtReader,
    decode_pmt_into,
};

pub use bmp::{
    ImageSizeField,
    ConversionConfig,
    ConversionConfigBuilder,
    BmpWriter,
    StandardBmpWriter,
};

pub use conversions::{
    PmtToBmpPipeline,
};
