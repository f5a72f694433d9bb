//! Pipeline conversions module
//!
//! This module contains orchestration logic for PMT to BMP conversion.

mod pmt_to_bmp;

#[cfg(test)]
mod tests;

pub use pmt_to_bmp::PmtToBmpPipeline;
