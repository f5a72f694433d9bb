//! Decoded PMT image types

use crate::image_pipeline::pmt::layout::{PIXELS_PER_ROW, PIXEL_ARRAY_BYTES, ROWS};
use crate::image_pipeline::pmt::palette::BmpColorTable;

/// A fully decoded PMT image, ready to be written as a 4-bit BMP
#[derive(Debug, Clone)]
pub struct PmtImage {
    /// Packed pixel indices, two per byte, top row first
    pub pixels: Vec<u8>,
    /// Palette already converted to B, G, R, 0 entries
    pub palette: BmpColorTable,
}

impl PmtImage {
    pub const WIDTH: usize = PIXELS_PER_ROW;
    pub const HEIGHT: usize = ROWS;

    /// An all-zero image of the fixed PMT dimensions.
    pub fn blank() -> Self {
        Self {
            pixels: vec![0u8; PIXEL_ARRAY_BYTES],
            palette: [[0u8; 4]; 16],
        }
    }
}
