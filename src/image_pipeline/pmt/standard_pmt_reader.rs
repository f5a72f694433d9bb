//! PMT reader backed by the in-crate RLE and plane decoders.

use std::io::Cursor;

use tracing::debug;

use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::pmt::decode::decode_pmt_into;
use crate::image_pipeline::pmt::reader::PmtImageReader;
use crate::image_pipeline::pmt::types::PmtImage;

/// Decodes the fixed 840x888 six-group PMT layout.
pub struct StandardPmtReader;

impl PmtImageReader for StandardPmtReader {
    /// Decodes a complete PMT file held in memory.
    ///
    /// Bytes after the color table are ignored.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use pmt2bmp::image_pipeline::{PmtImageReader, StandardPmtReader};
    ///
    /// let bytes = std::fs::read("scan.pmt").unwrap();
    /// let image = StandardPmtReader.read_pmt(&bytes).unwrap();
    /// assert_eq!(image.pixels.len(), 372_960);
    /// ```
    fn read_pmt(&self, data: &[u8]) -> Result<PmtImage> {
        debug!("Decoding PMT image, {} bytes", data.len());

        let mut image = PmtImage::blank();
        let mut cursor = Cursor::new(data);
        let written = decode_pmt_into(&mut cursor, &mut image.pixels, &mut image.palette)?;

        let trailing = data.len() as u64 - cursor.position();
        if trailing > 0 {
            debug!("Ignoring {} trailing bytes after color table", trailing);
        }
        debug!("Decoded {} pixel bytes", written);

        Ok(image)
    }
}
