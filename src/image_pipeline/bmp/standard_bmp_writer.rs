use std::io::Write;
use tracing::debug;
use crate::image_pipeline::bmp::headers::{BmpFileHeader, BmpInfoHeader, FILE_SIZE};
use crate::image_pipeline::bmp::types::{ConversionConfig, ImageSizeField};
use crate::image_pipeline::bmp::writer::BmpWriter;
use crate::image_pipeline::common::error::{ConversionError, Result};
use crate::image_pipeline::pmt::layout::PIXEL_ARRAY_BYTES;
use crate::image_pipeline::pmt::types::PmtImage;

/// Writes an uncompressed, top-down, 4-bit paletted BMP.
pub struct StandardBmpWriter;

impl StandardBmpWriter {
    pub fn info_header(config: &ConversionConfig) -> BmpInfoHeader {
        let image_size = match config.image_size {
            ImageSizeField::Unspecified => 0,
            ImageSizeField::Exact => PIXEL_ARRAY_BYTES as u32,
        };
        let ppm = i32::try_from(config.pixels_per_meter).unwrap_or(i32::MAX);
        BmpInfoHeader {
            image_size,
            horizontal_ppm: ppm,
            vertical_ppm: ppm,
            ..BmpInfoHeader::PMT
        }
    }
}

impl BmpWriter for StandardBmpWriter {
    fn write_bmp(&self, image: &PmtImage, output: &mut dyn Write, config: &ConversionConfig) -> Result<()> {
        if image.pixels.len() != PIXEL_ARRAY_BYTES {
            return Err(ConversionError::SizeMismatch {
                decoded: image.pixels.len(),
                expected: PIXEL_ARRAY_BYTES,
            });
        }

        let info_header = Self::info_header(config);
        debug!(
            "Encoding BMP image: {}x{}, image_size={}",
            info_header.width, -info_header.height, info_header.image_size
        );

        let mut buffer = Vec::with_capacity(FILE_SIZE);
        BmpFileHeader::PMT.write_to(&mut buffer)?;
        info_header.write_to(&mut buffer)?;
        for entry in &image.palette {
            buffer.extend_from_slice(entry);
        }
        buffer.extend_from_slice(&image.pixels);

        output
            .write_all(&buffer)
            .and_then(|_| output.flush())
            .map_err(|e| ConversionError::OutputWriteFailure(e.to_string()))?;

        debug!("BMP encoding complete, {} bytes", buffer.len());
        Ok(())
    }
}
