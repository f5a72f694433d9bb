use std::io::Write;
use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::pmt::types::PmtImage;
use crate::image_pipeline::bmp::types::ConversionConfig;

pub trait BmpWriter {
    fn write_bmp(&self, image: &PmtImage, output: &mut dyn Write, config: &ConversionConfig) -> Result<()>;
}
