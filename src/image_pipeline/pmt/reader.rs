use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::pmt::types::PmtImage;

pub trait PmtImageReader {
    fn read_pmt(&self, data: &[u8]) -> Result<PmtImage>;
}
