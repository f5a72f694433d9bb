use std::io::Read;

use tracing::{debug, error, info_span, instrument};

use crate::image_pipeline::common::error::{InputSection, Result};
use crate::image_pipeline::pmt::group_reader::{read_group, read_section};
use crate::image_pipeline::pmt::layout::{
    FOOTER_RESERVED_BYTES, GROUP_BYTES, GROUPS, PACKED_GROUP_BYTES, PIXEL_ARRAY_BYTES,
    RAW_COLOR_TABLE_BYTES,
};
use crate::image_pipeline::pmt::palette::{convert_color_table, parse_color_table, BmpColorTable};
use crate::image_pipeline::pmt::planes::reassemble_group;
use crate::image_pipeline::pmt::rle::decode_rle;

/// Decodes a complete PMT stream into caller-supplied buffers.
///
/// For each of the six groups: read the length-prefixed raw bytes, RLE-decode
/// them to exactly one group, and reassemble the bit planes into the group's
/// slice of `pixels`. The reserved footer bytes are then skipped and the
/// trailing color table is converted into `palette`.
///
/// Returns the number of pixel bytes written, always [`PIXEL_ARRAY_BYTES`].
///
/// Any failure aborts the whole decode; `pixels` may hold partial data
/// afterwards and must not be used.
///
/// # Panics
///
/// If `pixels` is not exactly [`PIXEL_ARRAY_BYTES`] long.
#[instrument(skip_all)]
pub fn decode_pmt_into<R: Read + ?Sized>(
    reader: &mut R,
    pixels: &mut [u8],
    palette: &mut BmpColorTable,
) -> Result<usize> {
    assert_eq!(pixels.len(), PIXEL_ARRAY_BYTES, "pixel array has wrong length");

    let mut raw_group = vec![0u8; GROUP_BYTES];
    let mut decoded_group = vec![0u8; GROUP_BYTES];
    let mut written = 0;

    for (index, group_pixels) in pixels.chunks_exact_mut(PACKED_GROUP_BYTES).enumerate() {
        let _span = info_span!("decode_group", group = index).entered();

        let raw_len = read_group(reader, &mut raw_group).inspect_err(|e| {
            error!("Failed to read group {} of {}: {}", index, GROUPS, e);
        })?;
        decode_rle(&raw_group[..raw_len], &mut decoded_group).inspect_err(|e| {
            error!("Failed to decode group {} of {}: {}", index, GROUPS, e);
        })?;
        written += reassemble_group(&decoded_group, group_pixels);

        debug!(raw_len, written, "Group decoded");
    }

    let mut footer = [0u8; FOOTER_RESERVED_BYTES];
    read_section(reader, &mut footer, InputSection::Footer)?;

    let mut raw_table = [0u8; RAW_COLOR_TABLE_BYTES];
    read_section(reader, &mut raw_table, InputSection::ColorTable)?;
    *palette = convert_color_table(&parse_color_table(&raw_table));

    debug_assert_eq!(written, PIXEL_ARRAY_BYTES);
    Ok(written)
}
