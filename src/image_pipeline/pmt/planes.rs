//! Reassembly of bit-planar rows into packed 4-bit pixels.

use crate::image_pipeline::pmt::layout::{
    GROUP_BYTES, PACKED_GROUP_BYTES, PACKED_ROW_BYTES, PIXELS_PER_ROW, PLANE_BYTES, PLANES,
    ROW_BYTES, ROWS_PER_GROUP,
};

/// Combines one bit from each plane of `row` into the 4-bit value of pixel `position`.
///
/// Plane 0 supplies the least significant bit. Within a plane byte, the first
/// pixel is bit 7.
#[inline]
pub fn pixel_value(row: &[u8], position: usize) -> u8 {
    debug_assert_eq!(row.len(), ROW_BYTES);
    let byte_index = position / 8;
    let bit_index = 7 - (position % 8);

    let mut value = 0u8;
    for plane in 0..PLANES {
        let byte = row[plane * PLANE_BYTES + byte_index];
        value += ((byte >> bit_index) & 1) << plane;
    }
    value
}

/// Packs one decoded row into `out`, two pixels per byte with the even pixel in the high nibble.
///
/// Returns the number of bytes written.
pub fn pack_row(row: &[u8], out: &mut [u8]) -> usize {
    assert_eq!(row.len(), ROW_BYTES, "decoded row has wrong length");
    assert_eq!(out.len(), PACKED_ROW_BYTES, "packed row has wrong length");

    let mut written = 0;
    for position in (0..PIXELS_PER_ROW).step_by(2) {
        let high = pixel_value(row, position);
        let low = pixel_value(row, position + 1);
        out[written] = (high << 4) | low;
        written += 1;
    }
    written
}

/// Reassembles a full decoded group into packed rows.
///
/// Row `r` of `decoded` starts at `r * ROW_BYTES`; its packed form lands at
/// `r * PACKED_ROW_BYTES` in `out`. Returns the number of bytes written.
///
/// # Panics
///
/// If either buffer is not exactly one group long. Sizes are fixed by the
/// format, so a mismatch is a caller bug rather than bad input.
pub fn reassemble_group(decoded: &[u8], out: &mut [u8]) -> usize {
    assert_eq!(decoded.len(), GROUP_BYTES, "decoded group has wrong length");
    assert_eq!(out.len(), PACKED_GROUP_BYTES, "packed group has wrong length");

    let mut written = 0;
    for (row, packed) in decoded
        .chunks_exact(ROW_BYTES)
        .zip(out.chunks_exact_mut(PACKED_ROW_BYTES))
    {
        written += pack_row(row, packed);
    }
    debug_assert_eq!(written, PACKED_ROW_BYTES * ROWS_PER_GROUP);
    written
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set_pixel(row: &mut [u8], position: usize, value: u8) {
        let byte_index = position / 8;
        let mask = 0x80u8 >> (position % 8);
        for plane in 0..PLANES {
            let byte = &mut row[plane * PLANE_BYTES + byte_index];
            if value & (1 << plane) != 0 {
                *byte |= mask;
            } else {
                *byte &= !mask;
            }
        }
    }

    #[test]
    fn plane_zero_is_least_significant_bit() {
        let mut row = vec![0u8; ROW_BYTES];
        row[0] = 0b1000_0000;

        assert_eq!(pixel_value(&row, 0), 1);
        assert_eq!(pixel_value(&row, 1), 0);
    }

    #[test]
    fn plane_three_is_most_significant_bit() {
        let mut row = vec![0u8; ROW_BYTES];
        row[3 * PLANE_BYTES + 104] = 0b0000_0001;

        assert_eq!(pixel_value(&row, PIXELS_PER_ROW - 1), 8);
        assert_eq!(pixel_value(&row, PIXELS_PER_ROW - 2), 0);
    }

    #[test]
    fn every_plane_combination_round_trips() {
        let mut row = vec![0u8; ROW_BYTES];
        for position in 0..PIXELS_PER_ROW {
            set_pixel(&mut row, position, (position % 16) as u8);
        }
        for position in 0..PIXELS_PER_ROW {
            assert_eq!(pixel_value(&row, position), (position % 16) as u8);
        }
    }

    #[test]
    fn alternating_pixels_pack_into_nibbles() {
        let mut row = vec![0u8; ROW_BYTES];
        for position in 0..PIXELS_PER_ROW {
            set_pixel(&mut row, position, if position % 2 == 0 { 5 } else { 9 });
        }
        let mut out = vec![0u8; PACKED_ROW_BYTES];

        let n = pack_row(&row, &mut out);

        assert_eq!(n, PACKED_ROW_BYTES);
        assert!(out.iter().all(|&b| b == 0x59));
    }

    #[test]
    fn group_rows_keep_their_order() {
        let mut decoded = vec![0u8; GROUP_BYTES];
        // Row r gets uniform pixel value r % 16 by filling each plane with all ones or zeros.
        for (r, row) in decoded.chunks_exact_mut(ROW_BYTES).enumerate() {
            let value = (r % 16) as u8;
            for (plane, bytes) in row.chunks_exact_mut(PLANE_BYTES).enumerate() {
                let fill = if value & (1 << plane) != 0 { 0xFF } else { 0x00 };
                bytes.fill(fill);
            }
        }
        let mut out = vec![0u8; PACKED_GROUP_BYTES];

        let n = reassemble_group(&decoded, &mut out);

        assert_eq!(n, PACKED_GROUP_BYTES);
        for (r, packed) in out.chunks_exact(PACKED_ROW_BYTES).enumerate() {
            let value = (r % 16) as u8;
            assert!(packed.iter().all(|&b| b == (value << 4) | value), "row {r}");
        }
    }

    #[test]
    #[should_panic(expected = "decoded group has wrong length")]
    fn short_group_buffer_panics() {
        let decoded = vec![0u8; GROUP_BYTES - 1];
        let mut out = vec![0u8; PACKED_GROUP_BYTES];
        reassemble_group(&decoded, &mut out);
    }
}
