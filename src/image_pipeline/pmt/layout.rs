//! Fixed geometry of a PMT file.
//!
//! A file holds [`GROUPS`] run-length encoded groups. Each group decodes to
//! [`ROWS_PER_GROUP`] pixel rows, and every row is stored as [`PLANES`]
//! consecutive bit planes of [`PLANE_BYTES`] bytes, one bit per pixel, MSB first.
//!
//! Offsets inside a decoded group are computed with explicit strides:
//!
//! ```text
//! byte(row, plane, i) = row * ROW_BYTES + plane * PLANE_BYTES + i
//! ```

/// Bytes of one bit plane for a single row.
pub const PLANE_BYTES: usize = 105;

/// Bit planes per row; also the number of bits per output pixel.
pub const PLANES: usize = 4;

pub const PIXELS_PER_ROW: usize = PLANE_BYTES * 8;

/// Bytes of one decoded row across all planes (the row stride).
pub const ROW_BYTES: usize = PLANE_BYTES * PLANES;

pub const ROWS_PER_GROUP: usize = 148;

/// Exact size of one decoded group.
pub const GROUP_BYTES: usize = ROW_BYTES * ROWS_PER_GROUP;

pub const GROUPS: usize = 6;

pub const ROWS: usize = ROWS_PER_GROUP * GROUPS;

/// Bytes of one packed 4-bit-per-pixel output row.
///
/// Equal to [`ROW_BYTES`]: 840 pixels at 4 bits each need as many bits as
/// four 840-bit planes.
pub const PACKED_ROW_BYTES: usize = PIXELS_PER_ROW / 2;

pub const PACKED_GROUP_BYTES: usize = PACKED_ROW_BYTES * ROWS_PER_GROUP;

/// Size of the complete packed pixel array.
pub const PIXEL_ARRAY_BYTES: usize = PACKED_GROUP_BYTES * GROUPS;

/// Reserved footer bytes ahead of the color table.
pub const FOOTER_RESERVED_BYTES: usize = 16;

pub const PALETTE_ENTRIES: usize = 1 << PLANES;

/// Raw color table size: 16 entries of 6-bit R, G, B.
pub const RAW_COLOR_TABLE_BYTES: usize = PALETTE_ENTRIES * 3;

/// Converted color table size: 16 entries of B, G, R, 0.
pub const COLOR_TABLE_BYTES: usize = PALETTE_ENTRIES * 4;

const _: () = assert!(PACKED_ROW_BYTES == ROW_BYTES);
const _: () = assert!(GROUP_BYTES == 62160);
const _: () = assert!(PIXEL_ARRAY_BYTES == 372_960);
