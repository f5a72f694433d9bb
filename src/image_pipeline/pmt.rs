//! PMT decoding module
//!
//! Reads the six run-length encoded groups of a PMT scan, rebuilds packed
//! 4-bit pixels from the bit planes, and converts the trailing palette.

pub mod layout;
mod group_reader;
mod rle;
mod planes;
mod palette;
mod decode;
mod reader;
mod standard_pmt_reader;
pub mod types;

pub use group_reader::read_group;
pub use rle::decode_rle;
pub use planes::{pack_row, pixel_value, reassemble_group};
pub use palette::{convert_color_table, parse_color_table, BmpColorTable, PmtColorTable};
pub use decode::decode_pmt_into;
pub use reader::PmtImageReader;
pub use standard_pmt_reader::StandardPmtReader;
pub use types::PmtImage;
