use crate::image_pipeline::pmt::layout::PALETTE_ENTRIES;

/// PMT palette: 6-bit R, G, B per entry.
pub type PmtColorTable = [[u8; 3]; PALETTE_ENTRIES];

/// BMP palette: 8-bit B, G, R and a zero reserved byte per entry.
pub type BmpColorTable = [[u8; 4]; PALETTE_ENTRIES];

/// Splits the raw 48-byte table read from the file footer into entries.
pub fn parse_color_table(raw: &[u8; PALETTE_ENTRIES * 3]) -> PmtColorTable {
    let mut table = [[0u8; 3]; PALETTE_ENTRIES];
    for (entry, rgb) in table.iter_mut().zip(raw.chunks_exact(3)) {
        entry.copy_from_slice(rgb);
    }
    table
}

/// Reorders RGB to BGR and scales each channel from 6 to 8 bits.
pub fn convert_color_table(pmt: &PmtColorTable) -> BmpColorTable {
    let mut bmp = [[0u8; 4]; PALETTE_ENTRIES];
    for (out, rgb) in bmp.iter_mut().zip(pmt) {
        for c in 0..3 {
            out[c] = rgb[2 - c] << 2;
        }
        out[3] = 0;
    }
    bmp
}
