//! Fixed BMP header values for a converted PMT image.

use std::io::{self, Write};

use byteorder::{LittleEndian, WriteBytesExt};

use crate::image_pipeline::pmt::layout::{
    COLOR_TABLE_BYTES, PALETTE_ENTRIES, PIXEL_ARRAY_BYTES, PIXELS_PER_ROW, PLANES, ROWS,
};

/// BITMAPFILEHEADER
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BmpFileHeader {
    pub magic: [u8; 2],
    pub file_size: u32,
    pub reserved: u32,
    pub pixel_array_offset: u32,
}

/// BITMAPINFOHEADER
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BmpInfoHeader {
    pub header_size: u32,
    pub width: i32,
    /// Negative height stores rows top to bottom.
    pub height: i32,
    pub color_planes: u16,
    pub bits_per_pixel: u16,
    pub compression: u32,
    pub image_size: u32,
    pub horizontal_ppm: i32,
    pub vertical_ppm: i32,
    pub colors: u32,
    pub important_colors: u32,
}

impl BmpFileHeader {
    pub const SIZE: usize = 14;

    pub const PMT: Self = Self {
        magic: *b"BM",
        file_size: (HEADERS_SIZE + PIXEL_ARRAY_BYTES) as u32,
        reserved: 0,
        pixel_array_offset: HEADERS_SIZE as u32,
    };

    pub fn write_to<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        out.write_all(&self.magic)?;
        out.write_u32::<LittleEndian>(self.file_size)?;
        out.write_u32::<LittleEndian>(self.reserved)?;
        out.write_u32::<LittleEndian>(self.pixel_array_offset)
    }
}

impl BmpInfoHeader {
    pub const SIZE: usize = 40;

    /// Header as the original converter wrote it, with `image_size` left at 0.
    pub const PMT: Self = Self {
        header_size: Self::SIZE as u32,
        width: PIXELS_PER_ROW as i32,
        height: -(ROWS as i32),
        color_planes: 1,
        bits_per_pixel: PLANES as u16,
        compression: 0,
        image_size: 0,
        horizontal_ppm: 0,
        vertical_ppm: 0,
        colors: PALETTE_ENTRIES as u32,
        important_colors: 0,
    };

    pub fn write_to<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        out.write_u32::<LittleEndian>(self.header_size)?;
        out.write_i32::<LittleEndian>(self.width)?;
        out.write_i32::<LittleEndian>(self.height)?;
        out.write_u16::<LittleEndian>(self.color_planes)?;
        out.write_u16::<LittleEndian>(self.bits_per_pixel)?;
        out.write_u32::<LittleEndian>(self.compression)?;
        out.write_u32::<LittleEndian>(self.image_size)?;
        out.write_i32::<LittleEndian>(self.horizontal_ppm)?;
        out.write_i32::<LittleEndian>(self.vertical_ppm)?;
        out.write_u32::<LittleEndian>(self.colors)?;
        out.write_u32::<LittleEndian>(self.important_colors)
    }
}

/// Everything in front of the pixel array: both headers and the palette.
pub const HEADERS_SIZE: usize = BmpFileHeader::SIZE + BmpInfoHeader::SIZE + COLOR_TABLE_BYTES;

/// Total size of a converted BMP file.
pub const FILE_SIZE: usize = HEADERS_SIZE + PIXEL_ARRAY_BYTES;
