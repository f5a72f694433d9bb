use std::io::{ErrorKind, Read};

use byteorder::{ByteOrder, LittleEndian};
use tracing::debug;

use crate::image_pipeline::common::error::{ConversionError, InputSection, Result};

/// Reads until `buf` is full or the stream ends, returning the number of bytes placed.
pub(crate) fn read_fully<R: Read + ?Sized>(reader: &mut R, buf: &mut [u8]) -> Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        }
    }
    Ok(filled)
}

/// Reads exactly `buf.len()` bytes, reporting a shortfall as truncated `section`.
pub(crate) fn read_section<R: Read + ?Sized>(
    reader: &mut R,
    buf: &mut [u8],
    section: InputSection,
) -> Result<()> {
    let available = read_fully(reader, buf)?;
    if available != buf.len() {
        return Err(ConversionError::TruncatedInput {
            section,
            needed: buf.len(),
            available,
        });
    }
    Ok(())
}

/// Reads one length-prefixed raw group into `buf`.
///
/// The group starts with a little-endian `u16` byte count followed by that
/// many bytes of RLE data. Returns the number of bytes placed at the start
/// of `buf`.
///
/// # Errors
///
/// * [`ConversionError::TruncatedInput`] if the prefix or payload is cut short
/// * [`ConversionError::BufferTooSmall`] if the declared length exceeds `buf.len()`
pub fn read_group<R: Read + ?Sized>(reader: &mut R, buf: &mut [u8]) -> Result<usize> {
    let mut prefix = [0u8; 2];
    read_section(reader, &mut prefix, InputSection::GroupLength)?;
    let length = usize::from(LittleEndian::read_u16(&prefix));

    if length > buf.len() {
        return Err(ConversionError::BufferTooSmall {
            needed: length,
            capacity: buf.len(),
        });
    }

    read_section(reader, &mut buf[..length], InputSection::GroupPayload)?;
    debug!("Read raw group of {} bytes", length);
    Ok(length)
}
