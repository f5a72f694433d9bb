use std::fmt;

use thiserror::Error;

/// Part of the PMT stream that was being read when input ran out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputSection {
    GroupLength,
    GroupPayload,
    Footer,
    ColorTable,
}

impl fmt::Display for InputSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            InputSection::GroupLength => "group length prefix",
            InputSection::GroupPayload => "group payload",
            InputSection::Footer => "reserved footer",
            InputSection::ColorTable => "color table",
        };
        f.write_str(name)
    }
}

#[derive(Error, Debug)]
pub enum ConversionError {
    #[error("Failed to read input file: {0}")]
    InputReadError(String),

    #[error("Truncated input in {section}: needed {needed} bytes, {available} available")]
    TruncatedInput {
        section: InputSection,
        needed: usize,
        available: usize,
    },

    #[error("Group data ({needed} bytes) does not fit in buffer ({capacity} bytes)")]
    BufferTooSmall { needed: usize, capacity: usize },

    #[error("RLE opcode at offset {offset} needs {needed} more bytes past end of {len}-byte group")]
    InputOverrun {
        offset: usize,
        needed: usize,
        len: usize,
    },

    #[error("RLE output overrun: {written} bytes written, {requested} more requested, capacity {capacity}")]
    OutputOverrun {
        written: usize,
        requested: usize,
        capacity: usize,
    },

    #[error("Decoded {decoded} bytes, expected {expected}")]
    SizeMismatch { decoded: usize, expected: usize },

    #[error("Failed to write output file: {0}")]
    OutputWriteFailure(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ConversionError>;
