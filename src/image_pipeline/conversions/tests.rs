use std::io::{Cursor, Write};
use std::sync::{Arc, Mutex};

use crate::image_pipeline::bmp::headers::{FILE_SIZE, HEADERS_SIZE};
use crate::image_pipeline::common::error::{ConversionError, InputSection, Result};
use crate::image_pipeline::pmt::layout::{GROUP_BYTES, GROUPS, PACKED_GROUP_BYTES};
use crate::image_pipeline::{
    BmpWriter, ConversionConfig, ImageSizeField, PmtImage, PmtImageReader, PmtToBmpPipeline,
};

struct MockReader {
    should_fail: bool,
}

impl PmtImageReader for MockReader {
    fn read_pmt(&self, _data: &[u8]) -> Result<PmtImage> {
        if self.should_fail {
            return Err(ConversionError::SizeMismatch { decoded: 0, expected: GROUP_BYTES });
        }
        Ok(PmtImage::blank())
    }
}

struct MockWriter {
    should_fail: bool,
    written_data: Arc<Mutex<Vec<PmtImage>>>,
}

impl BmpWriter for MockWriter {
    fn write_bmp(&self, image: &PmtImage, _output: &mut dyn Write, _config: &ConversionConfig) -> Result<()> {
        if self.should_fail {
            return Err(ConversionError::OutputWriteFailure("Mock write error".to_string()));
        }
        self.written_data.lock().unwrap().push(image.clone());
        Ok(())
    }
}

fn encode_fill(value: u8, len: usize) -> Vec<u8> {
    let mut out = Vec::new();
    let mut remaining = len;
    while remaining > 0 {
        let n = remaining.min(127);
        out.extend_from_slice(&[0x80 | n as u8, value]);
        remaining -= n;
    }
    out
}

/// Builds a PMT stream whose group `i` has every plane byte set to `plane_fills[i]`.
fn synthetic_pmt(plane_fills: [[u8; 4]; GROUPS], raw_table: &[u8; 48]) -> Vec<u8> {
    let mut stream = Vec::new();
    for fills in plane_fills {
        let mut raw = Vec::new();
        for _row in 0..148 {
            for fill in fills {
                raw.extend(encode_fill(fill, 105));
            }
        }
        stream.extend_from_slice(&(raw.len() as u16).to_le_bytes());
        stream.extend_from_slice(&raw);
    }
    stream.extend_from_slice(&[0u8; 16]);
    stream.extend_from_slice(raw_table);
    stream
}

#[test]
fn test_config_builder() {
    let config = ConversionConfig::builder()
        .image_size(ImageSizeField::Exact)
        .pixels_per_meter(3780)
        .build();

    assert_eq!(config.image_size, ImageSizeField::Exact);
    assert_eq!(config.pixels_per_meter, 3780);

    let default = ConversionConfig::builder().build();
    assert_eq!(default.image_size, ImageSizeField::Unspecified);
    assert_eq!(default.pixels_per_meter, 0);
}

#[test]
fn test_successful_conversion_with_mocks() {
    let written = Arc::new(Mutex::new(Vec::new()));
    let reader = MockReader { should_fail: false };
    let writer = MockWriter { should_fail: false, written_data: written.clone() };

    let pipeline = PmtToBmpPipeline::with_custom(reader, writer, ConversionConfig::default());

    let mut output = Cursor::new(Vec::new());
    pipeline.convert(b"fake pmt data", &mut output).unwrap();

    assert_eq!(written.lock().unwrap().len(), 1);
}

#[test]
fn test_reader_failure_skips_writer() {
    let written = Arc::new(Mutex::new(Vec::new()));
    let reader = MockReader { should_fail: true };
    let writer = MockWriter { should_fail: false, written_data: written.clone() };

    let pipeline = PmtToBmpPipeline::with_custom(reader, writer, ConversionConfig::default());

    let mut output = Cursor::new(Vec::new());
    let result = pipeline.convert(b"fake pmt data", &mut output);

    assert!(matches!(result.unwrap_err(), ConversionError::SizeMismatch { .. }));
    assert!(written.lock().unwrap().is_empty());
}

#[test]
fn test_writer_failure() {
    let written = Arc::new(Mutex::new(Vec::new()));
    let reader = MockReader { should_fail: false };
    let writer = MockWriter { should_fail: true, written_data: written };

    let pipeline = PmtToBmpPipeline::with_custom(reader, writer, ConversionConfig::default());

    let mut output = Cursor::new(Vec::new());
    let result = pipeline.convert(b"fake pmt data", &mut output);

    assert!(matches!(result.unwrap_err(), ConversionError::OutputWriteFailure(_)));
}

#[test]
fn test_end_to_end_uniform_groups() {
    // Per-plane fills chosen so every pixel of group i has index i * 2 + 1.
    let mut plane_fills = [[0u8; 4]; GROUPS];
    for (group, fills) in plane_fills.iter_mut().enumerate() {
        let index = (group * 2 + 1) as u8;
        for (plane, fill) in fills.iter_mut().enumerate() {
            *fill = if index & (1 << plane) != 0 { 0xFF } else { 0x00 };
        }
    }
    let mut raw_table = [0u8; 48];
    for (i, entry) in raw_table.chunks_exact_mut(3).enumerate() {
        entry.copy_from_slice(&[i as u8, 0x20, 0x3F - i as u8]);
    }
    let input = synthetic_pmt(plane_fills, &raw_table);

    let pipeline = PmtToBmpPipeline::new(ConversionConfig::default());
    let mut output = Vec::new();
    pipeline.convert(&input, &mut output).unwrap();

    assert_eq!(output.len(), FILE_SIZE);
    for i in 0..16 {
        let entry = &output[54 + i * 4..54 + i * 4 + 4];
        assert_eq!(entry, &[(0x3F - i as u8) << 2, 0x80, (i as u8) << 2, 0]);
    }
    let pixels = &output[HEADERS_SIZE..];
    for (group, slice) in pixels.chunks_exact(PACKED_GROUP_BYTES).enumerate() {
        let index = (group * 2 + 1) as u8;
        assert!(slice.iter().all(|&b| b == (index << 4) | index), "group {group}");
    }
}

#[test]
fn test_truncated_input_writes_nothing() {
    let mut input = synthetic_pmt([[0; 4]; GROUPS], &[0u8; 48]);
    input.truncate(500);

    let pipeline = PmtToBmpPipeline::new(ConversionConfig::default());
    let mut output = Vec::new();
    let err = pipeline.convert(&input, &mut output).unwrap_err();

    assert!(matches!(
        err,
        ConversionError::TruncatedInput { section: InputSection::GroupPayload, .. }
    ));
    assert!(output.is_empty());
}

#[test]
fn test_set_config() {
    let mut pipeline = PmtToBmpPipeline::new(ConversionConfig::default());
    pipeline.set_config(ConversionConfig::builder().image_size(ImageSizeField::Exact).build());
    assert_eq!(pipeline.config().image_size, ImageSizeField::Exact);
}
