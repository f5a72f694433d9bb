use tracing::{info, instrument};
use std::io::Write;
use std::path::Path;

use crate::image_pipeline::{
    common::error::{ConversionError, Result},
    pmt::{PmtImageReader, StandardPmtReader},
    bmp::{BmpWriter, StandardBmpWriter, ConversionConfig},
};

pub struct PmtToBmpPipeline<R: PmtImageReader, W: BmpWriter> {
    reader: R,
    writer: W,
    config: ConversionConfig,
}

impl PmtToBmpPipeline<StandardPmtReader, StandardBmpWriter> {
    pub fn new(config: ConversionConfig) -> Self {
        Self {
            reader: StandardPmtReader,
            writer: StandardBmpWriter,
            config,
        }
    }
}

impl<R: PmtImageReader, W: BmpWriter> PmtToBmpPipeline<R, W> {
    pub fn with_custom(reader: R, writer: W, config: ConversionConfig) -> Self {
        Self {
            reader,
            writer,
            config,
        }
    }

    /// Decodes `input_data` completely, then writes the BMP to `output`.
    ///
    /// Nothing is written to `output` unless the decode succeeds.
    #[instrument(skip(self, input_data, output), fields(input_size = input_data.len()))]
    pub fn convert(&self, input_data: &[u8], output: &mut dyn Write) -> Result<()> {
        info!("Starting PMT to BMP conversion");

        let image = {
            let _span = tracing::info_span!("decode_pmt").entered();
            self.reader.read_pmt(input_data)?
        };

        {
            let _span = tracing::info_span!("encode_bmp").entered();
            self.writer.write_bmp(&image, output, &self.config)?;
        }

        info!(pixel_bytes = image.pixels.len(), "Conversion complete");
        Ok(())
    }

    /// Converts a file on disk.
    ///
    /// The output file is only created once the input has decoded
    /// successfully, so bad input never leaves a file behind. A write error
    /// after creation can still leave a partial file.
    #[instrument(skip(self, input_path, output_path))]
    pub fn convert_file<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input_path: P,
        output_path: Q,
    ) -> Result<()> {
        let input_path = input_path.as_ref();
        let output_path = output_path.as_ref();

        info!(
            input = %input_path.display(),
            output = %output_path.display(),
            "Converting file"
        );

        let input_data = {
            let _span = tracing::info_span!("read_input_file").entered();
            std::fs::read(input_path).map_err(|e| {
                ConversionError::InputReadError(format!("{}: {}", input_path.display(), e))
            })?
        };

        let image = {
            let _span = tracing::info_span!("decode_pmt").entered();
            self.reader.read_pmt(&input_data)?
        };

        let mut output_file = {
            let _span = tracing::info_span!("create_output_file").entered();
            std::fs::File::create(output_path).map_err(|e| {
                ConversionError::OutputWriteFailure(format!("{}: {}", output_path.display(), e))
            })?
        };

        {
            let _span = tracing::info_span!("encode_bmp").entered();
            self.writer
                .write_bmp(&image, &mut output_file, &self.config)
                .map_err(|e| match e {
                    ConversionError::OutputWriteFailure(msg) => ConversionError::OutputWriteFailure(
                        format!("{}: {}", output_path.display(), msg),
                    ),
                    other => other,
                })?;
        }

        info!(output = %output_path.display(), "File written");
        Ok(())
    }

    pub fn config(&self) -> &ConversionConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: ConversionConfig) {
        self.config = config;
    }
}
