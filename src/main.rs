use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use pmt2bmp::image_pipeline::{ConversionConfig, ImageSizeField, PmtToBmpPipeline};
use pmt2bmp::logger;

use tracing::{error, info};

/// Convert a PMT scanner image to a 4-bit BMP.
#[derive(Parser)]
#[command(name = "pmt2bmp", version)]
struct Cli {
    /// PMT file to read.
    input: PathBuf,

    /// BMP file to write.
    output: PathBuf,

    /// Store the exact pixel array size in the BMP header instead of 0.
    #[arg(long)]
    exact_image_size: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logger::init();

    let config = ConversionConfig::builder()
        .image_size(if cli.exact_image_size {
            ImageSizeField::Exact
        } else {
            ImageSizeField::Unspecified
        })
        .build();
    let pipeline = PmtToBmpPipeline::new(config);

    info!("Image size field: {:?}", pipeline.config().image_size);

    pipeline
        .convert_file(&cli.input, &cli.output)
        .inspect_err(|e| error!("Conversion failed: {}", e))
        .with_context(|| {
            format!(
                "failed to convert {} to {}",
                cli.input.display(),
                cli.output.display()
            )
        })?;

    info!("Conversion successful!");
    Ok(())
}
