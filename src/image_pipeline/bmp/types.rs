//! BMP conversion configuration types

/// How the info header's `image_size` field is filled
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageSizeField {
    /// Write 0, which readers accept for uncompressed images
    Unspecified,
    /// Write the exact pixel array byte count
    Exact,
}

/// Configuration for PMT to BMP conversion
#[derive(Debug, Clone)]
pub struct ConversionConfig {
    /// Value written to the info header's `image_size` field
    pub image_size: ImageSizeField,
    /// Horizontal and vertical resolution in pixels per meter (0 = unknown)
    pub pixels_per_meter: u32,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            image_size: ImageSizeField::Unspecified,
            pixels_per_meter: 0,
        }
    }
}

impl ConversionConfig {
    pub fn builder() -> ConversionConfigBuilder {
        ConversionConfigBuilder::default()
    }
}

/// Builder for ConversionConfig
#[derive(Default)]
pub struct ConversionConfigBuilder {
    image_size: Option<ImageSizeField>,
    pixels_per_meter: Option<u32>,
}

impl ConversionConfigBuilder {
    pub fn image_size(mut self, image_size: ImageSizeField) -> Self {
        self.image_size = Some(image_size);
        self
    }

    pub fn pixels_per_meter(mut self, ppm: u32) -> Self {
        self.pixels_per_meter = Some(ppm);
        self
    }

    pub fn build(self) -> ConversionConfig {
        let default = ConversionConfig::default();
        ConversionConfig {
            image_size: self.image_size.unwrap_or(default.image_size),
            pixels_per_meter: self.pixels_per_meter.unwrap_or(default.pixels_per_meter),
        }
    }
}
