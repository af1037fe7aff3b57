use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::codecs::webp::WebPEncoder;
use image::{DynamicImage, ExtendedColorType, ImageEncoder};

use crate::config::JPEG_QUALITY;
use crate::error::SketchResult;
use crate::surface::DrawingSurface;

/// Encodings offered for download.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportFormat {
    /// Lossless
    Png,
    /// Lossy, no alpha
    Jpeg,
    /// Lossless
    Webp,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 3] =
        [ExportFormat::Png, ExportFormat::Jpeg, ExportFormat::Webp];

    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Png => "png",
            ExportFormat::Jpeg => "jpeg",
            ExportFormat::Webp => "webp",
        }
    }

    pub fn mime_type(self) -> &'static str {
        match self {
            ExportFormat::Png => "image/png",
            ExportFormat::Jpeg => "image/jpeg",
            ExportFormat::Webp => "image/webp",
        }
    }

    /// Download name, e.g. `canvas.png`
    pub fn file_name(self) -> String {
        format!("canvas.{}", self.extension())
    }

    pub fn button_label(self) -> &'static str {
        match self {
            ExportFormat::Png => "Export PNG",
            ExportFormat::Jpeg => "Export JPEG",
            ExportFormat::Webp => "Export WEBP",
        }
    }

    /// Filter label for save dialogs
    pub fn filter_name(self) -> &'static str {
        match self {
            ExportFormat::Png => "PNG Image",
            ExportFormat::Jpeg => "JPEG Image",
            ExportFormat::Webp => "WebP Image",
        }
    }
}

/// A snapshot request against the current surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportRequest {
    pub format: ExportFormat,
    pub jpeg_quality: u8,
}

impl ExportRequest {
    pub fn new(format: ExportFormat) -> Self {
        Self {
            format,
            jpeg_quality: JPEG_QUALITY,
        }
    }

    pub fn with_jpeg_quality(mut self, quality: u8) -> Self {
        self.jpeg_quality = quality.clamp(1, 100);
        self
    }

    pub fn file_name(&self) -> String {
        self.format.file_name()
    }
}

/// Encode the surface at its current dimensions. Never mutates it.
pub fn encode(surface: &DrawingSurface, request: ExportRequest) -> SketchResult<Vec<u8>> {
    let image = surface.image();
    let (width, height) = image.dimensions();
    let mut bytes = Vec::new();

    match request.format {
        ExportFormat::Png => {
            PngEncoder::new(&mut bytes).write_image(
                image.as_raw(),
                width,
                height,
                ExtendedColorType::Rgba8,
            )?;
        }
        ExportFormat::Jpeg => {
            let rgb = DynamicImage::ImageRgba8(image.clone()).to_rgb8();
            JpegEncoder::new_with_quality(&mut bytes, request.jpeg_quality).write_image(
                rgb.as_raw(),
                width,
                height,
                ExtendedColorType::Rgb8,
            )?;
        }
        ExportFormat::Webp => {
            WebPEncoder::new_lossless(&mut bytes).write_image(
                image.as_raw(),
                width,
                height,
                ExtendedColorType::Rgba8,
            )?;
        }
    }

    log::debug!(
        "Encoded {}x{} surface as {} ({} bytes)",
        width,
        height,
        request.format.extension(),
        bytes.len()
    );
    Ok(bytes)
}
