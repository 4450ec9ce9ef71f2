//! Core types for image decoding.

use image::DynamicImage;
use thiserror::Error;

/// Error types for image decoding operations.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The file format is not recognized or supported.
    #[error("Invalid or unsupported image format: {0}")]
    InvalidFormat(String),

    /// The image file is corrupted or incomplete.
    #[error("Corrupted or incomplete image file: {0}")]
    CorruptedFile(String),

    /// I/O error during file reading (missing file, permissions).
    #[error("I/O error: {0}")]
    IoError(String),
}

/// A decoded image held as a dense grid of 8-bit samples.
///
/// Samples are stored row-major with interleaved channels, so the sample for
/// channel `c` of pixel `(x, y)` lives at `(y * width + x) * channels + c`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    /// Grid width in pixels.
    pub width: u32,
    /// Grid height in pixels.
    pub height: u32,
    /// Samples per pixel (1 = gray, 2 = gray + alpha, 3 = RGB, 4 = RGBA).
    pub channels: u8,
    /// Sample data, length `width * height * channels`.
    pub pixels: Vec<u8>,
}

impl PixelGrid {
    /// Create a new grid with the given dimensions and sample data.
    pub fn new(width: u32, height: u32, channels: u8, pixels: Vec<u8>) -> Self {
        debug_assert_eq!(
            pixels.len(),
            width as usize * height as usize * channels as usize,
            "Pixel buffer size mismatch"
        );
        Self {
            width,
            height,
            channels,
            pixels,
        }
    }

    /// Create a grid with every sample set to `value`.
    pub fn filled(width: u32, height: u32, channels: u8, value: u8) -> Self {
        let len = width as usize * height as usize * channels as usize;
        Self::new(width, height, channels, vec![value; len])
    }

    /// Convert a decoded `image` crate buffer, keeping its channel layout.
    ///
    /// Sources with more than 8 bits per sample are reduced to 8 bits.
    pub fn from_dynamic(img: DynamicImage) -> Self {
        let (width, height) = (img.width(), img.height());
        let channels = img.color().channel_count();
        let pixels = match channels {
            1 => img.into_luma8().into_raw(),
            2 => img.into_luma_alpha8().into_raw(),
            3 => img.into_rgb8().into_raw(),
            _ => img.into_rgba8().into_raw(),
        };
        Self::new(width, height, channels.clamp(1, 4), pixels)
    }

    /// Convert back to an `image` crate buffer.
    ///
    /// Returns `None` when the sample buffer does not match the dimensions.
    pub fn to_dynamic(&self) -> Option<DynamicImage> {
        let (w, h, data) = (self.width, self.height, self.pixels.clone());
        match self.channels {
            1 => image::GrayImage::from_raw(w, h, data).map(DynamicImage::ImageLuma8),
            2 => image::GrayAlphaImage::from_raw(w, h, data).map(DynamicImage::ImageLumaA8),
            3 => image::RgbImage::from_raw(w, h, data).map(DynamicImage::ImageRgb8),
            4 => image::RgbaImage::from_raw(w, h, data).map(DynamicImage::ImageRgba8),
            _ => None,
        }
    }

    /// Number of bytes in one row.
    #[inline]
    pub fn row_stride(&self) -> usize {
        self.width as usize * self.channels as usize
    }

    /// Samples of the pixel at `(x, y)`.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> &[u8] {
        let c = self.channels as usize;
        let idx = y as usize * self.row_stride() + x as usize * c;
        &self.pixels[idx..idx + c]
    }

    /// Check the size and channel invariants: non-zero dimensions, 1 to 4
    /// channels and a buffer of exactly `width * height * channels` samples.
    pub fn is_well_formed(&self) -> bool {
        self.width > 0
            && self.height > 0
            && (1..=4).contains(&self.channels)
            && self.pixels.len() == self.height as usize * self.row_stride()
    }
}
