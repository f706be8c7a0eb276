//! Image preprocessing ahead of text recognition.

use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::{DynamicImage, ExtendedColorType, GrayImage, ImageEncoder, Luma, RgbImage};
use tracing::debug;

use crate::error::OcrError;
use crate::models::config::PreprocessConfig;

/// Deterministic image enhancement for better recognition accuracy.
///
/// Both passes are pure: identical input bytes always produce identical
/// output bytes.
pub struct ImagePreprocessor {
    config: PreprocessConfig,
}

impl ImagePreprocessor {
    /// Create a preprocessor with default settings.
    pub fn new() -> Self {
        Self::with_config(PreprocessConfig::default())
    }

    /// Create a preprocessor with explicit settings.
    pub fn with_config(config: PreprocessConfig) -> Self {
        Self { config }
    }

    /// Decode, apply the linear contrast/brightness transform, and
    /// re-encode at the original media type.
    pub fn enhance_encoded(&self, bytes: &[u8], mime_type: &str) -> Result<Vec<u8>, OcrError> {
        let image =
            image::load_from_memory(bytes).map_err(|e| OcrError::InvalidImage(e.to_string()))?;
        let enhanced = self.enhance(&image);
        debug!(
            "enhanced {}x{} image for recognition",
            enhanced.width(),
            enhanced.height()
        );
        self.encode(&DynamicImage::ImageRgb8(enhanced), mime_type)
    }

    /// Per-channel `v * contrast + brightness`, clamped to `[0, 255]`.
    pub fn enhance(&self, image: &DynamicImage) -> RgbImage {
        let mut rgb = image.to_rgb8();
        for pixel in rgb.pixels_mut() {
            for channel in pixel.0.iter_mut() {
                let value = *channel as f32 * self.config.contrast + self.config.brightness;
                *channel = value.clamp(0.0, 255.0) as u8;
            }
        }
        rgb
    }

    /// Grayscale conversion (standard luma weights) followed by a fixed
    /// threshold, for heavily degraded input ahead of the fallback
    /// recognizer.
    pub fn binarize(&self, image: &DynamicImage) -> GrayImage {
        let rgb = image.to_rgb8();
        let (width, height) = rgb.dimensions();
        let mut out = GrayImage::new(width, height);

        for (x, y, pixel) in rgb.enumerate_pixels() {
            let [r, g, b] = pixel.0;
            let luma = 0.299 * r as f32 + 0.587 * g as f32 + 0.114 * b as f32;
            let value = if luma > self.config.binarize_threshold as f32 {
                255
            } else {
                0
            };
            out.put_pixel(x, y, Luma([value]));
        }

        out
    }

    /// Binarize encoded image bytes, re-encoding at the original media
    /// type.
    pub fn binarize_encoded(&self, bytes: &[u8], mime_type: &str) -> Result<Vec<u8>, OcrError> {
        let image =
            image::load_from_memory(bytes).map_err(|e| OcrError::InvalidImage(e.to_string()))?;
        let binary = self.binarize(&image);
        self.encode(&DynamicImage::ImageLuma8(binary), mime_type)
    }

    fn encode(&self, image: &DynamicImage, mime_type: &str) -> Result<Vec<u8>, OcrError> {
        let color_type = match image {
            DynamicImage::ImageLuma8(_) => ExtendedColorType::L8,
            _ => ExtendedColorType::Rgb8,
        };

        let mut out = Vec::new();
        match mime_type {
            "image/png" => PngEncoder::new(&mut out)
                .write_image(image.as_bytes(), image.width(), image.height(), color_type)
                .map_err(|e| OcrError::Preprocessing(e.to_string()))?,
            _ => JpegEncoder::new_with_quality(&mut out, self.config.jpeg_quality)
                .write_image(image.as_bytes(), image.width(), image.height(), color_type)
                .map_err(|e| OcrError::Preprocessing(e.to_string()))?,
        }

        Ok(out)
    }
}

impl Default for ImagePreprocessor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    fn gradient_png() -> Vec<u8> {
        let mut img = RgbImage::new(8, 8);
        for (x, y, pixel) in img.enumerate_pixels_mut() {
            *pixel = Rgb([(x * 30) as u8, (y * 30) as u8, 128]);
        }

        let mut out = Vec::new();
        PngEncoder::new(&mut out)
            .write_image(img.as_raw(), 8, 8, ExtendedColorType::Rgb8)
            .unwrap();
        out
    }

    #[test]
    fn enhance_applies_linear_transform() {
        let preprocessor = ImagePreprocessor::new();
        let mut img = RgbImage::new(1, 1);
        img.put_pixel(0, 0, Rgb([100, 250, 0]));

        let enhanced = preprocessor.enhance(&DynamicImage::ImageRgb8(img));
        let pixel = enhanced.get_pixel(0, 0);

        // 100 * 1.2 + 10 = 130; 250 * 1.2 + 10 clamps to 255; 0 * 1.2 + 10 = 10
        assert_eq!(pixel.0, [130, 255, 10]);
    }

    #[test]
    fn enhance_encoded_is_deterministic() {
        let preprocessor = ImagePreprocessor::new();
        let bytes = gradient_png();

        let first = preprocessor.enhance_encoded(&bytes, "image/png").unwrap();
        let second = preprocessor.enhance_encoded(&bytes, "image/png").unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn enhance_encoded_rejects_garbage_bytes() {
        let preprocessor = ImagePreprocessor::new();
        let result = preprocessor.enhance_encoded(b"not an image", "image/png");

        assert!(matches!(result, Err(OcrError::InvalidImage(_))));
    }

    #[test]
    fn binarize_thresholds_on_luma() {
        let preprocessor = ImagePreprocessor::new();
        let mut img = RgbImage::new(2, 1);
        img.put_pixel(0, 0, Rgb([200, 200, 200]));
        img.put_pixel(1, 0, Rgb([50, 50, 50]));

        let binary = preprocessor.binarize(&DynamicImage::ImageRgb8(img));

        assert_eq!(binary.get_pixel(0, 0).0, [255]);
        assert_eq!(binary.get_pixel(1, 0).0, [0]);
    }
}
