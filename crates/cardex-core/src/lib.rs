//! Core library for identity-card OCR processing.
//!
//! This crate provides:
//! - Upload validation (declared media type, size ceiling)
//! - Image preprocessing (linear contrast enhancement, luma binarization)
//! - Text recognition, polymorphic over an engine-backed strategy
//!   (Tesseract, behind the `tesseract` feature) and a deterministic
//!   simulated fallback
//! - Heuristic field extraction from noisy card text: tiered name and
//!   ID-number rules plus document-type-specific secondary fields
//! - Result validation and confidence scoring
//!
//! The [`pipeline::DocumentExtractor`] ties the stages together:
//!
//! ```
//! use cardex_core::{DocumentExtractor, DocumentImage, DocumentType};
//!
//! # fn demo(png_bytes: &[u8]) -> cardex_core::Result<()> {
//! let extractor = DocumentExtractor::new();
//! let image = DocumentImage::new(png_bytes, "image/png");
//! let result = extractor.process(&image, DocumentType::StudentId)?;
//! println!("{:?}", result.fields.full_name);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod extract;
pub mod input;
pub mod models;
pub mod ocr;
pub mod pipeline;
pub mod validate;

pub use error::{CardexError, InputError, OcrError, Result, ValidationError};
pub use extract::DocumentParser;
pub use input::InputValidator;
pub use models::config::CardexConfig;
pub use models::document::{
    DocumentImage, DocumentType, ExtractedFields, ExtractionMetadata, ExtractionResult,
};
pub use ocr::{ImagePreprocessor, SimulatedRecognizer, TextRecognizer};
#[cfg(feature = "tesseract")]
pub use ocr::TesseractRecognizer;
pub use pipeline::DocumentExtractor;
pub use validate::ResultValidator;
