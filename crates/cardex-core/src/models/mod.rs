//! Data models shared across the pipeline.

pub mod config;
pub mod document;

pub use config::CardexConfig;
pub use document::{
    DocumentImage, DocumentType, ExtractedFields, ExtractionMetadata, ExtractionResult,
};
