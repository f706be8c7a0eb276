//! Error types for the cardex-core library.

use thiserror::Error;

/// Main error type for the cardex library.
#[derive(Error, Debug)]
pub enum CardexError {
    /// Upload validation error.
    #[error("input error: {0}")]
    Input(#[from] InputError),

    /// OCR processing error.
    #[error("OCR error: {0}")]
    Ocr(#[from] OcrError),

    /// Extracted-field validation error.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Image processing error.
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors raised while validating an uploaded document image.
#[derive(Error, Debug)]
pub enum InputError {
    /// No file data was provided.
    #[error("no file data provided")]
    Empty,

    /// The declared media type is not accepted.
    #[error("unsupported file format: {0} (expected JPEG or PNG)")]
    UnsupportedFormat(String),

    /// The file exceeds the size ceiling.
    #[error("file too large: {size} bytes (limit {limit} bytes)")]
    TooLarge { size: usize, limit: usize },
}

/// Errors raised by the preprocessing and recognition stages.
#[derive(Error, Debug)]
pub enum OcrError {
    /// The image bytes could not be decoded.
    #[error("invalid image: {0}")]
    InvalidImage(String),

    /// Image preprocessing failed.
    #[error("preprocessing failed: {0}")]
    Preprocessing(String),

    /// The recognition engine failed.
    #[error("text recognition failed: {0}")]
    Recognition(String),

    /// The recognition engine did not answer within the deadline.
    #[error("text recognition timed out after {0} ms")]
    Timeout(u64),
}

/// Errors raised when extracted fields miss the acceptance bar.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// A mandatory field is absent or too short.
    #[error("could not extract a valid {field} from {document_type} document")]
    MissingField {
        field: &'static str,
        document_type: String,
    },
}

/// Result type for the cardex library.
pub type Result<T> = std::result::Result<T, CardexError>;
