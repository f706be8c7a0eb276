//! Tesseract-backed text recognition.

use std::io::Write;

use tempfile::NamedTempFile;
use tesseract::Tesseract;
use tracing::debug;

use crate::error::OcrError;
use crate::models::document::DocumentType;

use super::TextRecognizer;

/// Recognizer delegating to a locally installed Tesseract engine.
pub struct TesseractRecognizer {
    languages: String,
}

impl TesseractRecognizer {
    /// Create a recognizer with the given language hint (e.g. `eng` or
    /// `eng+ben`).
    pub fn new(languages: impl Into<String>) -> Self {
        Self {
            languages: languages.into(),
        }
    }
}

impl TextRecognizer for TesseractRecognizer {
    fn recognize(&self, image: &[u8], _doc_type: DocumentType) -> Result<String, OcrError> {
        // Tesseract reads from a path, so the encoded image goes through a
        // temp file.
        let mut temp = NamedTempFile::new()
            .map_err(|e| OcrError::Recognition(format!("failed to create temp file: {e}")))?;
        temp.write_all(image)
            .map_err(|e| OcrError::Recognition(format!("failed to write temp file: {e}")))?;
        let path = temp
            .path()
            .to_str()
            .ok_or_else(|| OcrError::Recognition("non-UTF-8 temp path".to_string()))?;

        let text = Tesseract::new(None, Some(&self.languages))
            .map_err(|e| OcrError::Recognition(format!("tesseract init failed: {e}")))?
            .set_image(path)
            .map_err(|e| OcrError::Recognition(format!("tesseract rejected image: {e}")))?
            .get_text()
            .map_err(|e| OcrError::Recognition(format!("tesseract failed: {e}")))?;

        debug!("tesseract produced {} characters", text.len());
        Ok(text)
    }

    fn name(&self) -> &'static str {
        "tesseract"
    }
}
