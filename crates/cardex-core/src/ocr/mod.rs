//! Image preprocessing and text recognition strategies.

pub mod preprocess;
mod simulated;
#[cfg(feature = "tesseract")]
mod tesseract;

pub use preprocess::ImagePreprocessor;
pub use simulated::SimulatedRecognizer;
#[cfg(feature = "tesseract")]
pub use tesseract::TesseractRecognizer;

use std::sync::{Arc, mpsc};
use std::thread;
use std::time::Duration;

use crate::error::OcrError;
use crate::models::document::DocumentType;

/// A text recognition strategy.
///
/// Implementations must not mutate the input image and must be safe to
/// invoke concurrently for independent documents.
pub trait TextRecognizer: Send + Sync {
    /// Produce the best-effort transcription of the encoded image.
    fn recognize(&self, image: &[u8], doc_type: DocumentType) -> Result<String, OcrError>;

    /// Short strategy name, recorded in result metadata.
    fn name(&self) -> &'static str;
}

/// Run a recognizer under a deadline.
///
/// The call runs on a worker thread; if it does not answer within
/// `timeout` the caller gets [`OcrError::Timeout`] and the worker's
/// eventual result is dropped.
pub fn recognize_with_deadline(
    recognizer: Arc<dyn TextRecognizer>,
    image: Vec<u8>,
    doc_type: DocumentType,
    timeout: Duration,
) -> Result<String, OcrError> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let _ = tx.send(recognizer.recognize(&image, doc_type));
    });

    match rx.recv_timeout(timeout) {
        Ok(result) => result,
        Err(_) => Err(OcrError::Timeout(timeout.as_millis() as u64)),
    }
}
