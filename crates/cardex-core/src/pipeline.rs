//! End-to-end document extraction pipeline.

use std::sync::Arc;
use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use crate::error::Result;
use crate::extract::DocumentParser;
use crate::input::InputValidator;
use crate::models::config::CardexConfig;
use crate::models::document::{
    DocumentImage, DocumentType, ExtractionMetadata, ExtractionResult,
};
use crate::ocr::{
    ImagePreprocessor, SimulatedRecognizer, TextRecognizer, recognize_with_deadline,
};
use crate::validate::ResultValidator;

/// Linear extraction pipeline: validate the upload, enhance the image,
/// recognize text (engine first, simulated fallback), parse fields,
/// validate the result.
///
/// Stateless between calls; concurrent invocations are independent.
pub struct DocumentExtractor {
    input: InputValidator,
    preprocessor: ImagePreprocessor,
    engine: Option<Arc<dyn TextRecognizer>>,
    fallback: SimulatedRecognizer,
    parser: DocumentParser,
    validator: ResultValidator,
    engine_timeout: Duration,
}

impl DocumentExtractor {
    /// Create an extractor with the default configuration.
    pub fn new() -> Self {
        Self::with_config(CardexConfig::default())
    }

    /// Create an extractor with explicit configuration.
    pub fn with_config(config: CardexConfig) -> Self {
        Self {
            input: InputValidator::with_config(config.input.clone()),
            preprocessor: ImagePreprocessor::with_config(config.preprocess.clone()),
            engine: default_engine(&config.recognizer),
            fallback: SimulatedRecognizer::new(),
            parser: DocumentParser::new(),
            validator: ResultValidator::with_config(config.extraction.clone()),
            engine_timeout: Duration::from_millis(config.recognizer.engine_timeout_ms),
        }
    }

    /// Replace the engine-backed recognizer.
    pub fn with_engine(mut self, engine: Arc<dyn TextRecognizer>) -> Self {
        self.engine = Some(engine);
        self
    }

    /// Replace the fallback recognizer.
    pub fn with_fallback(mut self, fallback: SimulatedRecognizer) -> Self {
        self.fallback = fallback;
        self
    }

    /// Run the full pipeline over one uploaded document.
    pub fn process(
        &self,
        image: &DocumentImage<'_>,
        doc_type: DocumentType,
    ) -> Result<ExtractionResult> {
        let start = Instant::now();
        info!(
            "processing {doc_type} document ({} bytes, {})",
            image.byte_size(),
            image.mime_type()
        );

        self.input.validate(image)?;

        let enhanced = self
            .preprocessor
            .enhance_encoded(image.bytes(), image.mime_type())?;
        let (raw_text, recognizer) = self.recognize(&enhanced, image.mime_type(), doc_type)?;

        let fields = self.parser.parse(&raw_text, doc_type);
        self.validator.validate(&fields, doc_type)?;

        let warnings = self.validator.warnings(&fields, doc_type);
        let confidence = self.validator.confidence_score(&fields, doc_type);
        debug!(
            "extracted {} fields with confidence {confidence:.2}",
            fields.to_map().len()
        );

        Ok(ExtractionResult {
            fields,
            raw_text,
            metadata: ExtractionMetadata {
                confidence,
                recognizer: Some(recognizer.to_string()),
                processing_time_ms: Some(start.elapsed().as_millis() as u64),
                warnings,
            },
        })
    }

    /// Engine first (under its deadline), simulated fallback second. The
    /// fallback gets the aggressively binarized variant of the image.
    fn recognize(
        &self,
        enhanced: &[u8],
        mime_type: &str,
        doc_type: DocumentType,
    ) -> Result<(String, &'static str)> {
        if let Some(engine) = &self.engine {
            match recognize_with_deadline(
                Arc::clone(engine),
                enhanced.to_vec(),
                doc_type,
                self.engine_timeout,
            ) {
                Ok(text) => return Ok((text, engine.name())),
                Err(err) => warn!("engine recognition failed, falling back: {err}"),
            }
        }

        let binarized = self.preprocessor.binarize_encoded(enhanced, mime_type)?;
        let text = self.fallback.recognize(&binarized, doc_type)?;
        Ok((text, self.fallback.name()))
    }
}

impl Default for DocumentExtractor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "tesseract")]
fn default_engine(
    config: &crate::models::config::RecognizerConfig,
) -> Option<Arc<dyn TextRecognizer>> {
    use crate::ocr::TesseractRecognizer;

    config.prefer_engine.then(|| {
        let engine: Arc<dyn TextRecognizer> =
            Arc::new(TesseractRecognizer::new(config.languages.clone()));
        engine
    })
}

#[cfg(not(feature = "tesseract"))]
fn default_engine(
    _config: &crate::models::config::RecognizerConfig,
) -> Option<Arc<dyn TextRecognizer>> {
    None
}
