//! Deterministic fallback recognizer.
//!
//! Used when no OCR engine is available or the engine call fails. Returns
//! a plausible card-layout text block per document type so the parsing
//! stages can run deterministically. The built-in samples are a demo/test
//! seam; callers can swap them with [`SimulatedRecognizer::with_fixture`].

use std::collections::HashMap;

use tracing::debug;

use crate::error::OcrError;
use crate::models::document::DocumentType;

use super::TextRecognizer;

const STUDENT_CARD: &str = "\
EAST WEST UNIVERSITY
STUDENT IDENTIFICATION CARD

Name: SHEIKH HOSSAIN
Student ID: 2023-1-60-060
Department: Computer Science Engineering
Session: Spring 2023

Valid Until: December 2027
";

const NATIONAL_CARD: &str = "\
NATIONAL ID CARD
ISSUED BY THE GOVERNMENT OF BANGLADESH

Name: SHEIKH HOSSAIN
Father: ABDUL HOSSAIN
Mother: FATEMA BEGUM
Date of Birth: 12 JAN 2001
Blood Group: O+
NID No: 1992837465
";

const COMPANY_CARD: &str = "\
MERIDIAN SYSTEMS LTD.
EMPLOYEE IDENTIFICATION CARD

Name: SHEIKH HOSSAIN
Employee ID: EMP-2023-0458
Department: Software Engineering
Designation: Senior Developer
Join Date: 15 MAR 2021
";

/// Recognizer that returns a fixed text block per document type.
pub struct SimulatedRecognizer {
    fixtures: HashMap<DocumentType, String>,
}

impl SimulatedRecognizer {
    /// Create a recognizer with the built-in sample cards.
    pub fn new() -> Self {
        let mut fixtures = HashMap::new();
        fixtures.insert(DocumentType::StudentId, STUDENT_CARD.to_string());
        fixtures.insert(DocumentType::NationalId, NATIONAL_CARD.to_string());
        fixtures.insert(DocumentType::CompanyId, COMPANY_CARD.to_string());
        Self { fixtures }
    }

    /// Replace the sample text returned for a document type.
    pub fn with_fixture(mut self, doc_type: DocumentType, text: impl Into<String>) -> Self {
        self.fixtures.insert(doc_type, text.into());
        self
    }
}

impl Default for SimulatedRecognizer {
    fn default() -> Self {
        Self::new()
    }
}

impl TextRecognizer for SimulatedRecognizer {
    fn recognize(&self, _image: &[u8], doc_type: DocumentType) -> Result<String, OcrError> {
        debug!("returning simulated transcription for {doc_type}");
        self.fixtures
            .get(&doc_type)
            .cloned()
            .ok_or_else(|| OcrError::Recognition(format!("no sample text for {doc_type}")))
    }

    fn name(&self) -> &'static str {
        "simulated"
    }
}
