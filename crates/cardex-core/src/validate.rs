//! Minimum-quality acceptance checks and confidence scoring for extracted
//! fields.

use tracing::warn;

use crate::error::ValidationError;
use crate::models::config::ExtractionConfig;
use crate::models::document::{DocumentType, ExtractedFields};

const REQUIRED_FIELDS: [&str; 2] = ["firstName", "idNumber"];
const REQUIRED_FIELD_WEIGHT: f32 = 0.3;
const OPTIONAL_FIELD_WEIGHT: f32 = 0.1;

/// Optional fields that apply to a document type, by wire name.
pub fn optional_fields(doc_type: DocumentType) -> &'static [&'static str] {
    match doc_type {
        DocumentType::StudentId => &["institution", "department", "session"],
        DocumentType::NationalId => &["dateOfBirth", "fatherName", "motherName", "bloodGroup"],
        DocumentType::CompanyId => &["company", "department", "designation", "joinDate"],
    }
}

/// Enforces the acceptance bar on extracted fields and scores the result.
pub struct ResultValidator {
    config: ExtractionConfig,
}

impl ResultValidator {
    /// Create a validator with the default thresholds.
    pub fn new() -> Self {
        Self::with_config(ExtractionConfig::default())
    }

    /// Create a validator with explicit thresholds.
    pub fn with_config(config: ExtractionConfig) -> Self {
        Self { config }
    }

    /// Require a usable first name and ID number; anything else is a
    /// warning, not an error.
    pub fn validate(
        &self,
        fields: &ExtractedFields,
        doc_type: DocumentType,
    ) -> Result<(), ValidationError> {
        let first_name_ok = fields
            .first_name
            .as_deref()
            .is_some_and(|v| v.len() >= self.config.min_first_name_len);
        if !first_name_ok {
            return Err(ValidationError::MissingField {
                field: "name",
                document_type: doc_type.label().to_string(),
            });
        }

        let id_number_ok = fields
            .id_number
            .as_deref()
            .is_some_and(|v| v.len() >= self.config.min_id_number_len);
        if !id_number_ok {
            return Err(ValidationError::MissingField {
                field: "ID number",
                document_type: doc_type.label().to_string(),
            });
        }

        Ok(())
    }

    /// Non-fatal issues worth surfacing alongside the result.
    pub fn warnings(&self, fields: &ExtractedFields, doc_type: DocumentType) -> Vec<String> {
        let mut warnings = Vec::new();

        match doc_type {
            DocumentType::StudentId => {
                if fields.institution.is_none() {
                    warnings.push("institution name not found on student ID".to_string());
                }
            }
            DocumentType::NationalId => {
                if let Some(id) = fields.id_number.as_deref() {
                    let compact: String = id.chars().filter(|c| !c.is_whitespace()).collect();
                    let digits_ok = (10..=17).contains(&compact.len())
                        && compact.chars().all(|c| c.is_ascii_digit());
                    if !digits_ok {
                        warnings.push("NID number format may be invalid".to_string());
                    }
                }
            }
            DocumentType::CompanyId => {
                if fields.company.is_none() {
                    warnings.push("company name not found on company ID".to_string());
                }
            }
        }

        for warning in &warnings {
            warn!("{warning}");
        }
        warnings
    }

    /// Confidence in `[0, 1]`: required fields weigh 0.3 each, applicable
    /// optional fields 0.1 each; score is earned weight over total weight.
    pub fn confidence_score(&self, fields: &ExtractedFields, doc_type: DocumentType) -> f32 {
        let mut score = 0.0;
        let mut max_score = 0.0;

        for field in REQUIRED_FIELDS {
            max_score += REQUIRED_FIELD_WEIGHT;
            if fields.get(field).is_some_and(|v| v.len() > 1) {
                score += REQUIRED_FIELD_WEIGHT;
            }
        }

        for field in optional_fields(doc_type) {
            max_score += OPTIONAL_FIELD_WEIGHT;
            if fields.get(field).is_some_and(|v| v.len() > 1) {
                score += OPTIONAL_FIELD_WEIGHT;
            }
        }

        if max_score > 0.0 { score / max_score } else { 0.0 }
    }
}

impl Default for ResultValidator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_fields() -> ExtractedFields {
        let mut fields = ExtractedFields::default();
        fields.assign_name("SHEIKH HOSSAIN".to_string());
        fields.id_number = Some("2023-1-60-060".to_string());
        fields
    }

    #[test]
    fn accepts_minimal_required_fields() {
        let validator = ResultValidator::new();
        assert!(
            validator
                .validate(&minimal_fields(), DocumentType::StudentId)
                .is_ok()
        );
    }

    #[test]
    fn rejects_missing_name() {
        let validator = ResultValidator::new();
        let mut fields = ExtractedFields::default();
        fields.id_number = Some("2023-1-60-060".to_string());

        let err = validator
            .validate(&fields, DocumentType::StudentId)
            .unwrap_err();
        let ValidationError::MissingField {
            field,
            document_type,
        } = err;
        assert_eq!(field, "name");
        assert_eq!(document_type, "studentId");
    }

    #[test]
    fn rejects_short_id_number() {
        let validator = ResultValidator::new();
        let mut fields = minimal_fields();
        fields.id_number = Some("1234".to_string());

        let err = validator
            .validate(&fields, DocumentType::NationalId)
            .unwrap_err();
        let ValidationError::MissingField { field, .. } = err;
        assert_eq!(field, "ID number");
    }

    #[test]
    fn warns_on_missing_student_institution() {
        let validator = ResultValidator::new();
        let warnings = validator.warnings(&minimal_fields(), DocumentType::StudentId);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("institution"));
    }

    #[test]
    fn warns_on_odd_nid_number() {
        let validator = ResultValidator::new();

        let mut fields = minimal_fields();
        fields.id_number = Some("12345".to_string());
        let warnings = validator.warnings(&fields, DocumentType::NationalId);
        assert!(warnings[0].contains("NID"));

        fields.id_number = Some("1992837465".to_string());
        assert!(
            validator
                .warnings(&fields, DocumentType::NationalId)
                .is_empty()
        );
    }

    #[test]
    fn confidence_covers_required_and_optional_fields() {
        let validator = ResultValidator::new();

        // firstName + idNumber out of 0.9 total for student cards
        let base = validator.confidence_score(&minimal_fields(), DocumentType::StudentId);
        assert!((base - 0.6 / 0.9).abs() < 1e-6);

        let mut full = minimal_fields();
        full.institution = Some("EAST WEST UNIVERSITY".to_string());
        full.department = Some("Computer Science Engineering".to_string());
        full.session = Some("Spring 2023".to_string());
        let complete = validator.confidence_score(&full, DocumentType::StudentId);
        assert!((complete - 1.0).abs() < 1e-6);
    }

    #[test]
    fn confidence_never_decreases_when_optional_fields_appear() {
        let validator = ResultValidator::new();
        let mut fields = minimal_fields();
        let mut previous = validator.confidence_score(&fields, DocumentType::StudentId);

        for (name, value) in [
            ("institution", "EAST WEST UNIVERSITY"),
            ("department", "Computer Science Engineering"),
            ("session", "Spring 2023"),
        ] {
            match name {
                "institution" => fields.institution = Some(value.to_string()),
                "department" => fields.department = Some(value.to_string()),
                _ => fields.session = Some(value.to_string()),
            }
            let next = validator.confidence_score(&fields, DocumentType::StudentId);
            assert!(next >= previous, "{name} lowered the score");
            previous = next;
        }
    }

    #[test]
    fn confidence_is_zero_without_any_fields() {
        let validator = ResultValidator::new();
        let score = validator.confidence_score(&ExtractedFields::default(), DocumentType::StudentId);
        assert_eq!(score, 0.0);
    }
}
