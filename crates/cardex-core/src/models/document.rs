//! Document data models for the extraction pipeline.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Kind of identity document being processed.
///
/// Selects the secondary-field rules and the exclusion vocabulary applied
/// by the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DocumentType {
    /// University or college student identification card.
    #[serde(rename = "studentId")]
    StudentId,
    /// Government-issued national identity card.
    #[serde(rename = "nid")]
    NationalId,
    /// Employer-issued company identification card.
    #[serde(rename = "companyId")]
    CompanyId,
}

impl DocumentType {
    /// Wire name of the document type.
    pub fn label(&self) -> &'static str {
        match self {
            DocumentType::StudentId => "studentId",
            DocumentType::NationalId => "nid",
            DocumentType::CompanyId => "companyId",
        }
    }

    /// Parse a document type from its wire name. Case and separators are
    /// ignored, so `student-id` and `studentId` both resolve.
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().replace(['-', '_'], "").as_str() {
            "studentid" | "student" => Some(DocumentType::StudentId),
            "nid" | "nationalid" => Some(DocumentType::NationalId),
            "companyid" | "company" => Some(DocumentType::CompanyId),
            _ => None,
        }
    }
}

impl fmt::Display for DocumentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// An uploaded document image: raw bytes plus the declared media type.
///
/// Ephemeral; created at upload and discarded once the processing call
/// returns.
#[derive(Debug, Clone, Copy)]
pub struct DocumentImage<'a> {
    bytes: &'a [u8],
    mime_type: &'a str,
}

impl<'a> DocumentImage<'a> {
    /// Wrap raw image bytes and their declared MIME type.
    pub fn new(bytes: &'a [u8], mime_type: &'a str) -> Self {
        Self { bytes, mime_type }
    }

    /// Raw image bytes.
    pub fn bytes(&self) -> &'a [u8] {
        self.bytes
    }

    /// Declared MIME type, e.g. `image/jpeg`.
    pub fn mime_type(&self) -> &'a str {
        self.mime_type
    }

    /// Size of the upload in bytes.
    pub fn byte_size(&self) -> usize {
        self.bytes.len()
    }
}

/// Structured identity fields extracted from a document.
///
/// Field names follow the wire format of the surrounding application
/// (camelCase). Which optional fields apply depends on the document type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExtractedFields {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_number: Option<String>,

    // Student cards
    #[serde(skip_serializing_if = "Option::is_none")]
    pub institution: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session: Option<String>,

    // National identity cards
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub father_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mother_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blood_group: Option<String>,

    // Company cards
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub designation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub join_date: Option<String>,
}

/// Wire names of every field, in serialization order.
const FIELD_NAMES: [&str; 14] = [
    "fullName",
    "firstName",
    "lastName",
    "idNumber",
    "institution",
    "department",
    "session",
    "dateOfBirth",
    "fatherName",
    "motherName",
    "bloodGroup",
    "company",
    "designation",
    "joinDate",
];

impl ExtractedFields {
    /// Set the full name, splitting it into first and last name on
    /// whitespace (first token, remainder).
    pub fn assign_name(&mut self, full_name: String) {
        let mut parts = full_name.split_whitespace();
        self.first_name = parts.next().map(str::to_string);
        let rest = parts.collect::<Vec<_>>().join(" ");
        self.last_name = (!rest.is_empty()).then_some(rest);
        self.full_name = Some(full_name);
    }

    /// Look up a field value by its wire name.
    pub fn get(&self, name: &str) -> Option<&str> {
        match name {
            "fullName" => self.full_name.as_deref(),
            "firstName" => self.first_name.as_deref(),
            "lastName" => self.last_name.as_deref(),
            "idNumber" => self.id_number.as_deref(),
            "institution" => self.institution.as_deref(),
            "department" => self.department.as_deref(),
            "session" => self.session.as_deref(),
            "dateOfBirth" => self.date_of_birth.as_deref(),
            "fatherName" => self.father_name.as_deref(),
            "motherName" => self.mother_name.as_deref(),
            "bloodGroup" => self.blood_group.as_deref(),
            "company" => self.company.as_deref(),
            "designation" => self.designation.as_deref(),
            "joinDate" => self.join_date.as_deref(),
            _ => None,
        }
    }

    /// Name → value view of every populated field.
    pub fn to_map(&self) -> BTreeMap<String, String> {
        FIELD_NAMES
            .iter()
            .filter_map(|name| self.get(name).map(|v| (name.to_string(), v.to_string())))
            .collect()
    }

    /// Whether no field was extracted at all.
    pub fn is_empty(&self) -> bool {
        FIELD_NAMES.iter().all(|name| self.get(name).is_none())
    }
}

/// Metadata about one extraction run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExtractionMetadata {
    /// Overall extraction confidence (0.0 - 1.0).
    pub confidence: f32,

    /// Recognizer that produced the raw text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recognizer: Option<String>,

    /// Processing time in milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processing_time_ms: Option<u64>,

    /// Non-fatal issues encountered during extraction.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

/// Result of running the full pipeline over one document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionResult {
    /// Extracted identity fields.
    pub fields: ExtractedFields,

    /// Raw recognized text the fields were parsed from.
    pub raw_text: String,

    /// Extraction metadata.
    pub metadata: ExtractionMetadata,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn assign_name_splits_first_and_last() {
        let mut fields = ExtractedFields::default();
        fields.assign_name("SHEIKH HOSSAIN".to_string());

        assert_eq!(fields.full_name.as_deref(), Some("SHEIKH HOSSAIN"));
        assert_eq!(fields.first_name.as_deref(), Some("SHEIKH"));
        assert_eq!(fields.last_name.as_deref(), Some("HOSSAIN"));
    }

    #[test]
    fn assign_name_joins_multi_part_last_name() {
        let mut fields = ExtractedFields::default();
        fields.assign_name("JOHN ALEXANDER DOE".to_string());

        assert_eq!(fields.first_name.as_deref(), Some("JOHN"));
        assert_eq!(fields.last_name.as_deref(), Some("ALEXANDER DOE"));
    }

    #[test]
    fn to_map_skips_unset_fields() {
        let mut fields = ExtractedFields::default();
        fields.assign_name("SHEIKH HOSSAIN".to_string());
        fields.id_number = Some("2023-1-60-060".to_string());

        let map = fields.to_map();
        assert_eq!(map.len(), 4);
        assert_eq!(map.get("idNumber").map(String::as_str), Some("2023-1-60-060"));
        assert!(!map.contains_key("institution"));
    }

    #[test]
    fn document_type_parses_wire_names() {
        assert_eq!(DocumentType::parse("studentId"), Some(DocumentType::StudentId));
        assert_eq!(DocumentType::parse("student-id"), Some(DocumentType::StudentId));
        assert_eq!(DocumentType::parse("nid"), Some(DocumentType::NationalId));
        assert_eq!(DocumentType::parse("companyId"), Some(DocumentType::CompanyId));
        assert_eq!(DocumentType::parse("passport"), None);
    }

    #[test]
    fn fields_serialize_with_wire_names() {
        let mut fields = ExtractedFields::default();
        fields.assign_name("SHEIKH HOSSAIN".to_string());
        fields.id_number = Some("2023-1-60-060".to_string());

        let json = serde_json::to_string(&fields).unwrap();
        assert!(json.contains("\"fullName\""));
        assert!(json.contains("\"idNumber\""));
        assert!(!json.contains("\"bloodGroup\""));
    }
}
