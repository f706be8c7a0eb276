//! Field parser combining the generic name/ID tiers with the
//! document-type-specific secondary rules.

use tracing::{debug, info};

use crate::models::document::{DocumentType, ExtractedFields};

use super::rules::{IdNumberExtractor, NameExtractor, company, national, student};

/// Parses raw recognized text into structured identity fields.
///
/// Pure and stateless: the same text and document type always produce the
/// same fields.
pub struct DocumentParser {
    names: NameExtractor,
    ids: IdNumberExtractor,
}

impl DocumentParser {
    pub fn new() -> Self {
        Self {
            names: NameExtractor::new(),
            ids: IdNumberExtractor::new(),
        }
    }

    /// Extract fields from noisy multi-line card text.
    ///
    /// Failing to find a name or ID here is a soft failure; the result
    /// validator decides whether the document is acceptable.
    pub fn parse(&self, text: &str, doc_type: DocumentType) -> ExtractedFields {
        info!(
            "parsing {} characters of recognized text as {doc_type}",
            text.len()
        );

        let mut fields = ExtractedFields::default();

        if let Some(full_name) = self.names.extract(text) {
            fields.assign_name(full_name);
        }
        fields.id_number = self.ids.extract(text);

        match doc_type {
            DocumentType::StudentId => {
                let student = student::extract(text);
                fields.institution = student.institution;
                fields.department = student.department;
                fields.session = student.session;
            }
            DocumentType::NationalId => {
                let national = national::extract(text);
                if national.id_number.is_some() {
                    fields.id_number = national.id_number;
                }
                fields.date_of_birth = national.date_of_birth;
                fields.father_name = national.father_name;
                fields.mother_name = national.mother_name;
                fields.blood_group = national.blood_group;
            }
            DocumentType::CompanyId => {
                let company = company::extract(text);
                if company.id_number.is_some() {
                    fields.id_number = company.id_number;
                }
                fields.company = company.company;
                fields.department = company.department;
                fields.designation = company.designation;
                fields.join_date = company.join_date;
            }
        }

        debug!("extracted fields: {:?}", fields.to_map().keys());
        fields
    }
}

impl Default for DocumentParser {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const STUDENT_TEXT: &str = "\
EAST WEST UNIVERSITY
STUDENT IDENTIFICATION CARD
Name: SHEIKH HOSSAIN
Student ID: 2023-1-60-060
Department: Computer Science Engineering
Session: Spring 2023
";

    #[test]
    fn parses_student_card() {
        let parser = DocumentParser::new();
        let fields = parser.parse(STUDENT_TEXT, DocumentType::StudentId);

        assert_eq!(fields.full_name.as_deref(), Some("SHEIKH HOSSAIN"));
        assert_eq!(fields.first_name.as_deref(), Some("SHEIKH"));
        assert_eq!(fields.last_name.as_deref(), Some("HOSSAIN"));
        assert_eq!(fields.id_number.as_deref(), Some("2023-1-60-060"));
        assert_eq!(fields.institution.as_deref(), Some("EAST WEST UNIVERSITY"));
        assert_eq!(
            fields.department.as_deref(),
            Some("Computer Science Engineering")
        );
        assert_eq!(fields.session.as_deref(), Some("Spring 2023"));
    }

    #[test]
    fn parses_national_card_with_label_precedence() {
        let parser = DocumentParser::new();
        let text = "\
NATIONAL ID CARD
Name: SHEIKH HOSSAIN
Father: ABDUL HOSSAIN
Mother: FATEMA BEGUM
Date of Birth: 12 JAN 2001
Blood Group: O+
NID No: 1992837465
";
        let fields = parser.parse(text, DocumentType::NationalId);

        assert_eq!(fields.full_name.as_deref(), Some("SHEIKH HOSSAIN"));
        assert_eq!(fields.id_number.as_deref(), Some("1992837465"));
        assert_eq!(fields.date_of_birth.as_deref(), Some("12 JAN 2001"));
        assert_eq!(fields.blood_group.as_deref(), Some("O+"));
    }

    #[test]
    fn parses_company_card() {
        let parser = DocumentParser::new();
        let text = "\
MERIDIAN SYSTEMS LTD.
EMPLOYEE IDENTIFICATION CARD
Name: SHEIKH HOSSAIN
Employee ID: EMP-2023-0458
Department: Software Engineering
Designation: Senior Developer
Join Date: 15 MAR 2021
";
        let fields = parser.parse(text, DocumentType::CompanyId);

        assert_eq!(fields.full_name.as_deref(), Some("SHEIKH HOSSAIN"));
        assert_eq!(fields.id_number.as_deref(), Some("EMP-2023-0458"));
        assert_eq!(fields.company.as_deref(), Some("MERIDIAN SYSTEMS LTD."));
        assert_eq!(fields.designation.as_deref(), Some("Senior Developer"));
    }

    #[test]
    fn boilerplate_text_yields_no_mandatory_fields() {
        let parser = DocumentParser::new();
        let text = "EAST WEST UNIVERSITY\nSTUDENT IDENTIFICATION CARD\nwww.ewu.edu\n";
        let fields = parser.parse(text, DocumentType::StudentId);

        assert_eq!(fields.full_name, None);
        assert_eq!(fields.id_number, None);
    }

    #[test]
    fn parsing_is_idempotent() {
        let parser = DocumentParser::new();

        let first = parser.parse(STUDENT_TEXT, DocumentType::StudentId);
        let second = parser.parse(STUDENT_TEXT, DocumentType::StudentId);

        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_vec(&first).unwrap(),
            serde_json::to_vec(&second).unwrap()
        );
    }
}
