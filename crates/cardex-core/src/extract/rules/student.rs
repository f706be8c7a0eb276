//! Student-card secondary fields.

use super::clean_field;
use super::patterns::{STUDENT_DEPARTMENT, STUDENT_INSTITUTION, STUDENT_SESSION};

/// Label-anchored fields specific to student identification cards.
#[derive(Debug, Clone, Default)]
pub struct StudentFields {
    pub institution: Option<String>,
    pub department: Option<String>,
    pub session: Option<String>,
}

/// Extract institution, department and session from card text.
pub fn extract(text: &str) -> StudentFields {
    let mut fields = StudentFields::default();

    if let Some(caps) = STUDENT_INSTITUTION.captures(text) {
        fields.institution = Some(clean_field(&caps[1]));
    }
    if let Some(caps) = STUDENT_DEPARTMENT.captures(text) {
        fields.department = Some(clean_field(&caps[1]));
    }
    if let Some(caps) = STUDENT_SESSION.captures(text) {
        fields.session = Some(caps[1].trim().to_string());
    }

    fields
}
