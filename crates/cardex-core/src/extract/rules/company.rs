//! Company-card secondary fields.

use super::clean_field;
use super::patterns::{
    COMPANY_DEPARTMENT, COMPANY_DESIGNATION, COMPANY_EMPLOYEE_ID, COMPANY_JOIN_DATE, COMPANY_NAME,
};

/// Label-anchored fields specific to company identification cards.
#[derive(Debug, Clone, Default)]
pub struct CompanyFields {
    /// Employee ID from the card's own label; takes precedence over the
    /// generic academic-scheme tiers.
    pub id_number: Option<String>,
    pub company: Option<String>,
    pub department: Option<String>,
    pub designation: Option<String>,
    pub join_date: Option<String>,
}

/// Extract employee ID, company header and role fields.
pub fn extract(text: &str) -> CompanyFields {
    let mut fields = CompanyFields::default();

    if let Some(caps) = COMPANY_EMPLOYEE_ID.captures(text) {
        fields.id_number = Some(caps[1].trim().to_string());
    }
    if let Some(caps) = COMPANY_NAME.captures(text) {
        fields.company = Some(clean_field(&caps[1]));
    }
    if let Some(caps) = COMPANY_DEPARTMENT.captures(text) {
        fields.department = Some(clean_field(&caps[1]));
    }
    if let Some(caps) = COMPANY_DESIGNATION.captures(text) {
        fields.designation = Some(clean_field(&caps[1]));
    }
    if let Some(caps) = COMPANY_JOIN_DATE.captures(text) {
        fields.join_date = Some(caps[1].trim().to_string());
    }

    fields
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn extracts_labeled_company_fields() {
        let text = "MERIDIAN SYSTEMS LTD.\nEMPLOYEE IDENTIFICATION CARD\n\
                    Name: SHEIKH HOSSAIN\nEmployee ID: EMP-2023-0458\n\
                    Department: Software Engineering\nDesignation: Senior Developer\n\
                    Join Date: 15 MAR 2021\n";
        let fields = extract(text);

        assert_eq!(fields.id_number.as_deref(), Some("EMP-2023-0458"));
        assert_eq!(fields.company.as_deref(), Some("MERIDIAN SYSTEMS LTD."));
        assert_eq!(fields.department.as_deref(), Some("Software Engineering"));
        assert_eq!(fields.designation.as_deref(), Some("Senior Developer"));
        assert_eq!(fields.join_date.as_deref(), Some("15 MAR 2021"));
    }

    #[test]
    fn company_header_is_taken_from_the_first_caps_line() {
        let fields = extract("ACME CORP\nEMPLOYEE ID: A-1\n");
        assert_eq!(fields.company.as_deref(), Some("ACME CORP"));
    }
}
