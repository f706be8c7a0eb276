//! National-ID-card secondary fields.

use super::clean_field;
use super::patterns::{NID_BLOOD_GROUP, NID_DATE_OF_BIRTH, NID_FATHER, NID_MOTHER, NID_NUMBER};

/// Label-anchored fields specific to national identity cards.
#[derive(Debug, Clone, Default)]
pub struct NationalFields {
    /// NID number from the card's own label; takes precedence over the
    /// generic academic-scheme tiers.
    pub id_number: Option<String>,
    pub date_of_birth: Option<String>,
    pub father_name: Option<String>,
    pub mother_name: Option<String>,
    pub blood_group: Option<String>,
}

/// Extract NID number, birth date, parent names and blood group.
pub fn extract(text: &str) -> NationalFields {
    let mut fields = NationalFields::default();

    if let Some(caps) = NID_NUMBER.captures(text) {
        fields.id_number = Some(caps[1].trim().to_string());
    }
    if let Some(caps) = NID_DATE_OF_BIRTH.captures(text) {
        fields.date_of_birth = Some(caps[1].trim().to_string());
    }
    if let Some(caps) = NID_FATHER.captures(text) {
        fields.father_name = Some(clean_field(&caps[1]));
    }
    if let Some(caps) = NID_MOTHER.captures(text) {
        fields.mother_name = Some(clean_field(&caps[1]));
    }
    if let Some(caps) = NID_BLOOD_GROUP.captures(text) {
        fields.blood_group = Some(caps[1].trim().to_string());
    }

    fields
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn extracts_labeled_nid_fields() {
        let text = "NATIONAL ID CARD\nName: SHEIKH HOSSAIN\nFather: ABDUL HOSSAIN\n\
                    Mother: FATEMA BEGUM\nDate of Birth: 12 JAN 2001\nBlood Group: O+\n\
                    NID No: 1992837465\n";
        let fields = extract(text);

        assert_eq!(fields.id_number.as_deref(), Some("1992837465"));
        assert_eq!(fields.date_of_birth.as_deref(), Some("12 JAN 2001"));
        assert_eq!(fields.father_name.as_deref(), Some("ABDUL HOSSAIN"));
        assert_eq!(fields.mother_name.as_deref(), Some("FATEMA BEGUM"));
        assert_eq!(fields.blood_group.as_deref(), Some("O+"));
    }

    #[test]
    fn dob_label_accepts_short_form() {
        let fields = extract("DOB: 01 FEB 1999");
        assert_eq!(fields.date_of_birth.as_deref(), Some("01 FEB 1999"));
    }
}
