use domain::SymptomId;

/// Symptom codes from a urlencoded checklist. Both `symptoms` and
/// `symptoms[]` are accepted; blank values are dropped.
pub fn selected_symptoms(body: &[u8]) -> Vec<SymptomId> {
    url::form_urlencoded::parse(body)
        .filter(|(key, _)| key == "symptoms" || key == "symptoms[]")
        .map(|(_, value)| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .map(SymptomId)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeated_fields() {
        let selected = selected_symptoms(b"symptoms=G01&symptoms=G03&other=x");
        assert_eq!(selected, vec![SymptomId::new("G01"), SymptomId::new("G03")]);
    }

    #[test]
    fn test_bracket_style_and_blanks() {
        let selected = selected_symptoms(b"symptoms%5B%5D=G02&symptoms=+&symptoms[]=G05");
        assert_eq!(selected, vec![SymptomId::new("G02"), SymptomId::new("G05")]);
    }

    #[test]
    fn test_empty_body() {
        assert!(selected_symptoms(b"").is_empty());
    }
}
