//! Required-field check run when the offer form is submitted.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequiredField {
    /// Element id of the control
    pub id: String,
    pub value: String,
}

impl RequiredField {
    pub fn new(id: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            value: value.into(),
        }
    }

    pub fn is_blank(&self) -> bool {
        self.value.trim().is_empty()
    }
}

/// Blocks submission; `invalid` lists control ids in document order.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Compila tutti i campi obbligatori prima di continuare.")]
pub struct RequiredFieldsError {
    pub invalid: Vec<String>,
}

impl RequiredFieldsError {
    /// The control to scroll to and focus.
    pub fn first(&self) -> Option<&str> {
        self.invalid.first().map(String::as_str)
    }
}

pub fn validate(fields: &[RequiredField]) -> Result<(), RequiredFieldsError> {
    let invalid: Vec<String> = fields
        .iter()
        .filter(|f| f.is_blank())
        .map(|f| f.id.clone())
        .collect();

    if invalid.is_empty() {
        Ok(())
    } else {
        Err(RequiredFieldsError { invalid })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_filled() {
        let fields = vec![
            RequiredField::new("customer", "ACME"),
            RequiredField::new("date", "2024-01-01"),
        ];
        assert!(validate(&fields).is_ok());
    }

    #[test]
    fn test_reports_blank_fields_in_order() {
        let fields = vec![
            RequiredField::new("offer_number", "12"),
            RequiredField::new("customer", "   "),
            RequiredField::new("product_0name_", ""),
        ];
        let err = validate(&fields).unwrap_err();
        assert_eq!(err.invalid, vec!["customer", "product_0name_"]);
        assert_eq!(err.first(), Some("customer"));
        assert_eq!(
            err.to_string(),
            "Compila tutti i campi obbligatori prima di continuare."
        );
    }
}
