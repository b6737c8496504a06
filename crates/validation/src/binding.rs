//! Field-by-field binding of raw form values.
//!
//! A conversion failure on one field never aborts binding of the others: the
//! field is left empty and a `typeMismatch` error is recorded instead.

use std::collections::HashMap;
use std::str::FromStr;

use crate::report::ErrorReport;

/// Raw submitted values, keyed by field name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues {
    values: HashMap<String, String>,
}

impl FormValues {
    pub fn new(values: HashMap<String, String>) -> Self {
        Self { values }
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.values.get(field).map(String::as_str)
    }

    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.values.insert(field.into(), value.into());
    }

    pub fn as_map(&self) -> &HashMap<String, String> {
        &self.values
    }

    /// Bind a text field. Present values are kept verbatim, including blank ones.
    pub fn bind_text(&self, field: &str) -> Option<String> {
        self.get(field).map(str::to_string)
    }

    /// Bind a field parsed with [`FromStr`].
    ///
    /// Absent or blank values bind to `None` with no error. Values that fail to
    /// parse bind to `None` and record a type mismatch carrying the raw text.
    pub fn bind_parsed<T: FromStr>(
        &self,
        field: &str,
        field_type: &str,
        errors: &mut ErrorReport,
    ) -> Option<T> {
        let raw = self.get(field)?;
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        match trimmed.parse::<T>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::debug!(field, field_type, raw, "binding failure");
                errors.reject_type_mismatch(field, field_type, raw);
                None
            }
        }
    }
}

impl From<HashMap<String, String>> for FormValues {
    fn from(values: HashMap<String, String>) -> Self {
        Self::new(values)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FormValues {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_numbers() {
        let values: FormValues = [("price", " 1500 ")].into_iter().collect();
        let mut errors = ErrorReport::new("item");
        assert_eq!(values.bind_parsed::<i32>("price", "i32", &mut errors), Some(1500));
        assert!(!errors.has_errors());
    }

    #[test]
    fn absent_and_blank_bind_to_none_silently() {
        let values: FormValues = [("price", "")].into_iter().collect();
        let mut errors = ErrorReport::new("item");
        assert_eq!(values.bind_parsed::<i32>("price", "i32", &mut errors), None);
        assert_eq!(values.bind_parsed::<i32>("quantity", "i32", &mut errors), None);
        assert!(!errors.has_errors());
    }

    #[test]
    fn unparsable_records_type_mismatch() {
        let values: FormValues = [("price", "qqq"), ("quantity", "10")].into_iter().collect();
        let mut errors = ErrorReport::new("item");

        assert_eq!(values.bind_parsed::<i32>("price", "i32", &mut errors), None);
        assert_eq!(values.bind_parsed::<i32>("quantity", "i32", &mut errors), Some(10));

        let err = errors.field_error("price").unwrap();
        assert!(err.binding_failure);
        assert_eq!(err.rejected_value.as_deref(), Some("qqq"));
        assert_eq!(errors.error_count(), 1);
    }

    #[test]
    fn overflow_is_a_type_mismatch() {
        let values: FormValues = [("price", "99999999999")].into_iter().collect();
        let mut errors = ErrorReport::new("item");
        assert_eq!(values.bind_parsed::<i32>("price", "i32", &mut errors), None);
        assert!(errors.has_field_errors_for("price"));
    }

    #[test]
    fn text_is_kept_verbatim() {
        let values: FormValues = [("itemName", "  ")].into_iter().collect();
        assert_eq!(values.bind_text("itemName").as_deref(), Some("  "));
        assert_eq!(values.bind_text("missing"), None);
    }
}
