//! Message-code resolution.
//!
//! An error code alone ("required") is too coarse to pick a message, so every
//! error stores a list of candidate keys, most specific first. Renderers try
//! them in order and use the first one their message source knows.

/// Maps an error code (plus context) to ordered candidate message keys.
pub trait MessageCodesResolver {
    /// Candidates for an object-scoped error.
    fn resolve_object_codes(&self, code: &str, object_name: &str) -> Vec<String>;

    /// Candidates for a field-scoped error.
    fn resolve_field_codes(
        &self,
        code: &str,
        object_name: &str,
        field: &str,
        field_type: &str,
    ) -> Vec<String>;
}

/// The standard key layout:
///
/// - object errors: `code.object`, `code`
/// - field errors: `code.object.field`, `code.field`, `code.fieldType`, `code`
///
/// Candidates are never deduplicated, even when two of them coincide.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct DefaultMessageCodesResolver;

impl MessageCodesResolver for DefaultMessageCodesResolver {
    fn resolve_object_codes(&self, code: &str, object_name: &str) -> Vec<String> {
        vec![format!("{code}.{object_name}"), code.to_string()]
    }

    fn resolve_field_codes(
        &self,
        code: &str,
        object_name: &str,
        field: &str,
        field_type: &str,
    ) -> Vec<String> {
        vec![
            format!("{code}.{object_name}.{field}"),
            format!("{code}.{field}"),
            format!("{code}.{field_type}"),
            code.to_string(),
        ]
    }
}
