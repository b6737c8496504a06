//! Per-request error accumulation.

use std::sync::Arc;

use crate::TYPE_MISMATCH;
use crate::codes::{DefaultMessageCodesResolver, MessageCodesResolver};
use crate::error::{ErrorArgument, FieldError, ObjectError, ValidationError};

/// Ordered collection of validation failures for one submitted object.
///
/// Errors only ever accumulate. Binding and every validation rule append to
/// the same report; callers inspect it once, after all of them ran.
#[derive(Clone)]
pub struct ErrorReport {
    object_name: String,
    errors: Vec<ValidationError>,
    resolver: Arc<dyn MessageCodesResolver + Send + Sync>,
}

impl core::fmt::Debug for ErrorReport {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ErrorReport")
            .field("object_name", &self.object_name)
            .field("errors", &self.errors)
            .finish_non_exhaustive()
    }
}

impl ErrorReport {
    pub fn new(object_name: impl Into<String>) -> Self {
        Self::with_resolver(object_name, Arc::new(DefaultMessageCodesResolver))
    }

    pub fn with_resolver(
        object_name: impl Into<String>,
        resolver: Arc<dyn MessageCodesResolver + Send + Sync>,
    ) -> Self {
        Self {
            object_name: object_name.into(),
            errors: Vec::new(),
            resolver,
        }
    }

    pub fn object_name(&self) -> &str {
        &self.object_name
    }

    /// Append a fully built error as-is (no code resolution).
    pub fn add_error(&mut self, error: impl Into<ValidationError>) {
        self.errors.push(error.into());
    }

    /// Record a field error under `code`, expanded into its candidate codes.
    pub fn reject_value(
        &mut self,
        field: &str,
        field_type: &str,
        code: &str,
        arguments: Vec<ErrorArgument>,
        rejected_value: Option<String>,
    ) {
        let codes = self
            .resolver
            .resolve_field_codes(code, &self.object_name, field, field_type);
        self.errors.push(ValidationError::Field(FieldError {
            object_name: self.object_name.clone(),
            field: field.to_string(),
            rejected_value,
            binding_failure: false,
            codes,
            arguments,
            default_message: None,
        }));
    }

    /// Record an object-scoped error under `code`.
    pub fn reject(&mut self, code: &str, arguments: Vec<ErrorArgument>) {
        let codes = self.resolver.resolve_object_codes(code, &self.object_name);
        self.errors.push(ValidationError::Object(ObjectError {
            object_name: self.object_name.clone(),
            codes,
            arguments,
            default_message: None,
        }));
    }

    /// Record that `raw` could not be converted to `field_type`.
    pub fn reject_type_mismatch(&mut self, field: &str, field_type: &str, raw: &str) {
        let codes = self
            .resolver
            .resolve_field_codes(TYPE_MISMATCH, &self.object_name, field, field_type);
        self.errors.push(ValidationError::Field(FieldError {
            object_name: self.object_name.clone(),
            field: field.to_string(),
            rejected_value: Some(raw.to_string()),
            binding_failure: true,
            codes,
            arguments: vec![ErrorArgument::from(field)],
            default_message: Some(format!(
                "Failed to convert value '{raw}' of field '{field}' to type {field_type}"
            )),
        }));
    }

    /// Reject `field` with `code` when `value` is absent, empty or whitespace only.
    ///
    /// Returns `true` when an error was recorded.
    pub fn reject_if_empty_or_whitespace(
        &mut self,
        field: &str,
        field_type: &str,
        value: Option<&str>,
        code: &str,
    ) -> bool {
        let blank = value.is_none_or(|v| v.trim().is_empty());
        if blank {
            self.reject_value(field, field_type, code, Vec::new(), value.map(str::to_string));
        }
        blank
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    pub fn all_errors(&self) -> &[ValidationError] {
        &self.errors
    }

    pub fn field_errors(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.iter().filter_map(|e| match e {
            ValidationError::Field(f) => Some(f),
            ValidationError::Object(_) => None,
        })
    }

    pub fn global_errors(&self) -> impl Iterator<Item = &ObjectError> {
        self.errors.iter().filter_map(|e| match e {
            ValidationError::Object(o) => Some(o),
            ValidationError::Field(_) => None,
        })
    }

    pub fn field_errors_for<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a FieldError> {
        self.field_errors().filter(move |e| e.field == field)
    }

    /// First error recorded for `field`.
    pub fn field_error(&self, field: &str) -> Option<&FieldError> {
        self.field_errors().find(|e| e.field == field)
    }

    pub fn has_field_errors(&self) -> bool {
        self.field_errors().next().is_some()
    }

    pub fn has_field_errors_for(&self, field: &str) -> bool {
        self.field_error(field).is_some()
    }

    pub fn has_global_errors(&self) -> bool {
        self.global_errors().next().is_some()
    }

    /// The submitted text of a field that failed, if any was kept.
    pub fn rejected_value(&self, field: &str) -> Option<&str> {
        self.field_errors()
            .filter(|e| e.field == field)
            .find_map(|e| e.rejected_value.as_deref())
    }
}

impl core::fmt::Display for ErrorReport {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} errors", self.errors.len())?;
        for error in &self.errors {
            write!(f, "\n{error}")?;
        }
        Ok(())
    }
}
