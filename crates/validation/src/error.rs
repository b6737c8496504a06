//! Field- and object-scoped validation errors.

use serde::{Deserialize, Serialize};

/// A message substitution argument (`{0}`, `{1}`, ... in message templates).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ErrorArgument {
    Int(i64),
    Text(String),
}

impl core::fmt::Display for ErrorArgument {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ErrorArgument::Int(v) => core::fmt::Display::fmt(v, f),
            ErrorArgument::Text(v) => f.write_str(v),
        }
    }
}

impl From<i64> for ErrorArgument {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<&str> for ErrorArgument {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for ErrorArgument {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// A failure attributable to one named attribute of the submitted object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub object_name: String,
    pub field: String,
    /// The value as submitted, so a re-rendered form can show it again.
    pub rejected_value: Option<String>,
    /// `true` when the value could not be converted to the field's type.
    pub binding_failure: bool,
    /// Candidate message keys, most specific first.
    pub codes: Vec<String>,
    pub arguments: Vec<ErrorArgument>,
    pub default_message: Option<String>,
}

impl FieldError {
    /// Error carrying only a literal message and no codes.
    pub fn with_message(
        object_name: impl Into<String>,
        field: impl Into<String>,
        default_message: impl Into<String>,
    ) -> Self {
        Self {
            object_name: object_name.into(),
            field: field.into(),
            rejected_value: None,
            binding_failure: false,
            codes: Vec::new(),
            arguments: Vec::new(),
            default_message: Some(default_message.into()),
        }
    }

    pub fn rejected(mut self, value: Option<String>) -> Self {
        self.rejected_value = value;
        self
    }

    pub fn codes(mut self, codes: Vec<String>, arguments: Vec<ErrorArgument>) -> Self {
        self.codes = codes;
        self.arguments = arguments;
        self
    }

    /// The least specific code, i.e. the one passed to the resolver.
    pub fn code(&self) -> Option<&str> {
        self.codes.last().map(String::as_str)
    }
}

/// A failure arising from a relationship between attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectError {
    pub object_name: String,
    pub codes: Vec<String>,
    pub arguments: Vec<ErrorArgument>,
    pub default_message: Option<String>,
}

impl ObjectError {
    pub fn with_message(object_name: impl Into<String>, default_message: impl Into<String>) -> Self {
        Self {
            object_name: object_name.into(),
            codes: Vec::new(),
            arguments: Vec::new(),
            default_message: Some(default_message.into()),
        }
    }

    pub fn codes(mut self, codes: Vec<String>, arguments: Vec<ErrorArgument>) -> Self {
        self.codes = codes;
        self.arguments = arguments;
        self
    }

    pub fn code(&self) -> Option<&str> {
        self.codes.last().map(String::as_str)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ValidationError {
    Field(FieldError),
    Object(ObjectError),
}

impl ValidationError {
    pub fn object_name(&self) -> &str {
        match self {
            ValidationError::Field(e) => &e.object_name,
            ValidationError::Object(e) => &e.object_name,
        }
    }

    pub fn codes(&self) -> &[String] {
        match self {
            ValidationError::Field(e) => &e.codes,
            ValidationError::Object(e) => &e.codes,
        }
    }

    pub fn arguments(&self) -> &[ErrorArgument] {
        match self {
            ValidationError::Field(e) => &e.arguments,
            ValidationError::Object(e) => &e.arguments,
        }
    }

    pub fn default_message(&self) -> Option<&str> {
        match self {
            ValidationError::Field(e) => e.default_message.as_deref(),
            ValidationError::Object(e) => e.default_message.as_deref(),
        }
    }

    pub fn field(&self) -> Option<&str> {
        match self {
            ValidationError::Field(e) => Some(&e.field),
            ValidationError::Object(_) => None,
        }
    }

    pub fn code(&self) -> Option<&str> {
        self.codes().last().map(String::as_str)
    }
}

impl From<FieldError> for ValidationError {
    fn from(value: FieldError) -> Self {
        Self::Field(value)
    }
}

impl From<ObjectError> for ValidationError {
    fn from(value: ObjectError) -> Self {
        Self::Object(value)
    }
}

impl core::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ValidationError::Field(e) => write!(
                f,
                "Field error in object '{}' on field '{}': rejected value [{}]; codes [{}]",
                e.object_name,
                e.field,
                e.rejected_value.as_deref().unwrap_or("null"),
                e.codes.join(","),
            ),
            ValidationError::Object(e) => write!(
                f,
                "Error in object '{}': codes [{}]",
                e.object_name,
                e.codes.join(","),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_is_least_specific_candidate() {
        let err = FieldError::with_message("item", "price", "bad price").codes(
            vec!["range.item.price".into(), "range.price".into(), "range.i32".into(), "range".into()],
            vec![1000.into(), 1_000_000.into()],
        );
        assert_eq!(err.code(), Some("range"));
        assert_eq!(ValidationError::from(err).field(), Some("price"));
    }

    #[test]
    fn message_only_errors_have_no_code() {
        let err = ObjectError::with_message("item", "total too low");
        assert_eq!(err.code(), None);
        let err = ValidationError::from(err);
        assert_eq!(err.default_message(), Some("total too low"));
        assert_eq!(err.field(), None);
    }

    #[test]
    fn serializes_with_type_tag() {
        let err = ValidationError::from(
            ObjectError::with_message("item", "low").codes(
                vec!["totalPriceMin.item".into(), "totalPriceMin".into()],
                vec![10000.into(), 0.into()],
            ),
        );
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["type"], "object");
        assert_eq!(json["object_name"], "item");
        assert_eq!(json["arguments"], serde_json::json!([10000, 0]));
    }

    #[test]
    fn display_lists_codes() {
        let err = ValidationError::from(
            FieldError::with_message("item", "quantity", "too many")
                .rejected(Some("10000".into()))
                .codes(vec!["max.item.quantity".into(), "max".into()], vec![9999.into()]),
        );
        assert_eq!(
            err.to_string(),
            "Field error in object 'item' on field 'quantity': rejected value [10000]; codes [max.item.quantity,max]"
        );
    }
}
