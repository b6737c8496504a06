//! Validator seam.

use crate::report::ErrorReport;

/// Validates one input shape, appending failures to `errors`.
///
/// Implementations must not stop at the first failure and must tolerate
/// partially bound input.
pub trait Validator<T: ?Sized> {
    fn validate(&self, target: &T, errors: &mut ErrorReport);
}

/// Run `validator` over `target` into a fresh report named `object_name`.
pub fn validate_into<T: ?Sized, V: Validator<T> + ?Sized>(
    validator: &V,
    target: &T,
    object_name: &str,
) -> ErrorReport {
    let mut errors = ErrorReport::new(object_name);
    validator.validate(target, &mut errors);
    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NonEmpty;

    impl Validator<str> for NonEmpty {
        fn validate(&self, target: &str, errors: &mut ErrorReport) {
            errors.reject_if_empty_or_whitespace("value", "String", Some(target), "required");
        }
    }

    #[test]
    fn validate_into_collects_errors() {
        assert!(validate_into(&NonEmpty, "", "form").has_errors());
        assert!(!validate_into(&NonEmpty, "x", "form").has_errors());
    }
}
