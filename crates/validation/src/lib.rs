//! Form validation toolkit: error accumulation, message codes and messages.
//!
//! Nothing in here knows about items. The model is:
//! - binding turns raw form values into typed fields, recording `typeMismatch`
//!   errors instead of failing;
//! - a [`Validator`] appends field/object errors to an [`ErrorReport`];
//! - every error carries an ordered list of message codes produced by a
//!   [`MessageCodesResolver`], which a [`MessageSource`] turns into text.

pub mod binding;
pub mod codes;
pub mod error;
pub mod messages;
pub mod report;
pub mod validator;

pub use binding::FormValues;
pub use codes::{DefaultMessageCodesResolver, MessageCodesResolver};
pub use error::{ErrorArgument, FieldError, ObjectError, ValidationError};
pub use messages::{MessageBundle, MessageSource};
pub use report::ErrorReport;
pub use validator::Validator;

/// Error code recorded when a submitted value cannot be converted to the field's type.
pub const TYPE_MISMATCH: &str = "typeMismatch";
