//! Item domain module.
//!
//! This crate contains the item record, the submitted form shapes and the
//! business rules that validate them (no IO, no HTTP, no storage).

pub mod form;
pub mod item;
pub mod validator;

pub use form::{ItemSaveForm, ItemUpdateForm};
pub use item::{Item, ItemParams};
pub use validator::{ItemValidator, RuleSet};

/// Object name under which item errors are reported.
pub const OBJECT_NAME: &str = "item";
