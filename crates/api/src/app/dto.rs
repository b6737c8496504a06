use std::collections::BTreeMap;

use serde::Serialize;

use itemservice_items::Item;
use itemservice_validation::{ErrorReport, FormValues, MessageSource, ValidationError};

// -------------------------
// Form views
// -------------------------

pub const VIEW_ADD_FORM: &str = "addForm";
pub const VIEW_EDIT_FORM: &str = "editForm";

/// A validation error together with its resolved message.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorView {
    #[serde(flatten)]
    pub error: ValidationError,
    pub message: String,
}

/// Everything a form template needs to (re-)render itself.
#[derive(Debug, Clone, Serialize)]
pub struct FormView {
    pub view: &'static str,
    /// Field values to show in the inputs, exactly as submitted.
    pub item: BTreeMap<String, String>,
    pub errors: Vec<ErrorView>,
    pub field_messages: BTreeMap<String, Vec<String>>,
    pub global_messages: Vec<String>,
}

impl FormView {
    pub fn empty(view: &'static str) -> Self {
        Self {
            view,
            item: BTreeMap::new(),
            errors: Vec::new(),
            field_messages: BTreeMap::new(),
            global_messages: Vec::new(),
        }
    }

    pub fn for_item(view: &'static str, item: &Item) -> Self {
        Self {
            item: item_fields(item),
            ..Self::empty(view)
        }
    }

    /// Re-render a rejected submission.
    pub fn rejected(
        view: &'static str,
        submitted: &FormValues,
        errors: &ErrorReport,
        messages: &impl MessageSource,
    ) -> Self {
        let mut out = Self {
            item: submitted
                .as_map()
                .iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
            ..Self::empty(view)
        };

        for error in errors.all_errors() {
            let message = messages.resolve_error(error);
            match error.field() {
                Some(field) => out
                    .field_messages
                    .entry(field.to_string())
                    .or_default()
                    .push(message.clone()),
                None => out.global_messages.push(message.clone()),
            }
            out.errors.push(ErrorView {
                error: error.clone(),
                message,
            });
        }
        out
    }
}

pub fn error_views(errors: &ErrorReport, messages: &impl MessageSource) -> Vec<ErrorView> {
    errors
        .all_errors()
        .iter()
        .map(|error| ErrorView {
            message: messages.resolve_error(error),
            error: error.clone(),
        })
        .collect()
}

// -------------------------
// JSON mapping helpers
// -------------------------

fn item_fields(item: &Item) -> BTreeMap<String, String> {
    BTreeMap::from([
        ("id".to_string(), item.id_typed().to_string()),
        ("itemName".to_string(), item.item_name().to_string()),
        ("price".to_string(), item.price().to_string()),
        ("quantity".to_string(), item.quantity().to_string()),
    ])
}

pub fn item_to_json(item: &Item) -> serde_json::Value {
    serde_json::json!({
        "id": item.id_typed().get(),
        "itemName": item.item_name(),
        "price": item.price(),
        "quantity": item.quantity(),
    })
}
