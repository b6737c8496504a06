//! Submitted form shapes.
//!
//! Registration and edits get their own form types even though they look
//! alike: each carries exactly the fields its operation accepts and is checked
//! by its own rule set.

use serde::{Deserialize, Serialize};

use itemservice_validation::{ErrorReport, FormValues};

use crate::item::ItemParams;

pub const FIELD_ID: &str = "id";
pub const FIELD_ITEM_NAME: &str = "itemName";
pub const FIELD_PRICE: &str = "price";
pub const FIELD_QUANTITY: &str = "quantity";

pub(crate) const TYPE_ID: &str = "u64";
pub(crate) const TYPE_TEXT: &str = "String";
pub(crate) const TYPE_NUMBER: &str = "i32";

/// Registration form. Every field may be missing after binding.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemSaveForm {
    pub item_name: Option<String>,
    pub price: Option<i32>,
    pub quantity: Option<i32>,
}

impl ItemSaveForm {
    /// Bind raw values, recording conversion failures in `errors`.
    pub fn bind(values: &FormValues, errors: &mut ErrorReport) -> Self {
        Self {
            item_name: values.bind_text(FIELD_ITEM_NAME),
            price: values.bind_parsed(FIELD_PRICE, TYPE_NUMBER, errors),
            quantity: values.bind_parsed(FIELD_QUANTITY, TYPE_NUMBER, errors),
        }
    }

    /// The item attributes, once every field is present.
    pub fn to_params(&self) -> Option<ItemParams> {
        Some(ItemParams::new(self.item_name.clone()?, self.price?, self.quantity?))
    }
}

/// Edit form. Carries the id of the item being edited.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemUpdateForm {
    pub id: Option<u64>,
    pub item_name: Option<String>,
    pub price: Option<i32>,
    pub quantity: Option<i32>,
}

impl ItemUpdateForm {
    pub fn bind(values: &FormValues, errors: &mut ErrorReport) -> Self {
        Self {
            id: values.bind_parsed(FIELD_ID, TYPE_ID, errors),
            item_name: values.bind_text(FIELD_ITEM_NAME),
            price: values.bind_parsed(FIELD_PRICE, TYPE_NUMBER, errors),
            quantity: values.bind_parsed(FIELD_QUANTITY, TYPE_NUMBER, errors),
        }
    }

    pub fn to_params(&self) -> Option<ItemParams> {
        Some(ItemParams::new(self.item_name.clone()?, self.price?, self.quantity?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_form_binds_what_it_can() {
        let values: FormValues = [("itemName", "shirt"), ("price", "abc"), ("quantity", "10")]
            .into_iter()
            .collect();
        let mut errors = ErrorReport::new("item");

        let form = ItemSaveForm::bind(&values, &mut errors);

        assert_eq!(form.item_name.as_deref(), Some("shirt"));
        assert_eq!(form.price, None);
        assert_eq!(form.quantity, Some(10));
        assert_eq!(errors.error_count(), 1);
        assert_eq!(errors.field_error("price").and_then(|e| e.code()), Some("typeMismatch"));
        assert_eq!(form.to_params(), None);
    }

    #[test]
    fn update_form_binds_id() {
        let values: FormValues = [
            ("id", "4"),
            ("itemName", "shirt"),
            ("price", "1000"),
            ("quantity", "10"),
        ]
        .into_iter()
        .collect();
        let mut errors = ErrorReport::new("item");

        let form = ItemUpdateForm::bind(&values, &mut errors);

        assert!(!errors.has_errors());
        assert_eq!(form.id, Some(4));
        assert_eq!(form.to_params(), Some(ItemParams::new("shirt", 1000, 10)));
    }

    #[test]
    fn update_form_rejects_negative_id() {
        let values: FormValues = [("id", "-1")].into_iter().collect();
        let mut errors = ErrorReport::new("item");

        let form = ItemUpdateForm::bind(&values, &mut errors);

        assert_eq!(form.id, None);
        let err = errors.field_error("id").unwrap();
        assert_eq!(err.codes[2], "typeMismatch.u64");
    }

    #[test]
    fn json_uses_camel_case_and_nulls() {
        let form: ItemSaveForm =
            serde_json::from_str(r#"{"itemName":"hello","price":null,"quantity":3}"#).unwrap();
        assert_eq!(form.item_name.as_deref(), Some("hello"));
        assert_eq!(form.price, None);
        assert_eq!(form.quantity, Some(3));
    }
}
