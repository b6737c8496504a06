//! Item business rules.
//!
//! Every rule runs regardless of earlier failures. A field that is missing
//! (never submitted, or dropped by a failed conversion) counts as invalid for
//! its own rule, and switches off the cross-field total check so one bad field
//! does not produce a cascade of errors.

use itemservice_validation::{ErrorArgument, ErrorReport, Validator};

use crate::form::{
    FIELD_ID, FIELD_ITEM_NAME, FIELD_PRICE, FIELD_QUANTITY, ItemSaveForm, ItemUpdateForm, TYPE_ID,
    TYPE_NUMBER, TYPE_TEXT,
};

pub const CODE_REQUIRED: &str = "required";
pub const CODE_RANGE: &str = "range";
pub const CODE_MAX: &str = "max";
pub const CODE_TOTAL_PRICE_MIN: &str = "totalPriceMin";

pub const PRICE_MIN: i32 = 1_000;
/// Inclusive upper bound.
pub const PRICE_MAX: i32 = 1_000_000;
/// Inclusive upper bound.
pub const QUANTITY_MAX: i32 = 9_999;
pub const TOTAL_PRICE_MIN: i64 = 10_000;

/// Which rules apply to a submission.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum RuleSet {
    /// Registering a new item.
    Save,
    /// Editing an existing item: id is mandatory, quantity has no upper bound.
    Update,
}

/// Field values as seen by the rules, independent of the form type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ItemCandidate<'a> {
    pub id: Option<u64>,
    pub item_name: Option<&'a str>,
    pub price: Option<i32>,
    pub quantity: Option<i32>,
}

impl<'a> From<&'a ItemSaveForm> for ItemCandidate<'a> {
    fn from(form: &'a ItemSaveForm) -> Self {
        Self {
            id: None,
            item_name: form.item_name.as_deref(),
            price: form.price,
            quantity: form.quantity,
        }
    }
}

impl<'a> From<&'a ItemUpdateForm> for ItemCandidate<'a> {
    fn from(form: &'a ItemUpdateForm) -> Self {
        Self {
            id: form.id,
            item_name: form.item_name.as_deref(),
            price: form.price,
            quantity: form.quantity,
        }
    }
}

/// Validator for item forms.
///
/// `ItemSaveForm` is checked with [`RuleSet::Save`], `ItemUpdateForm` with
/// [`RuleSet::Update`].
#[derive(Debug, Default, Copy, Clone)]
pub struct ItemValidator;

impl ItemValidator {
    pub fn new() -> Self {
        Self
    }

    /// Apply `rules` to `item`, appending failures to `errors`.
    pub fn check(&self, item: ItemCandidate<'_>, rules: RuleSet, errors: &mut ErrorReport) {
        if rules == RuleSet::Update && item.id.is_none() {
            errors.reject_value(FIELD_ID, TYPE_ID, CODE_REQUIRED, Vec::new(), None);
        }

        errors.reject_if_empty_or_whitespace(
            FIELD_ITEM_NAME,
            TYPE_TEXT,
            item.item_name,
            CODE_REQUIRED,
        );

        if !item.price.is_some_and(|p| (PRICE_MIN..=PRICE_MAX).contains(&p)) {
            errors.reject_value(
                FIELD_PRICE,
                TYPE_NUMBER,
                CODE_RANGE,
                vec![ErrorArgument::Int(PRICE_MIN.into()), ErrorArgument::Int(PRICE_MAX.into())],
                item.price.map(|p| p.to_string()),
            );
        }

        match rules {
            RuleSet::Save => {
                if !item.quantity.is_some_and(|q| q <= QUANTITY_MAX) {
                    errors.reject_value(
                        FIELD_QUANTITY,
                        TYPE_NUMBER,
                        CODE_MAX,
                        vec![ErrorArgument::Int(QUANTITY_MAX.into())],
                        item.quantity.map(|q| q.to_string()),
                    );
                }
            }
            RuleSet::Update => {
                if item.quantity.is_none() {
                    errors.reject_value(FIELD_QUANTITY, TYPE_NUMBER, CODE_REQUIRED, Vec::new(), None);
                }
            }
        }

        if let (Some(price), Some(quantity)) = (item.price, item.quantity) {
            let total = i64::from(price) * i64::from(quantity);
            if total < TOTAL_PRICE_MIN {
                errors.reject(
                    CODE_TOTAL_PRICE_MIN,
                    vec![ErrorArgument::Int(TOTAL_PRICE_MIN), ErrorArgument::Int(total)],
                );
            }
        }

        if errors.has_errors() {
            tracing::debug!(?rules, count = errors.error_count(), "item rules rejected submission");
        }
    }
}

impl Validator<ItemSaveForm> for ItemValidator {
    fn validate(&self, target: &ItemSaveForm, errors: &mut ErrorReport) {
        self.check(target.into(), RuleSet::Save, errors);
    }
}

impl Validator<ItemUpdateForm> for ItemValidator {
    fn validate(&self, target: &ItemUpdateForm, errors: &mut ErrorReport) {
        self.check(target.into(), RuleSet::Update, errors);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::OBJECT_NAME;
    use itemservice_validation::{FormValues, ValidationError};
    use proptest::prelude::*;

    fn save_form(name: &str, price: Option<i32>, quantity: Option<i32>) -> ItemSaveForm {
        ItemSaveForm {
            item_name: Some(name.to_string()),
            price,
            quantity,
        }
    }

    fn validate<T>(form: &T) -> ErrorReport
    where
        ItemValidator: Validator<T>,
    {
        let mut errors = ErrorReport::new(OBJECT_NAME);
        ItemValidator.validate(form, &mut errors);
        errors
    }

    fn codes(errors: &ErrorReport) -> Vec<(Option<&str>, &str)> {
        errors
            .all_errors()
            .iter()
            .map(|e| (e.field(), e.code().unwrap_or("")))
            .collect()
    }

    #[test]
    fn everything_wrong_reports_every_rule() {
        let errors = validate(&save_form("", Some(0), Some(10000)));

        assert_eq!(
            codes(&errors),
            vec![
                (Some("itemName"), "required"),
                (Some("price"), "range"),
                (Some("quantity"), "max"),
                (None, "totalPriceMin"),
            ]
        );
        let total = errors.global_errors().next().unwrap();
        assert_eq!(total.arguments, vec![ErrorArgument::Int(10000), ErrorArgument::Int(0)]);
        let price = errors.field_error("price").unwrap();
        assert_eq!(price.arguments, vec![ErrorArgument::Int(1000), ErrorArgument::Int(1_000_000)]);
        assert_eq!(price.rejected_value.as_deref(), Some("0"));
    }

    #[test]
    fn exact_total_minimum_is_valid() {
        let errors = validate(&save_form("shirt", Some(1000), Some(10)));
        assert!(!errors.has_errors(), "{errors}");
    }

    #[test]
    fn bounds_are_inclusive() {
        assert!(!validate(&save_form("shirt", Some(1_000_000), Some(1))).has_errors());
        assert!(!validate(&save_form("shirt", Some(1000), Some(9999))).has_errors());

        let over = validate(&save_form("shirt", Some(1_000_001), Some(1)));
        assert_eq!(codes(&over), vec![(Some("price"), "range")]);

        let too_many = validate(&save_form("shirt", Some(1000), Some(10000)));
        assert_eq!(codes(&too_many), vec![(Some("quantity"), "max")]);
    }

    #[test]
    fn missing_numbers_skip_total_check() {
        let errors = validate(&ItemSaveForm::default());
        assert_eq!(
            codes(&errors),
            vec![
                (Some("itemName"), "required"),
                (Some("price"), "range"),
                (Some("quantity"), "max"),
            ]
        );
        assert!(!errors.has_global_errors());
    }

    #[test]
    fn binding_failure_keeps_validating_other_fields() {
        let values: FormValues = [("itemName", " "), ("price", "abc"), ("quantity", "5")]
            .into_iter()
            .collect();
        let mut errors = ErrorReport::new(OBJECT_NAME);

        let form = ItemSaveForm::bind(&values, &mut errors);
        ItemValidator.validate(&form, &mut errors);

        assert_eq!(
            codes(&errors),
            vec![
                (Some("price"), "typeMismatch"),
                (Some("itemName"), "required"),
                (Some("price"), "range"),
            ]
        );
        assert_eq!(errors.rejected_value("price"), Some("abc"));
    }

    #[test]
    fn total_is_computed_without_overflow() {
        let errors = validate(&save_form("shirt", Some(1_000_000), Some(9999)));
        assert!(!errors.has_errors());

        let errors = validate(&save_form("shirt", Some(-1000), Some(9999)));
        let total = errors.global_errors().next().unwrap();
        assert_eq!(total.arguments[1], ErrorArgument::Int(-9_999_000));
    }

    #[test]
    fn update_requires_id_and_quantity_but_not_max() {
        let form = ItemUpdateForm {
            id: None,
            item_name: Some("shirt".into()),
            price: Some(1000),
            quantity: None,
        };
        let errors = validate(&form);
        assert_eq!(
            codes(&errors),
            vec![(Some("id"), "required"), (Some("quantity"), "required")]
        );

        let form = ItemUpdateForm {
            id: Some(1),
            item_name: Some("shirt".into()),
            price: Some(1000),
            quantity: Some(50_000),
        };
        assert!(!validate(&form).has_errors());
    }

    #[test]
    fn update_still_checks_total() {
        let form = ItemUpdateForm {
            id: Some(1),
            item_name: Some("shirt".into()),
            price: Some(1000),
            quantity: Some(1),
        };
        let errors = validate(&form);
        assert!(matches!(
            errors.all_errors(),
            [ValidationError::Object(e)] if e.code() == Some("totalPriceMin")
        ));
    }

    proptest! {
        #[test]
        fn valid_inputs_pass_save_rules(
            price in PRICE_MIN..=PRICE_MAX,
            quantity in 10..=QUANTITY_MAX,
            name in "[a-zA-Z][a-zA-Z0-9 ]{0,20}",
        ) {
            let errors = validate(&save_form(&name, Some(price), Some(quantity)));
            prop_assert!(!errors.has_errors());
        }

        #[test]
        fn total_rule_fires_iff_below_minimum(
            price in PRICE_MIN..=PRICE_MAX,
            quantity in 0..=QUANTITY_MAX,
        ) {
            let errors = validate(&save_form("shirt", Some(price), Some(quantity)));
            let below = i64::from(price) * i64::from(quantity) < TOTAL_PRICE_MIN;
            prop_assert_eq!(errors.has_global_errors(), below);
            prop_assert!(!errors.has_field_errors());
        }
    }
}
