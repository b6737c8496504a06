//! Item form handling: bind → validate → persist.
//!
//! A submission either comes back `Invalid` (the caller re-renders the form
//! with the submitted values and the error report) or is persisted and comes
//! back `Saved` (the caller redirects to the detail view).

use std::sync::Arc;

use itemservice_core::{DomainError, DomainResult, ItemId};
use itemservice_infra::{InMemoryItemRepository, ItemRepository};
use itemservice_items::{
    Item, ItemParams, ItemSaveForm, ItemUpdateForm, ItemValidator, OBJECT_NAME,
};
use itemservice_validation::validator::validate_into;
use itemservice_validation::{ErrorReport, FormValues, MessageBundle, Validator};

/// Result of handling one form submission.
#[derive(Debug)]
pub enum Submission<F> {
    Invalid { form: F, errors: ErrorReport },
    Saved(Item),
}

impl<F> Submission<F> {
    pub fn is_saved(&self) -> bool {
        matches!(self, Submission::Saved(_))
    }
}

/// Shared application services handed to every handler.
pub struct AppServices {
    items: Arc<dyn ItemRepository>,
    validator: ItemValidator,
    messages: MessageBundle,
}

impl AppServices {
    pub fn new(items: Arc<dyn ItemRepository>, messages: MessageBundle) -> Self {
        Self {
            items,
            validator: ItemValidator::new(),
            messages,
        }
    }

    /// In-memory store with the bundled messages.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(InMemoryItemRepository::new()), MessageBundle::defaults())
    }

    pub fn items(&self) -> &dyn ItemRepository {
        self.items.as_ref()
    }

    pub fn messages(&self) -> &MessageBundle {
        &self.messages
    }

    /// Demo data for local runs.
    pub fn seed_demo_items(&self) -> DomainResult<()> {
        self.items.save(ItemParams::new("itemA", 10000, 10))?;
        self.items.save(ItemParams::new("itemB", 20000, 20))?;
        Ok(())
    }

    /// Register a new item from raw form values.
    pub fn add_item(&self, values: &FormValues) -> DomainResult<Submission<ItemSaveForm>> {
        let mut errors = ErrorReport::new(OBJECT_NAME);
        let form = ItemSaveForm::bind(values, &mut errors);
        self.validator.validate(&form, &mut errors);

        if errors.has_errors() {
            tracing::info!(errors = %errors, "item registration rejected");
            return Ok(Submission::Invalid { form, errors });
        }

        let params = form
            .to_params()
            .ok_or_else(|| DomainError::validation("incomplete item form"))?;
        let saved = self.items.save(params)?;
        tracing::info!(item_id = %saved.id_typed(), "item registered");
        Ok(Submission::Saved(saved))
    }

    /// Edit item `id` from raw form values.
    ///
    /// Unknown ids fail with `NotFound` before any binding happens. The path id
    /// is authoritative; the form's `id` field only defaults to it when absent.
    pub fn edit_item(
        &self,
        id: ItemId,
        values: &FormValues,
    ) -> DomainResult<Submission<ItemUpdateForm>> {
        self.items.find_by_id(id)?;

        let mut values = values.clone();
        if values.get("id").is_none_or(|v| v.trim().is_empty()) {
            values.insert("id", id.to_string());
        }

        let mut errors = ErrorReport::new(OBJECT_NAME);
        let form = ItemUpdateForm::bind(&values, &mut errors);
        self.validator.validate(&form, &mut errors);

        if errors.has_errors() {
            tracing::info!(item_id = %id, errors = %errors, "item edit rejected");
            return Ok(Submission::Invalid { form, errors });
        }

        let params = form
            .to_params()
            .ok_or_else(|| DomainError::validation("incomplete item form"))?;
        let updated = self.items.update(id, params)?;
        tracing::info!(item_id = %id, "item updated");
        Ok(Submission::Saved(updated))
    }

    /// Validate an already-deserialized registration body.
    pub fn validate_item_body(&self, form: &ItemSaveForm) -> ErrorReport {
        let errors = validate_into(&self.validator, form, OBJECT_NAME);
        if errors.has_errors() {
            tracing::info!(errors = %errors, "item body rejected");
        }
        errors
    }
}
