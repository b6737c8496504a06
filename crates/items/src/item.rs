use serde::{Deserialize, Serialize};

use itemservice_core::{Entity, ItemId};

/// A stored item.
///
/// Construction does not enforce the business rules; they are checked when a
/// submitted form is validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    id: ItemId,
    item_name: String,
    price: i32,
    quantity: i32,
}

impl Item {
    pub fn new(id: ItemId, params: ItemParams) -> Self {
        Self {
            id,
            item_name: params.item_name,
            price: params.price,
            quantity: params.quantity,
        }
    }

    pub fn id_typed(&self) -> ItemId {
        self.id
    }

    pub fn item_name(&self) -> &str {
        &self.item_name
    }

    pub fn price(&self) -> i32 {
        self.price
    }

    pub fn quantity(&self) -> i32 {
        self.quantity
    }

    /// Replace every attribute except the id.
    pub fn apply(&mut self, params: ItemParams) {
        self.item_name = params.item_name;
        self.price = params.price;
        self.quantity = params.quantity;
    }

    pub fn params(&self) -> ItemParams {
        ItemParams {
            item_name: self.item_name.clone(),
            price: self.price,
            quantity: self.quantity,
        }
    }
}

impl Entity for Item {
    type Id = ItemId;

    fn id(&self) -> Self::Id {
        self.id
    }
}

/// Attributes of an item without its identity (save/update payload).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemParams {
    pub item_name: String,
    pub price: i32,
    pub quantity: i32,
}

impl ItemParams {
    pub fn new(item_name: impl Into<String>, price: i32, quantity: i32) -> Self {
        Self {
            item_name: item_name.into(),
            price,
            quantity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(raw: u64) -> ItemId {
        ItemId::new(raw).unwrap()
    }

    #[test]
    fn apply_keeps_identity() {
        let mut item = Item::new(id(3), ItemParams::new("itemA", 10000, 10));
        item.apply(ItemParams::new("itemB", 20000, 20));

        assert_eq!(item.id(), id(3));
        assert_eq!(item.item_name(), "itemB");
        assert_eq!(item.price(), 20000);
        assert_eq!(item.quantity(), 20);
    }

    #[test]
    fn serializes_camel_case() {
        let item = Item::new(id(1), ItemParams::new("itemA", 10000, 10));
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": 1, "itemName": "itemA", "price": 10000, "quantity": 10})
        );
    }
}
