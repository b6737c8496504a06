//! Strongly-typed identifiers used across the domain.

use core::num::NonZeroU64;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Identifier of a stored item.
///
/// Ids are assigned sequentially by the repository, starting at 1, and never
/// change afterwards.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(NonZeroU64);

impl ItemId {
    /// The first id handed out by an empty store.
    pub const FIRST: ItemId = ItemId(NonZeroU64::MIN);

    /// Build an id from a raw value; zero is not a valid id.
    pub fn new(raw: u64) -> Option<Self> {
        NonZeroU64::new(raw).map(Self)
    }

    pub fn get(&self) -> u64 {
        self.0.get()
    }

    /// The id that follows this one in the assignment sequence.
    pub fn next(&self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }
}

impl core::fmt::Display for ItemId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<ItemId> for u64 {
    fn from(value: ItemId) -> Self {
        value.get()
    }
}

impl TryFrom<u64> for ItemId {
    type Error = DomainError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Self::new(value).ok_or_else(|| DomainError::invalid_id("ItemId: must be positive"))
    }
}

impl FromStr for ItemId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s
            .trim()
            .parse::<u64>()
            .map_err(|e| DomainError::invalid_id(format!("ItemId: {}", e)))?;
        Self::try_from(raw)
    }
}
