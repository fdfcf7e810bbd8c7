//! Item domain model.
//!
//! # Responsibility
//! - Define the single example entity persisted through `ItemRepository`.
//! - Generate stable identities at construction time.
//!
//! # Invariants
//! - `id` is never the nil uuid.
//! - Equality and hashing consider `id` only; `name` and `value` are payload.
//! - The model does not enforce business rules on `name` or `value`; that is
//!   the service layer's job.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};
use uuid::Uuid;

/// Stable identifier for an item.
pub type ItemId = Uuid;

/// Example entity: a named integer value with a generated identity.
///
/// `id` is private so it cannot change after construction; `name` and
/// `value` are plain payload and may be rewritten before a `save`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "ItemRecord")]
pub struct Item {
    id: ItemId,
    pub name: String,
    pub value: i64,
}

/// Unchecked wire shape; becomes an `Item` only through `Item::with_id`.
#[derive(Deserialize)]
struct ItemRecord {
    id: ItemId,
    name: String,
    value: i64,
}

impl TryFrom<ItemRecord> for Item {
    type Error = ItemValidationError;

    fn try_from(record: ItemRecord) -> Result<Self, Self::Error> {
        Item::with_id(record.id, record.name, record.value)
    }
}

/// Business rule violations raised before any write happens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemValidationError {
    /// Item name is empty after normalization.
    EmptyName,
    /// Value is negative while the active policy forbids it.
    NegativeValue(i64),
    /// Identity must not be the nil uuid.
    NilId,
}

impl Display for ItemValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "name must not be empty"),
            Self::NegativeValue(value) => write!(f, "value must be >= 0, got {value}"),
            Self::NilId => write!(f, "item id must not be nil"),
        }
    }
}

impl Error for ItemValidationError {}

impl Item {
    /// Creates a new item with a freshly generated v4 id.
    pub fn new(name: impl Into<String>, value: i64) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            value,
        }
    }

    pub fn id(&self) -> ItemId {
        self.id
    }

    /// Creates an item with a caller-provided id.
    ///
    /// Used when identity already exists, e.g. on store read-back.
    pub fn with_id(
        id: ItemId,
        name: impl Into<String>,
        value: i64,
    ) -> Result<Self, ItemValidationError> {
        if id.is_nil() {
            return Err(ItemValidationError::NilId);
        }
        Ok(Self {
            id,
            name: name.into(),
            value,
        })
    }
}

impl PartialEq for Item {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Item {}

impl Hash for Item {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
