//! Item repository contract and shared error types.
//!
//! # Responsibility
//! - Define the minimal persistence capability the service layer needs.
//! - Keep storage technology out of service signatures.
//!
//! # Invariants
//! - `save` is an upsert keyed by `Item::id`; it never accumulates duplicates.
//! - `get` returns `Ok(None)` for unknown ids instead of an error.
//! - `list` returns an owned snapshot; mutating it never touches the store.
//! - `delete` returns `Ok(false)` for unknown ids instead of an error.
//! - Implementations never validate business rules.

use crate::model::item::{Item, ItemId};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Storage-level failure. Business rule errors never appear here.
#[derive(Debug)]
pub enum RepoError {
    /// A statement against an already-migrated connection failed.
    Query(rusqlite::Error),
    InvalidData(String),
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    /// Backend-specific failure without a richer type.
    Backend(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Query(err) => write!(f, "item query failed: {err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted item data: {message}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection schema version {actual_version} does not match expected {expected_version}; open it through db::open_db"
            ),
            Self::Backend(message) => write!(f, "storage backend failure: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Query(err) => Some(err),
            _ => None,
        }
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Query(value)
    }
}

/// Persistence capability required by item services.
pub trait ItemRepository {
    fn save(&self, item: &Item) -> RepoResult<()>;
    fn get(&self, id: ItemId) -> RepoResult<Option<Item>>;
    fn list(&self) -> RepoResult<Vec<Item>>;
    fn delete(&self, id: ItemId) -> RepoResult<bool>;
}

impl<R: ItemRepository + ?Sized> ItemRepository for &R {
    fn save(&self, item: &Item) -> RepoResult<()> {
        (**self).save(item)
    }

    fn get(&self, id: ItemId) -> RepoResult<Option<Item>> {
        (**self).get(id)
    }

    fn list(&self) -> RepoResult<Vec<Item>> {
        (**self).list()
    }

    fn delete(&self, id: ItemId) -> RepoResult<bool> {
        (**self).delete(id)
    }
}

impl<R: ItemRepository + ?Sized> ItemRepository for Box<R> {
    fn save(&self, item: &Item) -> RepoResult<()> {
        (**self).save(item)
    }

    fn get(&self, id: ItemId) -> RepoResult<Option<Item>> {
        (**self).get(id)
    }

    fn list(&self) -> RepoResult<Vec<Item>> {
        (**self).list()
    }

    fn delete(&self, id: ItemId) -> RepoResult<bool> {
        (**self).delete(id)
    }
}
