//! Item use-case functions.
//!
//! # Responsibility
//! - Enforce item business rules before touching storage.
//! - Orchestrate `ItemRepository` calls through an explicit `AppContext`.
//!
//! # Invariants
//! - Functions hold no state; every dependency comes from the context.
//! - Validation always precedes the single `save` call of `create_item`.
//! - Not-found is `Ok(None)` / `Ok(false)`, never an error.

use crate::context::AppContext;
use crate::model::item::{Item, ItemId, ItemValidationError};
use crate::repo::item_repo::{ItemRepository, RepoError};
use log::{info, warn};
use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid ws regex"));

/// Service error for item use-cases.
#[derive(Debug)]
pub enum ServiceError {
    /// Caller input broke a business rule; nothing was written.
    Validation(ItemValidationError),
    /// Storage failure surfaced unchanged.
    Repo(RepoError),
}

impl ServiceError {
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "invalid item: {err}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Repo(err) => Some(err),
        }
    }
}

impl From<ItemValidationError> for ServiceError {
    fn from(value: ItemValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<RepoError> for ServiceError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Trims and collapses whitespace runs in an item name.
pub fn normalize_name(raw: &str) -> String {
    WHITESPACE_RE.replace_all(raw.trim(), " ").into_owned()
}

/// Validates input and persists a new item.
///
/// # Errors
/// - `ServiceError::Validation` when the normalized name is empty or the
///   value breaks the context's `ValuePolicy`. The store is not touched.
/// - `ServiceError::Repo` when the store fails to save.
pub fn create_item<R: ItemRepository>(
    ctx: &AppContext<R>,
    name: &str,
    value: i64,
) -> Result<Item, ServiceError> {
    let name = normalize_name(name);
    if let Err(err) = validate(&name, value, ctx) {
        warn!(
            "event=item_create module=service status=rejected policy={} reason={:?}",
            ctx.policy().as_str(),
            err
        );
        return Err(err.into());
    }

    let item = Item::new(name, value);
    ctx.repository().save(&item)?;
    info!(
        "event=item_create module=service status=ok item_id={}",
        item.id()
    );
    Ok(item)
}

/// Looks up one item by id.
pub fn get_item<R: ItemRepository>(
    ctx: &AppContext<R>,
    id: ItemId,
) -> Result<Option<Item>, ServiceError> {
    let item = ctx.repository().get(id)?;
    info!(
        "event=item_get module=service status=ok item_id={} found={}",
        id,
        item.is_some()
    );
    Ok(item)
}

/// Looks up one item by its opaque string identifier.
///
/// A string that is not a valid id cannot name a stored item, so it is
/// reported as not found.
pub fn get_item_by_str<R: ItemRepository>(
    ctx: &AppContext<R>,
    raw_id: &str,
) -> Result<Option<Item>, ServiceError> {
    match Uuid::parse_str(raw_id.trim()) {
        Ok(id) => get_item(ctx, id),
        Err(_) => Ok(None),
    }
}

/// Returns every stored item; an empty store yields an empty vec.
pub fn list_items<R: ItemRepository>(ctx: &AppContext<R>) -> Result<Vec<Item>, ServiceError> {
    let items = ctx.repository().list()?;
    info!(
        "event=item_list module=service status=ok count={}",
        items.len()
    );
    Ok(items)
}

/// Removes one item; returns whether it existed.
pub fn delete_item<R: ItemRepository>(
    ctx: &AppContext<R>,
    id: ItemId,
) -> Result<bool, ServiceError> {
    let removed = ctx.repository().delete(id)?;
    info!(
        "event=item_delete module=service status=ok item_id={} removed={}",
        id, removed
    );
    Ok(removed)
}

/// String-id counterpart of `delete_item`; unparsable ids remove nothing.
pub fn delete_item_by_str<R: ItemRepository>(
    ctx: &AppContext<R>,
    raw_id: &str,
) -> Result<bool, ServiceError> {
    match Uuid::parse_str(raw_id.trim()) {
        Ok(id) => delete_item(ctx, id),
        Err(_) => Ok(false),
    }
}

fn validate<R: ItemRepository>(
    name: &str,
    value: i64,
    ctx: &AppContext<R>,
) -> Result<(), ItemValidationError> {
    if name.is_empty() {
        return Err(ItemValidationError::EmptyName);
    }
    ctx.policy().check(value)
}

#[cfg(test)]
mod tests {
    use super::normalize_name;

    #[test]
    fn normalize_name_trims_and_collapses_whitespace() {
        assert_eq!(normalize_name("  big \t  widget\n"), "big widget");
        assert_eq!(normalize_name(" \n\t "), "");
    }
}
