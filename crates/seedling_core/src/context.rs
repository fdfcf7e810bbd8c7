//! Dependency container passed into every service call.
//!
//! # Responsibility
//! - Bundle the capabilities a service function may use into one value.
//!
//! # Invariants
//! - Fields are private and never reassigned after construction.
//! - Swapping a dependency consumes the context and returns a new one.
//! - The store's contents may change; which store is referenced may not.

use crate::repo::item_repo::ItemRepository;
use crate::service::policy::ValuePolicy;

/// Immutable bundle of the item store and the active value policy.
#[derive(Debug)]
pub struct AppContext<R: ItemRepository> {
    repository: R,
    policy: ValuePolicy,
}

impl<R: ItemRepository> AppContext<R> {
    /// Builds a context with the default `ValuePolicy::NonNegative`.
    pub fn new(repository: R) -> Self {
        Self::with_policy(repository, ValuePolicy::default())
    }

    pub fn with_policy(repository: R, policy: ValuePolicy) -> Self {
        Self { repository, policy }
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    pub fn policy(&self) -> ValuePolicy {
        self.policy
    }

    /// Returns a new context that uses `repository` and keeps the policy.
    pub fn replace_repository<S: ItemRepository>(self, repository: S) -> AppContext<S> {
        AppContext {
            repository,
            policy: self.policy,
        }
    }

    /// Returns a new context with `policy` and the same store.
    pub fn replace_policy(self, policy: ValuePolicy) -> Self {
        Self {
            repository: self.repository,
            policy,
        }
    }

    /// Consumes the context and hands back its store.
    pub fn into_repository(self) -> R {
        self.repository
    }
}
