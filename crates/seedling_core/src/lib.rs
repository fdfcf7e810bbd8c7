//! Core of the seedling application skeleton.
//!
//! Entities, the item repository port with its stores, pure service
//! functions over an immutable `AppContext`, and the project template plan.

pub mod context;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod template;
pub mod testing;

pub use context::AppContext;
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::item::{Item, ItemId, ItemValidationError};
pub use repo::item_repo::{ItemRepository, RepoError, RepoResult};
pub use repo::memory::InMemoryItemRepository;
pub use repo::sqlite::SqliteItemRepository;
pub use service::item_service::{
    create_item, delete_item, delete_item_by_str, get_item, get_item_by_str, list_items,
    normalize_name, ServiceError,
};
pub use service::policy::ValuePolicy;
pub use template::answers::{PythonVersion, TemplateAnswers};
pub use template::plan::{GenerationPlan, PlannedFile, PostGenTask};
pub use template::TemplateError;
pub use testing::FakeItemRepository;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
