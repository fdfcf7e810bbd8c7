//! Repository layer: the item persistence port and its implementations.
//!
//! # Responsibility
//! - Define the `ItemRepository` capability used by services.
//! - Provide the in-memory reference store and a SQLite adapter.
//!
//! # Invariants
//! - Stores perform structural operations only; business rules live in
//!   `service`.
//! - Missing ids are normal outcomes (`None` / `false`), never errors.

pub mod item_repo;
pub mod memory;
pub mod sqlite;
