//! Domain model for the generated skeleton.
//!
//! # Responsibility
//! - Define the entity shape shared by stores, services and adapters.
//!
//! # Invariants
//! - Every entity is identified by a generated `ItemId`.
//! - Identity, not field values, decides equality.

pub mod item;
