//! Core use-case services.
//!
//! # Responsibility
//! - Own every business rule of the item domain.
//! - Orchestrate repository calls without knowing the storage technology.

pub mod item_service;
pub mod policy;
