//! `catalog-core` — shared building blocks for the catalog service.
//!
//! Pure domain primitives (no infrastructure concerns): identifiers, the
//! entity abstraction used by the in-memory collections, and the error model.

pub mod entity;
pub mod error;
pub mod id;

pub use entity::Entity;
pub use error::{CatalogError, CatalogResult, EntityKind};
pub use id::{CategoryId, ProductId};
