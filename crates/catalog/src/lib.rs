//! In-memory catalog store.
//!
//! Two collections (categories and products) with a one-to-many reference from
//! product to category, checked on write. Each store owns its rows behind a
//! single lock; the product store only ever reads categories through
//! [`CategoryLookup`].

pub mod catalog;
pub mod category;
pub mod collection;
pub mod product;
pub mod seed;

pub use catalog::Catalog;
pub use category::{Category, CategoryDraft, CategoryStore};
pub use collection::Collection;
pub use product::{CategoryLookup, Product, ProductDraft, ProductStore};
