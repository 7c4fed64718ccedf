use std::sync::Arc;

use catalog_core::{CatalogError, CatalogResult, CategoryId, Entity, EntityKind, ProductId};

use crate::category::CategoryStore;
use crate::collection::Collection;

/// A product, always filed under one category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    /// Opaque non-negative amount; the unit is up to the client.
    pub price: u64,
    pub category_id: CategoryId,
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Caller-supplied product fields (the id is always store-assigned).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductDraft {
    pub name: String,
    pub description: String,
    pub price: u64,
    pub category_id: CategoryId,
}

/// Read-only view of the category table used to check product references.
///
/// Implementations must not hold their lock past the call, so callers can take
/// their own lock afterwards without ordering concerns.
pub trait CategoryLookup: Send + Sync {
    fn category_exists(&self, id: &CategoryId) -> bool;
}

impl CategoryLookup for CategoryStore {
    fn category_exists(&self, id: &CategoryId) -> bool {
        self.contains(id)
    }
}

impl<L> CategoryLookup for Arc<L>
where
    L: CategoryLookup + ?Sized,
{
    fn category_exists(&self, id: &CategoryId) -> bool {
        (**self).category_exists(id)
    }
}

/// Owns the product table and validates category references on write.
#[derive(Debug)]
pub struct ProductStore<L = Arc<CategoryStore>> {
    rows: Collection<Product>,
    categories: L,
}

impl<L> ProductStore<L>
where
    L: CategoryLookup,
{
    pub fn new(categories: L) -> Self {
        Self::with_products(categories, Vec::new())
    }

    /// Store pre-populated with existing records (seed data, fixtures).
    pub fn with_products(categories: L, products: Vec<Product>) -> Self {
        Self {
            rows: Collection::from_rows(products),
            categories,
        }
    }

    pub fn list_all(&self) -> Vec<Product> {
        self.rows.list()
    }

    pub fn get_by_id(&self, id: &ProductId) -> CatalogResult<Product> {
        self.rows
            .get(id)
            .ok_or_else(|| CatalogError::not_found(EntityKind::Product, id.as_str()))
    }

    /// Products filed under `category_id`, in table order.
    ///
    /// The category itself is not checked: an unknown id yields an empty list.
    pub fn list_by_category(&self, category_id: &CategoryId) -> Vec<Product> {
        self.rows
            .list_where(|product| &product.category_id == category_id)
    }

    /// Append a new product with a fresh id.
    ///
    /// The category must be named and must exist; otherwise nothing is stored.
    pub fn insert(&self, draft: ProductDraft) -> CatalogResult<Product> {
        if draft.category_id.is_empty() {
            return Err(CatalogError::validation("CategoryID is required"));
        }
        if !self.categories.category_exists(&draft.category_id) {
            tracing::debug!(category_id = %draft.category_id, "rejecting product with unknown category");
            return Err(CatalogError::category_not_found(draft.category_id.as_str()));
        }

        let product = Product {
            id: ProductId::generate(),
            name: draft.name,
            description: draft.description,
            price: draft.price,
            category_id: draft.category_id,
        };
        self.rows.push(product.clone());
        tracing::info!(
            product_id = %product.id,
            category_id = %product.category_id,
            "product created"
        );
        Ok(product)
    }

    /// Overwrite an existing product.
    ///
    /// Name, description and price are always replaced. The category is only
    /// replaced when the new id resolves to an existing category; an empty or
    /// unknown id keeps the current one.
    pub fn update(&self, id: &ProductId, draft: ProductDraft) -> CatalogResult<Product> {
        // Resolved before taking the product lock: the two locks never nest.
        let move_category =
            !draft.category_id.is_empty() && self.categories.category_exists(&draft.category_id);
        if !move_category {
            tracing::debug!(
                product_id = %id,
                category_id = %draft.category_id,
                "category does not resolve; keeping current category"
            );
        }

        let updated = self
            .rows
            .update(id, |product| {
                product.name = draft.name;
                product.description = draft.description;
                product.price = draft.price;
                if move_category {
                    product.category_id = draft.category_id;
                }
            })
            .ok_or_else(|| CatalogError::not_found(EntityKind::Product, id.as_str()))?;
        tracing::info!(product_id = %id, "product updated");
        Ok(updated)
    }

    /// Remove a product. Returns `true` when a record was deleted.
    pub fn delete(&self, id: &ProductId) -> bool {
        let deleted = self.rows.remove(id).is_some();
        if deleted {
            tracing::info!(product_id = %id, "product deleted");
        }
        deleted
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
