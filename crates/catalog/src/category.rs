use catalog_core::{CatalogError, CatalogResult, CategoryId, Entity, EntityKind};

use crate::collection::Collection;

/// A product category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub description: String,
}

impl Entity for Category {
    type Id = CategoryId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Caller-supplied category fields (the id is always store-assigned).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryDraft {
    pub name: String,
    pub description: String,
}

/// Owns the category table.
#[derive(Debug, Default)]
pub struct CategoryStore {
    rows: Collection<Category>,
}

impl CategoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with existing records (seed data, fixtures).
    pub fn with_categories(categories: Vec<Category>) -> Self {
        Self {
            rows: Collection::from_rows(categories),
        }
    }

    pub fn list_all(&self) -> Vec<Category> {
        self.rows.list()
    }

    pub fn get_by_id(&self, id: &CategoryId) -> CatalogResult<Category> {
        self.rows
            .get(id)
            .ok_or_else(|| CatalogError::not_found(EntityKind::Category, id.as_str()))
    }

    /// Append a new category with a fresh id.
    ///
    /// Never fails: empty names are rejected by the HTTP layer, not here.
    pub fn insert(&self, draft: CategoryDraft) -> Category {
        let category = Category {
            id: CategoryId::generate(),
            name: draft.name,
            description: draft.description,
        };
        self.rows.push(category.clone());
        tracing::info!(category_id = %category.id, "category created");
        category
    }

    /// Replace name and description of an existing category.
    pub fn update(&self, id: &CategoryId, draft: CategoryDraft) -> CatalogResult<Category> {
        let updated = self
            .rows
            .update(id, |category| {
                category.name = draft.name;
                category.description = draft.description;
            })
            .ok_or_else(|| CatalogError::not_found(EntityKind::Category, id.as_str()))?;
        tracing::info!(category_id = %id, "category updated");
        Ok(updated)
    }

    /// Remove a category. Returns `true` when a record was deleted.
    ///
    /// Products referencing the category are left as they are.
    pub fn delete(&self, id: &CategoryId) -> bool {
        let deleted = self.rows.remove(id).is_some();
        if deleted {
            tracing::info!(category_id = %id, "category deleted");
        }
        deleted
    }

    pub fn contains(&self, id: &CategoryId) -> bool {
        self.rows.contains(id)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
