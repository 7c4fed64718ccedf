use std::sync::Arc;

use crate::category::CategoryStore;
use crate::product::ProductStore;
use crate::seed;

/// Both stores wired together: products look categories up through a shared
/// handle on the category store.
#[derive(Debug)]
pub struct Catalog {
    categories: Arc<CategoryStore>,
    products: ProductStore<Arc<CategoryStore>>,
}

impl Catalog {
    /// Empty catalog.
    pub fn new() -> Self {
        let categories = Arc::new(CategoryStore::new());
        let products = ProductStore::new(categories.clone());
        Self {
            categories,
            products,
        }
    }

    /// Catalog holding the two seed categories and two seed products.
    pub fn seeded() -> Self {
        let categories = Arc::new(CategoryStore::with_categories(seed::categories()));
        let products = ProductStore::with_products(categories.clone(), seed::products());
        tracing::debug!(
            categories = categories.len(),
            products = products.len(),
            "catalog seeded"
        );
        Self {
            categories,
            products,
        }
    }

    pub fn categories(&self) -> &CategoryStore {
        &self.categories
    }

    pub fn products(&self) -> &ProductStore<Arc<CategoryStore>> {
        &self.products
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CategoryDraft, ProductDraft};

    #[test]
    fn new_catalog_is_empty() {
        let catalog = Catalog::new();
        assert!(catalog.categories().is_empty());
        assert!(catalog.products().is_empty());
    }

    #[test]
    fn seeded_catalog_has_fixtures() {
        let catalog = Catalog::seeded();
        assert_eq!(catalog.categories().list_all(), seed::categories());
        assert_eq!(catalog.products().list_all(), seed::products());
    }

    #[test]
    fn products_resolve_categories_of_the_same_catalog() {
        let catalog = Catalog::new();
        let category = catalog.categories().insert(CategoryDraft {
            name: "Books".to_string(),
            description: "Paper".to_string(),
        });

        let product = catalog
            .products()
            .insert(ProductDraft {
                name: "Novel".to_string(),
                description: String::new(),
                price: 12,
                category_id: category.id.clone(),
            })
            .unwrap();

        assert_eq!(catalog.products().list_by_category(&category.id), vec![product]);
    }
}
