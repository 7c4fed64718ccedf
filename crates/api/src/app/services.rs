use catalog_store::{Catalog, CategoryStore, ProductStore};
use std::sync::Arc;

use crate::config::ApiConfig;

/// Everything the handlers need, shared behind an `Arc` extension.
#[derive(Debug)]
pub struct AppServices {
    catalog: Catalog,
}

impl AppServices {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    pub fn categories(&self) -> &CategoryStore {
        self.catalog.categories()
    }

    pub fn products(&self) -> &ProductStore<Arc<CategoryStore>> {
        self.catalog.products()
    }
}

pub fn build_services(config: &ApiConfig) -> AppServices {
    let catalog = if config.seed {
        Catalog::seeded()
    } else {
        tracing::info!("seeding disabled; starting with an empty catalog");
        Catalog::new()
    };
    AppServices::new(catalog)
}
