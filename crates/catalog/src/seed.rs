//! Records present at process start.

use catalog_core::{CategoryId, ProductId};

use crate::category::Category;
use crate::product::Product;

pub const SHOPPING_CATEGORY_ID: &str = "bq4fasj7jhfi127rimlg";
pub const SPECIALTY_CATEGORY_ID: &str = "bq4fb3b7jhfi7v7uo39g";
pub const SUPERREP_PRODUCT_ID: &str = "bq4foj37jhfipc5nqri0";
pub const ICON_CLASH_PRODUCT_ID: &str = "bq5457j7jhfi2s58o030";

pub fn categories() -> Vec<Category> {
    vec![
        Category {
            id: CategoryId::from(SHOPPING_CATEGORY_ID),
            name: "Shopping Products".to_string(),
            description: "Products consumers purchase and consume on a less frequent schedule compared to convenience products.".to_string(),
        },
        Category {
            id: CategoryId::from(SPECIALTY_CATEGORY_ID),
            name: "Specialty Products".to_string(),
            description: "Products that are more expensive relative to convenience and shopping products.".to_string(),
        },
    ]
}

pub fn products() -> Vec<Product> {
    vec![
        Product {
            id: ProductId::from(SUPERREP_PRODUCT_ID),
            name: "Nike SuperRep Go".to_string(),
            description: "Women's Training Shoe".to_string(),
            price: 100,
            category_id: CategoryId::from(SHOPPING_CATEGORY_ID),
        },
        Product {
            id: ProductId::from(ICON_CLASH_PRODUCT_ID),
            name: "Nike Icon Clash".to_string(),
            description: "Women's Seamless Light-Support Sports Bra".to_string(),
            price: 50,
            category_id: CategoryId::from(SHOPPING_CATEGORY_ID),
        },
    ]
}
