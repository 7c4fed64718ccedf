use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

use catalog_core::CategoryId;
use catalog_store::{Category, CategoryDraft, Product, ProductDraft};

use crate::app::errors;

// -------------------------
// Request DTOs
// -------------------------
//
// Missing or `null` fields decode to empty strings / zero and any id the
// client sends is ignored: ids are always assigned by the store.

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CategoryRequest {
    #[serde(rename = "CategoryName", deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(rename = "CategoryDescription", deserialize_with = "null_as_default")]
    pub description: String,
}

impl CategoryRequest {
    /// Creation requires both fields to carry text.
    pub fn validate_for_create(&self) -> Result<(), &'static str> {
        if self.name.trim().is_empty() || self.description.trim().is_empty() {
            return Err("Kindly enter data with the category name and description");
        }
        Ok(())
    }
}

impl From<CategoryRequest> for CategoryDraft {
    fn from(req: CategoryRequest) -> Self {
        CategoryDraft {
            name: req.name,
            description: req.description,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ProductRequest {
    #[serde(rename = "ProductName", deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(rename = "ProductDescription", deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(rename = "Price", deserialize_with = "null_as_default")]
    pub price: u64,
    #[serde(rename = "CategoryID", deserialize_with = "null_as_default")]
    pub category_id: String,
}

impl ProductRequest {
    /// Creation requires a name and description; the category is checked by
    /// the store.
    pub fn validate_for_create(&self) -> Result<(), &'static str> {
        if self.name.trim().is_empty() || self.description.trim().is_empty() {
            return Err("Kindly enter data with the product name and description");
        }
        Ok(())
    }
}

impl From<ProductRequest> for ProductDraft {
    fn from(req: ProductRequest) -> Self {
        ProductDraft {
            name: req.name,
            description: req.description,
            price: req.price,
            category_id: CategoryId::from(req.category_id),
        }
    }
}

/// Decode a JSON body regardless of `Content-Type`; any failure is a 400.
pub fn parse_body<T: DeserializeOwned>(body: &[u8]) -> Result<T, axum::response::Response> {
    serde_json::from_slice(body).map_err(|e| errors::malformed_body(&e))
}

// -------------------------
// Response DTOs
// -------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryResponse {
    #[serde(rename = "CategoryID")]
    pub id: String,
    #[serde(rename = "CategoryName")]
    pub name: String,
    #[serde(rename = "CategoryDescription")]
    pub description: String,
}

impl From<Category> for CategoryResponse {
    fn from(c: Category) -> Self {
        Self {
            id: c.id.into(),
            name: c.name,
            description: c.description,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductResponse {
    #[serde(rename = "ProductID")]
    pub id: String,
    #[serde(rename = "ProductName")]
    pub name: String,
    #[serde(rename = "ProductDescription")]
    pub description: String,
    #[serde(rename = "Price")]
    pub price: u64,
    #[serde(rename = "CategoryID")]
    pub category_id: String,
}

impl From<Product> for ProductResponse {
    fn from(p: Product) -> Self {
        Self {
            id: p.id.into(),
            name: p.name,
            description: p.description,
            price: p.price,
            category_id: p.category_id.into(),
        }
    }
}

pub fn categories_to_response(items: Vec<Category>) -> Vec<CategoryResponse> {
    items.into_iter().map(CategoryResponse::from).collect()
}

pub fn products_to_response(items: Vec<Product>) -> Vec<ProductResponse> {
    items.into_iter().map(ProductResponse::from).collect()
}

/// Serialize `body` as JSON with `status`; encoding failures become a logged 500.
pub fn json_response<T: Serialize>(status: StatusCode, body: &T) -> axum::response::Response {
    match serde_json::to_vec(body) {
        Ok(bytes) => (status, [(header::CONTENT_TYPE, "application/json")], bytes).into_response(),
        Err(e) => errors::encoding_failure(&e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_store::seed;

    #[test]
    fn product_response_uses_wire_field_names() {
        let body = serde_json::to_value(ProductResponse::from(seed::products()[0].clone())).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "ProductID": "bq4foj37jhfipc5nqri0",
                "ProductName": "Nike SuperRep Go",
                "ProductDescription": "Women's Training Shoe",
                "Price": 100,
                "CategoryID": "bq4fasj7jhfi127rimlg",
            })
        );
    }

    #[test]
    fn category_response_uses_wire_field_names() {
        let body = serde_json::to_value(CategoryResponse::from(seed::categories()[1].clone())).unwrap();
        assert_eq!(body["CategoryID"], "bq4fb3b7jhfi7v7uo39g");
        assert_eq!(body["CategoryName"], "Specialty Products");
    }

    #[test]
    fn request_ignores_client_id_and_defaults_missing_fields() {
        let req: ProductRequest =
            parse_body(br#"{"ProductID":"mine","ProductName":"Hat"}"#).unwrap();
        assert_eq!(req.name, "Hat");
        assert_eq!(req.description, "");
        assert_eq!(req.price, 0);
        assert_eq!(req.category_id, "");
    }

    #[test]
    fn null_fields_decode_like_missing_ones() {
        let req: CategoryRequest =
            parse_body(br#"{"CategoryName":null,"CategoryDescription":"x"}"#).unwrap();
        assert_eq!(req.name, "");
        assert_eq!(req.description, "x");

        let req: ProductRequest = parse_body(
            br#"{"ProductName":"a","ProductDescription":null,"Price":null,"CategoryID":null}"#,
        )
        .unwrap();
        assert_eq!(req.name, "a");
        assert_eq!(req.description, "");
        assert_eq!(req.price, 0);
        assert_eq!(req.category_id, "");
    }

    #[test]
    fn malformed_body_is_bad_request() {
        let err = parse_body::<CategoryRequest>(b"{not json").unwrap_err();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);

        let err = parse_body::<ProductRequest>(br#"{"Price":-5}"#).unwrap_err();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn create_validation_requires_name_and_description() {
        let req = CategoryRequest {
            name: "Books".to_string(),
            description: "  ".to_string(),
        };
        assert!(req.validate_for_create().is_err());

        let req = ProductRequest {
            name: "Hat".to_string(),
            description: "Wool".to_string(),
            ..ProductRequest::default()
        };
        assert!(req.validate_for_create().is_ok());
    }
}
