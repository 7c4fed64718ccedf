use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Router,
};

use catalog_core::{CatalogError, CategoryId, EntityKind, ProductId};

use crate::app::dto::{self, ProductRequest, ProductResponse};
use crate::app::errors;
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_products))
        .route("/new", post(create_product).get(get_product_named_new))
        .route("/category/:id", get(list_products_of_category))
        .route(
            "/:id",
            get(get_product).patch(update_product).delete(delete_product),
        )
}

pub async fn list_products(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    let items = dto::products_to_response(services.products().list_all());
    dto::json_response(StatusCode::OK, &items)
}

pub async fn get_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    product_by_id(&services, ProductId::from(id))
}

/// `GET /new` shares its path with the create route; it is still a lookup of
/// the id `new`.
pub async fn get_product_named_new(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    product_by_id(&services, ProductId::from("new"))
}

fn product_by_id(services: &AppServices, id: ProductId) -> axum::response::Response {
    match services.products().get_by_id(&id) {
        Ok(product) => dto::json_response(StatusCode::OK, &ProductResponse::from(product)),
        Err(e) => errors::catalog_error_to_response(e),
    }
}

pub async fn list_products_of_category(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let items = services.products().list_by_category(&CategoryId::from(id));
    dto::json_response(StatusCode::OK, &dto::products_to_response(items))
}

pub async fn create_product(
    Extension(services): Extension<Arc<AppServices>>,
    body: Bytes,
) -> axum::response::Response {
    let req: ProductRequest = match dto::parse_body(&body) {
        Ok(v) => v,
        Err(res) => return res,
    };
    if let Err(msg) = req.validate_for_create() {
        return errors::text_error(StatusCode::UNPROCESSABLE_ENTITY, msg);
    }

    match services.products().insert(req.into()) {
        Ok(product) => dto::json_response(StatusCode::CREATED, &ProductResponse::from(product)),
        Err(e) => errors::catalog_error_to_response(e),
    }
}

pub async fn update_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    body: Bytes,
) -> axum::response::Response {
    let req: ProductRequest = match dto::parse_body(&body) {
        Ok(v) => v,
        Err(res) => return res,
    };

    match services.products().update(&ProductId::from(id), req.into()) {
        Ok(product) => dto::json_response(StatusCode::OK, &ProductResponse::from(product)),
        Err(e) => errors::catalog_error_to_response(e),
    }
}

pub async fn delete_product(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let product_id = ProductId::from(id);
    if services.products().delete(&product_id) {
        (
            StatusCode::OK,
            format!("The product with ID {product_id} has been deleted successfully"),
        )
            .into_response()
    } else {
        errors::catalog_error_to_response(CatalogError::not_found(
            EntityKind::Product,
            product_id.as_str(),
        ))
    }
}
