use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Router,
};

use catalog_core::{CatalogError, CategoryId, EntityKind};

use crate::app::dto::{self, CategoryRequest, CategoryResponse};
use crate::app::errors;
use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_categories))
        .route("/new", post(create_category).get(get_category_named_new))
        .route(
            "/:id",
            get(get_category).patch(update_category).delete(delete_category),
        )
}

pub async fn list_categories(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    let items = dto::categories_to_response(services.categories().list_all());
    dto::json_response(StatusCode::OK, &items)
}

pub async fn get_category(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    category_by_id(&services, CategoryId::from(id))
}

/// `GET /new` shares its path with the create route; it is still a lookup of
/// the id `new`.
pub async fn get_category_named_new(
    Extension(services): Extension<Arc<AppServices>>,
) -> axum::response::Response {
    category_by_id(&services, CategoryId::from("new"))
}

fn category_by_id(services: &AppServices, id: CategoryId) -> axum::response::Response {
    match services.categories().get_by_id(&id) {
        Ok(category) => dto::json_response(StatusCode::OK, &CategoryResponse::from(category)),
        Err(e) => errors::catalog_error_to_response(e),
    }
}

pub async fn create_category(
    Extension(services): Extension<Arc<AppServices>>,
    body: Bytes,
) -> axum::response::Response {
    let req: CategoryRequest = match dto::parse_body(&body) {
        Ok(v) => v,
        Err(res) => return res,
    };
    if let Err(msg) = req.validate_for_create() {
        return errors::text_error(StatusCode::UNPROCESSABLE_ENTITY, msg);
    }

    let created = services.categories().insert(req.into());
    dto::json_response(StatusCode::CREATED, &CategoryResponse::from(created))
}

pub async fn update_category(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
    body: Bytes,
) -> axum::response::Response {
    let req: CategoryRequest = match dto::parse_body(&body) {
        Ok(v) => v,
        Err(res) => return res,
    };

    match services.categories().update(&CategoryId::from(id), req.into()) {
        Ok(category) => dto::json_response(StatusCode::OK, &CategoryResponse::from(category)),
        Err(e) => errors::catalog_error_to_response(e),
    }
}

pub async fn delete_category(
    Extension(services): Extension<Arc<AppServices>>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let category_id = CategoryId::from(id);
    if services.categories().delete(&category_id) {
        (
            StatusCode::OK,
            format!("The category with ID {category_id} has been deleted successfully"),
        )
            .into_response()
    } else {
        errors::catalog_error_to_response(CatalogError::not_found(
            EntityKind::Category,
            category_id.as_str(),
        ))
    }
}
