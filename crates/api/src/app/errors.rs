use axum::http::StatusCode;
use axum::response::IntoResponse;

use catalog_core::CatalogError;

/// Status used for every "no record with this id" outcome.
pub const NOT_FOUND_STATUS: StatusCode = StatusCode::PRECONDITION_FAILED;

pub fn catalog_error_to_response(err: CatalogError) -> axum::response::Response {
    match err {
        CatalogError::NotFound { .. } => text_error(NOT_FOUND_STATUS, err.to_string()),
        CatalogError::CategoryNotFound(_) => {
            text_error(StatusCode::UNPROCESSABLE_ENTITY, err.to_string())
        }
        CatalogError::Validation(msg) => text_error(StatusCode::UNPROCESSABLE_ENTITY, msg),
    }
}

/// Plain-text error body, matching the messages clients already parse.
pub fn text_error(status: StatusCode, message: impl Into<String>) -> axum::response::Response {
    (status, message.into()).into_response()
}

pub fn malformed_body(err: &serde_json::Error) -> axum::response::Response {
    tracing::warn!("body parse error, {err}");
    text_error(StatusCode::BAD_REQUEST, format!("malformed request body: {err}"))
}

pub fn encoding_failure(err: &serde_json::Error) -> axum::response::Response {
    tracing::error!("failed to encode response body: {err}");
    text_error(StatusCode::INTERNAL_SERVER_ERROR, "failed to encode response")
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_core::EntityKind;

    #[test]
    fn not_found_maps_to_precondition_failed() {
        let res = catalog_error_to_response(CatalogError::not_found(EntityKind::Category, "x"));
        assert_eq!(res.status(), StatusCode::PRECONDITION_FAILED);
    }

    #[test]
    fn reference_and_validation_failures_are_unprocessable() {
        let res = catalog_error_to_response(CatalogError::category_not_found("bogus"));
        assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let res = catalog_error_to_response(CatalogError::validation("CategoryID is required"));
        assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
