use axum::{
    extract::OriginalUri,
    http::{StatusCode, Uri},
    response::{IntoResponse, Redirect, Response},
};

pub async fn home() -> &'static str {
    "Welcome home!"
}

pub async fn health() -> StatusCode {
    StatusCode::OK
}

/// Unmatched paths ending in `/` are redirected to the same path without it
/// (`/categories/` -> `/categories`); everything else is a 404.
///
/// Reads the original URI: nested routers hand their fallback a stripped one.
/// The redirect is permanent and keeps the method, so PATCH and DELETE land
/// on the right handler.
pub async fn trim_trailing_slash(OriginalUri(uri): OriginalUri) -> Response {
    match trimmed_location(&uri) {
        Some(location) => Redirect::permanent(&location).into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

fn trimmed_location(uri: &Uri) -> Option<String> {
    let path = uri.path();
    if path.len() <= 1 || !path.ends_with('/') {
        return None;
    }
    let trimmed = path.trim_end_matches('/');
    let trimmed = if trimmed.is_empty() { "/" } else { trimmed };
    Some(match uri.query() {
        Some(query) => format!("{trimmed}?{query}"),
        None => trimmed.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn location(uri: &str) -> Option<String> {
        trimmed_location(&uri.parse::<Uri>().unwrap())
    }

    #[test]
    fn trailing_slash_is_trimmed() {
        assert_eq!(location("/categories/").as_deref(), Some("/categories"));
        assert_eq!(location("/products/category/x//").as_deref(), Some("/products/category/x"));
        assert_eq!(location("/products/?a=1").as_deref(), Some("/products?a=1"));
    }

    #[test]
    fn paths_without_trailing_slash_are_left_alone() {
        assert_eq!(location("/"), None);
        assert_eq!(location("/nowhere"), None);
    }
}
