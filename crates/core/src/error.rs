//! Domain error model.

use thiserror::Error;

/// Result type used across the catalog layer.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Which collection a failed lookup targeted.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum EntityKind {
    Category,
    Product,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Category => "Category",
            EntityKind::Product => "Product",
        }
    }
}

impl core::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Catalog-level error.
///
/// Keep this focused on deterministic store failures (validation, missing
/// records, broken references). Transport concerns belong to the API crate.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// A required field was missing or empty.
    #[error("validation failed: {0}")]
    Validation(String),

    /// No record with the given id exists.
    #[error("{kind} with ID {id} not found")]
    NotFound { kind: EntityKind, id: String },

    /// A product referenced a category that does not exist.
    #[error("Category with ID \"{0}\" not found. Kindly enter data with the category ID")]
    CategoryNotFound(String),
}

impl CatalogError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(kind: EntityKind, id: impl Into<String>) -> Self {
        Self::NotFound {
            kind,
            id: id.into(),
        }
    }

    pub fn category_not_found(id: impl Into<String>) -> Self {
        Self::CategoryNotFound(id.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_message_names_kind_and_id() {
        let err = CatalogError::not_found(EntityKind::Product, "randomID");
        assert_eq!(err.to_string(), "Product with ID randomID not found");
    }

    #[test]
    fn category_not_found_message_quotes_id() {
        let err = CatalogError::category_not_found("bogus");
        assert_eq!(
            err.to_string(),
            "Category with ID \"bogus\" not found. Kindly enter data with the category ID"
        );
    }
}
