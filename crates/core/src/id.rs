//! Strongly-typed identifiers used across the catalog.
//!
//! Ids are opaque strings on the wire. Fresh ids come from UUIDv7 (time
//! ordered, rendered without hyphens); seed records keep their fixed ids.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier of a category.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryId(String);

/// Identifier of a product.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

macro_rules! impl_string_id {
    ($t:ty) => {
        impl $t {
            /// Generate a new, process-unique identifier.
            pub fn generate() -> Self {
                Self(Uuid::now_v7().simple().to_string())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<String> for $t {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl From<&str> for $t {
            fn from(value: &str) -> Self {
                Self(value.to_string())
            }
        }

        impl From<$t> for String {
            fn from(value: $t) -> Self {
                value.0
            }
        }
    };
}

impl_string_id!(CategoryId);
impl_string_id!(ProductId);

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn generated_ids_are_non_empty_and_distinct() {
        let ids: HashSet<_> = (0..1000).map(|_| CategoryId::generate()).collect();
        assert_eq!(ids.len(), 1000);
        assert!(ids.iter().all(|id| !id.is_empty()));
    }

    #[test]
    fn ids_serialize_as_plain_strings() {
        let id = ProductId::from("bq4foj37jhfipc5nqri0");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"bq4foj37jhfipc5nqri0\"");
    }
}
