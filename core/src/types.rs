//! Request-side DTOs for the PokeAPI.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The three resource categories this crate fetches and persists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceType {
    Pokemon,
    Berry,
    Item,
}

impl ResourceType {
    /// Path segment of the resource under the API root.
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceType::Pokemon => "pokemon",
            ResourceType::Berry => "berry",
            ResourceType::Item => "item",
        }
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A resource type plus a name; lives only for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceQuery {
    pub resource: ResourceType,
    pub name: String,
}

impl ResourceQuery {
    pub fn new(resource: ResourceType, name: &str) -> Self {
        Self {
            resource,
            name: name.to_string(),
        }
    }

    /// Endpoint path relative to the API root, e.g. `pokemon/sprigatito`.
    pub fn path(&self) -> String {
        format!("{}/{}", self.resource, self.name)
    }
}

/// Parameters of the illustrative create call.
///
/// The remote API does not accept writes; this only shapes a request body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatePokemon {
    pub name: String,
    pub height: i64,
    pub weight: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_path_joins_resource_and_name() {
        let query = ResourceQuery::new(ResourceType::Item, "master-ball");
        assert_eq!(query.path(), "item/master-ball");
    }

    #[test]
    fn resource_type_serializes_lowercase() {
        let json = serde_json::to_string(&ResourceType::Berry).unwrap();
        assert_eq!(json, r#""berry""#);
    }
}
