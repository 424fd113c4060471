//! Persisted entities and their mapping from decoded API bodies.
//!
//! # Design
//! A `New*` value holds exactly the fields copied out of an `ApiResponse`
//! body. The store turns it into the full entity by assigning the row id and
//! timestamps. Mapping goes through serde: a missing key, a null, or a value
//! of the wrong JSON type is a `ValidationError` and nothing reaches the
//! store. Keys the entity does not map are ignored.

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use crate::error::ValidationError;
use crate::http::ApiResponse;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pokemon {
    pub id: i64,
    pub name: String,
    pub height: i64,
    pub weight: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Berry {
    pub id: i64,
    pub name: String,
    pub size: i64,
    pub smoothness: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub id: i64,
    pub name: String,
    pub cost: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewPokemon {
    pub name: String,
    pub height: i64,
    pub weight: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewBerry {
    pub name: String,
    pub size: i64,
    pub smoothness: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewItem {
    pub name: String,
    pub cost: i64,
}

impl TryFrom<&ApiResponse> for NewPokemon {
    type Error = ValidationError;

    fn try_from(response: &ApiResponse) -> Result<Self, Self::Error> {
        from_body("pokemon", response)
    }
}

impl TryFrom<&ApiResponse> for NewBerry {
    type Error = ValidationError;

    fn try_from(response: &ApiResponse) -> Result<Self, Self::Error> {
        from_body("berry", response)
    }
}

impl TryFrom<&ApiResponse> for NewItem {
    type Error = ValidationError;

    fn try_from(response: &ApiResponse) -> Result<Self, Self::Error> {
        from_body("item", response)
    }
}

fn from_body<T: DeserializeOwned>(
    entity: &'static str,
    response: &ApiResponse,
) -> Result<T, ValidationError> {
    serde_json::from_value(Value::Object(response.body.clone())).map_err(|e| ValidationError {
        entity,
        message: e.to_string(),
    })
}
