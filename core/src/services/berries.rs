use tracing::info;

use crate::client::{PokeApi, PokeApiClient};
use crate::config::ClientConfig;
use crate::error::{ApiError, Result};
use crate::http::ApiResponse;
use crate::model::{Berry, NewBerry};
use crate::storage::Store;

pub fn get<A: PokeApi + ?Sized>(name: &str, api: &A) -> std::result::Result<ApiResponse, ApiError> {
    api.get_berry(name)
}

pub fn save(name: &str, store: &Store) -> Result<Berry> {
    save_with_config(name, &ClientConfig::default(), store)
}

/// Fetch a berry with a fresh client built from `config`, map `name`, `size`
/// and `smoothness`, and insert one row.
pub fn save_with_config(name: &str, config: &ClientConfig, store: &Store) -> Result<Berry> {
    let client = PokeApiClient::new(config.clone());
    let response = get(name, &client)?;
    let berry = NewBerry::try_from(&response)?;
    let saved = store.insert_berry(&berry)?;
    info!(resource = "berry", name = %saved.name, id = saved.id, "saved resource");
    Ok(saved)
}
