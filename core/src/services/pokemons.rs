use tracing::info;

use crate::client::{PokeApi, PokeApiClient};
use crate::config::ClientConfig;
use crate::error::{ApiError, Result};
use crate::http::ApiResponse;
use crate::model::{NewPokemon, Pokemon};
use crate::storage::Store;

/// Fetch one pokemon through `api`. One request, no retry.
pub fn get<A: PokeApi + ?Sized>(name: &str, api: &A) -> std::result::Result<ApiResponse, ApiError> {
    api.get_pokemon(name)
}

/// Fetch a pokemon from the public PokeAPI and insert it into `store`.
pub fn save(name: &str, store: &Store) -> Result<Pokemon> {
    save_with_config(name, &ClientConfig::default(), store)
}

/// Like [`save`], with a fresh client built from `config`.
///
/// Each call inserts a new row, even for a name saved before.
pub fn save_with_config(name: &str, config: &ClientConfig, store: &Store) -> Result<Pokemon> {
    let client = PokeApiClient::new(config.clone());
    let response = get(name, &client)?;
    let pokemon = NewPokemon::try_from(&response)?;
    let saved = store.insert_pokemon(&pokemon)?;
    info!(resource = "pokemon", name = %saved.name, id = saved.id, "saved resource");
    Ok(saved)
}
