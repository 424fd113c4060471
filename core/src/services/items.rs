use tracing::info;

use crate::client::{PokeApi, PokeApiClient};
use crate::config::ClientConfig;
use crate::error::{ApiError, Result};
use crate::http::ApiResponse;
use crate::model::{Item, NewItem};
use crate::storage::Store;

pub fn get<A: PokeApi + ?Sized>(name: &str, api: &A) -> std::result::Result<ApiResponse, ApiError> {
    api.get_item(name)
}

pub fn save(name: &str, store: &Store) -> Result<Item> {
    save_with_config(name, &ClientConfig::default(), store)
}

pub fn save_with_config(name: &str, config: &ClientConfig, store: &Store) -> Result<Item> {
    let client = PokeApiClient::new(config.clone());
    let response = get(name, &client)?;
    let item = NewItem::try_from(&response)?;
    let saved = store.insert_item(&item)?;
    info!(resource = "item", name = %saved.name, id = saved.id, "saved resource");
    Ok(saved)
}
