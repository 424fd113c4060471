//! Fetch pokemon, berries and items from the PokeAPI and keep simplified
//! copies in SQLite.
//!
//! # Overview
//! `PokeApiClient` is the only component that talks to the network. Fetch
//! services (`pokemons::get`, `berries::get`, `items::get`) adapt a name and
//! any `PokeApi` implementation to one call. Save services
//! (`pokemons::save`, ...) fetch with their own client, map the decoded body
//! onto an entity and insert it into a `Store`.
//!
//! # Design
//! - Request shaping (`build_*`) is separate from I/O (`execute`).
//! - Every transport failure becomes an `ApiError` tagged with an
//!   `ApiErrorKind`; `ureq` errors never escape.
//! - The HTTP agent is created lazily and owned by one client instance.
//! - Calls are synchronous and blocking.

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod model;
pub mod services;
pub mod storage;
pub mod types;

pub use client::{PokeApi, PokeApiClient};
pub use config::ClientConfig;
pub use error::{ApiError, ApiErrorKind, Error, Result, ValidationError};
pub use http::{ApiResponse, HttpMethod, HttpRequest};
pub use model::{Berry, Item, NewBerry, NewItem, NewPokemon, Pokemon};
pub use services::{berries, items, pokemons};
pub use storage::Store;
pub use types::{CreatePokemon, ResourceQuery, ResourceType};
