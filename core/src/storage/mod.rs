//! SQLite-backed persistence for fetched resources.
//!
//! Tables:
//! - pokemons(id, name, height, weight, created_at, updated_at)
//! - berries(id, name, size, smoothness, created_at, updated_at)
//! - items(id, name, cost, created_at, updated_at)

pub mod schema;
pub mod sqlite;

pub use sqlite::Store;
