//! Fetch and save services, one module per resource type.
//!
//! # Design
//! `get` adapts a name and an injected `PokeApi` to the one matching call
//! and returns the response untouched. `save` builds its own client, fetches,
//! maps the body onto the entity and inserts one row. Fetch and insert are
//! not wrapped in a transaction: a failed insert after a good fetch is
//! reported and nothing is retried.

pub mod berries;
pub mod items;
pub mod pokemons;
