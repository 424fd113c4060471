//! SQLite store implementation

use std::path::Path;

use chrono::Utc;
use rusqlite::{params, Connection};

use super::schema;
use crate::error::Result;
use crate::model::{Berry, Item, NewBerry, NewItem, NewPokemon, Pokemon};
use crate::types::ResourceType;

/// Insert-only store for fetched resources.
///
/// Every insert creates a new row; there is no update or dedup path.
pub struct Store {
    conn: Connection,
}

impl Store {
    /// Open a database file (creates if doesn't exist)
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;
        let store = Self { conn };
        store.initialize_schema()?;
        Ok(store)
    }

    /// Open an in-memory database
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        let store = Self { conn };
        store.initialize_schema()?;
        Ok(store)
    }

    fn initialize_schema(&self) -> Result<()> {
        for stmt in schema::all_schema_statements() {
            self.conn.execute(stmt, [])?;
        }
        Ok(())
    }

    pub fn insert_pokemon(&self, pokemon: &NewPokemon) -> Result<Pokemon> {
        let now = Utc::now();
        self.conn.execute(
            "INSERT INTO pokemons (name, height, weight, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5)",
            params![pokemon.name, pokemon.height, pokemon.weight, now, now],
        )?;
        Ok(Pokemon {
            id: self.conn.last_insert_rowid(),
            name: pokemon.name.clone(),
            height: pokemon.height,
            weight: pokemon.weight,
            created_at: now,
            updated_at: now,
        })
    }

    pub fn insert_berry(&self, berry: &NewBerry) -> Result<Berry> {
        let now = Utc::now();
        self.conn.execute(
            "INSERT INTO berries (name, size, smoothness, created_at, updated_at) VALUES (?1, ?2, ?3, ?4, ?5)",
            params![berry.name, berry.size, berry.smoothness, now, now],
        )?;
        Ok(Berry {
            id: self.conn.last_insert_rowid(),
            name: berry.name.clone(),
            size: berry.size,
            smoothness: berry.smoothness,
            created_at: now,
            updated_at: now,
        })
    }

    pub fn insert_item(&self, item: &NewItem) -> Result<Item> {
        let now = Utc::now();
        self.conn.execute(
            "INSERT INTO items (name, cost, created_at, updated_at) VALUES (?1, ?2, ?3, ?4)",
            params![item.name, item.cost, now, now],
        )?;
        Ok(Item {
            id: self.conn.last_insert_rowid(),
            name: item.name.clone(),
            cost: item.cost,
            created_at: now,
            updated_at: now,
        })
    }

    /// All stored pokemons, oldest first.
    pub fn pokemons(&self) -> Result<Vec<Pokemon>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, name, height, weight, created_at, updated_at FROM pokemons ORDER BY id",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok(Pokemon {
                id: row.get(0)?,
                name: row.get(1)?,
                height: row.get(2)?,
                weight: row.get(3)?,
                created_at: row.get(4)?,
                updated_at: row.get(5)?,
            })
        })?;
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }

    pub fn berries(&self) -> Result<Vec<Berry>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, name, size, smoothness, created_at, updated_at FROM berries ORDER BY id",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok(Berry {
                id: row.get(0)?,
                name: row.get(1)?,
                size: row.get(2)?,
                smoothness: row.get(3)?,
                created_at: row.get(4)?,
                updated_at: row.get(5)?,
            })
        })?;
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }

    pub fn items(&self) -> Result<Vec<Item>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name, cost, created_at, updated_at FROM items ORDER BY id")?;
        let rows = stmt.query_map([], |row| {
            Ok(Item {
                id: row.get(0)?,
                name: row.get(1)?,
                cost: row.get(2)?,
                created_at: row.get(3)?,
                updated_at: row.get(4)?,
            })
        })?;
        Ok(rows.collect::<rusqlite::Result<Vec<_>>>()?)
    }

    /// Drop one table so later writes to it fail.
    #[cfg(test)]
    pub(crate) fn drop_table(&self, resource: ResourceType) -> Result<()> {
        self.conn
            .execute(&format!("DROP TABLE {}", table_name(resource)), [])?;
        Ok(())
    }

    /// Count stored rows of one resource type.
    pub fn count(&self, resource: ResourceType) -> Result<usize> {
        let sql = format!("SELECT COUNT(*) FROM {}", table_name(resource));
        let count: i64 = self.conn.query_row(&sql, [], |row| row.get(0))?;
        Ok(count as usize)
    }
}

fn table_name(resource: ResourceType) -> &'static str {
    match resource {
        ResourceType::Pokemon => "pokemons",
        ResourceType::Berry => "berries",
        ResourceType::Item => "items",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sprigatito() -> NewPokemon {
        NewPokemon {
            name: "sprigatito".to_string(),
            height: 25,
            weight: 5,
        }
    }

    #[test]
    fn test_insert_pokemon() {
        let store = Store::open_in_memory().unwrap();

        let saved = store.insert_pokemon(&sprigatito()).unwrap();
        assert_eq!(saved.name, "sprigatito");
        assert_eq!(saved.created_at, saved.updated_at);

        let rows = store.pokemons().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].id, saved.id);
        assert_eq!(rows[0].height, 25);
        assert_eq!(rows[0].weight, 5);
        assert_eq!(rows[0].created_at, saved.created_at);
        assert_eq!(rows[0].updated_at, saved.updated_at);
    }

    #[test]
    fn test_repeated_inserts_create_distinct_rows() {
        let store = Store::open_in_memory().unwrap();

        let first = store.insert_pokemon(&sprigatito()).unwrap();
        let second = store.insert_pokemon(&sprigatito()).unwrap();

        assert_ne!(first.id, second.id);
        assert_eq!(store.count(ResourceType::Pokemon).unwrap(), 2);
    }

    #[test]
    fn test_insert_berry_and_item() {
        let store = Store::open_in_memory().unwrap();

        store
            .insert_berry(&NewBerry {
                name: "cheri".to_string(),
                size: 20,
                smoothness: 25,
            })
            .unwrap();
        store
            .insert_item(&NewItem {
                name: "master-ball".to_string(),
                cost: 100,
            })
            .unwrap();

        let berries = store.berries().unwrap();
        assert_eq!(berries.len(), 1);
        assert_eq!(berries[0].smoothness, 25);

        let items = store.items().unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "master-ball");
        assert_eq!(items[0].cost, 100);

        assert_eq!(store.count(ResourceType::Pokemon).unwrap(), 0);
    }

    #[test]
    fn test_insert_into_dropped_table_is_a_storage_error() {
        let store = Store::open_in_memory().unwrap();
        store.drop_table(ResourceType::Pokemon).unwrap();

        let err = store.insert_pokemon(&sprigatito()).unwrap_err();
        assert!(matches!(err, crate::error::Error::Storage(_)));
    }

    #[test]
    fn test_reopen_keeps_rows() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pokeapi.db");

        {
            let store = Store::open(&path).unwrap();
            store.insert_pokemon(&sprigatito()).unwrap();
        }

        let store = Store::open(&path).unwrap();
        assert_eq!(store.count(ResourceType::Pokemon).unwrap(), 1);
    }
}
