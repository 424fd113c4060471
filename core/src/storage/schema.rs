//! Table definitions, created on open if missing.

pub const CREATE_POKEMONS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS pokemons (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    height INTEGER NOT NULL,
    weight INTEGER NOT NULL,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL
)
"#;

pub const CREATE_BERRIES_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS berries (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    size INTEGER NOT NULL,
    smoothness INTEGER NOT NULL,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL
)
"#;

pub const CREATE_ITEMS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS items (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    cost INTEGER NOT NULL,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL
)
"#;

pub fn all_schema_statements() -> [&'static str; 3] {
    [CREATE_POKEMONS_TABLE, CREATE_BERRIES_TABLE, CREATE_ITEMS_TABLE]
}
