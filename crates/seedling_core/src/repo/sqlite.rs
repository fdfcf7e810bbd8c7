//! SQLite-backed item store.
//!
//! # Responsibility
//! - Persist items across process runs behind the same `ItemRepository` port.
//! - Keep SQL details inside the persistence boundary.
//!
//! # Invariants
//! - Connections must be migrated (`db::open_db*`) before use.
//! - `save` is an `ON CONFLICT` upsert; the original `seq` slot is preserved.
//! - Read paths reject malformed rows instead of masking them.

use crate::db::migrations::{latest_version, schema_version};
use crate::model::item::{Item, ItemId};
use crate::repo::item_repo::{ItemRepository, RepoError, RepoResult};
use rusqlite::{params, Connection, Row};
use uuid::Uuid;

const ITEM_SELECT_SQL: &str = "SELECT id, name, value FROM items";

/// `ItemRepository` implementation over a borrowed SQLite connection.
pub struct SqliteItemRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteItemRepository<'conn> {
    /// Wraps a connection after checking its schema version.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        let actual_version = schema_version(conn)?;
        let expected_version = latest_version();
        if actual_version != expected_version {
            return Err(RepoError::UninitializedConnection {
                expected_version,
                actual_version,
            });
        }
        Ok(Self { conn })
    }
}

impl ItemRepository for SqliteItemRepository<'_> {
    fn save(&self, item: &Item) -> RepoResult<()> {
        self.conn.execute(
            "INSERT INTO items (id, name, value)
             VALUES (?1, ?2, ?3)
             ON CONFLICT(id) DO UPDATE SET
                name = excluded.name,
                value = excluded.value;",
            params![item.id().to_string(), item.name.as_str(), item.value],
        )?;
        Ok(())
    }

    fn get(&self, id: ItemId) -> RepoResult<Option<Item>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{ITEM_SELECT_SQL} WHERE id = ?1;"))?;
        let mut rows = stmt.query([id.to_string()])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_item_row(row)?));
        }
        Ok(None)
    }

    fn list(&self) -> RepoResult<Vec<Item>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{ITEM_SELECT_SQL} ORDER BY seq ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut items = Vec::new();
        while let Some(row) = rows.next()? {
            items.push(parse_item_row(row)?);
        }
        Ok(items)
    }

    fn delete(&self, id: ItemId) -> RepoResult<bool> {
        let changed = self
            .conn
            .execute("DELETE FROM items WHERE id = ?1;", [id.to_string()])?;
        Ok(changed > 0)
    }
}

fn parse_item_row(row: &Row<'_>) -> RepoResult<Item> {
    let id_text: String = row.get("id")?;
    let id = Uuid::parse_str(&id_text)
        .map_err(|_| RepoError::InvalidData(format!("invalid uuid value `{id_text}` in items.id")))?;

    Item::with_id(id, row.get::<_, String>("name")?, row.get("value")?)
        .map_err(|err| RepoError::InvalidData(format!("{err} in items.id")))
}
