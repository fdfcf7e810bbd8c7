//! Item schema migrations.
//!
//! # Invariants
//! - Steps are listed in ascending `version` order with no gaps.
//! - `PRAGMA user_version` always equals the last applied step.
//! - A run applies every pending step or none of them.

use crate::db::{DbError, DbResult};
use log::info;
use rusqlite::Connection;

struct Step {
    version: u32,
    name: &'static str,
    sql: &'static str,
}

const STEPS: &[Step] = &[Step {
    version: 1,
    name: "create_items",
    sql: include_str!("0001_init.sql"),
}];

/// Schema versions before and after one `migrate` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MigrationReport {
    pub from_version: u32,
    pub to_version: u32,
}

impl MigrationReport {
    pub fn applied_any(&self) -> bool {
        self.from_version != self.to_version
    }
}

/// Schema version this build writes.
pub fn latest_version() -> u32 {
    STEPS.last().map_or(0, |step| step.version)
}

/// Reads the schema version stored in the database header.
pub fn schema_version(conn: &Connection) -> rusqlite::Result<u32> {
    conn.query_row("PRAGMA user_version;", [], |row| row.get(0))
}

/// Brings `conn` up to `latest_version()`.
///
/// # Errors
/// - `DbError::UnsupportedSchemaVersion` when the file is ahead of this build.
/// - `DbError::Migration` naming the first step that failed.
pub fn migrate(conn: &mut Connection) -> DbResult<MigrationReport> {
    let from_version = schema_version(conn).map_err(DbError::SchemaVersion)?;
    let latest = latest_version();

    if from_version > latest {
        return Err(DbError::UnsupportedSchemaVersion {
            db_version: from_version,
            latest_supported: latest,
        });
    }

    let pending: Vec<&Step> = STEPS
        .iter()
        .filter(|step| step.version > from_version)
        .collect();
    if pending.is_empty() {
        return Ok(MigrationReport {
            from_version,
            to_version: from_version,
        });
    }

    let tx = conn.transaction().map_err(|source| DbError::Migration {
        version: pending[0].version,
        name: pending[0].name,
        source,
    })?;
    for step in &pending {
        let as_migration_error = |source| DbError::Migration {
            version: step.version,
            name: step.name,
            source,
        };
        tx.execute_batch(step.sql).map_err(as_migration_error)?;
        tx.pragma_update(None, "user_version", step.version)
            .map_err(as_migration_error)?;
        info!(
            "event=db_migrate module=db status=applied version={} name={}",
            step.version, step.name
        );
    }
    tx.commit().map_err(|source| DbError::Migration {
        version: latest,
        name: "commit",
        source,
    })?;

    Ok(MigrationReport {
        from_version,
        to_version: latest,
    })
}
