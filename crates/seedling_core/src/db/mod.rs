//! SQLite bootstrap for the persistent item store.
//!
//! Opening a database applies the item schema before any connection is
//! handed out. Failures here are bootstrap failures only; once a connection
//! is in use, query errors belong to `RepoError`.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod migrations;
mod open;

pub use migrations::{latest_version, schema_version, MigrationReport};
pub use open::{open_db, open_db_in_memory, MEMORY_TARGET};

pub type DbResult<T> = Result<T, DbError>;

/// Why the item database could not be made ready.
#[derive(Debug)]
pub enum DbError {
    /// The file could not be opened or the connection could not be configured.
    Open {
        target: String,
        source: rusqlite::Error,
    },
    /// `PRAGMA user_version` could not be read.
    SchemaVersion(rusqlite::Error),
    /// One migration step failed; nothing from the run was committed.
    Migration {
        version: u32,
        name: &'static str,
        source: rusqlite::Error,
    },
    /// The file was written by a newer build.
    UnsupportedSchemaVersion {
        db_version: u32,
        latest_supported: u32,
    },
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Open { target, source } => {
                write!(f, "cannot open item database `{target}`: {source}")
            }
            Self::SchemaVersion(source) => write!(f, "cannot read item schema version: {source}"),
            Self::Migration {
                version,
                name,
                source,
            } => write!(f, "item schema migration {version} ({name}) failed: {source}"),
            Self::UnsupportedSchemaVersion {
                db_version,
                latest_supported,
            } => write!(
                f,
                "database schema version {db_version} is newer than supported {latest_supported}"
            ),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Open { source, .. } | Self::Migration { source, .. } => Some(source),
            Self::SchemaVersion(source) => Some(source),
            Self::UnsupportedSchemaVersion { .. } => None,
        }
    }
}
