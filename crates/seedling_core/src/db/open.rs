//! Opening the item database.
//!
//! # Invariants
//! - Returned connections are at `latest_version()`.
//! - Every failure is logged once as a `db_open` event before it is returned.

use super::migrations::migrate;
use super::{DbError, DbResult};
use log::{error, info};
use rusqlite::Connection;
use std::path::Path;
use std::time::{Duration, Instant};

/// Name used for the in-memory store in logs and errors.
pub const MEMORY_TARGET: &str = ":memory:";

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Opens (creating if needed) the item database at `path`.
///
/// The parent directory must already exist.
pub fn open_db(path: impl AsRef<Path>) -> DbResult<Connection> {
    let path = path.as_ref();
    let target = path.display().to_string();
    open_item_store(target, || Connection::open(path))
}

/// Opens a private in-memory item database; contents vanish on drop.
pub fn open_db_in_memory() -> DbResult<Connection> {
    open_item_store(MEMORY_TARGET.to_string(), Connection::open_in_memory)
}

fn open_item_store(
    target: String,
    connect: impl FnOnce() -> rusqlite::Result<Connection>,
) -> DbResult<Connection> {
    let started_at = Instant::now();

    let result = connect()
        .and_then(|conn| conn.busy_timeout(BUSY_TIMEOUT).map(|()| conn))
        .map_err(|source| DbError::Open {
            target: target.clone(),
            source,
        })
        .and_then(|mut conn| migrate(&mut conn).map(|report| (conn, report)));

    match result {
        Ok((conn, report)) => {
            info!(
                "event=db_open module=db status=ok target={target} schema_from={} schema_to={} duration_ms={}",
                report.from_version,
                report.to_version,
                started_at.elapsed().as_millis()
            );
            Ok(conn)
        }
        Err(err) => {
            error!(
                "event=db_open module=db status=error target={target} duration_ms={} error={err}",
                started_at.elapsed().as_millis()
            );
            Err(err)
        }
    }
}
