use rusqlite::Connection;
use seedling_core::db::migrations::migrate;
use seedling_core::db::{latest_version, open_db, open_db_in_memory, schema_version, DbError};
use seedling_core::{
    create_item, get_item, list_items, AppContext, Item, ItemRepository, RepoError,
    SqliteItemRepository,
};

#[test]
fn open_db_in_memory_applies_all_migrations() {
    let conn = open_db_in_memory().unwrap();

    assert_eq!(schema_version(&conn).unwrap(), latest_version());
    let tables: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'items';",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(tables, 1);
}

#[test]
fn opening_database_with_newer_schema_version_returns_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.db");

    let conn = Connection::open(&path).unwrap();
    conn.execute_batch("PRAGMA user_version = 999;").unwrap();
    drop(conn);

    let err = open_db(&path).unwrap_err();
    assert!(matches!(
        err,
        DbError::UnsupportedSchemaVersion {
            db_version: 999,
            ..
        }
    ));
}

#[test]
fn repository_rejects_unmigrated_connection() {
    let conn = Connection::open_in_memory().unwrap();

    match SqliteItemRepository::try_new(&conn) {
        Err(RepoError::UninitializedConnection {
            expected_version,
            actual_version: 0,
        }) => assert_eq!(expected_version, latest_version()),
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("expected uninitialized connection error"),
    }
}

#[test]
fn save_upserts_and_keeps_list_order() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteItemRepository::try_new(&conn).unwrap();

    let mut first = Item::new("first", 1);
    let second = Item::new("second", 2);
    repo.save(&first).unwrap();
    repo.save(&second).unwrap();

    first.name = "first-renamed".to_string();
    first.value = 10;
    repo.save(&first).unwrap();

    let listed = repo.list().unwrap();
    assert_eq!(listed.len(), 2);
    assert_eq!(listed[0].id(), first.id());
    assert_eq!(listed[0].name, "first-renamed");
    assert_eq!(listed[0].value, 10);
    assert_eq!(listed[1].id(), second.id());
}

#[test]
fn missing_ids_are_not_errors() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteItemRepository::try_new(&conn).unwrap();
    let ghost = Item::new("ghost", 0);

    assert!(repo.get(ghost.id()).unwrap().is_none());
    assert!(!repo.delete(ghost.id()).unwrap());
    assert!(repo.list().unwrap().is_empty());
}

#[test]
fn malformed_row_is_reported_as_invalid_data() {
    let conn = open_db_in_memory().unwrap();
    conn.execute(
        "INSERT INTO items (id, name, value) VALUES ('nope', 'broken', 1);",
        [],
    )
    .unwrap();
    let repo = SqliteItemRepository::try_new(&conn).unwrap();

    let err = repo.list().unwrap_err();
    assert!(matches!(err, RepoError::InvalidData(_)));
}

#[test]
fn items_survive_reopening_the_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("items.db");

    let created = {
        let conn = open_db(&path).unwrap();
        let ctx = AppContext::new(SqliteItemRepository::try_new(&conn).unwrap());
        create_item(&ctx, "widget", 10).unwrap()
    };

    let conn = open_db(&path).unwrap();
    let ctx = AppContext::new(SqliteItemRepository::try_new(&conn).unwrap());
    let fetched = get_item(&ctx, created.id()).unwrap().unwrap();
    assert_eq!(fetched.name, "widget");
    assert_eq!(fetched.value, 10);
    assert_eq!(list_items(&ctx).unwrap().len(), 1);
}

#[test]
fn migrate_reports_versions_and_is_idempotent() {
    let mut conn = Connection::open_in_memory().unwrap();

    let first = migrate(&mut conn).unwrap();
    assert_eq!(first.from_version, 0);
    assert_eq!(first.to_version, latest_version());
    assert!(first.applied_any());

    let second = migrate(&mut conn).unwrap();
    assert_eq!(second.from_version, latest_version());
    assert!(!second.applied_any());
}

#[test]
fn open_db_in_missing_directory_reports_target() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent").join("items.db");

    match open_db(&path) {
        Err(DbError::Open { target, .. }) => assert!(target.ends_with("items.db")),
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("expected open failure"),
    }
}

#[test]
fn failed_statement_is_a_query_error() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteItemRepository::try_new(&conn).unwrap();
    conn.execute_batch("DROP TABLE items;").unwrap();

    let err = repo.save(&Item::new("orphan", 1)).unwrap_err();
    assert!(matches!(err, RepoError::Query(_)));
}
