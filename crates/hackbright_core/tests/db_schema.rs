use hackbright_core::db::schema::TRACKER_TABLES;
use hackbright_core::db::{open_db, open_db_in_memory};
use hackbright_core::{SqliteTrackerRepository, TrackerRepository};
use rusqlite::Connection;

const LEGACY_SCHEMA_SQL: &str = "
    CREATE TABLE students (first_name VARCHAR(30), last_name VARCHAR(30), github VARCHAR(30));
    CREATE TABLE projects (title VARCHAR(30), description TEXT, max_grade INTEGER);
    CREATE TABLE grades (student_github VARCHAR(30), project_title VARCHAR(30), grade INTEGER);
    INSERT INTO projects VALUES ('Markov', 'Tweets generated from Markov chains', 50);";

#[test]
fn open_db_in_memory_creates_tracker_tables() {
    let conn = open_db_in_memory().unwrap();

    for table_name in TRACKER_TABLES {
        assert_table_exists(&conn, table_name);
    }
    assert_eq!(schema_version(&conn), 0);
}

#[test]
fn reopening_file_database_keeps_rows() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("hackbright.sqlite3");

    let conn = open_db(&path).unwrap();
    conn.execute(
        "INSERT INTO students (first_name, last_name, github) VALUES ('Ada', 'Lovelace', 'ada');",
        [],
    )
    .unwrap();
    conn.close().unwrap();

    let conn = open_db(&path).unwrap();
    assert_eq!(count_rows(&conn, "students"), 1);
}

#[test]
fn existing_schema_is_adopted() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("legacy.sqlite3");

    let conn = Connection::open(&path).unwrap();
    conn.execute_batch(LEGACY_SCHEMA_SQL).unwrap();
    drop(conn);

    let conn = open_db(&path).unwrap();
    assert_eq!(count_rows(&conn, "projects"), 1);
    assert_eq!(schema_version(&conn), 0);
}

#[test]
fn database_with_foreign_user_version_opens_and_is_readable() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("shared.sqlite3");

    let conn = Connection::open(&path).unwrap();
    conn.execute_batch(LEGACY_SCHEMA_SQL).unwrap();
    conn.execute_batch("PRAGMA user_version = 3;").unwrap();
    drop(conn);

    let conn = open_db(&path).unwrap();
    assert_eq!(schema_version(&conn), 3);

    let repo = SqliteTrackerRepository::new(&conn);
    let project = repo.get_project_by_title("Markov").unwrap().unwrap();
    assert_eq!(project.max_grade, 50);
}

fn schema_version(conn: &Connection) -> u32 {
    conn.query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap()
}

fn count_rows(conn: &Connection, table_name: &str) -> i64 {
    conn.query_row(&format!("SELECT COUNT(*) FROM {table_name};"), [], |row| {
        row.get(0)
    })
    .unwrap()
}

fn assert_table_exists(conn: &Connection, table_name: &str) {
    let exists: i64 = conn
        .query_row(
            "SELECT EXISTS(
                SELECT 1
                FROM sqlite_master
                WHERE type = 'table' AND name = ?1
            );",
            [table_name],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(exists, 1, "table {table_name} does not exist");
}
