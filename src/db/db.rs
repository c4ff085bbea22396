use crate::libs::data_storage::DataStorage;
use crate::msg_debug;
use anyhow::Result;
use rusqlite::Connection;

pub const DB_FILE_NAME: &str = "timetracker.sqlite";

const SCHEMA_PROJECT: &str = "CREATE TABLE IF NOT EXISTS project (
    name TEXT NOT NULL PRIMARY KEY
);";
const SCHEMA_TASK: &str = "CREATE TABLE IF NOT EXISTS task (
    project TEXT NOT NULL,
    name TEXT NOT NULL,
    time INTEGER NOT NULL DEFAULT 0,
    PRIMARY KEY (project, name),
    FOREIGN KEY (project) REFERENCES project (name)
);";

/// Process-wide storage handle.
///
/// Owns the single SQLite connection for the lifetime of the process and is
/// passed by reference into every component that touches storage.
pub struct Db {
    pub conn: Connection,
}

impl Db {
    /// Opens the database file in the user's home directory and ensures the
    /// schema exists.
    pub fn new() -> Result<Db> {
        let db_file_path = DataStorage::new().get_path(DB_FILE_NAME)?;
        msg_debug!(format!("Opening database at {}", db_file_path.display()));
        let conn = Connection::open(db_file_path)?;
        // SQLite ships with foreign key enforcement off.
        conn.pragma_update(None, "foreign_keys", true)?;

        let mut db = Db { conn };
        db.create_tables()?;
        Ok(db)
    }

    /// Creates the `project` and `task` tables if they are missing.
    ///
    /// Runs inside a single transaction and commits on success. Safe to call
    /// on every startup.
    pub fn create_tables(&mut self) -> Result<()> {
        let tx = self.conn.transaction()?;
        tx.execute(SCHEMA_PROJECT, [])?;
        tx.execute(SCHEMA_TASK, [])?;
        tx.commit()?;
        Ok(())
    }
}
