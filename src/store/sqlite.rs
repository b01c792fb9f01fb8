//! SQLite persistence adapter for entries.
//!
//! Maps [`Entry`] values to the single `entries` table. Timestamps are
//! stored as whole Unix seconds; normalization between the stored and
//! in-memory shapes happens here and nowhere else: right before a persist
//! (defaulting a missing start to now) and right after a fetch.

use crate::errors::{AppError, AppResult};
use crate::models::entry::{Entry, EntryRecord};
use crate::store::EntryStore;
use crate::utils::clock::{Clock, SystemClock};
use rusqlite::{Connection, OptionalExtension, Row, params};
use std::path::Path;
use std::sync::Mutex;

pub struct SqliteStore {
    conn: Mutex<Connection>,
    clock: Box<dyn Clock>,
}

impl SqliteStore {
    /// Open (creating if needed) the database at `path` and ensure the
    /// schema exists.
    pub fn open(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let conn = Connection::open(path)?;
        Self::from_connection(conn)
    }

    /// In-memory database, used by the tests.
    pub fn open_in_memory() -> AppResult<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> AppResult<Self> {
        init_schema(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
            clock: Box::new(SystemClock),
        })
    }

    /// Replace the clock used to default missing start times.
    pub fn with_clock(mut self, clock: Box<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Before-write normalization: an entry that never started starts now.
    fn normalize(&self, entry: &Entry) -> EntryRecord {
        let mut entry = entry.clone();
        if !entry.started() {
            entry.start = Some(self.clock.now());
        }
        EntryRecord::from(&entry)
    }
}

/// Schema creation is idempotent and runs once per store open.
///
/// The partial unique index admits at most one row with `end_time = 0`,
/// which makes "at most one open entry" hold even across concurrent
/// writers.
fn init_schema(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS entries (
            id         INTEGER PRIMARY KEY AUTOINCREMENT,
            start_time INTEGER NOT NULL DEFAULT 0,
            end_time   INTEGER NOT NULL DEFAULT 0,
            message    TEXT NOT NULL DEFAULT ''
        );

        CREATE UNIQUE INDEX IF NOT EXISTS idx_entries_single_open
            ON entries (end_time) WHERE end_time = 0;
        "#,
    )?;
    Ok(())
}

fn map_row(row: &Row) -> rusqlite::Result<EntryRecord> {
    Ok(EntryRecord {
        id: row.get("id")?,
        start_time: row.get("start_time")?,
        end_time: row.get("end_time")?,
        message: row.get("message")?,
    })
}

/// Turn a unique-index violation into the domain error it means here.
fn map_write_err(e: rusqlite::Error) -> AppError {
    match &e {
        rusqlite::Error::SqliteFailure(err, _)
            if err.code == rusqlite::ErrorCode::ConstraintViolation =>
        {
            AppError::OpenEntry
        }
        _ => AppError::Db(e),
    }
}

impl EntryStore for SqliteStore {
    fn insert(&self, entry: &Entry) -> AppResult<Entry> {
        let mut rec = self.normalize(entry);
        let conn = self.conn.lock().unwrap();
        conn.execute(
            "INSERT INTO entries (start_time, end_time, message) VALUES (?1, ?2, ?3)",
            params![rec.start_time, rec.end_time, rec.message],
        )
        .map_err(map_write_err)?;

        rec.id = conn.last_insert_rowid();
        Ok(Entry::from(rec))
    }

    fn update(&self, entry: &Entry) -> AppResult<()> {
        let id = entry.id.ok_or(AppError::NotFound)?;
        let rec = self.normalize(entry);
        let conn = self.conn.lock().unwrap();
        let changed = conn
            .execute(
                "UPDATE entries SET start_time = ?1, end_time = ?2, message = ?3 WHERE id = ?4",
                params![rec.start_time, rec.end_time, rec.message, id],
            )
            .map_err(map_write_err)?;

        if changed == 0 {
            return Err(AppError::NotFound);
        }
        Ok(())
    }

    fn delete(&self, id: i64) -> AppResult<()> {
        let conn = self.conn.lock().unwrap();
        let changed = conn.execute("DELETE FROM entries WHERE id = ?1", params![id])?;
        if changed == 0 {
            return Err(AppError::NotFound);
        }
        Ok(())
    }

    fn all(&self) -> AppResult<Vec<Entry>> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn.prepare(
            "SELECT id, start_time, end_time, message FROM entries ORDER BY start_time ASC",
        )?;
        let rows = stmt.query_map([], map_row)?;

        let mut out = Vec::new();
        for r in rows {
            out.push(Entry::from(r?));
        }
        Ok(out)
    }

    fn latest(&self) -> AppResult<Option<Entry>> {
        let conn = self.conn.lock().unwrap();
        let rec = conn
            .query_row(
                "SELECT id, start_time, end_time, message FROM entries
                 ORDER BY start_time DESC LIMIT 1",
                [],
                map_row,
            )
            .optional()?;
        Ok(rec.map(Entry::from))
    }

    fn get(&self, id: i64) -> AppResult<Entry> {
        let conn = self.conn.lock().unwrap();
        let rec = conn
            .query_row(
                "SELECT id, start_time, end_time, message FROM entries WHERE id = ?1",
                params![id],
                map_row,
            )
            .optional()?;
        rec.map(Entry::from).ok_or(AppError::NotFound)
    }

    fn truncate(&self) -> AppResult<()> {
        let conn = self.conn.lock().unwrap();
        conn.execute("DELETE FROM entries", [])?;
        Ok(())
    }
}
