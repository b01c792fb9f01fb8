//! Entry storage behind one trait, so the CLI works the same against the
//! local database and a remote server.

pub mod remote;
pub mod sqlite;

use crate::config::Config;
use crate::errors::AppResult;
use crate::models::entry::Entry;

pub use remote::RemoteStore;
pub use sqlite::SqliteStore;

pub trait EntryStore {
    /// Persist a new entry and return it with its assigned id.
    fn insert(&self, entry: &Entry) -> AppResult<Entry>;

    /// Persist changes to an existing entry. `NotFound` if the id is absent.
    fn update(&self, entry: &Entry) -> AppResult<()>;

    /// Remove one entry. `NotFound` if the id is absent.
    fn delete(&self, id: i64) -> AppResult<()>;

    /// All entries, ordered by start time ascending.
    fn all(&self) -> AppResult<Vec<Entry>>;

    /// The entry with the most recent start time, if any.
    fn latest(&self) -> AppResult<Option<Entry>>;

    /// One entry by id. `NotFound` if absent.
    fn get(&self, id: i64) -> AppResult<Entry>;

    /// Remove all entries.
    fn truncate(&self) -> AppResult<()>;
}

/// Pick the store implementation the configuration asks for.
pub fn open(cfg: &Config) -> AppResult<Box<dyn EntryStore>> {
    match &cfg.server_url {
        Some(url) => Ok(Box::new(RemoteStore::new(url.clone(), cfg.auth.clone())?)),
        None => Ok(Box::new(SqliteStore::open(&cfg.database)?)),
    }
}
